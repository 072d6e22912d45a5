//! User management commands.

use anyhow::Result;
use clap::Subcommand;
use liferpg::api::UserPayload;

use crate::config::build_authed_client;
use crate::output::{print_table, OutputFormat, UserRow};

#[derive(Subcommand)]
pub enum UserAction {
    /// List users
    List {
        /// Page number
        #[arg(short, long, default_value = "1")]
        page: u32,
        /// Page size
        #[arg(long, default_value = "10")]
        page_size: u32,
        /// Filter by username substring
        #[arg(short, long)]
        username: Option<String>,
    },

    /// Create a user
    Create {
        /// Username
        username: String,
        /// Role ID
        #[arg(short, long)]
        role: u64,
        /// Initial password (backend default when omitted)
        #[arg(short, long)]
        password: Option<String>,
        /// Display nickname
        #[arg(short, long)]
        nickname: Option<String>,
    },

    /// Update a user
    Update {
        /// User ID
        id: u64,
        /// Username
        #[arg(long)]
        username: String,
        /// Role ID
        #[arg(short, long)]
        role: u64,
        /// Display nickname
        #[arg(short, long)]
        nickname: Option<String>,
        /// Disable the account
        #[arg(long)]
        disabled: bool,
    },

    /// Delete a user
    Delete {
        /// User ID
        id: u64,
    },

    /// Reset a user's password to the default
    ResetPassword {
        /// User ID
        id: u64,
    },
}

pub async fn handle(action: UserAction, format: OutputFormat, _verbose: bool) -> Result<()> {
    match action {
        UserAction::List {
            page,
            page_size,
            username,
        } => list(page, page_size, username, format).await,
        UserAction::Create {
            username,
            role,
            password,
            nickname,
        } => create(username, role, password, nickname, format).await,
        UserAction::Update {
            id,
            username,
            role,
            nickname,
            disabled,
        } => update(id, username, role, nickname, disabled).await,
        UserAction::Delete { id } => delete(id).await,
        UserAction::ResetPassword { id } => reset_password(id).await,
    }
}

async fn list(
    page: u32,
    page_size: u32,
    username: Option<String>,
    format: OutputFormat,
) -> Result<()> {
    let client = build_authed_client().await?;

    let mut builder = client.users().list().page(page).page_size(page_size);
    if let Some(username) = username {
        builder = builder.username(username);
    }
    let result = builder.send().await?;

    if matches!(format, OutputFormat::Plain) {
        println!("Users (page {}/{})\n", result.page, result.total_pages());
    }

    let rows: Vec<UserRow> = result.list.iter().map(UserRow::from).collect();
    print_table(rows, format);
    Ok(())
}

async fn create(
    username: String,
    role_id: u64,
    password: Option<String>,
    nickname: Option<String>,
    format: OutputFormat,
) -> Result<()> {
    let client = build_authed_client().await?;

    let created = client
        .users()
        .create(&UserPayload {
            username,
            password: password.unwrap_or_default(),
            nickname: nickname.unwrap_or_default(),
            role_id,
            status: 1,
            ..Default::default()
        })
        .await?;

    print_table(vec![UserRow::from(&created)], format);
    Ok(())
}

async fn update(
    id: u64,
    username: String,
    role_id: u64,
    nickname: Option<String>,
    disabled: bool,
) -> Result<()> {
    let client = build_authed_client().await?;

    client
        .users()
        .update(
            id,
            &UserPayload {
                username,
                nickname: nickname.unwrap_or_default(),
                role_id,
                status: if disabled { 0 } else { 1 },
                ..Default::default()
            },
        )
        .await?;

    println!("User {id} updated");
    Ok(())
}

async fn delete(id: u64) -> Result<()> {
    let client = build_authed_client().await?;
    client.users().delete(id).await?;
    println!("User {id} deleted");
    Ok(())
}

async fn reset_password(id: u64) -> Result<()> {
    let client = build_authed_client().await?;
    client.users().reset_password(id).await?;
    println!("Password for user {id} reset to the default");
    Ok(())
}

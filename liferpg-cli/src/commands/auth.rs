//! Auth commands.

use anyhow::Result;
use clap::Subcommand;
use colored::Colorize;
use liferpg::RegisterRequest;

use crate::config::{build_authed_client, build_client};
use crate::output::{print_table, MenuRow, OutputFormat, UserRow};

#[derive(Subcommand)]
pub enum AuthAction {
    /// Log in and store the session token
    Login {
        /// Username
        username: String,
        /// Password
        #[arg(short, long)]
        password: String,
    },

    /// Register a new account
    Register {
        /// Username
        username: String,
        /// Password
        #[arg(short, long)]
        password: String,
        /// Display nickname
        #[arg(short, long)]
        nickname: Option<String>,
    },

    /// Log out and clear the stored token
    Logout,

    /// Show current auth status
    Status,

    /// Show the logged-in user's profile
    Info,

    /// Show the logged-in user's menu tree
    Menus,
}

pub async fn handle(action: AuthAction, format: OutputFormat, verbose: bool) -> Result<()> {
    match action {
        AuthAction::Login { username, password } => login(&username, &password).await,
        AuthAction::Register {
            username,
            password,
            nickname,
        } => register(username, password, nickname).await,
        AuthAction::Logout => logout().await,
        AuthAction::Status => status().await,
        AuthAction::Info => info(format, verbose).await,
        AuthAction::Menus => menus(format).await,
    }
}

async fn login(username: &str, password: &str) -> Result<()> {
    let client = build_client().await?;
    let response = client.auth().login(username, password).await?;

    println!(
        "Logged in as {} (Lv.{}, {} gold)",
        response.user_info.display_name().bold(),
        response.user_info.level,
        response.user_info.gold
    );
    Ok(())
}

async fn register(username: String, password: String, nickname: Option<String>) -> Result<()> {
    let client = build_client().await?;
    client
        .auth()
        .register(&RegisterRequest {
            username: username.clone(),
            password,
            nickname,
        })
        .await?;

    println!("Registered {}. Log in to start.", username.bold());
    Ok(())
}

async fn logout() -> Result<()> {
    let client = build_client().await?;
    client.auth().logout().await;
    println!("Logged out");
    Ok(())
}

async fn status() -> Result<()> {
    let client = build_client().await?;

    if !client.is_logged_in() {
        println!("Not logged in");
        return Ok(());
    }

    // hydrate so the status line carries the profile
    match client.auth().fetch_user_info().await {
        Ok(Some(user)) => {
            println!(
                "Logged in as {} (Lv.{}, {} gold, {} exp)",
                user.display_name().bold(),
                user.level,
                user.gold,
                user.exp
            );
        }
        Ok(None) | Err(_) => println!("Stored token is no longer valid"),
    }
    Ok(())
}

async fn info(format: OutputFormat, _verbose: bool) -> Result<()> {
    let client = build_authed_client().await?;
    let user = client
        .auth()
        .fetch_user_info()
        .await?
        .ok_or_else(|| anyhow::anyhow!("No profile available"))?;

    print_table(vec![UserRow::from(&user)], format);
    Ok(())
}

async fn menus(format: OutputFormat) -> Result<()> {
    let client = build_authed_client().await?;
    let menus = client.auth().fetch_menus().await?;

    print_table(MenuRow::flatten(&menus), format);
    Ok(())
}

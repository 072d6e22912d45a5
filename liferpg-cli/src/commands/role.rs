//! Role management commands.

use anyhow::Result;
use clap::Subcommand;
use liferpg::Role;

use crate::config::build_authed_client;
use crate::output::{print_table, OutputFormat, RoleRow};

#[derive(Subcommand)]
pub enum RoleAction {
    /// List roles
    List,

    /// Create a role
    Create {
        /// Display name
        name: String,
        /// Unique role key
        #[arg(short, long)]
        key: String,
        /// Free-form remark
        #[arg(short, long)]
        remark: Option<String>,
    },

    /// Update a role
    Update {
        /// Role ID
        id: u64,
        /// Display name
        #[arg(long)]
        name: String,
        /// Unique role key
        #[arg(short, long)]
        key: String,
        /// Free-form remark
        #[arg(short, long)]
        remark: Option<String>,
    },

    /// Delete a role
    Delete {
        /// Role ID
        id: u64,
    },

    /// Show menu IDs assigned to a role
    Menus {
        /// Role ID
        id: u64,
    },

    /// Replace a role's menu assignment
    AssignMenus {
        /// Role ID
        id: u64,
        /// Menu IDs
        #[arg(required = true)]
        menus: Vec<u64>,
    },
}

pub async fn handle(action: RoleAction, format: OutputFormat, _verbose: bool) -> Result<()> {
    match action {
        RoleAction::List => list(format).await,
        RoleAction::Create { name, key, remark } => create(name, key, remark, format).await,
        RoleAction::Update {
            id,
            name,
            key,
            remark,
        } => update(id, name, key, remark).await,
        RoleAction::Delete { id } => delete(id).await,
        RoleAction::Menus { id } => menus(id).await,
        RoleAction::AssignMenus { id, menus } => assign_menus(id, menus).await,
    }
}

async fn list(format: OutputFormat) -> Result<()> {
    let client = build_authed_client().await?;
    let roles = client.roles().list().await?;

    let rows: Vec<RoleRow> = roles.iter().map(RoleRow::from).collect();
    print_table(rows, format);
    Ok(())
}

async fn create(name: String, key: String, remark: Option<String>, format: OutputFormat) -> Result<()> {
    let client = build_authed_client().await?;

    let created = client
        .roles()
        .create(&Role {
            name,
            key,
            status: 1,
            remark: remark.unwrap_or_default(),
            ..Default::default()
        })
        .await?;

    print_table(vec![RoleRow::from(&created)], format);
    Ok(())
}

async fn update(id: u64, name: String, key: String, remark: Option<String>) -> Result<()> {
    let client = build_authed_client().await?;

    client
        .roles()
        .update(
            id,
            &Role {
                id,
                name,
                key,
                status: 1,
                remark: remark.unwrap_or_default(),
                ..Default::default()
            },
        )
        .await?;

    println!("Role {id} updated");
    Ok(())
}

async fn delete(id: u64) -> Result<()> {
    let client = build_authed_client().await?;
    client.roles().delete(id).await?;
    println!("Role {id} deleted");
    Ok(())
}

async fn menus(id: u64) -> Result<()> {
    let client = build_authed_client().await?;
    let menu_ids = client.roles().menus(id).await?;

    if menu_ids.is_empty() {
        println!("No menus assigned");
        return Ok(());
    }

    println!(
        "{}",
        menu_ids
            .iter()
            .map(u64::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    );
    Ok(())
}

async fn assign_menus(id: u64, menus: Vec<u64>) -> Result<()> {
    let client = build_authed_client().await?;
    client.roles().assign_menus(id, &menus).await?;
    println!("Role {id} now has {} menus", menus.len());
    Ok(())
}

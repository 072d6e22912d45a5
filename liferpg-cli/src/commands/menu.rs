//! Menu management commands.

use anyhow::Result;
use clap::Subcommand;
use liferpg::MenuItem;

use crate::config::build_authed_client;
use crate::output::{print_table, MenuRow, OutputFormat};

#[derive(Subcommand)]
pub enum MenuAction {
    /// Show the menu tree
    Tree,

    /// List all menus flat
    List,

    /// Create a menu
    Create {
        /// Menu name
        name: String,
        /// Route path
        #[arg(long)]
        path: Option<String>,
        /// Parent menu ID (0 for a root)
        #[arg(long, default_value = "0")]
        parent: u64,
        /// Node type: 1 directory, 2 menu, 3 button
        #[arg(short, long, default_value = "2")]
        kind: i32,
        /// Sort weight
        #[arg(short, long, default_value = "0")]
        sort: i32,
    },

    /// Update a menu
    Update {
        /// Menu ID
        id: u64,
        /// Menu name
        #[arg(long)]
        name: String,
        /// Route path
        #[arg(long)]
        path: Option<String>,
        /// Parent menu ID (0 for a root)
        #[arg(long, default_value = "0")]
        parent: u64,
        /// Node type: 1 directory, 2 menu, 3 button
        #[arg(short, long, default_value = "2")]
        kind: i32,
        /// Sort weight
        #[arg(short, long, default_value = "0")]
        sort: i32,
    },

    /// Delete a menu (must have no children)
    Delete {
        /// Menu ID
        id: u64,
    },
}

pub async fn handle(action: MenuAction, format: OutputFormat, _verbose: bool) -> Result<()> {
    match action {
        MenuAction::Tree => tree(format).await,
        MenuAction::List => list(format).await,
        MenuAction::Create {
            name,
            path,
            parent,
            kind,
            sort,
        } => create(name, path, parent, kind, sort, format).await,
        MenuAction::Update {
            id,
            name,
            path,
            parent,
            kind,
            sort,
        } => update(id, name, path, parent, kind, sort).await,
        MenuAction::Delete { id } => delete(id).await,
    }
}

async fn tree(format: OutputFormat) -> Result<()> {
    let client = build_authed_client().await?;
    let menus = client.menus().tree().await?;

    print_table(MenuRow::flatten(&menus), format);
    Ok(())
}

async fn list(format: OutputFormat) -> Result<()> {
    let client = build_authed_client().await?;
    let menus = client.menus().list().await?;

    print_table(MenuRow::flatten(&menus), format);
    Ok(())
}

fn payload(id: u64, name: String, path: Option<String>, parent: u64, kind: i32, sort: i32) -> MenuItem {
    MenuItem {
        id,
        parent_id: parent,
        name,
        path: path.unwrap_or_default(),
        kind,
        sort,
        visible: 1,
        status: 1,
        ..Default::default()
    }
}

async fn create(
    name: String,
    path: Option<String>,
    parent: u64,
    kind: i32,
    sort: i32,
    format: OutputFormat,
) -> Result<()> {
    let client = build_authed_client().await?;

    let created = client
        .menus()
        .create(&payload(0, name, path, parent, kind, sort))
        .await?;

    print_table(MenuRow::flatten(&[created]), format);
    Ok(())
}

async fn update(
    id: u64,
    name: String,
    path: Option<String>,
    parent: u64,
    kind: i32,
    sort: i32,
) -> Result<()> {
    let client = build_authed_client().await?;

    client
        .menus()
        .update(id, &payload(id, name, path, parent, kind, sort))
        .await?;

    println!("Menu {id} updated");
    Ok(())
}

async fn delete(id: u64) -> Result<()> {
    let client = build_authed_client().await?;
    client.menus().delete(id).await?;
    println!("Menu {id} deleted");
    Ok(())
}

//! Announcement commands: admin CRUD and the end-user feed.

use anyhow::Result;
use clap::Subcommand;
use colored::Colorize;
use liferpg::{Announcement, AnnouncementKind};

use crate::config::build_authed_client;
use crate::output::{print_table, AnnouncementRow, OutputFormat};

#[derive(Subcommand)]
pub enum AnnouncementAction {
    /// List announcements (admin)
    List {
        /// Page number
        #[arg(short, long, default_value = "1")]
        page: u32,
        /// Page size
        #[arg(long, default_value = "10")]
        page_size: u32,
    },

    /// Create an announcement (admin)
    Create {
        /// Title
        title: String,
        /// Body content
        #[arg(short, long)]
        content: String,
        /// Kind (notice, activity, update)
        #[arg(short, long, default_value = "notice")]
        kind: String,
    },

    /// Update an announcement (admin)
    Update {
        /// Announcement ID
        id: u64,
        /// Title
        #[arg(long)]
        title: String,
        /// Body content
        #[arg(short, long)]
        content: String,
        /// Kind (notice, activity, update)
        #[arg(short, long, default_value = "notice")]
        kind: String,
        /// Hide from the feed
        #[arg(long)]
        inactive: bool,
    },

    /// Delete an announcement (admin)
    Delete {
        /// Announcement ID
        id: u64,
    },

    /// Show the active announcement feed
    Feed,
}

pub async fn handle(action: AnnouncementAction, format: OutputFormat, _verbose: bool) -> Result<()> {
    match action {
        AnnouncementAction::List { page, page_size } => list(page, page_size, format).await,
        AnnouncementAction::Create {
            title,
            content,
            kind,
        } => create(title, content, kind, format).await,
        AnnouncementAction::Update {
            id,
            title,
            content,
            kind,
            inactive,
        } => update(id, title, content, kind, inactive).await,
        AnnouncementAction::Delete { id } => delete(id).await,
        AnnouncementAction::Feed => feed(format).await,
    }
}

fn parse_kind(kind: &str) -> Result<AnnouncementKind> {
    match kind {
        "notice" => Ok(AnnouncementKind::Notice),
        "activity" => Ok(AnnouncementKind::Activity),
        "update" => Ok(AnnouncementKind::Update),
        other => anyhow::bail!("Unknown announcement kind '{other}'"),
    }
}

async fn list(page: u32, page_size: u32, format: OutputFormat) -> Result<()> {
    let client = build_authed_client().await?;
    let result = client
        .announcements()
        .list()
        .page(page)
        .page_size(page_size)
        .send()
        .await?;

    if matches!(format, OutputFormat::Plain) {
        println!(
            "Announcements (page {}/{})\n",
            result.page,
            result.total_pages()
        );
    }

    let rows: Vec<AnnouncementRow> = result.list.iter().map(AnnouncementRow::from).collect();
    print_table(rows, format);
    Ok(())
}

async fn create(title: String, content: String, kind: String, format: OutputFormat) -> Result<()> {
    let client = build_authed_client().await?;

    let created = client
        .announcements()
        .create(&Announcement {
            title,
            content,
            kind: parse_kind(&kind)?,
            is_active: true,
            ..Default::default()
        })
        .await?;

    print_table(vec![AnnouncementRow::from(&created)], format);
    Ok(())
}

async fn update(id: u64, title: String, content: String, kind: String, inactive: bool) -> Result<()> {
    let client = build_authed_client().await?;

    client
        .announcements()
        .update(
            id,
            &Announcement {
                id,
                title,
                content,
                kind: parse_kind(&kind)?,
                is_active: !inactive,
                ..Default::default()
            },
        )
        .await?;

    println!("Announcement {id} updated");
    Ok(())
}

async fn delete(id: u64) -> Result<()> {
    let client = build_authed_client().await?;
    client.announcements().delete(id).await?;
    println!("Announcement {id} deleted");
    Ok(())
}

async fn feed(format: OutputFormat) -> Result<()> {
    let client = build_authed_client().await?;
    let announcements = client.announcements().feed().await?;

    if matches!(format, OutputFormat::Plain) {
        for a in &announcements {
            println!("{}", a.title.bold());
            println!("   {}\n", a.content);
        }
        if announcements.is_empty() {
            println!("No announcements");
        }
        return Ok(());
    }

    let rows: Vec<AnnouncementRow> = announcements.iter().map(AnnouncementRow::from).collect();
    print_table(rows, format);
    Ok(())
}

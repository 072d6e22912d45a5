//! Task commands: admin CRUD and the task hall.

use anyhow::Result;
use clap::Subcommand;
use colored::Colorize;
use liferpg::{Task, TaskKind};

use crate::config::build_authed_client;
use crate::output::{print_table, OutputFormat, TaskRow};

#[derive(Subcommand)]
pub enum TaskAction {
    /// List configured tasks (admin)
    List {
        /// Page number
        #[arg(short, long, default_value = "1")]
        page: u32,
        /// Page size
        #[arg(long, default_value = "10")]
        page_size: u32,
        /// Filter by kind (daily, once)
        #[arg(short, long)]
        kind: Option<String>,
    },

    /// Create a task (admin)
    Create {
        /// Task title
        title: String,
        /// Gold reward
        #[arg(short, long, default_value = "0")]
        gold: i64,
        /// Exp reward
        #[arg(short, long, default_value = "0")]
        exp: i64,
        /// Repeatable daily instead of once
        #[arg(long)]
        daily: bool,
        /// Category label
        #[arg(short, long)]
        category: Option<String>,
    },

    /// Update a task (admin)
    Update {
        /// Task ID
        id: u64,
        /// Task title
        #[arg(long)]
        title: String,
        /// Gold reward
        #[arg(short, long, default_value = "0")]
        gold: i64,
        /// Exp reward
        #[arg(short, long, default_value = "0")]
        exp: i64,
        /// Repeatable daily instead of once
        #[arg(long)]
        daily: bool,
        /// Withdraw from the task hall
        #[arg(long)]
        inactive: bool,
    },

    /// Delete a task (admin)
    Delete {
        /// Task ID
        id: u64,
    },

    /// Show the task hall with completion state
    Hall,

    /// Complete a task and collect its rewards
    Complete {
        /// Task ID
        id: u64,
    },
}

pub async fn handle(action: TaskAction, format: OutputFormat, _verbose: bool) -> Result<()> {
    match action {
        TaskAction::List {
            page,
            page_size,
            kind,
        } => list(page, page_size, kind, format).await,
        TaskAction::Create {
            title,
            gold,
            exp,
            daily,
            category,
        } => create(title, gold, exp, daily, category, format).await,
        TaskAction::Update {
            id,
            title,
            gold,
            exp,
            daily,
            inactive,
        } => update(id, title, gold, exp, daily, inactive).await,
        TaskAction::Delete { id } => delete(id).await,
        TaskAction::Hall => hall(format).await,
        TaskAction::Complete { id } => complete(id).await,
    }
}

fn parse_kind(kind: &str) -> Result<TaskKind> {
    match kind {
        "daily" => Ok(TaskKind::Daily),
        "once" => Ok(TaskKind::Once),
        other => anyhow::bail!("Unknown task kind '{other}' (expected daily or once)"),
    }
}

async fn list(page: u32, page_size: u32, kind: Option<String>, format: OutputFormat) -> Result<()> {
    let client = build_authed_client().await?;

    let mut builder = client.tasks().list().page(page).page_size(page_size);
    if let Some(kind) = kind {
        builder = builder.kind(parse_kind(&kind)?);
    }
    let result = builder.send().await?;

    if matches!(format, OutputFormat::Plain) {
        println!("Tasks (page {}/{})\n", result.page, result.total_pages());
    }

    let rows: Vec<TaskRow> = result.list.iter().map(TaskRow::from).collect();
    print_table(rows, format);
    Ok(())
}

async fn create(
    title: String,
    gold: i64,
    exp: i64,
    daily: bool,
    category: Option<String>,
    format: OutputFormat,
) -> Result<()> {
    let client = build_authed_client().await?;

    let created = client
        .tasks()
        .create(&Task {
            title,
            gold_reward: gold,
            exp_reward: exp,
            kind: if daily { TaskKind::Daily } else { TaskKind::Once },
            category: category.unwrap_or_default(),
            is_active: true,
            ..Default::default()
        })
        .await?;

    print_table(vec![TaskRow::from(&created)], format);
    Ok(())
}

async fn update(
    id: u64,
    title: String,
    gold: i64,
    exp: i64,
    daily: bool,
    inactive: bool,
) -> Result<()> {
    let client = build_authed_client().await?;

    client
        .tasks()
        .update(
            id,
            &Task {
                id,
                title,
                gold_reward: gold,
                exp_reward: exp,
                kind: if daily { TaskKind::Daily } else { TaskKind::Once },
                is_active: !inactive,
                ..Default::default()
            },
        )
        .await?;

    println!("Task {id} updated");
    Ok(())
}

async fn delete(id: u64) -> Result<()> {
    let client = build_authed_client().await?;
    client.tasks().delete(id).await?;
    println!("Task {id} deleted");
    Ok(())
}

async fn hall(format: OutputFormat) -> Result<()> {
    let client = build_authed_client().await?;
    let entries = client.tasks().hall().await?;

    let rows: Vec<TaskRow> = entries.iter().map(TaskRow::from).collect();
    print_table(rows, format);
    Ok(())
}

async fn complete(id: u64) -> Result<()> {
    let client = build_authed_client().await?;
    let outcome = client.tasks().complete(id).await?;

    println!(
        "Done! +{} gold, +{} exp (now {} gold, {} exp, Lv.{})",
        outcome.gold_reward.to_string().yellow(),
        outcome.exp_reward.to_string().green(),
        outcome.new_gold,
        outcome.new_exp,
        outcome.new_level
    );
    if outcome.level_up {
        println!("{}", "Level up!".bold().yellow());
    }
    Ok(())
}

//! Reward commands: admin CRUD and the shop.

use anyhow::Result;
use clap::Subcommand;
use colored::Colorize;
use liferpg::Reward;

use crate::config::build_authed_client;
use crate::output::{print_table, OutputFormat, RewardRow};

#[derive(Subcommand)]
pub enum RewardAction {
    /// List configured rewards (admin)
    List {
        /// Page number
        #[arg(short, long, default_value = "1")]
        page: u32,
        /// Page size
        #[arg(long, default_value = "10")]
        page_size: u32,
    },

    /// Create a reward (admin)
    Create {
        /// Reward title
        title: String,
        /// Cost in gold
        #[arg(short, long)]
        cost: i64,
        /// Stock (-1 for unlimited)
        #[arg(short, long, default_value = "-1", allow_hyphen_values = true)]
        stock: i64,
        /// Category label
        #[arg(long)]
        category: Option<String>,
    },

    /// Update a reward (admin)
    Update {
        /// Reward ID
        id: u64,
        /// Reward title
        #[arg(long)]
        title: String,
        /// Cost in gold
        #[arg(short, long)]
        cost: i64,
        /// Stock (-1 for unlimited)
        #[arg(short, long, default_value = "-1", allow_hyphen_values = true)]
        stock: i64,
        /// Remove from the shop
        #[arg(long)]
        inactive: bool,
    },

    /// Delete a reward (admin)
    Delete {
        /// Reward ID
        id: u64,
    },

    /// Show the shop
    Shop,

    /// Purchase a reward
    Buy {
        /// Reward ID
        id: u64,
    },
}

pub async fn handle(action: RewardAction, format: OutputFormat, _verbose: bool) -> Result<()> {
    match action {
        RewardAction::List { page, page_size } => list(page, page_size, format).await,
        RewardAction::Create {
            title,
            cost,
            stock,
            category,
        } => create(title, cost, stock, category, format).await,
        RewardAction::Update {
            id,
            title,
            cost,
            stock,
            inactive,
        } => update(id, title, cost, stock, inactive).await,
        RewardAction::Delete { id } => delete(id).await,
        RewardAction::Shop => shop(format).await,
        RewardAction::Buy { id } => buy(id).await,
    }
}

async fn list(page: u32, page_size: u32, format: OutputFormat) -> Result<()> {
    let client = build_authed_client().await?;
    let result = client
        .rewards()
        .list()
        .page(page)
        .page_size(page_size)
        .send()
        .await?;

    if matches!(format, OutputFormat::Plain) {
        println!("Rewards (page {}/{})\n", result.page, result.total_pages());
    }

    let rows: Vec<RewardRow> = result.list.iter().map(RewardRow::from).collect();
    print_table(rows, format);
    Ok(())
}

async fn create(
    title: String,
    cost: i64,
    stock: i64,
    category: Option<String>,
    format: OutputFormat,
) -> Result<()> {
    let client = build_authed_client().await?;

    let created = client
        .rewards()
        .create(&Reward {
            title,
            cost,
            stock,
            category: category.unwrap_or_default(),
            is_active: true,
            ..Default::default()
        })
        .await?;

    print_table(vec![RewardRow::from(&created)], format);
    Ok(())
}

async fn update(id: u64, title: String, cost: i64, stock: i64, inactive: bool) -> Result<()> {
    let client = build_authed_client().await?;

    client
        .rewards()
        .update(
            id,
            &Reward {
                id,
                title,
                cost,
                stock,
                is_active: !inactive,
                ..Default::default()
            },
        )
        .await?;

    println!("Reward {id} updated");
    Ok(())
}

async fn delete(id: u64) -> Result<()> {
    let client = build_authed_client().await?;
    client.rewards().delete(id).await?;
    println!("Reward {id} deleted");
    Ok(())
}

async fn shop(format: OutputFormat) -> Result<()> {
    let client = build_authed_client().await?;
    let rewards = client.rewards().shop().await?;

    let rows: Vec<RewardRow> = rewards.iter().map(RewardRow::from).collect();
    print_table(rows, format);
    Ok(())
}

async fn buy(id: u64) -> Result<()> {
    let client = build_authed_client().await?;
    let outcome = client.rewards().purchase(id).await?;

    println!(
        "Bought {} for {} gold ({} gold left)",
        outcome.reward.bold(),
        outcome.cost.to_string().yellow(),
        outcome.new_gold
    );
    Ok(())
}

//! Dashboard, profile and ledger commands.

use anyhow::Result;
use clap::Subcommand;
use colored::Colorize;
use liferpg::LogKind;

use crate::config::build_authed_client;
use crate::output::{print_table, LogRow, OutputFormat};

#[derive(Subcommand)]
pub enum DashboardAction {
    /// Show aggregate counters and 7-day series (admin)
    Stats,

    /// Show the logged-in user's profile with level progression
    Profile,

    /// Show the gold/exp ledger
    Logs {
        /// Page number
        #[arg(short, long, default_value = "1")]
        page: u32,
        /// Page size
        #[arg(long, default_value = "20")]
        page_size: u32,
        /// Filter by kind (gold_in, gold_out, exp_in)
        #[arg(short, long)]
        kind: Option<String>,
    },
}

pub async fn handle(action: DashboardAction, format: OutputFormat, _verbose: bool) -> Result<()> {
    match action {
        DashboardAction::Stats => stats(format).await,
        DashboardAction::Profile => profile(format).await,
        DashboardAction::Logs {
            page,
            page_size,
            kind,
        } => logs(page, page_size, kind, format).await,
    }
}

fn parse_kind(kind: &str) -> Result<LogKind> {
    match kind {
        "gold_in" => Ok(LogKind::GoldIn),
        "gold_out" => Ok(LogKind::GoldOut),
        "exp_in" => Ok(LogKind::ExpIn),
        other => anyhow::bail!("Unknown ledger kind '{other}'"),
    }
}

async fn stats(format: OutputFormat) -> Result<()> {
    let client = build_authed_client().await?;
    let stats = client.dashboard().stats().await?;

    if matches!(format, OutputFormat::Json) {
        println!("{}", serde_json::to_string_pretty(&stats)?);
        return Ok(());
    }

    println!("Users: {}", stats.user_count);
    println!("Gold earned today: {}", stats.today_gold.to_string().yellow());
    println!("Tasks completed today: {}", stats.today_tasks);
    println!("Active tasks: {}", stats.active_task_count);
    println!("Active rewards: {}", stats.active_reward_count);

    if !stats.daily_gold_stats.is_empty() {
        println!("\nGold, last 7 days:");
        for day in &stats.daily_gold_stats {
            println!("   {}  {}", day.date, day.gold.to_string().yellow());
        }
    }
    if !stats.daily_task_stats.is_empty() {
        println!("\nTasks completed, last 7 days:");
        for day in &stats.daily_task_stats {
            println!("   {}  {}", day.date, day.count);
        }
    }
    Ok(())
}

async fn profile(format: OutputFormat) -> Result<()> {
    let client = build_authed_client().await?;
    let profile = client.dashboard().profile().await?;

    if matches!(format, OutputFormat::Json) {
        println!("{}", serde_json::to_string_pretty(&profile)?);
        return Ok(());
    }

    let user = &profile.user;
    println!("{} (Lv.{})", user.display_name().bold(), user.level);
    println!("Gold: {}", user.gold.to_string().yellow());
    println!(
        "Exp: {}/{} to next level ({:.0}%)",
        profile.exp_progress,
        profile.next_level_exp,
        profile.exp_percentage
    );
    Ok(())
}

async fn logs(page: u32, page_size: u32, kind: Option<String>, format: OutputFormat) -> Result<()> {
    let client = build_authed_client().await?;

    let mut builder = client.dashboard().logs().page(page).page_size(page_size);
    if let Some(kind) = kind {
        builder = builder.kind(parse_kind(&kind)?);
    }
    let result = builder.send().await?;

    if matches!(format, OutputFormat::Plain) {
        println!("Ledger (page {}/{})\n", result.page, result.total_pages());
    }

    let rows: Vec<LogRow> = result.list.iter().map(LogRow::from).collect();
    print_table(rows, format);
    Ok(())
}

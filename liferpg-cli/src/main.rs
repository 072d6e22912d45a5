//! Life RPG CLI.

mod commands;
mod config;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{announcement, auth, dashboard, menu, reward, role, task, theme, user};

/// Life RPG command-line console
#[derive(Parser)]
#[command(name = "liferpg")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Output format
    #[arg(short, long, global = true, default_value = "plain")]
    format: output::OutputFormat,

    /// Show verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage authentication and the current session
    Auth {
        #[command(subcommand)]
        action: auth::AuthAction,
    },

    /// User management (admin)
    #[command(alias = "u")]
    User {
        #[command(subcommand)]
        action: user::UserAction,
    },

    /// Role management (admin)
    Role {
        #[command(subcommand)]
        action: role::RoleAction,
    },

    /// Menu management (admin)
    #[command(alias = "m")]
    Menu {
        #[command(subcommand)]
        action: menu::MenuAction,
    },

    /// Task operations
    #[command(alias = "t")]
    Task {
        #[command(subcommand)]
        action: task::TaskAction,
    },

    /// Reward operations
    #[command(alias = "r")]
    Reward {
        #[command(subcommand)]
        action: reward::RewardAction,
    },

    /// Announcement operations
    #[command(alias = "a")]
    Announcement {
        #[command(subcommand)]
        action: announcement::AnnouncementAction,
    },

    /// Dashboard, profile and ledger queries
    #[command(alias = "d")]
    Dashboard {
        #[command(subcommand)]
        action: dashboard::DashboardAction,
    },

    /// Mobile theme configuration
    Theme {
        #[command(subcommand)]
        action: theme::ThemeAction,
    },

    /// Show current configuration
    Config,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::from_default_env()
                    .add_directive(tracing::Level::DEBUG.into()),
            )
            .with_writer(std::io::stderr)
            .init();
    }

    match cli.command {
        Commands::Auth { action } => auth::handle(action, cli.format, cli.verbose).await,
        Commands::User { action } => user::handle(action, cli.format, cli.verbose).await,
        Commands::Role { action } => role::handle(action, cli.format, cli.verbose).await,
        Commands::Menu { action } => menu::handle(action, cli.format, cli.verbose).await,
        Commands::Task { action } => task::handle(action, cli.format, cli.verbose).await,
        Commands::Reward { action } => reward::handle(action, cli.format, cli.verbose).await,
        Commands::Announcement { action } => {
            announcement::handle(action, cli.format, cli.verbose).await
        }
        Commands::Dashboard { action } => dashboard::handle(action, cli.format, cli.verbose).await,
        Commands::Theme { action } => theme::handle(action, cli.format, cli.verbose).await,
        Commands::Config => {
            let cfg = config::load_config()?;
            println!("Config file: {}", config::config_path()?.display());
            println!(
                "Base URL: {}",
                cfg.base_url.as_deref().unwrap_or(liferpg::DEFAULT_BASE_URL)
            );
            println!("Authenticated: {}", cfg.token.is_some());
            Ok(())
        }
    }
}

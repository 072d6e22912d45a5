//! Theme commands.

use anyhow::Result;
use clap::Subcommand;

use crate::config::{build_authed_client, build_client};
use crate::output::OutputFormat;

#[derive(Subcommand)]
pub enum ThemeAction {
    /// Show the current theme
    Show,

    /// Update theme colors (admin); unset colors keep their current value
    Set {
        /// Primary color, e.g. #1989fa
        #[arg(long)]
        primary: Option<String>,
        /// Secondary color
        #[arg(long)]
        secondary: Option<String>,
        /// Gold accent color
        #[arg(long)]
        gold: Option<String>,
        /// Exp accent color
        #[arg(long)]
        exp: Option<String>,
        /// Background image URL
        #[arg(long)]
        background: Option<String>,
        /// Logo image URL
        #[arg(long)]
        logo: Option<String>,
    },
}

pub async fn handle(action: ThemeAction, format: OutputFormat, _verbose: bool) -> Result<()> {
    match action {
        ThemeAction::Show => show(format).await,
        ThemeAction::Set {
            primary,
            secondary,
            gold,
            exp,
            background,
            logo,
        } => set(primary, secondary, gold, exp, background, logo).await,
    }
}

async fn show(format: OutputFormat) -> Result<()> {
    // theme is public, no auth needed
    let client = build_client().await?;
    let theme = client.theme().get().await?;

    if matches!(format, OutputFormat::Json) {
        println!("{}", serde_json::to_string_pretty(&theme)?);
        return Ok(());
    }

    println!("Primary:    {}", theme.primary_color);
    println!("Secondary:  {}", theme.secondary_color);
    println!("Gold:       {}", theme.gold_color);
    println!("Exp:        {}", theme.exp_color);
    if !theme.background_url.is_empty() {
        println!("Background: {}", theme.background_url);
    }
    if !theme.logo_url.is_empty() {
        println!("Logo:       {}", theme.logo_url);
    }
    Ok(())
}

async fn set(
    primary: Option<String>,
    secondary: Option<String>,
    gold: Option<String>,
    exp: Option<String>,
    background: Option<String>,
    logo: Option<String>,
) -> Result<()> {
    let client = build_authed_client().await?;

    // read-modify-write so unset flags keep the stored values
    let mut theme = client.theme().get().await?;
    if let Some(primary) = primary {
        theme.primary_color = primary;
    }
    if let Some(secondary) = secondary {
        theme.secondary_color = secondary;
    }
    if let Some(gold) = gold {
        theme.gold_color = gold;
    }
    if let Some(exp) = exp {
        theme.exp_color = exp;
    }
    if let Some(background) = background {
        theme.background_url = background;
    }
    if let Some(logo) = logo {
        theme.logo_url = logo;
    }

    client.theme().update(&theme).await?;
    println!("Theme updated");
    Ok(())
}

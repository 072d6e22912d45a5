//! Configuration management for the Life RPG CLI.

use anyhow::{Context, Result};
use async_trait::async_trait;
use colored::Colorize;
use liferpg::{Notifier, RpgClient, Session, TokenStorage};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

/// CLI configuration.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Config {
    /// API base URL. The library default when absent.
    pub base_url: Option<String>,
    /// Bearer token from the last login.
    pub token: Option<String>,
}

/// Get the configuration file path.
pub fn config_path() -> Result<PathBuf> {
    let exe_path = env::current_exe().context("Could not determine executable path")?;
    let exe_dir = exe_path
        .parent()
        .context("Could not determine executable directory")?;

    Ok(exe_dir.join("liferpg.toml"))
}

/// Load configuration from file.
pub fn load_config() -> Result<Config> {
    let path = config_path()?;

    if !path.exists() {
        return Ok(Config::default());
    }

    let content = fs::read_to_string(&path).context("Failed to read config file")?;

    toml::from_str(&content).context("Failed to parse config file")
}

/// Save configuration to file.
pub fn save_config(config: &Config) -> Result<()> {
    let path = config_path()?;
    let content = toml::to_string_pretty(config).context("Failed to serialize config")?;

    fs::write(&path, content).context("Failed to write config file")?;

    Ok(())
}

/// Token storage backed by the CLI config file.
///
/// Login and logout rewrite the `token` field in place, so the session
/// survives across invocations.
#[derive(Debug)]
pub struct FileTokenStorage;

#[async_trait]
impl TokenStorage for FileTokenStorage {
    async fn load(&self) -> Option<String> {
        load_config().ok()?.token.filter(|t| !t.is_empty())
    }

    async fn store(&self, token: &str) {
        if let Ok(mut config) = load_config() {
            config.token = Some(token.to_owned());
            if let Err(err) = save_config(&config) {
                tracing::warn!("could not persist token: {err}");
            }
        }
    }

    async fn remove(&self) {
        if let Ok(mut config) = load_config() {
            config.token = None;
            if let Err(err) = save_config(&config) {
                tracing::warn!("could not clear persisted token: {err}");
            }
        }
    }
}

/// Notifier that prints backend error toasts to stderr.
#[derive(Debug)]
struct StderrNotifier;

impl Notifier for StderrNotifier {
    fn error(&self, message: &str) {
        eprintln!("{}", message.red());
    }
}

/// Build a Life RPG client from the current configuration.
pub async fn build_client() -> Result<RpgClient> {
    let config = load_config()?;

    let session = Arc::new(Session::restore(Arc::new(FileTokenStorage)).await);

    let mut builder = RpgClient::builder()
        .session(session)
        .notifier(Arc::new(StderrNotifier));

    if let Some(base_url) = config.base_url {
        builder = builder.base_url(base_url);
    }

    builder.build().context("Failed to build Life RPG client")
}

/// Build a Life RPG client that requires authentication.
pub async fn build_authed_client() -> Result<RpgClient> {
    let client = build_client().await?;

    if !client.is_logged_in() {
        anyhow::bail!("Authentication required. Run 'liferpg auth login' first.");
    }

    Ok(client)
}

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::PathBuf;

const DEFAULT_API_URL: &str = "http://localhost:5001/api";

/// Resolved runtime configuration: where the services live and who we are.
#[derive(Debug, Clone)]
pub(crate) struct Config {
    /// Base URL shared by the limit service and the transaction service.
    pub(crate) api_url: String,
    /// Identifier of the authenticated user, issued by the identity provider.
    pub(crate) user_id: String,
}

/// On-disk shape of `config.toml`; every key is optional so env vars can
/// fill the gaps.
#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    api_url: Option<String>,
    user_id: Option<String>,
}

pub(crate) fn project_dirs() -> Result<directories::ProjectDirs> {
    directories::ProjectDirs::from("com", "limitui", "LimiTUI")
        .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
}

fn config_path() -> Result<PathBuf> {
    Ok(project_dirs()?.config_dir().join("config.toml"))
}

impl Config {
    /// Load `config.toml` if present, then apply `LIMITUI_API_URL` /
    /// `LIMITUI_USER` overrides. A user id is required; the base URL falls
    /// back to a local development default.
    pub(crate) fn load() -> Result<Self> {
        let path = config_path()?;
        let file_cfg = if path.exists() {
            let raw = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config: {}", path.display()))?;
            toml::from_str(&raw)
                .with_context(|| format!("Invalid config: {}", path.display()))?
        } else {
            FileConfig::default()
        };

        let api_url = std::env::var("LIMITUI_API_URL")
            .ok()
            .or(file_cfg.api_url)
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());
        let user_id = std::env::var("LIMITUI_USER")
            .ok()
            .or(file_cfg.user_id)
            .ok_or_else(|| {
                anyhow::anyhow!(
                    "No user id configured. Set LIMITUI_USER or add user_id to {}",
                    path.display()
                )
            })?;

        Ok(Self { api_url, user_id })
    }
}

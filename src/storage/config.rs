//! Configuration management

use crate::error::{Result, YtGrabError};
use crate::types::Config;
use crate::utils::paths::{ensure_dir, get_config_path};
use std::path::Path;
use tokio::fs;
use tokio::process::Command;

/// Load configuration from the default location
pub async fn load_config() -> Result<Config> {
    load_config_from(Path::new(&get_config_path())).await
}

/// Load configuration from `path`, falling back to defaults for missing fields
pub async fn load_config_from(path: &Path) -> Result<Config> {
    if !path.exists() {
        return Ok(Config::default());
    }

    let content = fs::read_to_string(path).await?;
    let config: Config = serde_json::from_str(&content)
        .map_err(|e| YtGrabError::InvalidConfig(format!("{}: {}", path.display(), e)))?;

    if config.ytdlp_path.trim().is_empty() {
        return Err(YtGrabError::InvalidConfig("ytdlp_path must not be empty".into()));
    }

    Ok(config)
}

/// Save configuration to the default location
pub async fn save_config(config: &Config) -> Result<()> {
    save_config_to(Path::new(&get_config_path()), config).await
}

/// Save configuration to `path`, creating its parent directory
pub async fn save_config_to(path: &Path, config: &Config) -> Result<()> {
    if let Some(parent) = path.parent() {
        ensure_dir(&parent.to_string_lossy()).await?;
    }
    let content = serde_json::to_string_pretty(config)?;
    fs::write(path, content).await?;
    Ok(())
}

/// Open config file in editor
pub async fn edit_config(editor: &str) -> Result<()> {
    let config_path = get_config_path();

    // Ensure config file exists
    if !Path::new(&config_path).exists() {
        save_config(&Config::default()).await?;
    }

    Command::new(editor)
        .arg(&config_path)
        .status()
        .await
        .map_err(|e| YtGrabError::Spawn(format!("Failed to start {}: {}", editor, e)))?;

    Ok(())
}

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;

use crate::models::settings::AppConfig;

const CONFIG_FILE_NAME: &str = "config.toml";

/// Loads and stores [`AppConfig`] as TOML.
pub struct SettingsService {
    path: PathBuf,
}

impl SettingsService {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Service bound to `config.toml` in the platform config directory,
    /// or the working directory when none can be resolved.
    pub fn from_default_location() -> Self {
        Self::new(Self::resolve_default_path())
    }

    pub fn resolve_default_path() -> PathBuf {
        if let Some(dirs) = ProjectDirs::from("com", "FlashCommunities", "FlashCountdown") {
            dirs.config_dir().join(CONFIG_FILE_NAME)
        } else {
            log::warn!("Unable to resolve project directory; using current dir for config");
            PathBuf::from(CONFIG_FILE_NAME)
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Current configuration. A missing file yields defaults.
    pub fn get(&self) -> Result<AppConfig> {
        if !self.path.exists() {
            log::info!("No config at {}; using defaults", self.path.display());
            return Ok(AppConfig::default());
        }

        let data = fs::read_to_string(&self.path)
            .with_context(|| format!("failed to read config from {}", self.path.display()))?;
        let config: AppConfig = toml::from_str(&data)
            .with_context(|| format!("failed to parse config from {}", self.path.display()))?;
        config
            .validate()
            .with_context(|| format!("invalid config in {}", self.path.display()))?;
        Ok(config)
    }

    pub fn update(&self, config: &AppConfig) -> Result<()> {
        config.validate().context("refusing to save invalid config")?;

        if let Some(parent) = self.path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create dir {}", parent.display()))?;
        }

        let data = toml::to_string_pretty(config)?;
        fs::write(&self.path, data)
            .with_context(|| format!("failed to write config to {}", self.path.display()))?;
        Ok(())
    }
}

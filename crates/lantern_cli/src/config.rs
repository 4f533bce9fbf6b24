//! Lantern configuration file handling

use anyhow::{Context, Result};
use lantern_ambient::ToneConfig;
use lantern_theme::ColorScheme;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = "lantern.toml";

/// Top-level Lantern configuration (lantern.toml)
#[derive(Debug, Deserialize, Serialize)]
pub struct LanternConfig {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub tone: ToneConfig,
    #[serde(default)]
    pub display: DisplayConfig,
    /// Used when `RUST_LOG` is unset
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LanternConfig {
    fn default() -> Self {
        Self {
            storage: StorageConfig::default(),
            tone: ToneConfig::default(),
            display: DisplayConfig::default(),
            log_level: default_log_level(),
        }
    }
}

/// Where settings records live
#[derive(Debug, Deserialize, Serialize)]
pub struct StorageConfig {
    /// Settings directory; the platform data dir when unset
    #[serde(default)]
    pub dir: Option<PathBuf>,
    /// Key namespace inside the directory
    #[serde(default = "default_user")]
    pub user: String,
}

fn default_user() -> String {
    "local".to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            dir: None,
            user: default_user(),
        }
    }
}

impl StorageConfig {
    pub fn resolved_dir(&self) -> Result<PathBuf> {
        match &self.dir {
            Some(dir) => Ok(dir.clone()),
            None => dirs::data_dir()
                .map(|dir| dir.join("lantern"))
                .context("No platform data directory; set [storage] dir in lantern.toml"),
        }
    }
}

/// What the host platform reports about the display
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct DisplayConfig {
    #[serde(default)]
    pub system_scheme: ColorScheme,
    #[serde(default)]
    pub prefers_reduced_motion: bool,
}

impl LanternConfig {
    /// Load `path`, or the default search location when `None`
    ///
    /// A missing file at the default location yields defaults; an explicit
    /// path must exist.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let (config_path, explicit) = match path {
            Some(path) if path.is_dir() => (path.join(CONFIG_FILE), true),
            Some(path) => (path.to_path_buf(), true),
            None => match default_path() {
                Some(path) => (path, false),
                None => return Ok(Self::default()),
            },
        };

        if !config_path.exists() {
            if explicit {
                anyhow::bail!(
                    "No {} found at {}. Run `lantern init` to create one.",
                    CONFIG_FILE,
                    config_path.display()
                );
            }
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read {}", config_path.display()))?;

        let config: LanternConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", config_path.display()))?;

        Ok(config)
    }

    /// Serialize to TOML string
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }
}

/// `./lantern.toml` if present, else the platform config dir
pub fn default_path() -> Option<PathBuf> {
    let local = PathBuf::from(CONFIG_FILE);
    if local.is_file() {
        return Some(local);
    }
    dirs::config_dir().map(|dir| dir.join("lantern").join(CONFIG_FILE))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_file_takes_defaults() {
        let config: LanternConfig = toml::from_str("").unwrap();
        assert_eq!(config.storage.user, "local");
        assert_eq!(config.tone.refresh_interval_secs, 1800);
        assert_eq!(config.display.system_scheme, ColorScheme::Light);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn sections_override_defaults() {
        let config: LanternConfig = toml::from_str(
            r#"
            log_level = "debug"

            [storage]
            dir = "/tmp/lantern"
            user = "ada"

            [tone]
            warm_threshold_c = 24.0

            [display]
            system_scheme = "dark"
            prefers_reduced_motion = true
            "#,
        )
        .unwrap();

        assert_eq!(config.storage.resolved_dir().unwrap(), PathBuf::from("/tmp/lantern"));
        assert_eq!(config.storage.user, "ada");
        assert_eq!(config.tone.warm_threshold_c, 24.0);
        assert_eq!(config.tone.cold_threshold_c, 5.0);
        assert_eq!(config.display.system_scheme, ColorScheme::Dark);
        assert!(config.display.prefers_reduced_motion);
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn explicit_missing_path_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = LanternConfig::load(Some(&dir.path().join("nope.toml"))).unwrap_err();
        assert!(err.to_string().contains("lantern init"));
    }

    #[test]
    fn written_config_loads_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, LanternConfig::default().to_toml().unwrap()).unwrap();

        let config = LanternConfig::load(Some(dir.path())).unwrap();
        assert_eq!(config.storage.user, "local");
        assert_eq!(config.tone.sunset_window_minutes, 60);
    }
}

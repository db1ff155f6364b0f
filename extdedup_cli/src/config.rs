//! Layered configuration
//!
//! Priority, lowest first: built-in defaults, TOML file, `EXTDEDUP_`
//! environment variables, command line flags. The file is only ever read.

use anyhow::{Context, Result};
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::report::OutputFormat;
use crate::terminal::ColorMode;

const APP_CONFIG_DIR: &str = "extdedup";
const CONFIG_FILE: &str = "config.toml";
const ENV_PREFIX: &str = "EXTDEDUP_";

#[derive(Deserialize, Serialize, Debug, Default, Clone, PartialEq, Eq)]
pub struct AppConfig {
    #[serde(default)]
    pub scan: ScanConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Deserialize, Serialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct ScanConfig {
    pub recursive: bool,
    pub follow_links: bool,
    pub max_depth: Option<usize>,
    pub exclude: Vec<String>,
}

#[derive(Deserialize, Serialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct OutputConfig {
    pub verbose: bool,
    pub color: ColorMode,
    pub format: OutputFormat,
}

/// Locates and loads the configuration
pub struct ConfigManager {
    config_path: PathBuf,
    /// Whether a missing file is an error (explicit `--config`)
    required: bool,
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigManager {
    /// Use the platform default location
    pub fn new() -> Self {
        Self {
            config_path: Self::default_config_path(),
            required: false,
        }
    }

    /// Use a file the user pointed at; it has to exist
    pub fn with_path(path: PathBuf) -> Self {
        Self {
            config_path: path,
            required: true,
        }
    }

    pub fn get_config_path(&self) -> &Path {
        &self.config_path
    }

    /// Default configuration path
    ///
    /// `$XDG_CONFIG_HOME/extdedup/config.toml` when set, otherwise the
    /// platform config directory from `dirs`.
    fn default_config_path() -> PathBuf {
        #[cfg(not(target_os = "windows"))]
        if let Some(xdg_config) = std::env::var_os("XDG_CONFIG_HOME") {
            return PathBuf::from(xdg_config).join(APP_CONFIG_DIR).join(CONFIG_FILE);
        }

        dirs::config_dir()
            .map(|d| d.join(APP_CONFIG_DIR))
            .unwrap_or_else(|| PathBuf::from(".extdedup"))
            .join(CONFIG_FILE)
    }

    /// Load configuration with layered priority: ENV > File > Defaults
    pub fn load(&self) -> Result<AppConfig> {
        let mut figment = Figment::new();

        // Layer 1: Defaults
        figment = figment.merge(Serialized::defaults(AppConfig::default()));

        // Layer 2: Config file
        if self.config_path.exists() {
            log::debug!("Loading configuration from {}", self.config_path.display());
            figment = figment.merge(Toml::file(&self.config_path));
        } else if self.required {
            anyhow::bail!(
                "Configuration file not found: {}",
                self.config_path.display()
            );
        }

        // Layer 3: Environment variables
        figment = figment.merge(Env::prefixed(ENV_PREFIX).split("__"));

        figment
            .extract()
            .with_context(|| format!("Failed to load configuration from {}", self.config_path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    #[test]
    fn test_defaults_without_file() {
        Jail::expect_with(|jail| {
            let manager = ConfigManager::with_path(jail.directory().join("none.toml"));
            assert!(manager.load().is_err());

            let mut manager = ConfigManager::new();
            manager.config_path = jail.directory().join("none.toml");
            assert_eq!(manager.load().unwrap(), AppConfig::default());
            Ok(())
        });
    }

    #[test]
    fn test_file_layer() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "config.toml",
                r#"
                [scan]
                recursive = true
                max_depth = 3
                exclude = ["archive"]

                [output]
                color = "never"
                format = "json"
                "#,
            )?;

            let config = ConfigManager::with_path(jail.directory().join("config.toml"))
                .load()
                .unwrap();

            assert!(config.scan.recursive);
            assert!(!config.scan.follow_links);
            assert_eq!(config.scan.max_depth, Some(3));
            assert_eq!(config.scan.exclude, vec!["archive"]);
            assert_eq!(config.output.color, ColorMode::Never);
            assert_eq!(config.output.format, OutputFormat::Json);
            assert!(!config.output.verbose);
            Ok(())
        });
    }

    #[test]
    fn test_env_overrides_file() {
        Jail::expect_with(|jail| {
            jail.create_file("config.toml", "[output]\nverbose = false\n")?;
            jail.set_env("EXTDEDUP_OUTPUT__VERBOSE", "true");
            jail.set_env("EXTDEDUP_SCAN__FOLLOW_LINKS", "true");

            let config = ConfigManager::with_path(jail.directory().join("config.toml"))
                .load()
                .unwrap();

            assert!(config.output.verbose);
            assert!(config.scan.follow_links);
            Ok(())
        });
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        Jail::expect_with(|jail| {
            jail.create_file("config.toml", "[scan]\nrecursive = \"sometimes\"\n")?;

            let result = ConfigManager::with_path(jail.directory().join("config.toml")).load();
            assert!(result.is_err());
            Ok(())
        });
    }

    #[cfg(not(target_os = "windows"))]
    #[test]
    fn test_xdg_config_home() {
        Jail::expect_with(|jail| {
            jail.set_env("XDG_CONFIG_HOME", "/tmp/xdg-test");
            let manager = ConfigManager::new();
            assert_eq!(
                manager.get_config_path(),
                Path::new("/tmp/xdg-test/extdedup/config.toml")
            );
            Ok(())
        });
    }
}

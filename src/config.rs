use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::AppError;

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum ConfigColorMode {
    Auto,
    Always,
    Never,
}

/// Persistent defaults; every key is optional and CLI flags win.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct Config {
    #[serde(default)]
    pub(crate) model: Option<String>,
    #[serde(default)]
    pub(crate) input: Option<u32>,
    #[serde(default)]
    pub(crate) output: Option<u32>,
    #[serde(default)]
    pub(crate) retention: Option<u32>,
    #[serde(default)]
    pub(crate) queries: Option<u32>,
    #[serde(default)]
    pub(crate) compact: bool,
    #[serde(default)]
    pub(crate) no_color: bool,
    #[serde(default)]
    pub(crate) color: Option<ConfigColorMode>,
    #[serde(default)]
    pub(crate) locale: Option<String>,
    #[serde(default)]
    pub(crate) debug: bool,
}

#[derive(Debug)]
pub(crate) struct Discovered {
    pub(crate) config: Config,
    pub(crate) path: Option<PathBuf>,
    pub(crate) skipped: Vec<AppError>,
}

impl Config {
    /// Load an explicitly requested file. Any failure is fatal.
    pub(crate) fn load_from(path: &Path) -> Result<Self, AppError> {
        let content = fs::read_to_string(path).map_err(|e| AppError::ConfigFile {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        let config = toml::from_str::<Config>(&content).map_err(|e| AppError::ConfigFile {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        Ok(config)
    }

    /// Search the default locations. Broken files are skipped and returned
    /// so the caller can report them once logging is up.
    pub(crate) fn discover() -> Discovered {
        let mut skipped = Vec::new();
        for path in Self::get_config_paths() {
            if !path.exists() {
                continue;
            }
            match Self::load_from(&path) {
                Ok(config) => {
                    return Discovered {
                        config,
                        path: Some(path),
                        skipped,
                    };
                }
                Err(e) => skipped.push(e),
            }
        }
        Discovered {
            config: Self::default(),
            path: None,
            skipped,
        }
    }

    fn get_config_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        // 1. XDG config: ~/.config/cachecost/config.toml (Linux/cross-platform)
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".config").join("cachecost").join("config.toml"));
        }

        // 2. Platform config dir (macOS Application Support, Windows AppData)
        if let Some(config_dir) = dirs::config_dir() {
            let platform_path = config_dir.join("cachecost").join("config.toml");
            if !paths.contains(&platform_path) {
                paths.push(platform_path);
            }
        }

        // 3. Home directory: ~/.cachecost.toml
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".cachecost.toml"));
        }

        paths
    }
}

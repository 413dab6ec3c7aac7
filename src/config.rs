use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

use crate::labels::Lang;

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum ConfigSortOrder {
    Asc,
    Desc,
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum ConfigColorMode {
    Auto,
    Always,
    Never,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct Config {
    #[serde(default)]
    pub(crate) no_color: bool,
    #[serde(default)]
    pub(crate) debug: bool,
    #[serde(default)]
    pub(crate) order: Option<ConfigSortOrder>,
    #[serde(default)]
    pub(crate) color: Option<ConfigColorMode>,
    #[serde(default)]
    pub(crate) locale: Option<String>,
    #[serde(default)]
    pub(crate) lang: Option<Lang>,
    #[serde(default)]
    pub(crate) data_file: Option<PathBuf>,
    /// Range name; unknown names resolve to "all"
    #[serde(default)]
    pub(crate) default_range: Option<String>,
}

impl Config {
    /// Load the first config file that parses; defaults when there is none
    ///
    /// Runs before logging is set up, so problems go straight to stderr.
    pub(crate) fn load() -> Self {
        for path in Self::get_config_paths() {
            if path.exists()
                && let Ok(content) = fs::read_to_string(&path)
            {
                match toml::from_str::<Config>(&content) {
                    Ok(config) => return config,
                    Err(e) => {
                        eprintln!("Warning: Failed to parse {}: {}", path.display(), e);
                    }
                }
            }
        }

        Self::default()
    }

    fn get_config_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        // 1. XDG config: ~/.config/adspend/config.toml
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".config").join("adspend").join("config.toml"));
        }

        // 2. Platform config dir (macOS Application Support, Windows AppData)
        if let Some(config_dir) = dirs::config_dir() {
            let platform_path = config_dir.join("adspend").join("config.toml");
            if !paths.contains(&platform_path) {
                paths.push(platform_path);
            }
        }

        // 3. Home directory: ~/.adspend.toml
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".adspend.toml"));
        }

        paths
    }
}

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = ".pofillrc.json";

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Directory holding `<lang>/LC_MESSAGES/<catalogName>`.
    #[serde(default = "default_locale_root")]
    pub locale_root: String,
    /// Directory holding `<module>/locale/<lang>/<catalogName>`.
    #[serde(default = "default_module_root")]
    pub module_root: String,
    #[serde(default = "default_catalog_name")]
    pub catalog_name: String,
    /// Locale whose translations are allowed to equal their msgid.
    #[serde(default = "default_source_locale")]
    pub source_locale: String,
    #[serde(default = "default_exclusions_file")]
    pub exclusions_file: String,
}

fn default_locale_root() -> String {
    "locale".to_string()
}

fn default_module_root() -> String {
    "lib/Module".to_string()
}

fn default_catalog_name() -> String {
    "messages.po".to_string()
}

fn default_source_locale() -> String {
    "en_EN".to_string()
}

fn default_exclusions_file() -> String {
    "technical_exclusions.json".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locale_root: default_locale_root(),
            module_root: default_module_root(),
            catalog_name: default_catalog_name(),
            source_locale: default_source_locale(),
            exclusions_file: default_exclusions_file(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    pub fn validate(&self) -> Result<()> {
        if self.catalog_name.trim().is_empty() {
            bail!("'catalogName' must not be empty");
        }
        if self.locale_root.trim().is_empty() {
            bail!("'localeRoot' must not be empty");
        }
        Ok(())
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {}", path.display()))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
        }),
    }
}

//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.baseline-search/config.toml`. If missing on first run,
//! a commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::i18n::Language;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct SearchConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub browse: BrowseConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub language: Option<Language>,
    pub data_path: Option<PathBuf>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct BrowseConfig {
    pub page_size: Option<usize>,
    pub visible_items: Option<usize>,
    pub recent_days: Option<u32>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_PAGE_SIZE: usize = 10;
pub const DEFAULT_VISIBLE_ITEMS: usize = 10;
pub const DEFAULT_RECENT_DAYS: u32 = 28;
/// Upper bound for `recent_days` (about a century).
pub const MAX_RECENT_DAYS: u32 = 36_500;

pub const LANG_ENV_VAR: &str = "BASELINE_SEARCH_LANG";
pub const DATA_ENV_VAR: &str = "BASELINE_SEARCH_DATA";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub language: Language,
    /// `None` means the bundled snapshot.
    pub data_path: Option<PathBuf>,
    pub page_size: usize,
    pub visible_items: usize,
    pub recent_days: u32,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            language: Language::default(),
            data_path: None,
            page_size: DEFAULT_PAGE_SIZE,
            visible_items: DEFAULT_VISIBLE_ITEMS,
            recent_days: DEFAULT_RECENT_DAYS,
        }
    }
}

/// Values coming from the command line (None = not specified).
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub language: Option<Language>,
    pub data_path: Option<PathBuf>,
}

/// Values coming from the environment (None = unset).
#[derive(Debug, Default, Clone)]
pub struct EnvOverrides {
    pub language: Option<Language>,
    pub data_path: Option<PathBuf>,
}

impl EnvOverrides {
    pub fn from_env() -> Self {
        let language = std::env::var(LANG_ENV_VAR).ok().and_then(|code| {
            let parsed = Language::from_code(&code);
            if parsed.is_none() {
                warn!("Ignoring {}={:?}: expected \"en\" or \"ja\"", LANG_ENV_VAR, code);
            }
            parsed
        });
        let data_path = std::env::var_os(DATA_ENV_VAR)
            .filter(|value| !value.is_empty())
            .map(PathBuf::from);
        Self {
            language,
            data_path,
        }
    }
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns `~/.baseline-search`.
pub fn config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".baseline-search"))
}

/// Returns the path to `~/.baseline-search/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join("config.toml"))
}

/// Load config from `~/.baseline-search/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `SearchConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<SearchConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(SearchConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(SearchConfig::default());
    }

    load_config_from(&path)
}

/// Load config from an explicit path.
pub fn load_config_from(path: &Path) -> Result<SearchConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: SearchConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# Baseline Search Configuration
# All settings are optional. Defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# language = "en"                     # "en" or "ja" (or BASELINE_SEARCH_LANG, --lang)
# data_path = "/path/to/data.json"    # web-features data.json (or BASELINE_SEARCH_DATA, --data)

# [browse]
# page_size = 10                      # results per page in free text search
# visible_items = 10                  # rows shown at once in scrolling lists
# recent_days = 28                    # window for "Recent Baseline Updates" (1-36500)
"#;

    if let Some(parent) = path.parent()
        && let Err(e) = fs::create_dir_all(parent)
    {
        warn!("Failed to create config directory: {}", e);
        return;
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &SearchConfig, env: &EnvOverrides, cli: &CliOverrides) -> ResolvedConfig {
    // Language: CLI → env → config → default
    let language = cli
        .language
        .or(env.language)
        .or(config.general.language)
        .unwrap_or_default();

    // Data path: CLI → env → config → bundled
    let data_path = cli
        .data_path
        .clone()
        .or_else(|| env.data_path.clone())
        .or_else(|| config.general.data_path.clone());

    ResolvedConfig {
        language,
        data_path,
        page_size: config.browse.page_size.unwrap_or(DEFAULT_PAGE_SIZE).max(1),
        visible_items: config
            .browse
            .visible_items
            .unwrap_or(DEFAULT_VISIBLE_ITEMS)
            .max(1),
        recent_days: config
            .browse
            .recent_days
            .unwrap_or(DEFAULT_RECENT_DAYS)
            .clamp(1, MAX_RECENT_DAYS),
    }
}

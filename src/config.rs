use std::env;
use std::fs;
use std::sync::{RwLock, RwLockReadGuard};

use log::{error, info};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::utils::get_assets_path;

/// Overrides `api_base_url`; also picked up from `.env`.
pub const API_URL_VAR: &str = "GALLERY_API_URL";
pub const DEFAULT_API_URL: &str = "http://localhost:15000";

/// Main structure holding runtime settings
#[derive(Debug, Clone)]
pub struct Settings {
    pub config: Config,
}

impl Settings {
    /// Loads settings from disk or uses defaults if the file is missing or invalid
    pub fn load() -> Self {
        let mut config = Self::load_config();
        config.api_base_url = resolve_api_url(env::var(API_URL_VAR).ok(), &config.api_base_url);
        info!("Using backend at {}", config.api_base_url);
        Settings { config }
    }

    /// Reads config.json and deserializes into Config
    fn load_config() -> Config {
        let config_path = get_assets_path().join("config.json");

        fs::read_to_string(&config_path)
            .and_then(|content| serde_json::from_str(&content).map_err(Into::into))
            .unwrap_or_else(|err| {
                error!("Failed to load config.json: {}. Using default config.", err);
                Config::default()
            })
    }
}

/// Serializable structure for app config
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    pub api_base_url: String,
    pub per_page: u32,
    pub theme: String,
    pub language: String,
    /// How long the upload confirmation stays before the form reopens.
    pub success_display_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
            per_page: 12,
            theme: "Dark".to_string(),
            language: "en".to_string(),
            success_display_secs: 3,
        }
    }
}

/// Environment wins over the file; blank values are ignored.
fn resolve_api_url(from_env: Option<String>, from_file: &str) -> String {
    let chosen = from_env
        .filter(|url| !url.trim().is_empty())
        .unwrap_or_else(|| from_file.to_string());
    let chosen = chosen.trim().trim_end_matches('/');

    if chosen.is_empty() {
        DEFAULT_API_URL.to_string()
    } else {
        chosen.to_string()
    }
}

// ===================================
//         GLOBAL CONFIG SINGLETON
// ===================================

static SETTINGS: Lazy<RwLock<Settings>> = Lazy::new(|| {
    let settings = Settings::load();
    RwLock::new(settings)
});

/// Gets a read-only lock on the global Settings
pub fn get_settings() -> RwLockReadGuard<'static, Settings> {
    SETTINGS
        .read()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

//! Configuration loading from TOML files
//!
//! Config file is selected via:
//! 1. --config <path> command line argument
//! 2. Default: config/dev.toml
//!
//! Every section is optional; missing values fall back to the stock menu
//! and file locations.

use crate::domain::{Catalog, CatalogItem, Cents};
use anyhow::Context;
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Deserialize)]
pub struct MenuItemConfig {
    pub name: String,
    pub price_cents: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MenuConfig {
    /// Ordered menu; order drives every catalog walk in the app
    #[serde(default = "default_menu_items")]
    pub items: Vec<MenuItemConfig>,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self { items: default_menu_items() }
    }
}

fn default_menu_items() -> Vec<MenuItemConfig> {
    [("Cookie", 200), ("Sandwich", 600), ("Water", 200), ("Candy", 100), ("Soda", 300)]
        .into_iter()
        .map(|(name, price_cents)| MenuItemConfig { name: name.to_string(), price_cents })
        .collect()
}

#[derive(Debug, Clone, Deserialize)]
pub struct SnapshotConfig {
    /// File path for the on-exit cart export (CSV format)
    #[serde(default = "default_snapshot_file")]
    pub file: String,
}

impl Default for SnapshotConfig {
    fn default() -> Self {
        Self { file: default_snapshot_file() }
    }
}

fn default_snapshot_file() -> String {
    "data.csv".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// Log file path (the TUI owns the terminal, so logs go to a file)
    #[serde(default = "default_log_file")]
    pub file: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self { file: default_log_file() }
    }
}

fn default_log_file() -> String {
    "snack-shack.log".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct UiConfig {
    /// Redraw/poll interval for the event loop
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self { tick_rate_ms: default_tick_rate_ms() }
    }
}

fn default_tick_rate_ms() -> u64 {
    100
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct TomlConfig {
    #[serde(default)]
    pub menu: MenuConfig,
    #[serde(default)]
    pub snapshot: SnapshotConfig,
    #[serde(default)]
    pub log: LogConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// Main configuration struct used throughout the application
#[derive(Debug, Clone)]
pub struct Config {
    catalog: Catalog,
    snapshot_file: String,
    log_file: String,
    tick_rate_ms: u64,
    config_file: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog: Catalog::default(),
            snapshot_file: default_snapshot_file(),
            log_file: default_log_file(),
            tick_rate_ms: default_tick_rate_ms(),
            config_file: "default".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;

        let toml_config: TomlConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;

        let items: Vec<CatalogItem> = toml_config
            .menu
            .items
            .into_iter()
            .map(|item| CatalogItem { name: item.name, unit_price: Cents(item.price_cents) })
            .collect();
        anyhow::ensure!(!items.is_empty(), "Config {} declares an empty menu", path.display());

        Ok(Self {
            catalog: Catalog::new(items),
            snapshot_file: toml_config.snapshot.file,
            log_file: toml_config.log.file,
            tick_rate_ms: toml_config.ui.tick_rate_ms,
            config_file: path.display().to_string(),
        })
    }

    /// Load configuration - tries the TOML file first, falls back to defaults
    pub fn load_from_path(path: &str) -> Self {
        match Self::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Warning: {}. Using defaults.", e);
                Self::default()
            }
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn snapshot_file(&self) -> &str {
        &self.snapshot_file
    }

    pub fn log_file(&self) -> &str {
        &self.log_file
    }

    pub fn tick_rate_ms(&self) -> u64 {
        self.tick_rate_ms
    }

    pub fn config_file(&self) -> &str {
        &self.config_file
    }
}

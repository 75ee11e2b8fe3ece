//! Configuration management for cordon
//!
//! Handles loading and validation of cordon.toml configuration files.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    /// General settings
    #[serde(default)]
    pub general: GeneralConfig,

    /// Marker item settings
    #[serde(default)]
    pub markers: MarkerConfig,

    /// Registry settings
    #[serde(default)]
    pub registry: RegistryConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFailed {
            path: path.display().to_string(),
            source,
        })?;
        let config: Self =
            toml::from_str(&raw).map_err(|e| ConfigError::ParseFailed(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validate field ranges and required shapes.
    pub fn validate(&self) -> Result<(), ConfigError> {
        const LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];
        if !LEVELS.contains(&self.general.log_level.as_str()) {
            return Err(ConfigError::ValidationError(format!(
                "unknown log level '{}' (expected one of {LEVELS:?})",
                self.general.log_level
            )));
        }

        if !self.markers.tag_key.contains(':') {
            return Err(ConfigError::ValidationError(format!(
                "marker tag_key '{}' must be a namespaced key (namespace:name)",
                self.markers.tag_key
            )));
        }

        if self.markers.hotbar_slot > 8 {
            return Err(ConfigError::ValidationError(format!(
                "hotbar_slot {} out of range (0..=8)",
                self.markers.hotbar_slot
            )));
        }

        if self.registry.shards == 0 || self.registry.shards > 256 {
            return Err(ConfigError::ValidationError(format!(
                "registry shards {} out of range (1..=256)",
                self.registry.shards
            )));
        }

        Ok(())
    }
}

/// General configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GeneralConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Log output format (pretty or json)
    #[serde(default)]
    pub log_format: LogFormat,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_format: LogFormat::default(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Log output format
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    /// Human-friendly output for interactive use
    #[default]
    Pretty,
    /// JSON lines for machine consumption
    Json,
}

/// Marker item configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MarkerConfig {
    /// Namespaced key under which marker items carry their role tag.
    #[serde(default = "default_tag_key")]
    pub tag_key: String,

    /// Item id for the corner marker.
    #[serde(default = "default_corner_item_id")]
    pub corner_item_id: String,

    /// Display name for the corner marker.
    #[serde(default = "default_corner_display_name")]
    pub corner_display_name: String,

    /// Hotbar slot the corner marker is placed in (0..=8).
    #[serde(default)]
    pub hotbar_slot: u8,

    /// Whether to also hand out the (currently inert) commit marker.
    #[serde(default)]
    pub issue_commit_marker: bool,

    /// Item id for the commit marker.
    #[serde(default = "default_commit_item_id")]
    pub commit_item_id: String,

    /// Display name for the commit marker.
    #[serde(default = "default_commit_display_name")]
    pub commit_display_name: String,
}

impl Default for MarkerConfig {
    fn default() -> Self {
        Self {
            tag_key: default_tag_key(),
            corner_item_id: default_corner_item_id(),
            corner_display_name: default_corner_display_name(),
            hotbar_slot: 0,
            issue_commit_marker: false,
            commit_item_id: default_commit_item_id(),
            commit_display_name: default_commit_display_name(),
        }
    }
}

fn default_tag_key() -> String {
    "cordon:marker".to_string()
}

fn default_corner_item_id() -> String {
    "minecraft:end_rod".to_string()
}

fn default_corner_display_name() -> String {
    "Region Selector".to_string()
}

fn default_commit_item_id() -> String {
    "minecraft:lime_dye".to_string()
}

fn default_commit_display_name() -> String {
    "Confirm Selection".to_string()
}

/// Registry configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RegistryConfig {
    /// Number of lock stripes in the session registry (1..=256).
    #[serde(default = "default_shards")]
    pub shards: usize,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            shards: default_shards(),
        }
    }
}

fn default_shards() -> usize {
    16
}

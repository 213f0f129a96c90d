//! Configuration management for Confirmist
//!
//! This module handles loading, parsing, and validation of configuration files.

use crate::confirm::ConflictPolicy;
use crate::constants::{
    CONFIG_GENERATED, DEFAULT_CANCEL_LABEL, DEFAULT_CONFIRM_LABEL, DIALOG_DEFAULT_HEIGHT_PERCENT,
    DIALOG_DEFAULT_WIDTH_PERCENT, DIALOG_MIN_HEIGHT_PERCENT, DIALOG_MIN_WIDTH_PERCENT,
};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub ui: UiConfig,
    pub confirm: ConfirmConfig,
    pub logging: LoggingConfig,
}

/// UI configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Enable mouse support (click buttons, click outside to dismiss)
    pub mouse_enabled: bool,
    /// Confirmation dialog width as a percentage of the terminal width
    pub dialog_width_percent: u16,
    /// Confirmation dialog height as a percentage of the terminal height
    pub dialog_height_percent: u16,
}

/// Confirmation dialog defaults
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfirmConfig {
    /// Label used when a request does not set its own confirm label
    pub confirm_label: String,
    /// Label used when a request does not set its own cancel label
    pub cancel_label: String,
    /// What to do with a request that arrives while another is pending
    /// Options: "ignore", "queue"
    pub conflict_policy: ConflictPolicy,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Write logs to a file in the data directory
    pub enabled: bool,
    /// Minimum level: off, error, warn, info, debug, trace
    pub level: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            mouse_enabled: true,
            dialog_width_percent: DIALOG_DEFAULT_WIDTH_PERCENT,
            dialog_height_percent: DIALOG_DEFAULT_HEIGHT_PERCENT,
        }
    }
}

impl Default for ConfirmConfig {
    fn default() -> Self {
        Self {
            confirm_label: DEFAULT_CONFIRM_LABEL.to_string(),
            cancel_label: DEFAULT_CANCEL_LABEL.to_string(),
            conflict_policy: ConflictPolicy::default(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            level: "info".to_string(),
        }
    }
}

impl LoggingConfig {
    /// Parse the configured level
    pub fn level_filter(&self) -> Result<log::LevelFilter> {
        log::LevelFilter::from_str(&self.level).with_context(|| format!("Invalid logging level '{}'", self.level))
    }
}

impl Config {
    /// Load the first configuration file found, or the defaults when there is none
    pub fn load() -> Result<Self> {
        match Self::find_config_file() {
            Some(path) => Self::load_from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Find configuration file in order of precedence
    fn find_config_file() -> Option<PathBuf> {
        // 1. Check current directory
        let current_dir_config = PathBuf::from("confirmist.toml");
        if current_dir_config.exists() {
            return Some(current_dir_config);
        }

        // 2. Check XDG config directory
        let xdg_config = Self::get_default_config_path().ok()?;
        xdg_config.exists().then_some(xdg_config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if !(DIALOG_MIN_WIDTH_PERCENT..=100).contains(&self.ui.dialog_width_percent) {
            anyhow::bail!(
                "dialog_width_percent must be between {} and 100, got {}",
                DIALOG_MIN_WIDTH_PERCENT,
                self.ui.dialog_width_percent
            );
        }

        if !(DIALOG_MIN_HEIGHT_PERCENT..=100).contains(&self.ui.dialog_height_percent) {
            anyhow::bail!(
                "dialog_height_percent must be between {} and 100, got {}",
                DIALOG_MIN_HEIGHT_PERCENT,
                self.ui.dialog_height_percent
            );
        }

        if self.confirm.confirm_label.trim().is_empty() {
            anyhow::bail!("confirm_label cannot be empty");
        }
        if self.confirm.cancel_label.trim().is_empty() {
            anyhow::bail!("cancel_label cannot be empty");
        }

        self.logging.level_filter()?;

        Ok(())
    }

    /// Generate default configuration file
    pub fn generate_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
        let config = Self::default();
        let toml_content = toml::to_string_pretty(&config).context("Failed to serialize default config")?;

        // Add header comment
        let header = format!(
            "# Confirmist Configuration File\n# Generated on {}\n\n",
            chrono::Local::now().format("%Y-%m-%d")
        );

        let full_content = header + &toml_content;

        // Ensure the parent directory exists
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
        }

        std::fs::write(&path, full_content)
            .with_context(|| format!("Failed to write config file: {}", path.as_ref().display()))?;

        println!("{}: {}", CONFIG_GENERATED, path.as_ref().display());
        Ok(())
    }

    /// Get the XDG config directory path
    pub fn get_xdg_config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
            .map(|dir| dir.join("confirmist"))
    }

    /// Get the default config file path
    pub fn get_default_config_path() -> Result<PathBuf> {
        Ok(Self::get_xdg_config_dir()?.join("config.toml"))
    }
}

//! Segue configuration system
//!
//! This crate provides centralized configuration management for segue,
//! loading settings from `segue.toml` as an alternative to environment
//! variables.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main configuration structure for segue
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SegueConfig {
    /// Transition runtime settings
    pub transitions: TransitionSettings,
    /// Diagnostic output settings
    pub diagnostics: DiagnosticsSettings,
}

/// Transition runtime configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TransitionSettings {
    /// Whether transitions run at all. When false every transition applies
    /// its target immediately (reduced motion).
    pub enabled: bool,
    /// Global rate multiplier; 2.0 halves every duration and delay.
    /// Values <= 0 are treated as 1.0.
    pub speed: f32,
}

/// Diagnostics configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DiagnosticsSettings {
    /// Log transition lifecycle (start, kill, finish) at debug level
    pub log_transitions: bool,
}

impl Default for TransitionSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            speed: 1.0,
        }
    }
}

impl Default for DiagnosticsSettings {
    fn default() -> Self {
        Self {
            log_transitions: false,
        }
    }
}

impl TransitionSettings {
    /// The effective rate divisor, guarding nonsense values.
    pub fn effective_speed(&self) -> f32 {
        if self.speed > 0.0 { self.speed } else { 1.0 }
    }
}

impl SegueConfig {
    /// Load configuration from a TOML file
    ///
    /// # Arguments
    /// * `path` - Path to the segue.toml configuration file
    ///
    /// # Returns
    /// * `Ok(SegueConfig)` - Successfully loaded configuration
    /// * `Err(String)` - Error message if loading failed
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| format!("Failed to read config file: {}", e))?;

        toml::from_str(&content).map_err(|e| format!("Failed to parse config file: {}", e))
    }

    /// Load configuration from the default location (segue.toml in the
    /// current directory) or return default configuration if the file
    /// doesn't exist
    pub fn load_or_default() -> Self {
        Self::load_from_file("segue.toml").unwrap_or_default()
    }

    /// Merge configuration with environment variables
    ///
    /// Environment variables take precedence over configuration file values.
    /// This allows for temporary overrides without modifying the config file.
    pub fn merge_with_env(&mut self) {
        if let Ok(val) = std::env::var("SEGUE_TRANSITIONS") {
            self.transitions.enabled = val == "1" || val.eq_ignore_ascii_case("true");
        }
        if let Ok(val) = std::env::var("SEGUE_TRANSITION_SPEED") {
            if let Ok(speed) = val.parse::<f32>() {
                self.transitions.speed = speed;
            }
        }
        if let Ok(val) = std::env::var("SEGUE_LOG_TRANSITIONS") {
            self.diagnostics.log_transitions = val == "1" || val.eq_ignore_ascii_case("true");
        }
    }

    /// Load configuration with environment variable overrides
    ///
    /// This is the recommended way to load configuration:
    /// 1. Load from segue.toml (or use defaults if not found)
    /// 2. Override with environment variables if present
    pub fn load() -> Self {
        let mut config = Self::load_or_default();
        config.merge_with_env();
        config
    }
}

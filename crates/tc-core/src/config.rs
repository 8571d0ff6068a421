//! Canvas configuration.
//!
//! Hosts pass a (possibly partial) JSON object; every missing field takes
//! the default below. The defaults give a conventional undo stack and
//! ids that are never reused. `CanvasConfig::legacy()` reproduces the
//! history quirks of the widget this one replaces.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

// ─── Policies ────────────────────────────────────────────────────────────

/// How commits, undo, and redo move snapshots between the history stacks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HistoryMode {
    /// Snapshot the pre-commit state and clear redo on every commit.
    #[default]
    Conventional,
    /// Snapshot the post-commit state, keep stale redo entries, and drop
    /// the last element of the popped snapshot on undo.
    Legacy,
}

/// How a new element's id is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdAllocation {
    /// Counter that survives undo. Never reuses an id.
    #[default]
    Monotonic,
    /// Current element count. Undo-then-commit can repeat an id.
    Positional,
}

// ─── Config ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CanvasConfig {
    /// Height of the drawing surface in logical units. Default: **300**.
    pub height: f64,

    /// New elements spawn this far above the bottom edge. Default: **100**.
    pub spawn_offset: f64,

    /// Padding around each text block. Default: **5**.
    pub padding: f64,

    /// Shown in place of an element whose text is empty.
    pub placeholder: String,

    pub history: HistoryMode,
    pub ids: IdAllocation,

    /// Maximum number of undo entries kept. Default: **200**.
    pub max_depth: usize,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            height: 300.0,
            spawn_offset: 100.0,
            padding: 5.0,
            placeholder: "New Text".to_string(),
            history: HistoryMode::Conventional,
            ids: IdAllocation::Monotonic,
            max_depth: 200,
        }
    }
}

impl CanvasConfig {
    /// Defaults with legacy history and positional ids.
    pub fn legacy() -> Self {
        Self {
            history: HistoryMode::Legacy,
            ids: IdAllocation::Positional,
            ..Self::default()
        }
    }

    /// Parse and validate a JSON config object.
    ///
    /// # Errors
    /// Returns `ConfigError::Parse` on malformed JSON and
    /// `ConfigError::Invalid` when a value is out of range.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: CanvasConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// # Errors
    /// Returns `ConfigError::Invalid` naming the first bad field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.height.is_finite() && self.height > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "height must be positive, got {}",
                self.height
            )));
        }
        if !(self.spawn_offset.is_finite() && self.spawn_offset >= 0.0) {
            return Err(ConfigError::Invalid(format!(
                "spawnOffset must be non-negative, got {}",
                self.spawn_offset
            )));
        }
        if !(self.padding.is_finite() && self.padding >= 0.0) {
            return Err(ConfigError::Invalid(format!(
                "padding must be non-negative, got {}",
                self.padding
            )));
        }
        if self.max_depth == 0 {
            return Err(ConfigError::Invalid("maxDepth must be at least 1".into()));
        }
        Ok(())
    }
}

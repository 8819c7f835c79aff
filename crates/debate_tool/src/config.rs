//! Tool configuration (`debate.toml`)
//!
//! ```toml
//! [schedule]
//! mode = "schedule2"
//! round_limit = "clamp"
//! seed = 42
//!
//! [export]
//! directory = "exports"
//! ```

use debate_core::{Mode, RoundLimit, ScheduleOptions};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::ToolResult;

/// Default config file looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "debate.toml";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolConfig {
    pub schedule: ScheduleSection,
    pub export: ExportSection,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScheduleSection {
    pub mode: Mode,
    pub round_limit: RoundLimit,
    /// Fixed shuffle seed (None = fresh shuffle every run)
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportSection {
    /// Where CSV files are written (None = don't write)
    pub directory: Option<PathBuf>,
}

impl ScheduleSection {
    pub fn options(&self) -> ScheduleOptions {
        ScheduleOptions {
            mode: self.mode,
            round_limit: self.round_limit,
        }
    }
}

impl ToolConfig {
    /// Parse config from TOML text
    pub fn from_toml(text: &str) -> ToolResult<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Load config from a TOML file
    pub fn load(path: &Path) -> ToolResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    /// Load `path` if it exists, otherwise fall back to defaults.
    pub fn load_or_default(path: &Path) -> ToolResult<Self> {
        if path.exists() {
            debug!(path = %path.display(), "loading config");
            Self::load(path)
        } else {
            debug!(path = %path.display(), "no config file, using defaults");
            Ok(Self::default())
        }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;

//! Application configuration
//!
//! Every field has a default, so an empty or partial TOML file is valid.
//!
//! ```
//! use oxo::{AppConfig, Mark};
//!
//! let config = AppConfig::from_toml_str("engine_mark = \"X\"\nhuman_mark = \"O\"")?;
//! assert_eq!(config.marks()?.engine, Mark::X);
//! # Ok::<(), oxo::Error>(())
//! ```

use std::{path::Path, time::Duration};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    Error, Result,
    engine::{Marks, Scoring},
    tictactoe::Mark,
};

/// Settings shared by all commands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// Mark the human plays; the human always moves first
    pub human_mark: Mark,
    /// Mark the engine plays; must differ from `human_mark`
    pub engine_mark: Mark,
    /// Pause before the engine's move is shown in interactive play
    pub engine_delay_ms: u64,
    /// Terminal position scoring used by the engine
    pub scoring: Scoring,
    /// Default log filter when neither `RUST_LOG` nor `-v` is given
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            human_mark: Mark::X,
            engine_mark: Mark::O,
            engine_delay_ms: 500,
            scoring: Scoring::Flat,
            log_level: "warn".to_string(),
        }
    }
}

impl AppConfig {
    /// Load and validate a TOML configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, does not parse, or names
    /// the same mark for both sides.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| Error::Io {
            operation: format!("read config {}", path.display()),
            source,
        })?;
        let config = Self::from_toml_str(&text)?;
        debug!(path = %path.display(), ?config, "loaded configuration");
        Ok(config)
    }

    /// Parse and validate configuration from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: AppConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the two marks differ.
    pub fn validate(&self) -> Result<()> {
        self.marks().map(|_| ())
    }

    /// The engine's view of the mark assignment.
    pub fn marks(&self) -> Result<Marks> {
        Marks::new(self.engine_mark, self.human_mark)
    }

    pub fn engine_delay(&self) -> Duration {
        Duration::from_millis(self.engine_delay_ms)
    }

    /// Set the human's mark; the engine takes the other one.
    pub fn with_human_mark(mut self, mark: Mark) -> Self {
        self.human_mark = mark;
        self.engine_mark = mark.opponent();
        self
    }

    pub fn with_engine_delay_ms(mut self, delay_ms: u64) -> Self {
        self.engine_delay_ms = delay_ms;
        self
    }

    pub fn with_scoring(mut self, scoring: Scoring) -> Self {
        self.scoring = scoring;
        self
    }

    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }
}

//! Engine configuration: the window size and the three ranker presets.
//!
//! Every field defaults to the built-in behavior, so a config file only needs
//! to name what it overrides:
//!
//! ```json
//! { "global": { "quorum_threshold": 4, "quorum_inclusive": true,
//!               "union_weight": 5, "selection": { "mode": "top_k", "k": 10 } } }
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{OverlapError, Result};
use crate::ranker::{RankerConfig, Selection};
use crate::scanner::WINDOW_SIZE;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub window_size: u32,
    pub calendar: RankerConfig,
    pub destination: RankerConfig,
    pub global: RankerConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            window_size: WINDOW_SIZE,
            calendar: RankerConfig::calendar(),
            destination: RankerConfig::destination(),
            global: RankerConfig::global(),
        }
    }
}

impl EngineConfig {
    /// Parse and validate a JSON config document.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject a zero window size and empty top-k selections.
    pub fn validate(&self) -> Result<()> {
        if self.window_size == 0 {
            return Err(OverlapError::InvalidConfig(
                "window_size must be positive".to_string(),
            ));
        }
        for (name, ranker) in [
            ("calendar", &self.calendar),
            ("destination", &self.destination),
            ("global", &self.global),
        ] {
            if ranker.selection == (Selection::TopK { k: 0 }) {
                return Err(OverlapError::InvalidConfig(format!(
                    "{}: top_k selection needs k > 0",
                    name
                )));
            }
        }
        Ok(())
    }
}

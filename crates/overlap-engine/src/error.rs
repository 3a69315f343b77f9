//! Error types for overlap-engine boundary operations.
//!
//! The scanning and ranking core never fails for valid inputs. These errors
//! are raised only where loosely-shaped outside data enters the engine.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum OverlapError {
    /// A one-based month number outside `1..=12`.
    #[error("Invalid month: {0} (expected 1-12)")]
    InvalidMonth(u32),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, OverlapError>;

//! Error types
//!
//! Only configuration can fail. Crashes and ground hits are phase
//! transitions, not errors.

use thiserror::Error;

/// Game error type
#[derive(Debug, Error)]
pub enum GameError {
    /// Difficulty key outside the known set
    #[error("unknown difficulty: {0}")]
    UnknownDifficulty(String),

    /// Tuning profile violates a physics invariant
    #[error("invalid tuning for {profile}: {reason}")]
    InvalidTuning {
        profile: &'static str,
        reason: String,
    },

    /// Malformed tuning table
    #[error("tuning json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, GameError>;

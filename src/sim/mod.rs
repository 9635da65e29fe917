//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per presented frame, no wall-clock time
//! - Seeded RNG only
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies

pub mod autoplay;
pub mod catalog;
pub mod collision;
pub mod difficulty;
pub mod state;
pub mod tick;

pub use autoplay::autoplay_control;
pub use catalog::{BANGALORE_OBSTACLES, ObstacleType, obstacle_type_for_score};
pub use collision::{spans_overlap, vertical_clear};
pub use difficulty::{DifficultyScaler, ScalingPolicy};
pub use state::{Avatar, GameEvent, GameOverCause, GameOverSummary, GamePhase, GameState, Obstacle};
pub use tick::tick;

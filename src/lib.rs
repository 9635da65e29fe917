//! Bangalore Flap - A side-scrolling avoider through Bangalore traffic
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, game state)
//! - `session`: Command boundary driven by the presentation layer
//! - `tuning`: Data-driven difficulty profiles
//! - `renderer`: Canvas 2D presentation helpers
//! - `error`: Configuration error types

pub mod error;
pub mod renderer;
pub mod session;
pub mod sim;
pub mod tuning;

pub use error::{GameError, Result};
pub use session::{LoopControl, Session};
pub use sim::ScalingPolicy;
pub use tuning::{ConfigurationProfile, Difficulty, TuningTable};

use serde::{Deserialize, Serialize};

/// Game configuration constants
pub mod consts {
    /// Default play field (4:3, the aspect the page keeps the canvas at)
    pub const DEFAULT_FIELD_WIDTH: f32 = 800.0;
    pub const DEFAULT_FIELD_HEIGHT: f32 = 600.0;
    pub const FIELD_ASPECT_RATIO: f32 = 4.0 / 3.0;

    /// Avatar sits at this fraction of the field width
    pub const AVATAR_X_FRACTION: f32 = 0.2;

    /// New obstacle once the last one is this far in from the right edge
    pub const SPAWN_SPACING: f32 = 250.0;

    /// Difficulty scaling: speed grows every 5 points, gap shrinks every 10
    pub const SPEED_BRACKET: u32 = 5;
    pub const SPEED_STEP: f32 = 0.3;
    pub const GAP_BRACKET: u32 = 10;
    pub const GAP_STEP: f32 = 5.0;
    /// Live gap never shrinks below this
    pub const GAP_FLOOR: f32 = 100.0;

    /// Autoplay aims slightly above the gap centre
    pub const AUTOPLAY_AIM_OFFSET: f32 = 10.0;
}

/// Play field dimensions in canvas pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Field {
    pub width: f32,
    pub height: f32,
}

impl Default for Field {
    fn default() -> Self {
        Self {
            width: consts::DEFAULT_FIELD_WIDTH,
            height: consts::DEFAULT_FIELD_HEIGHT,
        }
    }
}

impl Field {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Largest 4:3 field that fits inside a container
    pub fn fit_to(container_width: f32, container_height: f32) -> Self {
        let mut width = container_width;
        let mut height = width / consts::FIELD_ASPECT_RATIO;
        if height > container_height {
            height = container_height;
            width = height * consts::FIELD_ASPECT_RATIO;
        }
        Self {
            width: width.floor(),
            height: height.floor(),
        }
    }
}

//! Score-driven difficulty scaling
//!
//! Speed rises every `SPEED_BRACKET` points and the gap narrows every
//! `GAP_BRACKET` points. Always recomputed from the selected profile's base
//! values so repeated calls never compound.

use serde::{Deserialize, Serialize};

use crate::consts::{GAP_BRACKET, GAP_FLOOR, GAP_STEP, SPEED_BRACKET, SPEED_STEP};
use crate::tuning::ConfigurationProfile;

/// Whether a run gets harder as the score climbs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScalingPolicy {
    /// Speed and gap fixed for the whole run
    Static,
    /// Speed and gap follow the score
    Progressive,
}

/// Recomputes live speed and gap from the score
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DifficultyScaler {
    pub policy: ScalingPolicy,
    pub base_speed: f32,
    pub base_gap: f32,
}

impl DifficultyScaler {
    pub fn new(profile: &ConfigurationProfile, policy: ScalingPolicy) -> Self {
        Self {
            policy,
            base_speed: profile.obstacle_speed,
            base_gap: profile.obstacle_gap,
        }
    }

    pub fn speed_for(&self, score: u32) -> f32 {
        self.base_speed + (score / SPEED_BRACKET) as f32 * SPEED_STEP
    }

    pub fn gap_for(&self, score: u32) -> f32 {
        (self.base_gap - (score / GAP_BRACKET) as f32 * GAP_STEP).max(GAP_FLOOR)
    }

    /// Rewrite the live speed and gap for `score`. No-op when static.
    pub fn apply(&self, score: u32, live: &mut ConfigurationProfile) {
        if self.policy == ScalingPolicy::Static {
            return;
        }
        live.obstacle_speed = self.speed_for(score);
        live.obstacle_gap = self.gap_for(score);
    }
}

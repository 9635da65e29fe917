//! Difficulty profiles
//!
//! Each difficulty maps to a bundle of physics and spawn constants. The
//! built-in table mirrors the original Flappy Bird feel; a JSON table can
//! replace it wholesale.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::consts::GAP_FLOOR;
use crate::error::{GameError, Result};
use crate::sim::ScalingPolicy;

/// Difficulty selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
    /// Same physics as medium, but the autoplay controller flies
    Autoplay,
}

impl Difficulty {
    pub const ALL: [Difficulty; 4] = [
        Difficulty::Easy,
        Difficulty::Medium,
        Difficulty::Hard,
        Difficulty::Autoplay,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
            Difficulty::Autoplay => "autoplay",
        }
    }

    /// Whether the autoplay controller owns the avatar
    pub fn is_autoplay(&self) -> bool {
        matches!(self, Difficulty::Autoplay)
    }

    /// Easy and autoplay keep their starting speed and gap for the whole run
    pub fn scaling_policy(&self) -> ScalingPolicy {
        match self {
            Difficulty::Easy | Difficulty::Autoplay => ScalingPolicy::Static,
            Difficulty::Medium | Difficulty::Hard => ScalingPolicy::Progressive,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            "autoplay" => Ok(Difficulty::Autoplay),
            _ => Err(GameError::UnknownDifficulty(s.to_string())),
        }
    }
}

/// Physics and spawn constants for one difficulty
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigurationProfile {
    /// Downward acceleration per tick
    pub gravity: f32,
    /// Velocity set by a jump (negative = upward)
    pub impulse_force: f32,
    pub avatar_size: f32,
    pub obstacle_width: f32,
    /// Vertical opening between the top and bottom bars
    pub obstacle_gap: f32,
    /// Leftward motion per tick
    pub obstacle_speed: f32,
    /// Minimum height of either bar
    pub min_obstacle_height: f32,
    /// Carried for tuning tables; spawn sampling is bounded by the field
    pub max_obstacle_height: f32,
}

impl ConfigurationProfile {
    pub const EASY: Self = Self {
        gravity: 0.25,
        impulse_force: -5.0,
        avatar_size: 30.0,
        obstacle_width: 60.0,
        obstacle_gap: 180.0,
        obstacle_speed: 2.0,
        min_obstacle_height: 50.0,
        max_obstacle_height: 300.0,
    };

    pub const MEDIUM: Self = Self {
        gravity: 0.3,
        impulse_force: -5.5,
        avatar_size: 30.0,
        obstacle_width: 60.0,
        obstacle_gap: 150.0,
        obstacle_speed: 2.5,
        min_obstacle_height: 50.0,
        max_obstacle_height: 300.0,
    };

    pub const HARD: Self = Self {
        gravity: 0.35,
        impulse_force: -6.0,
        avatar_size: 30.0,
        obstacle_width: 60.0,
        obstacle_gap: 120.0,
        obstacle_speed: 3.5,
        min_obstacle_height: 50.0,
        max_obstacle_height: 300.0,
    };

    pub const AUTOPLAY: Self = Self::MEDIUM;

    /// Built-in profile for a difficulty
    pub fn resolve(difficulty: Difficulty) -> Self {
        match difficulty {
            Difficulty::Easy => Self::EASY,
            Difficulty::Medium => Self::MEDIUM,
            Difficulty::Hard => Self::HARD,
            Difficulty::Autoplay => Self::AUTOPLAY,
        }
    }

    fn validate(&self, profile: &'static str) -> Result<()> {
        let invalid = |reason: &str| GameError::InvalidTuning {
            profile,
            reason: reason.to_string(),
        };

        if !(self.gravity > 0.0) {
            return Err(invalid("gravity must be positive"));
        }
        if !(self.impulse_force < 0.0) {
            return Err(invalid("impulse_force must be negative (upward)"));
        }
        if !(self.avatar_size > 0.0 && self.obstacle_width > 0.0) {
            return Err(invalid("avatar_size and obstacle_width must be positive"));
        }
        if !(self.obstacle_speed > 0.0) {
            return Err(invalid("obstacle_speed must be positive"));
        }
        if !(self.obstacle_gap >= GAP_FLOOR) {
            return Err(invalid(&format!("obstacle_gap must be at least {GAP_FLOOR}")));
        }
        if self.min_obstacle_height < 0.0 {
            return Err(invalid("min_obstacle_height must not be negative"));
        }
        Ok(())
    }
}

/// All four profiles
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TuningTable {
    pub easy: ConfigurationProfile,
    pub medium: ConfigurationProfile,
    pub hard: ConfigurationProfile,
    pub autoplay: ConfigurationProfile,
}

impl Default for TuningTable {
    fn default() -> Self {
        Self {
            easy: ConfigurationProfile::EASY,
            medium: ConfigurationProfile::MEDIUM,
            hard: ConfigurationProfile::HARD,
            autoplay: ConfigurationProfile::AUTOPLAY,
        }
    }
}

impl TuningTable {
    /// Parse and validate a JSON tuning table
    pub fn from_json(json: &str) -> Result<Self> {
        let table: TuningTable = serde_json::from_str(json)?;
        table.validate()?;
        log::info!("Loaded tuning table from json");
        Ok(table)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn profile(&self, difficulty: Difficulty) -> ConfigurationProfile {
        match difficulty {
            Difficulty::Easy => self.easy,
            Difficulty::Medium => self.medium,
            Difficulty::Hard => self.hard,
            Difficulty::Autoplay => self.autoplay,
        }
    }

    pub fn validate(&self) -> Result<()> {
        for difficulty in Difficulty::ALL {
            self.profile(difficulty).validate(difficulty.as_str())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_difficulty() {
        assert_eq!("easy".parse::<Difficulty>().unwrap(), Difficulty::Easy);
        assert_eq!(" Hard ".parse::<Difficulty>().unwrap(), Difficulty::Hard);
        assert_eq!(
            "AUTOPLAY".parse::<Difficulty>().unwrap(),
            Difficulty::Autoplay
        );
        for difficulty in Difficulty::ALL {
            assert_eq!(difficulty.as_str().parse::<Difficulty>().unwrap(), difficulty);
        }
    }

    #[test]
    fn test_unknown_difficulty_rejected() {
        let err = "nightmare".parse::<Difficulty>().unwrap_err();
        assert!(matches!(err, GameError::UnknownDifficulty(ref s) if s == "nightmare"));
        assert_eq!(err.to_string(), "unknown difficulty: nightmare");
    }

    #[test]
    fn test_resolve_profiles() {
        assert_eq!(ConfigurationProfile::resolve(Difficulty::Easy).obstacle_gap, 180.0);
        assert_eq!(ConfigurationProfile::resolve(Difficulty::Medium).obstacle_speed, 2.5);
        assert_eq!(ConfigurationProfile::resolve(Difficulty::Hard).impulse_force, -6.0);
        assert_eq!(
            ConfigurationProfile::resolve(Difficulty::Autoplay),
            ConfigurationProfile::resolve(Difficulty::Medium)
        );
    }

    #[test]
    fn test_scaling_policy_per_difficulty() {
        assert_eq!(Difficulty::Easy.scaling_policy(), ScalingPolicy::Static);
        assert_eq!(Difficulty::Autoplay.scaling_policy(), ScalingPolicy::Static);
        assert_eq!(Difficulty::Medium.scaling_policy(), ScalingPolicy::Progressive);
        assert_eq!(Difficulty::Hard.scaling_policy(), ScalingPolicy::Progressive);
        assert_eq!(Difficulty::default(), Difficulty::Medium);
    }

    #[test]
    fn test_default_table_is_valid() {
        TuningTable::default().validate().unwrap();
    }

    #[test]
    fn test_json_table_roundtrip_and_override() {
        let mut table = TuningTable::default();
        table.hard.obstacle_speed = 4.0;
        let json = table.to_json().unwrap();
        let parsed = TuningTable::from_json(&json).unwrap();
        assert_eq!(parsed.profile(Difficulty::Hard).obstacle_speed, 4.0);
    }

    #[test]
    fn test_json_table_rejects_small_gap() {
        let mut table = TuningTable::default();
        table.easy.obstacle_gap = 80.0;
        let json = serde_json::to_string(&table).unwrap();
        let err = TuningTable::from_json(&json).unwrap_err();
        assert!(matches!(err, GameError::InvalidTuning { profile: "easy", .. }));
    }

    #[test]
    fn test_json_table_rejects_unknown_fields() {
        let json = r#"{"easy": {"gravity": 0.25}}"#;
        assert!(matches!(
            TuningTable::from_json(json),
            Err(GameError::Json(_))
        ));
    }
}

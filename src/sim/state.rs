//! Game state and core simulation types
//!
//! One `GameState` is one run: avatar, obstacles, score and the live
//! config. Starting or restarting builds a fresh one.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::catalog::{BANGALORE_OBSTACLES, ObstacleType, obstacle_type_for_score};
use super::collision::avatar_hits_obstacle;
use super::difficulty::DifficultyScaler;
use crate::Field;
use crate::consts::AVATAR_X_FRACTION;
use crate::tuning::{ConfigurationProfile, Difficulty};

/// Current phase of the run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for a difficulty pick / start
    Start,
    /// Active gameplay
    Playing,
    /// Run ended, simulation frozen
    GameOver,
}

/// What ended the run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameOverCause {
    Ground,
    Obstacle,
}

/// Shown on the game over screen
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GameOverSummary {
    pub score: u32,
    /// Theme current when the run ended
    pub obstacle_type: ObstacleType,
    pub cause: GameOverCause,
}

/// Events emitted by the simulation for the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum GameEvent {
    ObstaclePassed { score: u32 },
    ObstacleTypeChanged { name: &'static str },
    GameOver { cause: GameOverCause, score: u32 },
}

/// The player's avatar
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Avatar {
    /// Top-left corner; x never changes after creation
    pub pos: Vec2,
    /// Vertical velocity (positive = falling)
    pub velocity: f32,
    pub size: f32,
}

impl Avatar {
    pub fn new(profile: &ConfigurationProfile, field: Field) -> Self {
        Self {
            pos: Vec2::new(field.width * AVATAR_X_FRACTION, field.height / 2.0),
            velocity: 0.0,
            size: profile.avatar_size,
        }
    }

    /// Apply gravity and integrate. Returns true on hitting the ground.
    ///
    /// The ceiling stops the avatar without ending the run.
    pub fn update(&mut self, gravity: f32, field_height: f32) -> bool {
        self.velocity += gravity;
        self.pos.y += self.velocity;

        if self.pos.y < 0.0 {
            self.pos.y = 0.0;
            self.velocity = 0.0;
        }
        if self.pos.y + self.size > field_height {
            self.pos.y = field_height - self.size;
            self.velocity = 0.0;
            return true;
        }
        false
    }

    /// Overwrite velocity with the jump impulse (no stacking)
    pub fn jump(&mut self, impulse_force: f32) {
        self.velocity = impulse_force;
    }

    #[inline]
    pub fn center_y(&self) -> f32 {
        self.pos.y + self.size / 2.0
    }
}

/// A top/bottom barrier pair with a gap between
#[derive(Debug, Clone, Serialize)]
pub struct Obstacle {
    /// Left edge
    pub x: f32,
    pub width: f32,
    /// Top of the gap
    pub gap_y: f32,
    pub gap_height: f32,
    /// Set once the avatar has cleared this obstacle
    pub passed: bool,
    pub obstacle_type: ObstacleType,
}

impl Obstacle {
    /// Spawn at the right edge using the live config
    pub fn spawn<R: Rng>(
        live: &ConfigurationProfile,
        field: Field,
        score: u32,
        catalog: &[ObstacleType],
        rng: &mut R,
    ) -> Self {
        let gap_height = live.obstacle_gap;
        let min_y = live.min_obstacle_height;
        let max_y = field.height - live.min_obstacle_height - gap_height;

        let gap_y = if max_y > min_y {
            rng.random_range(min_y..max_y)
        } else {
            // Gap doesn't fit between the minimum bars; centre it
            ((field.height - gap_height) / 2.0).max(0.0)
        };

        Self {
            x: field.width,
            width: live.obstacle_width,
            gap_y,
            gap_height,
            passed: false,
            obstacle_type: *obstacle_type_for_score(score, catalog),
        }
    }

    /// Scroll left by the live speed
    pub fn update(&mut self, speed: f32) {
        self.x -= speed;
    }

    pub fn collides_with(&self, avatar: &Avatar) -> bool {
        avatar_hits_obstacle(avatar, self)
    }

    /// Trailing edge is behind the avatar and not yet scored.
    ///
    /// The caller sets `passed` when it consumes this.
    pub fn is_passed(&self, avatar: &Avatar) -> bool {
        !self.passed && self.x + self.width < avatar.pos.x
    }

    pub fn is_off_screen(&self) -> bool {
        self.x + self.width < 0.0
    }

    /// Bottom of the gap, where the lower bar starts
    #[inline]
    pub fn gap_bottom(&self) -> f32 {
        self.gap_y + self.gap_height
    }
}

/// Complete state of one run
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducible gap placement
    pub seed: u64,
    rng: Pcg32,
    pub difficulty: Difficulty,
    /// Profile as selected; never rescaled
    pub profile: ConfigurationProfile,
    /// Working copy the scaler rewrites
    pub live: ConfigurationProfile,
    pub scaler: DifficultyScaler,
    /// Autoplay controller owns the avatar
    pub autoplay: bool,
    pub field: Field,
    pub phase: GamePhase,
    pub score: u32,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub avatar: Avatar,
    /// Active obstacles in spawn order (left to right on screen)
    pub obstacles: Vec<Obstacle>,
    pub catalog: &'static [ObstacleType],
    /// Theme for the current score, shown in the HUD
    pub current_obstacle_type: ObstacleType,
    pub summary: Option<GameOverSummary>,
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Build a fresh run in the `Start` phase
    pub fn new(
        difficulty: Difficulty,
        profile: ConfigurationProfile,
        field: Field,
        seed: u64,
    ) -> Self {
        let catalog = BANGALORE_OBSTACLES;
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            difficulty,
            profile,
            live: profile,
            scaler: DifficultyScaler::new(&profile, difficulty.scaling_policy()),
            autoplay: difficulty.is_autoplay(),
            field,
            phase: GamePhase::Start,
            score: 0,
            time_ticks: 0,
            avatar: Avatar::new(&profile, field),
            obstacles: Vec::new(),
            catalog,
            current_obstacle_type: *obstacle_type_for_score(0, catalog),
            summary: None,
            events: Vec::new(),
        }
    }

    /// Enter `Playing`
    pub fn begin(&mut self) {
        self.phase = GamePhase::Playing;
        log::info!(
            "Run started: difficulty={} seed={} autoplay={}",
            self.difficulty,
            self.seed,
            self.autoplay
        );
    }

    /// Spawn a new obstacle at the right edge
    pub fn spawn_obstacle(&mut self) {
        let obstacle = Obstacle::spawn(
            &self.live,
            self.field,
            self.score,
            self.catalog,
            &mut self.rng,
        );
        self.obstacles.push(obstacle);
    }

    /// Count a cleared obstacle, refresh the theme and rescale
    pub fn award_point(&mut self) {
        self.score += 1;
        self.events.push(GameEvent::ObstaclePassed { score: self.score });
        log::debug!("Score: {}", self.score);

        let current = *obstacle_type_for_score(self.score, self.catalog);
        if current != self.current_obstacle_type {
            log::debug!("Obstacle type now {}", current.name);
            self.events.push(GameEvent::ObstacleTypeChanged { name: current.name });
            self.current_obstacle_type = current;
        }

        self.scaler.apply(self.score, &mut self.live);
    }

    /// Freeze the run and record the summary
    pub fn game_over(&mut self, cause: GameOverCause) {
        self.phase = GamePhase::GameOver;
        let summary = GameOverSummary {
            score: self.score,
            obstacle_type: self.current_obstacle_type,
            cause,
        };
        self.summary = Some(summary);
        self.events.push(GameEvent::GameOver {
            cause,
            score: self.score,
        });
        log::info!(
            "Game over: score={} cause={:?} crashed into {}",
            summary.score,
            cause,
            summary.obstacle_type.name
        );
    }

    /// Take pending events
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

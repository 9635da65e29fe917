//! Session: the command boundary between the page and the simulation
//!
//! The presentation layer selects a difficulty, starts and restarts runs,
//! forwards jump input and drives `tick` once per animation frame. Every
//! start/restart bumps the run generation; a frame scheduled for an older
//! generation is dropped, so a stale callback can never touch a new run.

use crate::Field;
use crate::error::Result;
use crate::sim::{
    Avatar, GameEvent, GameOverSummary, GamePhase, GameState, Obstacle, ObstacleType, tick,
};
use crate::tuning::{Difficulty, TuningTable};

/// What the frame scheduler should do after a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    /// Request another frame
    Continue,
    /// Run is over or the frame was stale; do not reschedule
    Stop,
}

/// Owns the active run and the player's difficulty choice
#[derive(Debug, Clone)]
pub struct Session {
    tuning: TuningTable,
    difficulty: Difficulty,
    field: Field,
    state: GameState,
    generation: u64,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(TuningTable::default(), Field::default())
    }
}

impl Session {
    pub fn new(tuning: TuningTable, field: Field) -> Self {
        let difficulty = Difficulty::default();
        let state = GameState::new(difficulty, tuning.profile(difficulty), field, 0);
        Self {
            tuning,
            difficulty,
            field,
            state,
            generation: 0,
        }
    }

    /// Pick a difficulty by name. Unknown names are rejected and the
    /// previous choice is kept.
    pub fn select_difficulty(&mut self, name: &str) -> Result<Difficulty> {
        match name.parse::<Difficulty>() {
            Ok(difficulty) => {
                self.set_difficulty(difficulty);
                Ok(difficulty)
            }
            Err(e) => {
                log::warn!("Rejected difficulty selection: {}", e);
                Err(e)
            }
        }
    }

    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
        log::info!("Difficulty selected: {}", difficulty);
    }

    /// Begin a fresh run with the selected difficulty. Returns the run
    /// generation to pass to `tick`.
    pub fn start(&mut self, seed: u64) -> u64 {
        self.generation += 1;
        self.state = GameState::new(
            self.difficulty,
            self.tuning.profile(self.difficulty),
            self.field,
            seed,
        );
        self.state.begin();
        self.generation
    }

    /// Back to the start screen with an empty run
    pub fn restart(&mut self) {
        self.generation += 1;
        self.state = GameState::new(
            self.difficulty,
            self.tuning.profile(self.difficulty),
            self.field,
            self.state.seed,
        );
        log::info!("Session restarted");
    }

    /// Player jump. Ignored unless playing by hand.
    pub fn request_jump(&mut self) -> bool {
        if self.state.phase != GamePhase::Playing || self.state.autoplay {
            return false;
        }
        self.state.avatar.jump(self.state.live.impulse_force);
        true
    }

    /// Advance the run for a frame scheduled under `generation`
    pub fn tick(&mut self, generation: u64) -> LoopControl {
        if generation != self.generation || self.state.phase != GamePhase::Playing {
            return LoopControl::Stop;
        }
        tick(&mut self.state);
        if self.state.phase == GamePhase::Playing {
            LoopControl::Continue
        } else {
            LoopControl::Stop
        }
    }

    /// New canvas size; takes effect on the next tick
    pub fn resize(&mut self, field: Field) {
        self.field = field;
        self.state.field = field;
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn field(&self) -> Field {
        self.field
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    pub fn score(&self) -> u32 {
        self.state.score
    }

    pub fn autoplay(&self) -> bool {
        self.state.autoplay
    }

    pub fn avatar(&self) -> &Avatar {
        &self.state.avatar
    }

    pub fn obstacles(&self) -> &[Obstacle] {
        &self.state.obstacles
    }

    /// Theme for the current score, even before one has spawned
    pub fn current_obstacle_type(&self) -> &ObstacleType {
        &self.state.current_obstacle_type
    }

    pub fn summary(&self) -> Option<&GameOverSummary> {
        self.state.summary.as_ref()
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        self.state.drain_events()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GameError;
    use crate::sim::GameOverCause;

    fn run_to_end(session: &mut Session, generation: u64, max_ticks: u32) -> u32 {
        let mut ticks = 0;
        while session.tick(generation) == LoopControl::Continue {
            ticks += 1;
            assert!(ticks < max_ticks, "run did not end");
        }
        ticks
    }

    #[test]
    fn test_starts_idle() {
        let session = Session::default();
        assert_eq!(session.phase(), GamePhase::Start);
        assert_eq!(session.score(), 0);
        assert!(session.obstacles().is_empty());
        assert_eq!(session.difficulty(), Difficulty::Medium);
        assert_eq!(session.current_obstacle_type().name, "Traffic Signal");
    }

    #[test]
    fn test_select_difficulty_fails_fast() {
        let mut session = Session::default();
        session.select_difficulty("hard").unwrap();
        let err = session.select_difficulty("impossible").unwrap_err();
        assert!(matches!(err, GameError::UnknownDifficulty(_)));
        assert_eq!(session.difficulty(), Difficulty::Hard);
    }

    #[test]
    fn test_free_fall_end_to_end() {
        let mut session = Session::default();
        let generation = session.start(12345);
        assert_eq!(session.phase(), GamePhase::Playing);
        run_to_end(&mut session, generation, 200);

        assert_eq!(session.phase(), GamePhase::GameOver);
        let summary = session.summary().unwrap();
        assert_eq!(summary.cause, GameOverCause::Ground);
        assert_eq!(summary.score, 0);
        assert_eq!(summary.obstacle_type.name, "Traffic Signal");
        let avatar = session.avatar();
        assert_eq!(avatar.pos.y + avatar.size, 600.0);
    }

    #[test]
    fn test_jump_only_while_playing_by_hand() {
        let mut session = Session::default();
        assert!(!session.request_jump());

        session.start(1);
        assert!(session.request_jump());
        assert_eq!(session.avatar().velocity, -5.5);

        session.select_difficulty("autoplay").unwrap();
        session.start(1);
        assert!(session.autoplay());
        assert!(!session.request_jump());
        assert_eq!(session.avatar().velocity, 0.0);
    }

    #[test]
    fn test_jump_takes_effect_next_tick() {
        let mut session = Session::default();
        let generation = session.start(1);
        session.request_jump();
        assert_eq!(session.avatar().pos.y, 300.0);
        session.tick(generation);
        assert!((session.avatar().pos.y - 294.8).abs() < 1e-4);
    }

    #[test]
    fn test_stale_generation_is_ignored() {
        let mut session = Session::default();
        let old = session.start(1);
        let new = session.start(2);
        assert_ne!(old, new);

        assert_eq!(session.tick(old), LoopControl::Stop);
        assert_eq!(session.state().time_ticks, 0);
        assert_eq!(session.tick(new), LoopControl::Continue);
        assert_eq!(session.state().time_ticks, 1);

        session.restart();
        assert_eq!(session.tick(new), LoopControl::Stop);
    }

    #[test]
    fn test_restart_resets_after_game_over() {
        let mut session = Session::default();
        session.select_difficulty("autoplay").unwrap();
        let generation = session.start(2024);
        for _ in 0..400 {
            if session.tick(generation) == LoopControl::Stop {
                break;
            }
        }
        assert!(session.score() > 0);
        assert!(!session.obstacles().is_empty());

        session.restart();
        assert_eq!(session.phase(), GamePhase::Start);
        assert_eq!(session.score(), 0);
        assert!(session.obstacles().is_empty());
        assert!(session.summary().is_none());

        let generation = session.start(7);
        assert_eq!(session.score(), 0);
        assert!(session.obstacles().is_empty());
        assert_eq!(session.tick(generation), LoopControl::Continue);
    }

    #[test]
    fn test_replay_from_game_over() {
        let mut session = Session::default();
        let generation = session.start(5);
        run_to_end(&mut session, generation, 200);
        assert_eq!(session.phase(), GamePhase::GameOver);

        let generation = session.start(6);
        assert_eq!(session.phase(), GamePhase::Playing);
        assert_eq!(session.tick(generation), LoopControl::Continue);
    }

    #[test]
    fn test_resize_moves_spawn_edge() {
        let mut session = Session::default();
        session.resize(Field::new(400.0, 300.0));
        let generation = session.start(3);
        assert_eq!(session.avatar().pos.x, 80.0);
        session.tick(generation);
        assert_eq!(session.obstacles()[0].x, 400.0);
    }

    #[test]
    fn test_events_drained_once() {
        let mut session = Session::default();
        let generation = session.start(8);
        run_to_end(&mut session, generation, 200);
        let events = session.drain_events();
        assert!(matches!(events.last(), Some(GameEvent::GameOver { .. })));
        assert!(session.drain_events().is_empty());
    }
}

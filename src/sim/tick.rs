//! Per-frame simulation tick
//!
//! Core game loop step. The order below matters: collisions are tested
//! against the post-motion positions of both the avatar and the obstacle.

use super::autoplay::autoplay_control;
use super::state::{GameOverCause, GamePhase, GameState};
use crate::consts::SPAWN_SPACING;

/// Advance the run by one frame
///
/// 1. Autoplay (if active)
/// 2. Avatar physics; ground ends the run
/// 3. Each obstacle: move, collide, score, cull
/// 4. Spawn when the last obstacle has moved far enough in
pub fn tick(state: &mut GameState) {
    if state.phase != GamePhase::Playing {
        return;
    }

    state.time_ticks += 1;

    if state.autoplay && autoplay_control(&state.obstacles, &state.avatar) {
        state.avatar.jump(state.live.impulse_force);
    }

    if state.avatar.update(state.live.gravity, state.field.height) {
        state.game_over(GameOverCause::Ground);
        return;
    }

    let mut i = 0;
    while i < state.obstacles.len() {
        // Read per obstacle: a score earlier in this loop may have sped things up
        let speed = state.live.obstacle_speed;
        let obstacle = &mut state.obstacles[i];
        obstacle.update(speed);

        if obstacle.collides_with(&state.avatar) {
            state.game_over(GameOverCause::Obstacle);
            return;
        }

        if obstacle.is_passed(&state.avatar) {
            obstacle.passed = true;
            state.award_point();
        }

        if state.obstacles[i].is_off_screen() {
            state.obstacles.remove(i);
        } else {
            i += 1;
        }
    }

    let spawn_line = state.field.width - SPAWN_SPACING;
    if state.obstacles.last().is_none_or(|last| last.x < spawn_line) {
        state.spawn_obstacle();
    }
}

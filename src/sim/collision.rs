//! Collision geometry for the avatar and barrier pairs
//!
//! Everything is an axis-aligned box. The avatar is drawn as a circle but
//! collides as its bounding square, so a graze on the corner still counts.

use super::state::{Avatar, Obstacle};

/// Open-interval overlap of `[a_start, a_start + a_len)` and
/// `[b_start, b_start + b_len)`
#[inline]
pub fn spans_overlap(a_start: f32, a_len: f32, b_start: f32, b_len: f32) -> bool {
    a_start + a_len > b_start && a_start < b_start + b_len
}

/// Whether a vertical span fits inside a gap. Touching either gap edge is
/// still clear.
#[inline]
pub fn vertical_clear(top: f32, height: f32, gap_y: f32, gap_height: f32) -> bool {
    top >= gap_y && top + height <= gap_y + gap_height
}

/// Avatar hits the top or bottom bar of an obstacle
pub fn avatar_hits_obstacle(avatar: &Avatar, obstacle: &Obstacle) -> bool {
    spans_overlap(avatar.pos.x, avatar.size, obstacle.x, obstacle.width)
        && !vertical_clear(avatar.pos.y, avatar.size, obstacle.gap_y, obstacle.gap_height)
}

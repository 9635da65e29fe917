//! Themed obstacle catalog
//!
//! Obstacles get nastier as the score climbs. The catalog is ordered by
//! `min_score` and its first entry always matches.

use serde::Serialize;

/// Display theme for an obstacle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ObstacleType {
    pub name: &'static str,
    /// CSS hex colour
    pub color: &'static str,
    /// Score at which this theme takes over
    pub min_score: u32,
}

impl ObstacleType {
    pub const fn new(name: &'static str, color: &'static str, min_score: u32) -> Self {
        Self {
            name,
            color,
            min_score,
        }
    }
}

/// Bangalore street hazards, in order of appearance
pub const BANGALORE_OBSTACLES: &[ObstacleType] = &[
    ObstacleType::new("Traffic Signal", "#FF6B6B", 0),
    ObstacleType::new("Pothole", "#4ECDC4", 3),
    ObstacleType::new("Auto Rickshaw", "#FFE66D", 6),
    ObstacleType::new("Construction Zone", "#FF8C42", 9),
    ObstacleType::new("Flooded Street", "#4A90E2", 12),
    ObstacleType::new("Cow on Road", "#F4A460", 15),
    ObstacleType::new("Peak Hour Traffic", "#C44569", 18),
    ObstacleType::new("Broken Footpath", "#95A5A6", 21),
    ObstacleType::new("Metro Construction", "#E67E22", 24),
    ObstacleType::new("Silk Board Junction", "#E74C3C", 27),
];

/// Entry with the greatest `min_score <= score`
///
/// Scans from the top of the catalog down; the first entry is the fallback.
/// Panics if the catalog is empty.
pub fn obstacle_type_for_score(score: u32, catalog: &[ObstacleType]) -> &ObstacleType {
    catalog
        .iter()
        .rev()
        .find(|t| t.min_score <= score)
        .unwrap_or(&catalog[0])
}

//! Autoplay controller
//!
//! Hovers just above the centre of the next gap: jump whenever the avatar
//! has dropped below the aim line and is still falling. Only the nearest
//! obstacle ahead is considered.

use super::state::{Avatar, Obstacle};
use crate::consts::AUTOPLAY_AIM_OFFSET;

/// Nearest obstacle whose trailing edge is still ahead of the avatar
pub fn next_obstacle<'a>(obstacles: &'a [Obstacle], avatar: &Avatar) -> Option<&'a Obstacle> {
    obstacles.iter().find(|o| o.x + o.width > avatar.pos.x)
}

/// Whether the controller wants to jump this tick
pub fn autoplay_control(obstacles: &[Obstacle], avatar: &Avatar) -> bool {
    let Some(next) = next_obstacle(obstacles, avatar) else {
        return false;
    };
    let gap_middle = next.gap_y + next.gap_height / 2.0;
    avatar.center_y() > gap_middle - AUTOPLAY_AIM_OFFSET && avatar.velocity > 0.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::catalog::BANGALORE_OBSTACLES;
    use glam::Vec2;

    fn avatar(y: f32, velocity: f32) -> Avatar {
        Avatar {
            pos: Vec2::new(160.0, y),
            velocity,
            size: 30.0,
        }
    }

    fn obstacle(x: f32, gap_y: f32) -> Obstacle {
        Obstacle {
            x,
            width: 60.0,
            gap_y,
            gap_height: 150.0,
            passed: false,
            obstacle_type: BANGALORE_OBSTACLES[0],
        }
    }

    #[test]
    fn test_no_obstacles_no_jump() {
        assert!(!autoplay_control(&[], &avatar(500.0, 5.0)));
    }

    #[test]
    fn test_jumps_when_below_aim_and_falling() {
        // Gap middle 275, aim line 265
        let obstacles = [obstacle(400.0, 200.0)];
        assert!(autoplay_control(&obstacles, &avatar(260.0, 1.0)));
        // Rising: let it coast
        assert!(!autoplay_control(&obstacles, &avatar(260.0, -1.0)));
        // Above the aim line
        assert!(!autoplay_control(&obstacles, &avatar(240.0, 1.0)));
    }

    #[test]
    fn test_targets_first_obstacle_ahead() {
        // First obstacle already behind the avatar (trailing edge at 150)
        let obstacles = [obstacle(90.0, 400.0), obstacle(350.0, 50.0)];
        let next = next_obstacle(&obstacles, &avatar(0.0, 0.0)).unwrap();
        assert_eq!(next.x, 350.0);
        // Aim line for the second gap is 115; centre at 140 means jump
        assert!(autoplay_control(&obstacles, &avatar(125.0, 2.0)));
    }
}

//! Horizontal camera follow
//!
//! The camera is a pure function of the player's x position: it snaps, with
//! no smoothing, so that the player sits at the viewport midpoint once they
//! have advanced past it.

use crate::consts::VIEWPORT_WIDTH;

/// Scroll offset for the given player x, clamped to the level bounds on
/// both ends.
#[inline]
pub fn camera_x(player_x: f32, level_width: f32) -> f32 {
    let max = (level_width - VIEWPORT_WIDTH).max(0.0);
    (player_x - VIEWPORT_WIDTH / 2.0).clamp(0.0, max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::LEVEL_WIDTH;

    #[test]
    fn camera_stays_at_origin_before_midpoint() {
        assert_eq!(camera_x(0.0, LEVEL_WIDTH), 0.0);
        assert_eq!(camera_x(VIEWPORT_WIDTH / 2.0, LEVEL_WIDTH), 0.0);
    }

    #[test]
    fn camera_tracks_past_midpoint() {
        let x = VIEWPORT_WIDTH / 2.0 + 100.0;
        assert_eq!(camera_x(x, LEVEL_WIDTH), 100.0);
    }

    #[test]
    fn camera_clamps_at_right_edge() {
        assert_eq!(camera_x(LEVEL_WIDTH, LEVEL_WIDTH), LEVEL_WIDTH - VIEWPORT_WIDTH);
        assert_eq!(
            camera_x(LEVEL_WIDTH + 500.0, LEVEL_WIDTH),
            LEVEL_WIDTH - VIEWPORT_WIDTH
        );
    }

    #[test]
    fn narrow_level_pins_camera_at_zero() {
        assert_eq!(camera_x(350.0, VIEWPORT_WIDTH / 2.0), 0.0);
    }
}

//! AABB collision tests
//!
//! Every collision in the game is an axis-aligned rectangle overlap: player
//! against platforms, player against enemies and coins, enemy feet against
//! platform tops. Screen coordinates throughout: y grows downward, so a
//! positive vertical velocity means falling.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned bounding box (top-left anchored)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Aabb {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    /// Strict overlap test; touching edges do not count
    #[inline]
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }

    /// True when the boxes overlap horizontally, ignoring the vertical axis
    #[inline]
    pub fn overlaps_horizontally(&self, other: &Aabb) -> bool {
        self.left() < other.right() && self.right() > other.left()
    }
}

/// One-sided "land on top" test for the player against a platform.
///
/// The boxes must overlap, the player must be falling or resting (vy >= 0),
/// and the player's bottom edge must sit within `tolerance` below the
/// platform top. Side and ceiling contact against platforms is not modeled;
/// a fall fast enough to step past the band passes through (accepted
/// tunneling at 60 Hz).
#[inline]
pub fn lands_on(player: &Aabb, vy: f32, platform: &Aabb, tolerance: f32) -> bool {
    vy >= 0.0
        && player.overlaps(platform)
        && player.bottom() >= platform.top()
        && player.bottom() <= platform.top() + tolerance
}

/// Stomp-vs-hit classification for a player/enemy overlap.
///
/// A stomp requires downward motion with the player's top edge strictly
/// above the enemy's top edge; any other overlap counts as a hit.
#[inline]
pub fn is_stomp(player_top: f32, vy: f32, enemy_top: f32) -> bool {
    vy > 0.0 && player_top < enemy_top
}

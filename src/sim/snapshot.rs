//! Read-only render and HUD projections
//!
//! The renderer never reads [`GameState`] directly; it gets a
//! [`RenderSnapshot`] with defeated enemies and collected coins already
//! filtered out, plus the blink flag for the invincibility window. Keeps
//! presentation decoupled from the tick loop.

use glam::Vec2;
use serde::Serialize;

use super::level::Platform;
use super::state::{Facing, GamePhase, GameState};
use crate::consts::BLINK_PERIOD_TICKS;

/// Player fields the renderer needs
#[derive(Debug, Clone, Copy, Serialize)]
pub struct PlayerView {
    pub pos: Vec2,
    pub facing: Facing,
    /// False on the "off" half of the invincibility blink cycle
    pub visible: bool,
}

/// Everything needed to draw one frame
#[derive(Debug, Clone, Serialize)]
pub struct RenderSnapshot {
    pub phase: GamePhase,
    pub camera_x: f32,
    pub player: PlayerView,
    pub platforms: Vec<Platform>,
    /// Positions of enemies still in play
    pub enemies: Vec<Vec2>,
    /// Positions of coins not yet collected
    pub coins: Vec<Vec2>,
}

/// Scoreboard values for the HUD overlay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HudState {
    pub score: u64,
    pub coins_collected: u32,
    pub lives: u32,
}

impl GameState {
    /// Blink visibility during the invincibility window: alternates every
    /// blink period, starting visible. Always true outside the window.
    pub fn player_visible(&self) -> bool {
        !self.invincible() || (self.invincible_ticks / BLINK_PERIOD_TICKS) % 2 == 0
    }

    pub fn snapshot(&self) -> RenderSnapshot {
        RenderSnapshot {
            phase: self.phase,
            camera_x: self.camera_x,
            player: PlayerView {
                pos: self.player.pos,
                facing: self.player.facing,
                visible: self.player_visible(),
            },
            platforms: self.level.platforms.clone(),
            enemies: self
                .enemies
                .iter()
                .filter(|e| !e.defeated)
                .map(|e| e.pos)
                .collect(),
            coins: self
                .coins
                .iter()
                .filter(|c| !c.collected)
                .map(|c| c.pos)
                .collect(),
        }
    }

    pub fn hud(&self) -> HudState {
        HudState {
            score: self.score,
            coins_collected: self.coins_collected,
            lives: self.lives,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::level::Level;

    #[test]
    fn player_is_visible_outside_the_window() {
        let state = GameState::new(Level::default());
        assert!(state.player_visible());
    }

    #[test]
    fn blink_alternates_each_period() {
        let mut state = GameState::new(Level::default());

        // 120 / 5 = 24 (even): visible
        state.invincible_ticks = 120;
        assert!(state.player_visible());
        // 119 / 5 = 23 (odd): hidden
        state.invincible_ticks = 119;
        assert!(!state.player_visible());
        // Back to visible one period later
        state.invincible_ticks = 114;
        assert!(state.player_visible());
    }

    #[test]
    fn snapshot_filters_defeated_and_collected() {
        let mut state = GameState::new(Level::default());
        state.enemies[1].defeated = true;
        state.coins[0].collected = true;
        state.coins[4].collected = true;

        let snap = state.snapshot();
        assert_eq!(snap.enemies.len(), state.enemies.len() - 1);
        assert_eq!(snap.coins.len(), state.coins.len() - 2);
        assert_eq!(snap.platforms.len(), state.level.platforms.len());
        assert_eq!(snap.player.pos, state.player.pos);
        assert!(snap.player.visible);
    }

    #[test]
    fn hud_mirrors_scoreboard_fields() {
        let mut state = GameState::new(Level::default());
        state.score = 350;
        state.coins_collected = 3;
        state.lives = 2;

        let hud = state.hud();
        assert_eq!(
            hud,
            HudState {
                score: 350,
                coins_collected: 3,
                lives: 2
            }
        );
    }
}

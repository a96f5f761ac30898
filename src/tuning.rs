//! Gameplay tuning parameters
//!
//! Every constant the tick loop reads per-frame, gathered in one
//! serializable struct so embedders can tweak the feel without recompiling.
//! Unspecified fields fall back to the defaults in [`crate::consts`].

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Per-tick physics and scoring parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Downward acceleration per tick
    pub gravity: f32,
    /// Horizontal speed while a move key is held
    pub move_speed: f32,
    /// Upward launch speed of a jump
    pub jump_power: f32,
    /// Per-tick vx multiplier with no move key held
    pub friction: f32,
    /// vx magnitude below which friction snaps to zero
    pub friction_epsilon: f32,
    /// vy applied to the player after a stomp (negative: upward)
    pub stomp_bounce: f32,
    pub enemy_score: u64,
    pub coin_score: u64,
    pub starting_lives: u32,
    /// Post-hit grace window length
    pub invincibility_ticks: u32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            move_speed: PLAYER_SPEED,
            jump_power: JUMP_POWER,
            friction: FRICTION,
            friction_epsilon: FRICTION_EPSILON,
            stomp_bounce: STOMP_BOUNCE,
            enemy_score: ENEMY_SCORE,
            coin_score: COIN_SCORE,
            starting_lives: STARTING_LIVES,
            invincibility_ticks: INVINCIBILITY_TICKS,
        }
    }
}

impl Tuning {
    /// Load tuning from JSON; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_consts() {
        let t = Tuning::default();
        assert_eq!(t.gravity, GRAVITY);
        assert_eq!(t.move_speed, PLAYER_SPEED);
        assert_eq!(t.jump_power, JUMP_POWER);
        assert_eq!(t.stomp_bounce, STOMP_BOUNCE);
        assert_eq!(t.starting_lives, STARTING_LIVES);
        assert_eq!(t.invincibility_ticks, INVINCIBILITY_TICKS);
    }

    #[test]
    fn partial_json_overrides_only_named_fields() {
        let t = Tuning::from_json(r#"{"gravity": 1.2, "starting_lives": 5}"#).unwrap();
        assert_eq!(t.gravity, 1.2);
        assert_eq!(t.starting_lives, 5);
        assert_eq!(t.move_speed, PLAYER_SPEED);
        assert_eq!(t.coin_score, COIN_SCORE);
    }

    #[test]
    fn round_trips_through_json() {
        let t = Tuning {
            jump_power: 18.0,
            ..Tuning::default()
        };
        let json = serde_json::to_string(&t).unwrap();
        assert_eq!(Tuning::from_json(&json).unwrap(), t);
    }
}

//! Coin Dash - a side-scrolling platformer simulation core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, match state)
//! - `tuning`: Data-driven game balance
//!
//! Rendering and input wiring live outside this crate. An embedder feeds a
//! [`sim::TickInput`] to [`sim::tick`] once per display frame, forwards the
//! returned events to its UI layer, and draws from the
//! [`sim::RenderSnapshot`] the state hands back.

pub mod sim;
pub mod tuning;

pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Simulation rate: one tick per display frame
    pub const TICKS_PER_SECOND: u32 = 60;

    /// Viewport dimensions in world units (the renderer maps these to pixels)
    pub const VIEWPORT_WIDTH: f32 = 800.0;
    pub const VIEWPORT_HEIGHT: f32 = 500.0;

    /// Right boundary of the built-in level; crossing it wins the match
    pub const LEVEL_WIDTH: f32 = 2500.0;
    /// Ground plane the player can always rest on
    pub const FLOOR_Y: f32 = VIEWPORT_HEIGHT - 50.0;

    /// Player defaults (square sprite, units per tick)
    pub const PLAYER_SIZE: f32 = 40.0;
    pub const PLAYER_SPEED: f32 = 5.0;
    pub const JUMP_POWER: f32 = 15.0;
    /// Downward acceleration per tick, applied unconditionally
    pub const GRAVITY: f32 = 0.8;
    /// Per-tick horizontal decay factor with no input held
    pub const FRICTION: f32 = 0.8;
    /// |vx| below this snaps to zero so friction decay terminates
    pub const FRICTION_EPSILON: f32 = 0.05;
    /// Upward velocity granted by a stomp (y grows downward)
    pub const STOMP_BOUNCE: f32 = -8.0;

    /// Enemy defaults
    pub const ENEMY_SIZE: f32 = 30.0;
    pub const ENEMY_PATROL_SPEED: f32 = 2.0;

    /// Coin defaults
    pub const COIN_SIZE: f32 = 25.0;

    /// Band below a platform top that counts as landing on it
    pub const PLATFORM_LAND_TOLERANCE: f32 = 10.0;
    /// Band for the enemy platform-adherence check
    pub const ENEMY_FOOT_TOLERANCE: f32 = 5.0;

    /// Scoring
    pub const ENEMY_SCORE: u64 = 100;
    pub const COIN_SCORE: u64 = 50;

    pub const STARTING_LIVES: u32 = 3;
    /// Post-hit grace period (2 seconds at 60 ticks/s)
    pub const INVINCIBILITY_TICKS: u32 = 120;
    /// Half-period of the invincibility blink, in ticks
    pub const BLINK_PERIOD_TICKS: u32 = 5;
}

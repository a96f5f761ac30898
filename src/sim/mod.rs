//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One discrete tick per invocation, no wall-clock time
//! - Stable iteration order (entity tables are fixed-size, loaded per level)
//! - No rendering or platform dependencies

pub mod camera;
pub mod collision;
pub mod level;
pub mod snapshot;
pub mod state;
pub mod tick;

pub use camera::camera_x;
pub use collision::{Aabb, is_stomp, lands_on};
pub use level::{EnemySpawn, Level, Platform};
pub use snapshot::{HudState, PlayerView, RenderSnapshot};
pub use state::{Coin, Enemy, Facing, GamePhase, GameState, MatchOutcome, Player};
pub use tick::{GameEvent, TickInput, apply_events, tick};

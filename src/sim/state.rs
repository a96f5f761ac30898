//! Match state and core simulation types
//!
//! Everything the simulation mutates lives in one owned [`GameState`]
//! aggregate so the tick function is pure with respect to injected state.
//! Screen-style coordinates: x grows rightward, y grows downward, so a
//! positive vertical velocity means the entity is falling.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Aabb;
use super::level::Level;
use crate::consts::*;
use crate::tuning::Tuning;

/// Which way the player sprite faces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Facing {
    Left,
    #[default]
    Right,
}

/// Current phase of the match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Level loaded, waiting for the start command
    Waiting,
    /// Active gameplay
    Playing,
    /// Match is paused
    Paused,
    /// Match ended; see [`GameState::outcome`] for how
    GameOver,
}

/// How a finished match ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchOutcome {
    /// Reached the level's right boundary
    Won,
    /// Ran out of lives
    Lost,
}

/// The player character. Created once at level load and repositioned on
/// respawn, never destroyed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    pub vel: Vec2,
    pub on_ground: bool,
    pub facing: Facing,
}

impl Player {
    pub fn at_spawn(spawn: Vec2) -> Self {
        Self {
            pos: spawn,
            vel: Vec2::ZERO,
            on_ground: false,
            facing: Facing::default(),
        }
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::new(self.pos.x, self.pos.y, PLAYER_SIZE, PLAYER_SIZE)
    }

    /// Teleport back to the spawn point with zero velocity
    pub fn respawn(&mut self, spawn: Vec2) {
        self.pos = spawn;
        self.vel = Vec2::ZERO;
        self.on_ground = false;
    }
}

/// A patrolling enemy. Defeated enemies keep their slot in the table so
/// reset can restore them by index; they stop colliding and stop appearing
/// in snapshots.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub pos: Vec2,
    pub vx: f32,
    pub defeated: bool,
}

impl Enemy {
    pub fn aabb(&self) -> Aabb {
        Aabb::new(self.pos.x, self.pos.y, ENEMY_SIZE, ENEMY_SIZE)
    }
}

/// A collectible coin; flips to collected exactly once per match
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Coin {
    pub pos: Vec2,
    pub collected: bool,
}

impl Coin {
    pub fn aabb(&self) -> Aabb {
        Aabb::new(self.pos.x, self.pos.y, COIN_SIZE, COIN_SIZE)
    }
}

/// Complete match state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub phase: GamePhase,
    /// Set exactly once, at the transition into GameOver
    pub outcome: Option<MatchOutcome>,
    pub score: u64,
    /// Always equals the number of coins with `collected == true`
    pub coins_collected: u32,
    pub lives: u32,
    /// Remaining post-hit grace ticks; the player is invincible iff > 0
    pub invincible_ticks: u32,
    pub camera_x: f32,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub player: Player,
    pub enemies: Vec<Enemy>,
    pub coins: Vec<Coin>,
    pub level: Level,
    pub tuning: Tuning,
    /// One-shot jump latch set by [`GameState::request_jump`]
    #[serde(skip)]
    pub(crate) jump_requested: bool,
}

impl GameState {
    /// Create a fresh match in the Waiting phase
    pub fn new(level: Level) -> Self {
        Self::with_tuning(level, Tuning::default())
    }

    pub fn with_tuning(level: Level, tuning: Tuning) -> Self {
        let mut state = Self {
            phase: GamePhase::Waiting,
            outcome: None,
            score: 0,
            coins_collected: 0,
            lives: tuning.starting_lives,
            invincible_ticks: 0,
            camera_x: 0.0,
            time_ticks: 0,
            player: Player::at_spawn(level.player_spawn),
            enemies: Vec::new(),
            coins: Vec::new(),
            level,
            tuning,
            jump_requested: false,
        };
        state.spawn_entities();
        state
    }

    /// Whether the post-hit grace window is active
    #[inline]
    pub fn invincible(&self) -> bool {
        self.invincible_ticks > 0
    }

    fn spawn_entities(&mut self) {
        self.enemies = self
            .level
            .enemy_spawns
            .iter()
            .map(|spawn| Enemy {
                pos: spawn.pos,
                vx: spawn.vx,
                defeated: false,
            })
            .collect();
        self.coins = self
            .level
            .coin_spawns
            .iter()
            .map(|&pos| Coin {
                pos,
                collected: false,
            })
            .collect();
    }

    /// Restore the match to its just-loaded condition: player at spawn with
    /// zero velocity, score/coins/camera zeroed, full lives, no
    /// invincibility, every coin uncollected, every enemy back at its spawn
    /// with its original patrol direction.
    pub fn reset(&mut self) {
        self.outcome = None;
        self.score = 0;
        self.coins_collected = 0;
        self.lives = self.tuning.starting_lives;
        self.invincible_ticks = 0;
        self.camera_x = 0.0;
        self.time_ticks = 0;
        self.player = Player::at_spawn(self.level.player_spawn);
        self.jump_requested = false;
        self.spawn_entities();
    }

    /// Mark the match finished. Score and coins are preserved for display.
    pub(crate) fn finish(&mut self, outcome: MatchOutcome) {
        self.phase = GamePhase::GameOver;
        self.outcome = Some(outcome);
        log::info!("match over: {outcome:?}, score {}", self.score);
    }

    // --- Command surface ---
    //
    // Commands invalid for the current phase are silent no-ops; external
    // callers may trigger them at any time.

    /// Begin the match from the Waiting phase
    pub fn start(&mut self) {
        if self.phase == GamePhase::Waiting {
            self.phase = GamePhase::Playing;
            log::info!("match started");
        }
    }

    /// Suspend simulation; state is fully snapshotted, so resuming is clean
    pub fn pause(&mut self) {
        if self.phase == GamePhase::Playing {
            self.phase = GamePhase::Paused;
            log::info!("match paused");
        }
    }

    /// Resume a paused match
    pub fn resume(&mut self) {
        if self.phase == GamePhase::Paused {
            self.phase = GamePhase::Playing;
            log::info!("match resumed");
        }
    }

    /// Full reset followed by an immediate start
    pub fn restart(&mut self) {
        self.reset();
        self.phase = GamePhase::Playing;
        log::info!("match restarted");
    }

    /// Latch a one-shot jump request for the next tick. Edge-triggered: the
    /// tick consumes and clears it, and it only fires if the player is
    /// grounded when the tick processes it.
    pub fn request_jump(&mut self) {
        if self.phase == GamePhase::Playing {
            self.jump_requested = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn playing_state() -> GameState {
        let mut state = GameState::new(Level::default());
        state.start();
        state
    }

    #[test]
    fn new_state_waits_for_start() {
        let state = GameState::new(Level::default());
        assert_eq!(state.phase, GamePhase::Waiting);
        assert_eq!(state.lives, STARTING_LIVES);
        assert_eq!(state.score, 0);
        assert!(!state.invincible());
        assert_eq!(state.enemies.len(), state.level.enemy_spawns.len());
        assert_eq!(state.coins.len(), state.level.coin_spawns.len());
    }

    #[test]
    fn phase_transitions() {
        let mut state = GameState::new(Level::default());
        state.start();
        assert_eq!(state.phase, GamePhase::Playing);
        state.pause();
        assert_eq!(state.phase, GamePhase::Paused);
        state.resume();
        assert_eq!(state.phase, GamePhase::Playing);
        state.finish(MatchOutcome::Lost);
        assert_eq!(state.phase, GamePhase::GameOver);
        state.restart();
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.outcome, None);
    }

    #[test]
    fn invalid_commands_are_silent_noops() {
        let mut state = GameState::new(Level::default());
        // Not started yet: none of these should do anything
        state.pause();
        assert_eq!(state.phase, GamePhase::Waiting);
        state.resume();
        assert_eq!(state.phase, GamePhase::Waiting);
        state.request_jump();
        assert!(!state.jump_requested);

        state.start();
        state.start(); // double start is a no-op
        assert_eq!(state.phase, GamePhase::Playing);
        state.resume(); // resume while playing is a no-op
        assert_eq!(state.phase, GamePhase::Playing);
    }

    #[test]
    fn reset_restores_everything() {
        let mut state = playing_state();
        state.score = 730;
        state.coins_collected = 4;
        state.lives = 1;
        state.invincible_ticks = 60;
        state.camera_x = 900.0;
        state.player.pos = Vec2::new(1500.0, 200.0);
        state.player.vel = Vec2::new(5.0, -3.0);
        state.coins[0].collected = true;
        state.coins[3].collected = true;
        state.enemies[0].defeated = true;
        state.enemies[1].pos.x = 50.0;
        state.enemies[1].vx = ENEMY_PATROL_SPEED;

        state.reset();

        assert_eq!(state.score, 0);
        assert_eq!(state.coins_collected, 0);
        assert_eq!(state.lives, STARTING_LIVES);
        assert_eq!(state.camera_x, 0.0);
        assert!(!state.invincible());
        assert_eq!(state.player.pos, state.level.player_spawn);
        assert_eq!(state.player.vel, Vec2::ZERO);
        assert!(state.coins.iter().all(|c| !c.collected));
        for (enemy, spawn) in state.enemies.iter().zip(&state.level.enemy_spawns) {
            assert!(!enemy.defeated);
            assert_eq!(enemy.pos, spawn.pos);
            assert_eq!(enemy.vx, spawn.vx);
        }
    }

    #[test]
    fn state_round_trips_through_json() {
        let mut state = playing_state();
        state.score = 150;
        state.invincible_ticks = 30;
        let json = serde_json::to_string(&state).unwrap();
        let loaded: GameState = serde_json::from_str(&json).unwrap();
        assert_eq!(loaded.score, 150);
        assert_eq!(loaded.invincible_ticks, 30);
        assert_eq!(loaded.phase, GamePhase::Playing);
        assert_eq!(loaded.player.pos, state.player.pos);
    }
}

//! Fixed-rate simulation tick
//!
//! Advances the match by exactly one discrete step per invocation. The
//! collision passes only *produce* [`GameEvent`]s; [`apply_events`] applies
//! them to the match state afterwards, so scoring and damage never mutate
//! state mid-iteration and the state machine stays independently testable.

use super::camera::camera_x;
use super::collision::{is_stomp, lands_on};
use super::state::{Facing, GamePhase, GameState, MatchOutcome};
use crate::consts::*;

/// Input state for a single tick
///
/// `move_left`/`move_right` are held states refreshed by the embedder every
/// frame. `jump` is one-shot: the embedder must clear it after the tick that
/// consumed it ([`GameState::request_jump`] latches the same action from the
/// command surface).
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    pub move_left: bool,
    pub move_right: bool,
    pub jump: bool,
}

/// Events raised by the collision passes and consumed by [`apply_events`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// Enemy at this table index was stomped
    EnemyDefeated(usize),
    /// Player overlapped a live enemy without stomping it
    PlayerHit,
    /// Coin at this table index was picked up
    CoinCollected(usize),
    /// Player crossed the level's right boundary
    LevelComplete,
}

/// Advance the match by one tick.
///
/// Simulates only while Playing; in every other phase this is a no-op, so
/// the frame driver may call it unconditionally. Returns the events the
/// collision passes raised this tick (already applied to the state) so the
/// embedder can forward them to its UI layer.
pub fn tick(state: &mut GameState, input: &TickInput) -> Vec<GameEvent> {
    if state.phase != GamePhase::Playing {
        return Vec::new();
    }

    state.time_ticks += 1;

    // Count the grace window down before physics so a hit's window spans
    // exactly `invincibility_ticks` subsequent ticks.
    if state.invincible_ticks > 0 {
        state.invincible_ticks -= 1;
    }

    let mut events = Vec::new();
    update_player(state, input, &mut events);
    update_enemies(state, &mut events);
    collect_coins(state, &mut events);
    apply_events(state, &events);

    state.camera_x = camera_x(state.player.pos.x, state.level.width);

    events
}

/// Player kinematics and platform resolution for one tick
fn update_player(state: &mut GameState, input: &TickInput, events: &mut Vec<GameEvent>) {
    let p = &mut state.player;

    // Horizontal intent wins; otherwise friction decays vx toward zero,
    // snapping below the epsilon so the decay terminates
    if input.move_left {
        p.vel.x = -state.tuning.move_speed;
        p.facing = Facing::Left;
    } else if input.move_right {
        p.vel.x = state.tuning.move_speed;
        p.facing = Facing::Right;
    } else {
        p.vel.x *= state.tuning.friction;
        if p.vel.x.abs() < state.tuning.friction_epsilon {
            p.vel.x = 0.0;
        }
    }

    // Gravity applies every tick, grounded or not; grounding is re-resolved
    // below, so resting on a platform drifts within the tick and snaps back
    p.vel.y += state.tuning.gravity;

    // Single Euler step, no substepping
    p.pos += p.vel;

    // One-sided platform resolution: land on tops only, in sequence order,
    // last match wins
    p.on_ground = false;
    for platform in &state.level.platforms {
        if lands_on(&p.aabb(), p.vel.y, &platform.aabb(), PLATFORM_LAND_TOLERANCE) {
            p.pos.y = platform.y - PLAYER_SIZE;
            p.vel.y = 0.0;
            p.on_ground = true;
        }
    }

    // Ground-plane fallback
    if p.pos.y + PLAYER_SIZE > state.level.floor_y {
        p.pos.y = state.level.floor_y - PLAYER_SIZE;
        p.vel.y = 0.0;
        p.on_ground = true;
    }

    // World bounds: clamp on the left, win past the right edge
    if p.pos.x < 0.0 {
        p.pos.x = 0.0;
    }
    if p.pos.x > state.level.width {
        events.push(GameEvent::LevelComplete);
    }

    // Jump is edge-triggered and only fires from the ground; airborne
    // requests are dropped, not buffered
    let jump = input.jump || state.jump_requested;
    state.jump_requested = false;
    if jump && p.on_ground {
        p.vel.y = -state.tuning.jump_power;
        p.on_ground = false;
    }
}

/// Enemy patrol and player interaction for one tick
fn update_enemies(state: &mut GameState, events: &mut Vec<GameEvent>) {
    let player_invincible = state.invincible();
    let player_aabb = state.player.aabb();

    for (idx, enemy) in state.enemies.iter_mut().enumerate() {
        if enemy.defeated {
            continue;
        }

        enemy.pos.x += enemy.vx;

        // Platform adherence: a foot within a narrow band below some
        // platform top counts as standing on it. This is a proximity
        // heuristic, not physical resting, so walking off an edge reverses
        // direction one tick late.
        let mut on_platform = false;
        for platform in &state.level.platforms {
            let foot = enemy.pos.y + ENEMY_SIZE;
            let horizontal = enemy.pos.x + ENEMY_SIZE > platform.x
                && enemy.pos.x < platform.x + platform.width;
            if horizontal && foot >= platform.y && foot <= platform.y + ENEMY_FOOT_TOLERANCE {
                enemy.pos.y = platform.y - ENEMY_SIZE;
                on_platform = true;
            }
        }

        // Turn around off a platform edge or at the left world edge
        if !on_platform || enemy.pos.x < 0.0 {
            enemy.vx = -enemy.vx;
        }

        // Stomp vs hit, suppressed entirely while invincible. The stomp
        // bounce lands here because it is a physics effect; damage and
        // scoring go through the reducer.
        if !player_invincible && player_aabb.overlaps(&enemy.aabb()) {
            if is_stomp(state.player.pos.y, state.player.vel.y, enemy.pos.y) {
                enemy.defeated = true;
                state.player.vel.y = state.tuning.stomp_bounce;
                events.push(GameEvent::EnemyDefeated(idx));
            } else {
                events.push(GameEvent::PlayerHit);
            }
        }
    }
}

/// Coin pickup scan: at most one coin per tick
fn collect_coins(state: &mut GameState, events: &mut Vec<GameEvent>) {
    let player_aabb = state.player.aabb();
    for (idx, coin) in state.coins.iter_mut().enumerate() {
        if coin.collected {
            continue;
        }
        if player_aabb.overlaps(&coin.aabb()) {
            coin.collected = true;
            events.push(GameEvent::CoinCollected(idx));
            break;
        }
    }
}

/// Apply a tick's events to the match state.
///
/// Damage decrements lives and either ends the match (lives exhausted; no
/// further events are processed that tick) or respawns the player with a
/// fresh invincibility window. Hits that land inside an existing window are
/// dropped here as well as in the collision pass.
pub fn apply_events(state: &mut GameState, events: &[GameEvent]) {
    for event in events {
        match *event {
            GameEvent::EnemyDefeated(_) => {
                state.score += state.tuning.enemy_score;
            }
            GameEvent::CoinCollected(_) => {
                state.score += state.tuning.coin_score;
                state.coins_collected += 1;
            }
            GameEvent::PlayerHit => {
                if state.invincible() {
                    continue;
                }
                state.lives = state.lives.saturating_sub(1);
                log::debug!("player hit, {} lives left", state.lives);
                if state.lives == 0 {
                    state.finish(MatchOutcome::Lost);
                    break;
                }
                state.invincible_ticks = state.tuning.invincibility_ticks;
                let spawn = state.level.player_spawn;
                state.player.respawn(spawn);
                state.camera_x = 0.0;
            }
            GameEvent::LevelComplete => {
                state.finish(MatchOutcome::Won);
                break;
            }
        }
    }
}

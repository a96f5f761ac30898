//! Level geometry and spawn tables
//!
//! A level is immutable after load: an ordered platform list, fixed spawn
//! tables for enemies and coins, and the world bounds. Reset restores live
//! entities from these tables, so table index doubles as entity identity
//! across restarts.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Aabb;
use crate::consts::*;

/// A static platform rectangle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Platform {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Platform {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::new(self.x, self.y, self.width, self.height)
    }
}

/// Spawn record for one enemy: start position and initial patrol velocity
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnemySpawn {
    pub pos: Vec2,
    pub vx: f32,
}

/// Immutable level definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Level {
    /// Right boundary; crossing it completes the level
    pub width: f32,
    /// Ground plane the player can always rest on
    pub floor_y: f32,
    /// Where the player starts and respawns after a hit
    pub player_spawn: Vec2,
    pub platforms: Vec<Platform>,
    pub enemy_spawns: Vec<EnemySpawn>,
    pub coin_spawns: Vec<Vec2>,
}

impl Default for Level {
    fn default() -> Self {
        Self::hillside()
    }
}

impl Level {
    /// The built-in level: a staircase of platforms climbing to the level's
    /// midpoint, then a descent toward the goal at the right edge.
    pub fn hillside() -> Self {
        let patrol = -ENEMY_PATROL_SPEED;
        Self {
            width: LEVEL_WIDTH,
            floor_y: FLOOR_Y,
            player_spawn: Vec2::new(100.0, 300.0),
            platforms: vec![
                Platform::new(0.0, 450.0, 200.0, 50.0),
                Platform::new(250.0, 400.0, 150.0, 50.0),
                Platform::new(450.0, 350.0, 150.0, 50.0),
                Platform::new(650.0, 300.0, 150.0, 50.0),
                Platform::new(850.0, 250.0, 150.0, 50.0),
                Platform::new(1050.0, 200.0, 150.0, 50.0),
                Platform::new(1250.0, 150.0, 200.0, 50.0),
                Platform::new(1500.0, 450.0, 200.0, 50.0),
                Platform::new(1750.0, 400.0, 150.0, 50.0),
                Platform::new(2000.0, 350.0, 150.0, 50.0),
                Platform::new(2200.0, 450.0, 300.0, 50.0),
            ],
            enemy_spawns: vec![
                EnemySpawn {
                    pos: Vec2::new(300.0, 380.0),
                    vx: patrol,
                },
                EnemySpawn {
                    pos: Vec2::new(700.0, 330.0),
                    vx: patrol,
                },
                EnemySpawn {
                    pos: Vec2::new(1100.0, 180.0),
                    vx: patrol,
                },
                EnemySpawn {
                    pos: Vec2::new(1600.0, 380.0),
                    vx: patrol,
                },
                EnemySpawn {
                    pos: Vec2::new(2100.0, 430.0),
                    vx: patrol,
                },
            ],
            coin_spawns: vec![
                Vec2::new(320.0, 360.0),
                Vec2::new(500.0, 310.0),
                Vec2::new(700.0, 260.0),
                Vec2::new(900.0, 210.0),
                Vec2::new(1100.0, 110.0),
                Vec2::new(1300.0, 110.0),
                Vec2::new(1600.0, 360.0),
                Vec2::new(1800.0, 360.0),
                Vec2::new(2100.0, 310.0),
                Vec2::new(2300.0, 410.0),
            ],
        }
    }

    /// Load a level from its JSON representation
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hillside_tables_are_populated() {
        let level = Level::hillside();
        assert_eq!(level.platforms.len(), 11);
        assert_eq!(level.enemy_spawns.len(), 5);
        assert_eq!(level.coin_spawns.len(), 10);
        assert!(level.width > 0.0);
        // Every enemy starts patrolling leftward
        assert!(level.enemy_spawns.iter().all(|s| s.vx < 0.0));
    }

    #[test]
    fn level_round_trips_through_json() {
        let level = Level::hillside();
        let json = serde_json::to_string(&level).unwrap();
        let loaded = Level::from_json(&json).unwrap();
        assert_eq!(level, loaded);
    }
}

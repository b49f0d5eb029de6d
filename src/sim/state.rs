//! Game state and core simulation types
//!
//! Everything a tick reads or writes lives here. The spawn RNG is owned by
//! the spawn policy so this state stays plain data.

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

use crate::tuning::Tuning;

/// Session status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionStatus {
    /// Active gameplay
    Running,
    /// Run ended; only a restart is processed
    Over,
}

/// The player's runner
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Center of the runner. z stays at 0: the world scrolls, the player doesn't.
    pub pos: Vec3,
    /// x = steering velocity, y = vertical velocity (per tick)
    pub vel: Vec2,
    pub jumping: bool,
}

impl Player {
    pub fn new(ground_y: f32) -> Self {
        Self {
            pos: Vec3::new(0.0, ground_y, 0.0),
            vel: Vec2::ZERO,
            jumping: false,
        }
    }
}

/// What a world entity is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntityKind {
    /// Solid: touching it ends the run
    Obstacle,
    /// Collectible: touching it removes it and adds score
    Pickup,
}

/// An obstacle or pickup scrolling toward the player
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    pub id: u32,
    pub kind: EntityKind,
    pub pos: Vec3,
    /// Yaw in radians (presentation only, pickups spin)
    pub spin: f32,
}

/// Fixed ring of ground tiles recycled from front to back
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroundRing {
    /// Tile z positions, one per tile (x = 0, y = 0)
    tiles: Vec<f32>,
    span: f32,
}

impl GroundRing {
    /// Lay `count` tiles back from z = 0, `spacing` apart
    pub fn new(count: usize, spacing: f32) -> Self {
        Self {
            tiles: (0..count).map(|i| -(i as f32) * spacing).collect(),
            span: count as f32 * spacing,
        }
    }

    /// Move every tile forward by `dz`; tiles past `wrap_z` jump back one span
    pub fn scroll(&mut self, dz: f32, wrap_z: f32) {
        for z in &mut self.tiles {
            *z += dz;
            if *z > wrap_z {
                *z -= self.span;
            }
        }
    }

    pub fn tiles(&self) -> &[f32] {
        &self.tiles
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }
}

/// Everything that scrolls
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct World {
    /// Live obstacles, in spawn (id) order
    pub obstacles: Vec<Entity>,
    /// Live pickups, in spawn (id) order
    pub pickups: Vec<Entity>,
    pub ground: GroundRing,
}

/// Complete game state (deterministic given the spawn policy)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    /// Balance knobs this run was started with
    pub tuning: Tuning,
    pub player: Player,
    pub world: World,
    pub score: f32,
    /// Difficulty multiplier, always `tuning.speed_for_score(score)`
    pub speed: f32,
    pub status: SessionStatus,
    /// Ticks since the last spawn roll
    pub spawn_timer: u32,
    /// Ticks simulated in the current run
    pub time_ticks: u64,
    /// Next entity ID
    next_id: u32,
}

impl GameState {
    /// Create a fresh running state
    pub fn new(tuning: Tuning) -> Self {
        Self {
            player: Player::new(tuning.ground_y),
            world: World {
                obstacles: Vec::new(),
                pickups: Vec::new(),
                ground: GroundRing::new(tuning.ground_tiles, tuning.ground_spacing),
            },
            score: 0.0,
            speed: 1.0,
            status: SessionStatus::Running,
            spawn_timer: 0,
            time_ticks: 0,
            next_id: 1,
            tuning,
        }
    }

    /// Allocate a new entity ID (never reused, even across restarts)
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Add an entity at `pos` and return its id
    pub fn spawn(&mut self, kind: EntityKind, pos: Vec3) -> u32 {
        let id = self.next_entity_id();
        let entity = Entity {
            id,
            kind,
            pos,
            spin: 0.0,
        };
        match kind {
            EntityKind::Obstacle => self.world.obstacles.push(entity),
            EntityKind::Pickup => self.world.pickups.push(entity),
        }
        id
    }

    /// Reset the run: score, speed, timers, player and entities. Ground stays put.
    pub fn reset_run(&mut self) {
        self.score = 0.0;
        self.speed = 1.0;
        self.spawn_timer = 0;
        self.time_ticks = 0;
        self.status = SessionStatus::Running;
        self.player = Player::new(self.tuning.ground_y);
        self.world.obstacles.clear();
        self.world.pickups.clear();
    }

    pub fn is_over(&self) -> bool {
        self.status == SessionStatus::Over
    }
}

//! Spawn policies
//!
//! The tick owns the cooldown; a policy only decides what appears when the
//! cooldown fires. Randomness never leaks into the tick itself, so tests can
//! swap in a silent or scripted policy.

use glam::Vec3;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::tuning::Tuning;

/// What appears on one spawn event (either, both or neither)
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SpawnRoll {
    pub obstacle: Option<Vec3>,
    pub pickup: Option<Vec3>,
}

/// Decides spawns when the cooldown fires
pub trait SpawnPolicy {
    fn roll(&mut self, tuning: &Tuning) -> SpawnRoll;
}

/// Seeded random spawns: obstacle and pickup rolls are independent
#[derive(Debug, Clone)]
pub struct RandomSpawner {
    seed: u64,
    rng: Pcg32,
}

impl RandomSpawner {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Seed this spawner was created with (for replay logs)
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Uniform x across the lane
    fn lane_x(&mut self, tuning: &Tuning) -> f32 {
        (self.rng.random::<f32>() - 0.5) * tuning.spawn_spread
    }
}

impl SpawnPolicy for RandomSpawner {
    fn roll(&mut self, tuning: &Tuning) -> SpawnRoll {
        let mut roll = SpawnRoll::default();

        if self.rng.random::<f32>() < tuning.obstacle_chance {
            let x = self.lane_x(tuning);
            roll.obstacle = Some(Vec3::new(x, tuning.obstacle_y, tuning.spawn_z));
        }

        if self.rng.random::<f32>() < tuning.pickup_chance {
            let x = self.lane_x(tuning);
            let y = tuning.pickup_min_y + self.rng.random::<f32>() * tuning.pickup_y_range;
            roll.pickup = Some(Vec3::new(x, y, tuning.spawn_z));
        }

        roll
    }
}

/// Never spawns anything
#[derive(Debug, Clone, Copy, Default)]
pub struct NoSpawns;

impl SpawnPolicy for NoSpawns {
    fn roll(&mut self, _tuning: &Tuning) -> SpawnRoll {
        SpawnRoll::default()
    }
}

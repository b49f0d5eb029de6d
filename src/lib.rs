//! Lane Runner - An endless lane runner arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (player motion, world scroll, spawning, collisions, scoring)
//! - `driver`: Fixed timestep accumulator between display refresh and simulation ticks
//! - `runner`: Frame loop glue (input -> ticks -> snapshot -> presenter)
//! - `present`: Presentation adapter contract and HUD formatting
//! - `platform`: Browser input mapping
//! - `tuning` / `settings`: Data-driven game balance and startup configuration

pub mod driver;
pub mod platform;
pub mod present;
pub mod runner;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use runner::Runner;
pub use settings::{Settings, SettingsError, TouchControls};
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Logical simulation rate. The spawn cooldown is expressed in ticks at this rate.
    pub const SIM_HZ: u32 = 60;
    /// Fixed simulation timestep in seconds
    pub const SIM_DT: f32 = 1.0 / SIM_HZ as f32;
    /// Maximum ticks per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 4;
    /// Longest frame gap fed into the accumulator (seconds)
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Lane half width: player x is clamped to [-LANE_HALF_WIDTH, LANE_HALF_WIDTH]
    pub const LANE_HALF_WIDTH: f32 = 4.0;
    /// Player resting height (box center, 1 unit tall)
    pub const GROUND_Y: f32 = 0.5;

    /// Player steering
    pub const MOVE_SPEED: f32 = 0.1;
    pub const MOVE_ACCEL: f32 = 0.02;
    pub const MOVE_DAMPING: f32 = 0.9;

    /// Jump impulse and per-tick gravity
    pub const JUMP_IMPULSE: f32 = 0.3;
    pub const GRAVITY: f32 = 0.02;

    /// World scroll per tick at speed 1.0
    pub const BASE_WORLD_SPEED: f32 = 0.1;

    /// Entities appear here and are pruned once past PRUNE_Z
    pub const SPAWN_Z: f32 = -20.0;
    pub const PRUNE_Z: f32 = 10.0;

    /// Spawn cooldown in ticks at speed 1.0
    pub const SPAWN_COOLDOWN_TICKS: f32 = 60.0;
    pub const OBSTACLE_CHANCE: f32 = 0.7;
    pub const PICKUP_CHANCE: f32 = 0.5;
    /// Spawn x range is [-SPAWN_SPREAD / 2, SPAWN_SPREAD / 2)
    pub const SPAWN_SPREAD: f32 = 8.0;
    pub const OBSTACLE_Y: f32 = 0.75;
    pub const PICKUP_MIN_Y: f32 = 1.0;
    pub const PICKUP_Y_RANGE: f32 = 2.0;
    /// Pickup spin per tick (radians, presentation only)
    pub const PICKUP_SPIN: f32 = 0.1;

    /// Center distance below which player touches an entity
    pub const HIT_DISTANCE: f32 = 1.0;
    pub const PICKUP_VALUE: f32 = 10.0;

    /// Score per tick at speed 1.0
    pub const SCORE_PER_TICK: f32 = 0.1;
    /// Every SPEED_STEP_SCORE points the speed rises by SPEED_STEP
    pub const SPEED_STEP_SCORE: f32 = 100.0;
    pub const SPEED_STEP: f32 = 0.2;

    /// Ground ring
    pub const GROUND_TILES: usize = 20;
    pub const GROUND_SPACING: f32 = 5.0;
    pub const GROUND_WRAP_Z: f32 = 10.0;
}

/// Speed for a given score: `1 + floor(score / step_score) * step`
#[inline]
pub fn speed_for_score(score: f32, step_score: f32, step: f32) -> f32 {
    1.0 + (score / step_score).floor() * step
}

#[cfg(test)]
mod tests {
    use super::*;
    use consts::*;

    #[test]
    fn test_speed_steps() {
        assert_eq!(speed_for_score(0.0, SPEED_STEP_SCORE, SPEED_STEP), 1.0);
        assert_eq!(speed_for_score(99.9, SPEED_STEP_SCORE, SPEED_STEP), 1.0);
        assert!((speed_for_score(100.0, SPEED_STEP_SCORE, SPEED_STEP) - 1.2).abs() < 1e-6);
        assert!((speed_for_score(250.0, SPEED_STEP_SCORE, SPEED_STEP) - 1.4).abs() < 1e-6);
    }
}

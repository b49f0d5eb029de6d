//! Data-driven game balance
//!
//! Every gameplay constant the simulation reads. Defaults come from
//! [`crate::consts`]; a settings file may override any subset.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// A tuning value that fails validation
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TuningError {
    #[error("{field} must be a probability in [0, 1], got {value}")]
    Probability { field: &'static str, value: f32 },
    #[error("{field} must be positive and finite, got {value}")]
    NotPositive { field: &'static str, value: f32 },
    #[error("{field} must be zero or positive and finite, got {value}")]
    Negative { field: &'static str, value: f32 },
    #[error("{field} must be finite, got {value}")]
    NotFinite { field: &'static str, value: f32 },
    #[error("{field} must be in [0, 1), got {value}")]
    Damping { field: &'static str, value: f32 },
    #[error("prune_z ({prune_z}) must lie beyond spawn_z ({spawn_z})")]
    PruneBeforeSpawn { spawn_z: f32, prune_z: f32 },
    #[error("ground ring needs 1..={max} tiles, got {count}")]
    GroundTiles { count: usize, max: usize },
}

/// Largest ground ring a settings file may ask for
pub const MAX_GROUND_TILES: usize = 1024;

/// Gameplay balance knobs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Player ===
    pub lane_half_width: f32,
    pub ground_y: f32,
    pub move_speed: f32,
    pub move_accel: f32,
    pub move_damping: f32,
    pub jump_impulse: f32,
    pub gravity: f32,

    // === World ===
    pub base_world_speed: f32,
    pub spawn_z: f32,
    pub prune_z: f32,
    pub ground_tiles: usize,
    pub ground_spacing: f32,
    pub ground_wrap_z: f32,
    pub pickup_spin: f32,

    // === Spawning ===
    pub spawn_cooldown_ticks: f32,
    pub obstacle_chance: f32,
    pub pickup_chance: f32,
    pub spawn_spread: f32,
    pub obstacle_y: f32,
    pub pickup_min_y: f32,
    pub pickup_y_range: f32,

    // === Scoring ===
    pub hit_distance: f32,
    pub pickup_value: f32,
    pub score_per_tick: f32,
    pub speed_step_score: f32,
    pub speed_step: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            lane_half_width: LANE_HALF_WIDTH,
            ground_y: GROUND_Y,
            move_speed: MOVE_SPEED,
            move_accel: MOVE_ACCEL,
            move_damping: MOVE_DAMPING,
            jump_impulse: JUMP_IMPULSE,
            gravity: GRAVITY,

            base_world_speed: BASE_WORLD_SPEED,
            spawn_z: SPAWN_Z,
            prune_z: PRUNE_Z,
            ground_tiles: GROUND_TILES,
            ground_spacing: GROUND_SPACING,
            ground_wrap_z: GROUND_WRAP_Z,
            pickup_spin: PICKUP_SPIN,

            spawn_cooldown_ticks: SPAWN_COOLDOWN_TICKS,
            obstacle_chance: OBSTACLE_CHANCE,
            pickup_chance: PICKUP_CHANCE,
            spawn_spread: SPAWN_SPREAD,
            obstacle_y: OBSTACLE_Y,
            pickup_min_y: PICKUP_MIN_Y,
            pickup_y_range: PICKUP_Y_RANGE,

            hit_distance: HIT_DISTANCE,
            pickup_value: PICKUP_VALUE,
            score_per_tick: SCORE_PER_TICK,
            speed_step_score: SPEED_STEP_SCORE,
            speed_step: SPEED_STEP,
        }
    }
}

impl Tuning {
    /// Speed for a given score
    pub fn speed_for_score(&self, score: f32) -> f32 {
        crate::speed_for_score(score, self.speed_step_score, self.speed_step)
    }

    /// Reject values that would break the simulation invariants
    pub fn validate(&self) -> Result<(), TuningError> {
        for (field, value) in [
            ("obstacle_chance", self.obstacle_chance),
            ("pickup_chance", self.pickup_chance),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(TuningError::Probability { field, value });
            }
        }

        for (field, value) in [
            ("lane_half_width", self.lane_half_width),
            ("move_speed", self.move_speed),
            ("move_accel", self.move_accel),
            ("jump_impulse", self.jump_impulse),
            ("gravity", self.gravity),
            ("base_world_speed", self.base_world_speed),
            ("ground_spacing", self.ground_spacing),
            ("spawn_cooldown_ticks", self.spawn_cooldown_ticks),
            ("hit_distance", self.hit_distance),
            ("score_per_tick", self.score_per_tick),
            ("speed_step_score", self.speed_step_score),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(TuningError::NotPositive { field, value });
            }
        }

        // Speed and score only ever grow
        for (field, value) in [
            ("speed_step", self.speed_step),
            ("pickup_value", self.pickup_value),
            ("pickup_spin", self.pickup_spin),
            ("spawn_spread", self.spawn_spread),
            ("pickup_y_range", self.pickup_y_range),
        ] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(TuningError::Negative { field, value });
            }
        }

        for (field, value) in [
            ("ground_y", self.ground_y),
            ("spawn_z", self.spawn_z),
            ("prune_z", self.prune_z),
            ("ground_wrap_z", self.ground_wrap_z),
            ("obstacle_y", self.obstacle_y),
            ("pickup_min_y", self.pickup_min_y),
        ] {
            if !value.is_finite() {
                return Err(TuningError::NotFinite { field, value });
            }
        }

        if !(0.0..1.0).contains(&self.move_damping) {
            return Err(TuningError::Damping {
                field: "move_damping",
                value: self.move_damping,
            });
        }

        if self.prune_z <= self.spawn_z {
            return Err(TuningError::PruneBeforeSpawn {
                spawn_z: self.spawn_z,
                prune_z: self.prune_z,
            });
        }

        if !(1..=MAX_GROUND_TILES).contains(&self.ground_tiles) {
            return Err(TuningError::GroundTiles {
                count: self.ground_tiles,
                max: MAX_GROUND_TILES,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let tuning = Tuning::default();
        assert_eq!(tuning.validate(), Ok(()));
    }

    #[test]
    fn test_partial_override() {
        let tuning: Tuning = serde_json::from_str(r#"{ "gravity": 0.03 }"#).unwrap();
        assert_eq!(tuning.gravity, 0.03);
        assert_eq!(tuning.jump_impulse, JUMP_IMPULSE);
    }

    #[test]
    fn test_rejects_bad_probability() {
        let tuning = Tuning {
            obstacle_chance: 1.5,
            ..Default::default()
        };
        assert!(matches!(
            tuning.validate(),
            Err(TuningError::Probability { field: "obstacle_chance", .. })
        ));
    }

    #[test]
    fn test_rejects_nan_gravity() {
        let tuning = Tuning {
            gravity: f32::NAN,
            ..Default::default()
        };
        assert!(matches!(tuning.validate(), Err(TuningError::NotPositive { .. })));
    }

    #[test]
    fn test_rejects_negative_speed_step() {
        let tuning = Tuning {
            speed_step: -1.0,
            ..Default::default()
        };
        assert!(matches!(
            tuning.validate(),
            Err(TuningError::Negative { field: "speed_step", .. })
        ));

        // Zero is a flat difficulty curve, still valid
        let flat = Tuning {
            speed_step: 0.0,
            ..Default::default()
        };
        assert_eq!(flat.validate(), Ok(()));
    }

    #[test]
    fn test_rejects_negative_spawn_ranges() {
        for tuning in [
            Tuning {
                spawn_spread: -8.0,
                ..Default::default()
            },
            Tuning {
                pickup_y_range: f32::INFINITY,
                ..Default::default()
            },
            Tuning {
                pickup_value: -10.0,
                ..Default::default()
            },
        ] {
            assert!(matches!(tuning.validate(), Err(TuningError::Negative { .. })));
        }
    }

    #[test]
    fn test_rejects_non_finite_positions() {
        for tuning in [
            Tuning {
                prune_z: f32::NAN,
                ..Default::default()
            },
            Tuning {
                ground_wrap_z: f32::INFINITY,
                ..Default::default()
            },
            Tuning {
                spawn_z: f32::NEG_INFINITY,
                ..Default::default()
            },
        ] {
            assert!(matches!(tuning.validate(), Err(TuningError::NotFinite { .. })));
        }
    }

    #[test]
    fn test_rejects_prune_before_spawn() {
        let tuning = Tuning {
            prune_z: -30.0,
            ..Default::default()
        };
        assert_eq!(
            tuning.validate(),
            Err(TuningError::PruneBeforeSpawn {
                spawn_z: -20.0,
                prune_z: -30.0
            })
        );
    }

    #[test]
    fn test_rejects_ground_tile_count() {
        for count in [0, MAX_GROUND_TILES + 1, usize::MAX] {
            let tuning = Tuning {
                ground_tiles: count,
                ..Default::default()
            };
            assert_eq!(
                tuning.validate(),
                Err(TuningError::GroundTiles {
                    count,
                    max: MAX_GROUND_TILES
                })
            );
        }
    }
}

//! Read-only view handed to the presentation layer once per frame
//!
//! Built from a fully-committed state after all of a frame's ticks, so a
//! renderer never observes a half-applied tick.

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

use super::state::{Entity, GameState, SessionStatus};

/// Player transform
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlayerPose {
    pub pos: Vec3,
    pub vel: Vec2,
    pub jumping: bool,
}

/// Entity transform, keyed by id so renderables can be matched up
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EntityPose {
    pub id: u32,
    pub pos: Vec3,
    pub spin: f32,
}

impl From<&Entity> for EntityPose {
    fn from(entity: &Entity) -> Self {
        Self {
            id: entity.id,
            pos: entity.pos,
            spin: entity.spin,
        }
    }
}

/// Everything needed to draw one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub player: PlayerPose,
    pub obstacles: Vec<EntityPose>,
    pub pickups: Vec<EntityPose>,
    /// Ground tile z positions (tiles sit at x = 0, y = 0)
    pub ground: Vec<f32>,
    pub score: f32,
    pub speed: f32,
    pub status: SessionStatus,
}

impl Snapshot {
    pub fn capture(state: &GameState) -> Self {
        Self {
            player: PlayerPose {
                pos: state.player.pos,
                vel: state.player.vel,
                jumping: state.player.jumping,
            },
            obstacles: state.world.obstacles.iter().map(EntityPose::from).collect(),
            pickups: state.world.pickups.iter().map(EntityPose::from).collect(),
            ground: state.world.ground.tiles().to_vec(),
            score: state.score,
            speed: state.speed,
            status: state.status,
        }
    }

    pub fn is_over(&self) -> bool {
        self.status == SessionStatus::Over
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::EntityKind;
    use crate::tuning::Tuning;

    #[test]
    fn test_capture() {
        let mut state = GameState::new(Tuning::default());
        let id = state.spawn(EntityKind::Pickup, Vec3::new(1.0, 2.0, -20.0));
        state.score = 42.5;

        let snapshot = Snapshot::capture(&state);
        assert_eq!(snapshot.pickups, vec![EntityPose {
            id,
            pos: Vec3::new(1.0, 2.0, -20.0),
            spin: 0.0,
        }]);
        assert!(snapshot.obstacles.is_empty());
        assert_eq!(snapshot.ground.len(), 20);
        assert_eq!(snapshot.score, 42.5);
        assert!(!snapshot.is_over());
    }

    #[test]
    fn test_serializes_to_json() {
        let state = GameState::new(Tuning::default());
        let json = serde_json::to_string(&Snapshot::capture(&state)).unwrap();
        assert!(json.contains("\"status\":\"Running\""));
        let back: Snapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back.player.pos, Vec3::new(0.0, 0.5, 0.0));
    }
}

//! Contact tests between the runner and world entities
//!
//! Entity counts stay in the tens, so everything is a brute-force
//! center-distance check against every live entity.

use glam::Vec3;

use super::state::Entity;

/// True if two centers are closer than `distance` (full 3D Euclidean)
#[inline]
pub fn touches(a: Vec3, b: Vec3, distance: f32) -> bool {
    a.distance_squared(b) < distance * distance
}

/// IDs of all entities touching `pos`, in collection order
pub fn touching_ids(pos: Vec3, entities: &[Entity], distance: f32) -> Vec<u32> {
    entities
        .iter()
        .filter(|e| touches(pos, e.pos, distance))
        .map(|e| e.id)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::EntityKind;

    fn obstacle(id: u32, pos: Vec3) -> Entity {
        Entity {
            id,
            kind: EntityKind::Obstacle,
            pos,
            spin: 0.0,
        }
    }

    #[test]
    fn test_touches_is_strict() {
        let player = Vec3::new(0.0, 0.5, 0.0);
        assert!(touches(player, Vec3::new(0.0, 0.75, 0.5), 1.0));
        assert!(!touches(player, Vec3::new(1.0, 0.5, 0.0), 1.0));
        assert!(touches(player, Vec3::new(0.99, 0.5, 0.0), 1.0));
    }

    #[test]
    fn test_touches_uses_height() {
        // Same lane spot, but the player is high above the obstacle
        let airborne = Vec3::new(0.0, 2.0, 0.0);
        assert!(!touches(airborne, Vec3::new(0.0, 0.75, 0.0), 1.0));
    }

    #[test]
    fn test_touching_ids() {
        let player = Vec3::new(0.0, 0.5, 0.0);
        let entities = [
            obstacle(1, Vec3::new(0.0, 0.75, -5.0)),
            obstacle(2, Vec3::new(0.3, 0.75, 0.2)),
            obstacle(3, Vec3::new(-0.2, 0.75, -0.4)),
        ];
        assert_eq!(touching_ids(player, &entities, 1.0), vec![2, 3]);
    }
}

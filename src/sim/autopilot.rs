//! Idle/demo mode - AI plays the game
//!
//! Produces the same `InputState` a player would, so a demo run goes
//! through exactly the same tick as a real one.

use super::input::InputState;
use super::state::{Entity, GameState};

/// How far ahead (in z) the autopilot looks for obstacles
const LOOK_AHEAD: f32 = 8.0;
/// Extra sideways clearance on top of the hit distance
const SIDE_MARGIN: f32 = 0.3;
/// Ticks before impact at which a jump clears the obstacle top
const JUMP_LEAD_TICKS: f32 = 5.0;
/// Ignore pickups closer than this sideways (already lined up)
const PICKUP_DEADZONE: f32 = 0.2;

/// Pick the inputs for this tick
pub fn autopilot_input(state: &GameState) -> InputState {
    if state.is_over() {
        return InputState {
            restart: true,
            ..Default::default()
        };
    }

    let t = &state.tuning;
    let player = state.player.pos;
    let danger_width = t.hit_distance + SIDE_MARGIN;

    // Closest obstacle in our column that hasn't passed us yet
    let threat = state
        .world
        .obstacles
        .iter()
        .filter(|o| o.pos.z <= player.z + t.hit_distance && o.pos.z > player.z - LOOK_AHEAD)
        .filter(|o| (o.pos.x - player.x).abs() < danger_width)
        .max_by(|a, b| a.pos.z.total_cmp(&b.pos.z));

    if let Some(obstacle) = threat {
        return dodge(state, obstacle);
    }

    // Nothing in the way: line up with the nearest pickup ahead
    let target = state
        .world
        .pickups
        .iter()
        .filter(|p| p.pos.z < player.z)
        .max_by(|a, b| a.pos.z.total_cmp(&b.pos.z));

    match target {
        Some(pickup) if pickup.pos.x < player.x - PICKUP_DEADZONE => InputState {
            move_left: true,
            ..Default::default()
        },
        Some(pickup) if pickup.pos.x > player.x + PICKUP_DEADZONE => InputState {
            move_right: true,
            ..Default::default()
        },
        _ => InputState::default(),
    }
}

/// Sidestep toward the roomier side; jump if impact is imminent
fn dodge(state: &GameState, obstacle: &Entity) -> InputState {
    let t = &state.tuning;
    let player = state.player.pos;
    let wall = t.lane_half_width - t.hit_distance;

    let mut go_left = if obstacle.pos.x == player.x {
        player.x > 0.0
    } else {
        obstacle.pos.x > player.x
    };
    // Pinned against a wall: the only way out is the other side
    if go_left && player.x <= -wall {
        go_left = false;
    } else if !go_left && player.x >= wall {
        go_left = true;
    }

    let closing_speed = t.base_world_speed * state.speed;
    let gap = (player.z - obstacle.pos.z - t.hit_distance).max(0.0);
    let ticks_to_impact = gap / closing_speed;

    InputState {
        move_left: go_left,
        move_right: !go_left,
        jump: ticks_to_impact <= JUMP_LEAD_TICKS,
        restart: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::spawn::RandomSpawner;
    use crate::sim::state::EntityKind;
    use crate::sim::tick::{GameEvent, tick};
    use crate::tuning::Tuning;
    use glam::Vec3;

    #[test]
    fn test_restarts_when_over() {
        let mut state = GameState::new(Tuning::default());
        state.status = crate::sim::SessionStatus::Over;
        assert!(autopilot_input(&state).restart);
    }

    #[test]
    fn test_steers_away_from_obstacle() {
        let mut state = GameState::new(Tuning::default());
        state.spawn(EntityKind::Obstacle, Vec3::new(0.3, 0.75, -6.0));
        let input = autopilot_input(&state);
        assert!(input.move_left);
        assert!(!input.move_right);
        assert!(!input.jump);
    }

    #[test]
    fn test_escapes_wall_toward_center() {
        let mut state = GameState::new(Tuning::default());
        state.player.pos.x = -4.0;
        state.spawn(EntityKind::Obstacle, Vec3::new(-3.5, 0.75, -6.0));
        let input = autopilot_input(&state);
        assert!(input.move_right);
    }

    #[test]
    fn test_jumps_when_impact_is_close() {
        let mut state = GameState::new(Tuning::default());
        state.spawn(EntityKind::Obstacle, Vec3::new(0.0, 0.75, -1.3));
        assert!(autopilot_input(&state).jump);
    }

    #[test]
    fn test_chases_pickups_when_clear() {
        let mut state = GameState::new(Tuning::default());
        state.spawn(EntityKind::Pickup, Vec3::new(2.5, 1.5, -10.0));
        assert!(autopilot_input(&state).move_right);
    }

    #[test]
    fn test_autopilot_keeps_playing() {
        let mut state = GameState::new(Tuning::default());
        let mut spawner = RandomSpawner::new(3);

        for _ in 0..5000 {
            let was_over = state.is_over();
            let input = autopilot_input(&state);
            assert!(!(input.move_left && input.move_right));

            let events = tick(&mut state, &input, &mut spawner);
            if was_over {
                assert_eq!(events, vec![GameEvent::Restarted]);
                assert!(!state.is_over());
            }
        }
    }
}

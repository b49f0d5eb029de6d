//! Fixed timestep simulation tick
//!
//! Core game loop that advances simulation deterministically. Phase order
//! matters: later phases observe earlier mutations, and pruning always runs
//! before collision checks so scrolled-off entities can't be hit.

use serde::{Deserialize, Serialize};

use super::collision::{touches, touching_ids};
use super::input::InputState;
use super::spawn::SpawnPolicy;
use super::state::{EntityKind, GameState, SessionStatus};

/// Things that happened during a tick, in the order they happened
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// New entity entered the world (create a renderable)
    Spawned { id: u32, kind: EntityKind },
    /// Entity scrolled past the camera (drop its renderable)
    Pruned { id: u32, kind: EntityKind },
    /// Pickup collected (drop its renderable)
    Collected { id: u32, value: f32 },
    /// Player ran into an obstacle
    Crashed { id: u32 },
    Jumped,
    Landed,
    /// Difficulty step reached
    SpeedUp { speed: f32 },
    /// Run restarted (drop all entity renderables)
    Restarted,
}

/// Advance the game state by one fixed timestep
pub fn tick<S: SpawnPolicy + ?Sized>(
    state: &mut GameState,
    input: &InputState,
    spawner: &mut S,
) -> Vec<GameEvent> {
    let mut events = Vec::new();

    // Frozen while over; only a restart gets through
    if state.status == SessionStatus::Over {
        if input.restart {
            restart(state, &mut events);
        }
        return events;
    }

    state.time_ticks += 1;

    move_player(state, input, &mut events);
    scroll_world(state);
    run_spawner(state, spawner, &mut events);
    prune_entities(state, &mut events);
    resolve_collisions(state, &mut events);
    update_score(state, &mut events);

    if state.status == SessionStatus::Over {
        log::info!(
            "Run over after {} ticks: score {:.0}, speed {:.1}",
            state.time_ticks,
            state.score.floor(),
            state.speed
        );
    }

    events
}

/// Reset the run and record it
pub fn restart(state: &mut GameState, events: &mut Vec<GameEvent>) {
    state.reset_run();
    events.push(GameEvent::Restarted);
    log::info!("Run restarted");
}

/// Steering, jump trigger, then semi-implicit Euler integration
fn move_player(state: &mut GameState, input: &InputState, events: &mut Vec<GameEvent>) {
    let t = &state.tuning;
    let player = &mut state.player;

    // Left is checked first and wins if both are held
    if input.move_left {
        player.vel.x = (player.vel.x - t.move_accel).max(-t.move_speed);
    } else if input.move_right {
        player.vel.x = (player.vel.x + t.move_accel).min(t.move_speed);
    } else {
        player.vel.x *= t.move_damping;
    }

    // No double jump
    if input.jump && !player.jumping {
        player.jumping = true;
        player.vel.y = t.jump_impulse;
        events.push(GameEvent::Jumped);
    }

    // Hard wall; velocity keeps pushing against it
    player.pos.x = (player.pos.x + player.vel.x).clamp(-t.lane_half_width, t.lane_half_width);

    if player.jumping {
        // Displace with this tick's velocity, then apply gravity
        player.pos.y += player.vel.y;
        player.vel.y -= t.gravity;

        if player.pos.y <= t.ground_y {
            player.pos.y = t.ground_y;
            player.jumping = false;
            player.vel.y = 0.0;
            events.push(GameEvent::Landed);
        }
    }
}

/// Move ground, obstacles and pickups toward the camera
fn scroll_world(state: &mut GameState) {
    let t = &state.tuning;
    let dz = t.base_world_speed * state.speed;

    state.world.ground.scroll(dz, t.ground_wrap_z);

    for obstacle in &mut state.world.obstacles {
        obstacle.pos.z += dz;
    }

    for pickup in &mut state.world.pickups {
        pickup.pos.z += dz;
        pickup.spin += t.pickup_spin;
    }
}

/// Speed-scaled cooldown; higher speed spawns more often
fn run_spawner<S: SpawnPolicy + ?Sized>(
    state: &mut GameState,
    spawner: &mut S,
    events: &mut Vec<GameEvent>,
) {
    state.spawn_timer += 1;
    if state.spawn_timer as f32 <= state.tuning.spawn_cooldown_ticks / state.speed {
        return;
    }
    state.spawn_timer = 0;

    let roll = spawner.roll(&state.tuning);
    for (kind, pos) in [
        (EntityKind::Obstacle, roll.obstacle),
        (EntityKind::Pickup, roll.pickup),
    ] {
        if let Some(pos) = pos {
            let id = state.spawn(kind, pos);
            log::debug!("Spawned {:?} #{} at x={:.2} y={:.2}", kind, id, pos.x, pos.y);
            events.push(GameEvent::Spawned { id, kind });
        }
    }
}

/// Drop everything that scrolled past the camera
fn prune_entities(state: &mut GameState, events: &mut Vec<GameEvent>) {
    let prune_z = state.tuning.prune_z;
    let world = &mut state.world;

    for entities in [&mut world.obstacles, &mut world.pickups] {
        entities.retain(|e| {
            if e.pos.z > prune_z {
                events.push(GameEvent::Pruned {
                    id: e.id,
                    kind: e.kind,
                });
                false
            } else {
                true
            }
        });
    }
}

/// Obstacles end the run; pickups are collected
fn resolve_collisions(state: &mut GameState, events: &mut Vec<GameEvent>) {
    let player_pos = state.player.pos;
    let hit_distance = state.tuning.hit_distance;
    let pickup_value = state.tuning.pickup_value;

    // Every obstacle is checked, even after the first hit
    for id in touching_ids(player_pos, &state.world.obstacles, hit_distance) {
        state.status = SessionStatus::Over;
        events.push(GameEvent::Crashed { id });
    }

    let mut collected = 0.0;
    state.world.pickups.retain(|pickup| {
        if touches(player_pos, pickup.pos, hit_distance) {
            collected += pickup_value;
            events.push(GameEvent::Collected {
                id: pickup.id,
                value: pickup_value,
            });
            false
        } else {
            true
        }
    });
    state.score += collected;
}

/// Distance score, then recompute the difficulty step
fn update_score(state: &mut GameState, events: &mut Vec<GameEvent>) {
    state.score += state.tuning.score_per_tick * state.speed;

    let speed = state.tuning.speed_for_score(state.score);
    if speed > state.speed {
        log::info!("Speed up: {:.1} at score {:.0}", speed, state.score.floor());
        events.push(GameEvent::SpeedUp { speed });
    }
    state.speed = speed;
}

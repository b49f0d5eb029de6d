//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only (behind `SpawnPolicy`)
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod collision;
pub mod input;
pub mod session;
pub mod snapshot;
pub mod spawn;
pub mod state;
pub mod tick;

pub use autopilot::autopilot_input;
pub use collision::{touches, touching_ids};
pub use input::InputState;
pub use session::GameSession;
pub use snapshot::{EntityPose, PlayerPose, Snapshot};
pub use spawn::{NoSpawns, RandomSpawner, SpawnPolicy, SpawnRoll};
pub use state::{Entity, EntityKind, GameState, GroundRing, Player, SessionStatus, World};
pub use tick::{GameEvent, tick};

//! Running / Over state machine around the tick

use super::input::InputState;
use super::snapshot::Snapshot;
use super::spawn::{RandomSpawner, SpawnPolicy};
use super::state::{GameState, SessionStatus};
use super::tick::{GameEvent, restart, tick};
use crate::tuning::Tuning;

/// One player's game: simulation state plus the spawn policy feeding it
#[derive(Debug, Clone)]
pub struct GameSession<S = RandomSpawner> {
    state: GameState,
    spawner: S,
}

impl GameSession<RandomSpawner> {
    /// New session with default tuning and seeded random spawns
    pub fn new(seed: u64) -> Self {
        Self::with_spawner(Tuning::default(), RandomSpawner::new(seed))
    }

    /// New session with custom tuning and seeded random spawns
    pub fn with_tuning(tuning: Tuning, seed: u64) -> Self {
        Self::with_spawner(tuning, RandomSpawner::new(seed))
    }
}

impl<S: SpawnPolicy> GameSession<S> {
    pub fn with_spawner(tuning: Tuning, spawner: S) -> Self {
        log::info!("New session ({} ground tiles)", tuning.ground_tiles);
        Self {
            state: GameState::new(tuning),
            spawner,
        }
    }

    /// Advance one logical tick
    pub fn tick(&mut self, input: &InputState) -> Vec<GameEvent> {
        tick(&mut self.state, input, &mut self.spawner)
    }

    /// Start the run over regardless of status
    pub fn restart(&mut self) -> Vec<GameEvent> {
        let mut events = Vec::new();
        restart(&mut self.state, &mut events);
        events
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(&self.state)
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Direct state access for scenario setup
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn status(&self) -> SessionStatus {
        self.state.status
    }

    pub fn is_over(&self) -> bool {
        self.state.is_over()
    }

    pub fn spawner(&self) -> &S {
        &self.spawner
    }
}

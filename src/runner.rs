//! Frame loop glue
//!
//! One `frame()` per display refresh: sample input, run the ticks the fixed
//! step says are due, then present a single snapshot of the committed state.

use crate::driver::FixedStep;
use crate::platform::InputCollector;
use crate::present::Presenter;
use crate::settings::Settings;
use crate::sim::{GameSession, RandomSpawner, SpawnPolicy, autopilot_input};

/// Game instance holding all state
pub struct Runner<P, S = RandomSpawner> {
    session: GameSession<S>,
    clock: FixedStep,
    input: InputCollector,
    presenter: P,
    /// Idle/demo mode - autopilot drives instead of the player
    idle_mode: bool,
}

impl<P: Presenter> Runner<P, RandomSpawner> {
    /// Runner for a fresh seeded session configured by `settings`
    pub fn from_settings(settings: &Settings, seed: u64, presenter: P) -> Self {
        log::info!("Starting session with seed: {}", seed);
        let session = GameSession::with_tuning(settings.tuning.clone(), seed);
        let mut runner = Self::new(session, presenter);
        runner.idle_mode = settings.idle_mode;
        runner
    }
}

impl<P: Presenter, S: SpawnPolicy> Runner<P, S> {
    pub fn new(session: GameSession<S>, presenter: P) -> Self {
        Self {
            session,
            clock: FixedStep::new(),
            input: InputCollector::new(),
            presenter,
            idle_mode: false,
        }
    }

    /// Run due ticks for this display frame and present the result.
    /// Returns the number of ticks simulated.
    pub fn frame(&mut self, now_ms: f64) -> u32 {
        let ticks = self.clock.advance(now_ms);

        let mut events = Vec::new();
        for _ in 0..ticks {
            // Always sample so latched taps don't leak into a later tick
            let player_input = self.input.sample();
            let input = if self.idle_mode {
                autopilot_input(self.session.state())
            } else {
                player_input
            };
            events.extend(self.session.tick(&input));
        }

        let snapshot = self.session.snapshot();
        self.presenter.present(&snapshot, &events);
        ticks
    }

    /// Viewport changed; only the presenter cares
    pub fn resize(&mut self, width: u32, height: u32) {
        self.presenter.resize(width, height);
    }

    /// Window lost focus: keyups and frame callbacks stop arriving, so drop
    /// held input and timing history
    pub fn suspend(&mut self) {
        self.input.release_all();
        self.clock.reset();
    }

    pub fn set_idle_mode(&mut self, idle_mode: bool) {
        if self.idle_mode != idle_mode {
            self.toggle_idle_mode();
        }
    }

    pub fn toggle_idle_mode(&mut self) {
        self.idle_mode = !self.idle_mode;
        log::info!("Idle mode: {}", self.idle_mode);
    }

    pub fn idle_mode(&self) -> bool {
        self.idle_mode
    }

    /// Where platform event handlers write key/touch state
    pub fn input_mut(&mut self) -> &mut InputCollector {
        &mut self.input
    }

    pub fn session(&self) -> &GameSession<S> {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut GameSession<S> {
        &mut self.session
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }
}

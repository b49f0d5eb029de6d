//! Fixed timestep accumulator
//!
//! Display refresh runs at whatever rate the host gives us; the simulation
//! runs at `SIM_HZ`. Spawn cooldowns are counted in ticks, so this is what
//! keeps difficulty identical on 60 Hz and 144 Hz screens.

use crate::consts::{MAX_FRAME_DT, MAX_SUBSTEPS, SIM_DT};

#[derive(Debug, Clone, Default)]
pub struct FixedStep {
    accumulator: f32,
    /// Timestamp of the previous frame (ms), None before the first frame
    last_time: Option<f64>,
}

impl FixedStep {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed a frame timestamp in milliseconds; returns how many ticks to run.
    ///
    /// The first frame runs exactly one tick. Long gaps (tab in background)
    /// are clamped so the game never fast-forwards through a stall.
    pub fn advance(&mut self, now_ms: f64) -> u32 {
        if now_ms.is_nan() {
            return 0;
        }
        let dt = match self.last_time {
            Some(last) => (((now_ms - last) / 1000.0) as f32).clamp(0.0, MAX_FRAME_DT),
            None => SIM_DT,
        };
        self.last_time = Some(now_ms);
        self.accumulator += dt;

        let mut ticks = 0;
        while self.accumulator >= SIM_DT && ticks < MAX_SUBSTEPS {
            self.accumulator -= SIM_DT;
            ticks += 1;
        }
        // Drop the backlog we refused to simulate
        if ticks == MAX_SUBSTEPS {
            self.accumulator = self.accumulator.min(SIM_DT);
        }
        ticks
    }

    /// Forget timing history (window blur, tab hidden)
    pub fn reset(&mut self) {
        self.accumulator = 0.0;
        self.last_time = None;
    }
}

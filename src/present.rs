//! Presentation adapter contract
//!
//! The simulation never draws. Once per frame the runner hands a presenter
//! the post-tick snapshot plus the lifecycle events of that frame's ticks;
//! the presenter creates/removes renderables and updates HUD text.

use crate::sim::{GameEvent, Snapshot};

/// Something that can show the game
pub trait Presenter {
    /// Draw one frame. `events` are everything that happened since the last call.
    fn present(&mut self, snapshot: &Snapshot, events: &[GameEvent]);

    /// Viewport changed (projection only, never simulation state)
    fn resize(&mut self, _width: u32, _height: u32) {}
}

/// Score as shown in the HUD (whole points)
pub fn score_text(score: f32) -> String {
    format!("{}", score.max(0.0).floor() as u64)
}

/// Speed as shown in the HUD (one decimal)
pub fn speed_text(speed: f32) -> String {
    format!("{speed:.1}")
}

/// HUD strings for a snapshot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hud {
    pub score: String,
    pub speed: String,
    /// Some(final score) while the game-over overlay should be shown
    pub game_over: Option<String>,
}

impl Hud {
    pub fn from_snapshot(snapshot: &Snapshot) -> Self {
        let score = score_text(snapshot.score);
        Self {
            game_over: snapshot.is_over().then(|| score.clone()),
            score,
            speed: speed_text(snapshot.speed),
        }
    }
}

/// Headless presenter: logs run results, draws nothing
#[derive(Debug, Default)]
pub struct LogPresenter {
    /// Final scores of every run that ended
    pub finished_runs: Vec<f32>,
    pub frames: u64,
}

impl Presenter for LogPresenter {
    fn present(&mut self, snapshot: &Snapshot, events: &[GameEvent]) {
        self.frames += 1;
        for event in events {
            match event {
                GameEvent::Crashed { id } => {
                    log::debug!("Crashed into obstacle #{}", id);
                }
                GameEvent::Restarted => log::info!("New run"),
                _ => {}
            }
        }
        // One Over frame per run: a crash frame carries Crashed events
        if snapshot.is_over() && events.iter().any(|e| matches!(e, GameEvent::Crashed { .. })) {
            let hud = Hud::from_snapshot(snapshot);
            log::info!("Game over - final score {}, speed {}", hud.score, hud.speed);
            self.finished_runs.push(snapshot.score);
        }
    }

    fn resize(&mut self, width: u32, height: u32) {
        log::debug!("Viewport {}x{} (headless, ignored)", width, height);
    }
}

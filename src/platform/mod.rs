//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Input events (keyboard codes, touch buttons) -> `InputState`
//! - Device class detection (whether to show touch controls)

pub mod input;

pub use input::{InputCollector, Key, TouchButton};

/// User agents that get on-screen touch controls
const TOUCH_AGENTS: [&str; 7] = [
    "android",
    "iphone",
    "ipad",
    "ipod",
    "blackberry",
    "iemobile",
    "opera mini",
];

/// Guess from the user agent whether this is a touch-first device
pub fn is_touch_device(user_agent: &str) -> bool {
    let ua = user_agent.to_lowercase();
    TOUCH_AGENTS.iter().any(|needle| ua.contains(needle))
}

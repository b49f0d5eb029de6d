//! Keyboard and touch state -> per-tick intents
//!
//! Browser events arrive whenever they like; the simulation wants one
//! `InputState` per tick. Held controls are tracked as levels, taps and
//! restart presses are latched until the next sample.

use crate::sim::InputState;

/// Keys the game listens to, by `KeyboardEvent.code`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    KeyA,
    ArrowLeft,
    KeyD,
    ArrowRight,
    Space,
    Enter,
}

/// Number of `Key` variants
const KEY_COUNT: usize = 6;

impl Key {
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "KeyA" => Some(Key::KeyA),
            "ArrowLeft" => Some(Key::ArrowLeft),
            "KeyD" => Some(Key::KeyD),
            "ArrowRight" => Some(Key::ArrowRight),
            "Space" => Some(Key::Space),
            "Enter" | "NumpadEnter" => Some(Key::Enter),
            _ => None,
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// On-screen touch buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchButton {
    Left,
    Right,
    Jump,
}

impl TouchButton {
    pub const ALL: [TouchButton; 3] = [TouchButton::Left, TouchButton::Right, TouchButton::Jump];

    /// DOM id of the button element
    pub fn element_id(self) -> &'static str {
        match self {
            TouchButton::Left => "leftBtn",
            TouchButton::Right => "rightBtn",
            TouchButton::Jump => "jumpBtn",
        }
    }

    /// Selector matching any touch button, for `Element::closest`
    pub fn selector() -> String {
        Self::ALL
            .iter()
            .map(|button| format!("#{}", button.element_id()))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[derive(Debug, Clone, Default)]
pub struct InputCollector {
    held: [bool; KEY_COUNT],
    touch_left: bool,
    touch_right: bool,
    /// Jump button tapped since last sample
    jump_tap: bool,
    /// Restart key pressed or canvas tapped since last sample
    restart: bool,
}

impl InputCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if the code is one the game uses (caller may prevent default)
    pub fn key_down(&mut self, code: &str) -> bool {
        let Some(key) = Key::from_code(code) else {
            return false;
        };
        // Auto-repeat keydowns keep re-latching restart, which is harmless
        if matches!(key, Key::Space | Key::Enter) {
            self.restart = true;
        }
        self.held[key.index()] = true;
        true
    }

    pub fn key_up(&mut self, code: &str) -> bool {
        let Some(key) = Key::from_code(code) else {
            return false;
        };
        self.held[key.index()] = false;
        true
    }

    pub fn touch(&mut self, button: TouchButton, pressed: bool) {
        match button {
            TouchButton::Left => self.touch_left = pressed,
            TouchButton::Right => self.touch_right = pressed,
            TouchButton::Jump => self.jump_tap |= pressed,
        }
    }

    /// Tap anywhere on the play field (restarts when the run is over)
    pub fn canvas_tap(&mut self) {
        self.restart = true;
    }

    /// Release everything (window lost focus, keyups will never arrive)
    pub fn release_all(&mut self) {
        *self = Self::default();
    }

    /// Intents for the next tick; clears latched taps
    pub fn sample(&mut self) -> InputState {
        let held = |key: Key| self.held[key.index()];
        let input = InputState {
            move_left: held(Key::KeyA) || held(Key::ArrowLeft) || self.touch_left,
            move_right: held(Key::KeyD) || held(Key::ArrowRight) || self.touch_right,
            jump: held(Key::Space) || self.jump_tap,
            restart: self.restart,
        };
        self.jump_tap = false;
        self.restart = false;
        input
    }
}

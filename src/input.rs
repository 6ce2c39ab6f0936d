//! Platform-agnostic movement input
//!
//! Defines the logical direction keys and the per-frame input state the
//! controller reads. A windowing layer (winit, a browser shim, a test
//! script) is responsible for translating its own key events into
//! [`InputState::press`] / [`InputState::release`] calls; nothing in this
//! module depends on an event source.

use std::collections::HashSet;

/// Logical movement keys, interpreted relative to the camera.
///
/// The classic binding is W/A/S/D, but that mapping belongs to the event
/// source, not to this crate.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Direction {
    Forward,
    Left,
    Backward,
    Right,
}

impl Direction {
    /// All logical keys, in the order the selection policy checks them.
    pub const ALL: [Direction; 4] = [
        Direction::Forward,
        Direction::Backward,
        Direction::Left,
        Direction::Right,
    ];
}

/// Pressed-key state container, mutated by key events and read once per
/// frame.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    pressed: HashSet<Direction>,
    just_pressed: HashSet<Direction>,
}

impl InputState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // ========== Event-source API ==========

    /// Clears per-frame edge state. Call once at the start of each frame,
    /// before injecting that frame's events.
    pub fn start_frame(&mut self) {
        self.just_pressed.clear();
    }

    /// Records a key-down event. Key repeat is harmless: only a fresh press
    /// lands in the just-pressed set.
    pub fn press(&mut self, direction: Direction) {
        if self.pressed.insert(direction) {
            self.just_pressed.insert(direction);
        }
    }

    /// Records a key-up event.
    pub fn release(&mut self, direction: Direction) {
        self.pressed.remove(&direction);
    }

    // ========== Query API ==========

    /// Whether a key is currently held down.
    #[must_use]
    pub fn is_pressed(&self, direction: Direction) -> bool {
        self.pressed.contains(&direction)
    }

    /// Whether a key went down this frame.
    #[must_use]
    pub fn just_pressed(&self, direction: Direction) -> bool {
        self.just_pressed.contains(&direction)
    }

    /// Whether any movement key is held down.
    #[must_use]
    pub fn any_pressed(&self) -> bool {
        !self.pressed.is_empty()
    }
}

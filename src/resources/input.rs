//! Per-frame keyboard input resource.
//!
//! Captures the handful of keys the simulation reacts to and exposes them to
//! systems via the [`InputState`] resource.
use bevy_ecs::prelude::*;
use raylib::prelude::*;

#[derive(Debug, Clone, Copy)]
/// Boolean key state with an associated keyboard binding.
pub struct BoolState {
    /// Whether the key was just pressed this frame.
    pub just_pressed: bool,

    /// The key bound to this action.
    pub key_binding: KeyboardKey,
}

impl Default for BoolState {
    fn default() -> Self {
        Self {
            just_pressed: false,
            key_binding: KeyboardKey::KEY_NULL,
        }
    }
}

impl BoolState {
    fn bound_to(key_binding: KeyboardKey) -> Self {
        Self {
            just_pressed: false,
            key_binding,
        }
    }
}

/// Resource capturing the per-frame keyboard state relevant to the simulation.
#[derive(Resource, Debug, Clone)]
pub struct InputState {
    /// Close the window.
    pub quit: BoolState,
    /// Flush the disposal station by hand.
    pub flush: BoolState,
    /// Drop one more piece of trash on the board.
    pub spawn_trash: BoolState,
    /// Toggle the debug overlay.
    pub mode_debug: BoolState,
}

impl Default for InputState {
    fn default() -> Self {
        Self {
            quit: BoolState::bound_to(KeyboardKey::KEY_ESCAPE),
            flush: BoolState::bound_to(KeyboardKey::KEY_F),
            spawn_trash: BoolState::bound_to(KeyboardKey::KEY_T),
            mode_debug: BoolState::bound_to(KeyboardKey::KEY_F11),
        }
    }
}

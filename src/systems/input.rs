//! Input systems.
//!
//! - [`update_input_state`] polls the keyboard once per frame and writes the
//!   results into [`crate::resources::input::InputState`].
//! - Every key that was just pressed triggers its event; the observers in
//!   [`crate::events`] apply the effect.
//!
//! The key source is passed in as a closure so the same code runs against
//! raylib in the main loop and against scripted key presses in tests.
use bevy_ecs::prelude::*;
use raylib::ffi::KeyboardKey;

use crate::events::flush::FlushEvent;
use crate::events::quit::QuitEvent;
use crate::events::spawntrash::SpawnTrashEvent;
use crate::events::switchdebug::SwitchDebugEvent;
use crate::resources::input::InputState;

/// Read key presses through `is_key_pressed` and trigger the matching events.
pub fn update_input_state(world: &mut World, is_key_pressed: impl Fn(KeyboardKey) -> bool) {
    let input = {
        let mut input = world.resource_mut::<InputState>();
        input.quit.just_pressed = is_key_pressed(input.quit.key_binding);
        input.flush.just_pressed = is_key_pressed(input.flush.key_binding);
        input.spawn_trash.just_pressed = is_key_pressed(input.spawn_trash.key_binding);
        input.mode_debug.just_pressed = is_key_pressed(input.mode_debug.key_binding);
        input.clone()
    };

    if input.quit.just_pressed {
        world.trigger(QuitEvent {});
    }
    if input.flush.just_pressed {
        world.trigger(FlushEvent {});
    }
    if input.spawn_trash.just_pressed {
        world.trigger(SpawnTrashEvent {});
    }
    if input.mode_debug.just_pressed {
        world.trigger(SwitchDebugEvent {});
    }
    world.flush();
}

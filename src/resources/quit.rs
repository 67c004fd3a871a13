//! Quit request resource.
//!
//! Like [`DebugMode`](super::debugmode::DebugMode), its presence is the
//! signal: the main loop stops once it is inserted.

use bevy_ecs::prelude::Resource;

#[derive(Resource, Clone, Copy, Debug)]
pub struct QuitRequested;

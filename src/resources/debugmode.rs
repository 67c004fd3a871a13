//! Debug overlay toggle.
//!
//! While this resource exists the render pass draws the bots' state labels,
//! sweep lanes, the station footprint and a text overlay with FPS, tick count
//! and station fill. [`SwitchDebugEvent`](crate::events::switchdebug::SwitchDebugEvent)
//! inserts or removes it.

use bevy_ecs::prelude::Resource;

/// Marker resource: present while the debug overlay is on.
#[derive(Resource, Clone, Copy, Debug)]
pub struct DebugMode {}

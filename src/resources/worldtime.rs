//! Simulation clock.
//!
//! The simulation itself advances in fixed ticks (one per frame); `elapsed`
//! only reports wall time for the debug overlay.

use bevy_ecs::prelude::Resource;

#[derive(Resource, Clone, Copy, Debug, Default)]
pub struct WorldTime {
    /// Wall-clock seconds since startup.
    pub elapsed: f32,
    /// Ticks run since startup.
    pub frame_count: u64,
}

//! Time update system.
//!
//! Updates the shared [`WorldTime`](crate::resources::worldtime::WorldTime)
//! resource once per frame.
use bevy_ecs::prelude::*;

use crate::resources::worldtime::WorldTime;

/// Add the frame's wall time and count one tick.
///
/// The bots move a fixed distance per tick, so `dt` only feeds the overlay clock.
pub fn update_world_time(world: &mut World, dt: f32) {
    let mut wt = world.resource_mut::<WorldTime>();
    wt.elapsed += dt;
    wt.frame_count += 1;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accumulates_wall_time_and_counts_ticks() {
        let mut world = World::new();
        world.insert_resource(WorldTime::default());
        update_world_time(&mut world, 0.1);
        update_world_time(&mut world, 0.25);

        let wt = world.resource::<WorldTime>();
        assert!((wt.elapsed - 0.35).abs() < 1e-6);
        assert_eq!(wt.frame_count, 2);
    }
}

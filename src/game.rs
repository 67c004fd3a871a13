//! World population.
//!
//! Inserts the simulation resources, spawns the initial bots and trash, and
//! wires up the observers and the per-tick schedule. Window and textures are
//! set up by `main`; everything here is plain ECS so tests can build the same
//! world headlessly.

use bevy_ecs::observer::Observer;
use bevy_ecs::prelude::*;
use log::info;
use raylib::prelude::Vector3;

use crate::components::cleaningbot::{CleaningBot, DumpApproach};
use crate::components::rotation::Rotation;
use crate::components::trash::Trash;
use crate::components::worldposition::WorldPosition;
use crate::events::flush::flush_observer;
use crate::events::quit::quit_observer;
use crate::events::spawntrash::spawn_trash_observer;
use crate::events::switchdebug::switch_debug_observer;
use crate::resources::arena::Arena;
use crate::resources::disposalstation::DisposalStation;
use crate::resources::simrng::SimRng;
use crate::resources::worldtime::WorldTime;
use crate::systems::cleaningbot::cleaning_bot_system;
use crate::systems::disposalstation::disposal_station_system;

pub const BOT_COUNT: usize = 5;
pub const TRASH_COUNT: usize = 20;

/// Components of one uncollected piece of trash at `pos`.
fn trash_bundle(pos: Vector3) -> (Trash, WorldPosition) {
    (Trash::new(), WorldPosition::from_vec(pos))
}

/// Spawn one uncollected piece of trash at `pos`.
pub fn spawn_trash(commands: &mut Commands, pos: Vector3) -> Entity {
    commands.spawn(trash_bundle(pos)).id()
}

/// [`spawn_trash`] for exclusive world access, used while populating the board.
pub fn spawn_trash_now(world: &mut World, pos: Vector3) -> Entity {
    world.spawn(trash_bundle(pos)).id()
}

/// Spawn a searching bot standing at its home position.
pub fn spawn_bot(world: &mut World, bot: CleaningBot) -> Entity {
    let home = bot.home;
    world
        .spawn((bot, WorldPosition::from_vec(home), Rotation::default()))
        .id()
}

/// Insert the simulation resources and populate the board.
///
/// One bot per lane of the [`Arena`], `trash_count` trash pieces at random
/// positions, and a fresh [`DisposalStation`]. `seed` drives every random
/// choice so runs are reproducible.
pub fn setup_world(
    world: &mut World,
    seed: u64,
    bot_count: usize,
    trash_count: usize,
    approach: DumpApproach,
) {
    let arena = Arena::default();
    let mut rng = SimRng::with_seed(seed);

    world.insert_resource(WorldTime::default());
    world.insert_resource(DisposalStation::with_seed(rng.0.u64(..)));

    for index in 0..bot_count {
        let lane = arena.lane(index, bot_count);
        let home = Arena::home_for(&lane);
        spawn_bot(world, CleaningBot::new(home, lane).with_approach(approach));
    }

    for _ in 0..trash_count {
        let pos = arena.random_trash_position(&mut rng.0);
        spawn_trash_now(world, pos);
    }

    world.insert_resource(arena);
    world.insert_resource(rng);

    info!(
        "Board ready: {} bots ({:?} approach), {} trash, seed {}",
        bot_count, approach, trash_count, seed
    );
}

/// Register the observers for every input event.
pub fn register_observers(world: &mut World) {
    world.spawn(Observer::new(flush_observer));
    world.spawn(Observer::new(quit_observer));
    world.spawn(Observer::new(spawn_trash_observer));
    world.spawn(Observer::new(switch_debug_observer));
    // Ensure the observers are registered before anything triggers events.
    world.flush();
}

/// The per-tick simulation schedule: station first, then the bots.
pub fn simulation_schedule() -> Schedule {
    let mut update = Schedule::default();
    update.add_systems(disposal_station_system);
    update.add_systems(cleaning_bot_system.after(disposal_station_system));
    update
}

#[cfg(test)]
mod tests {
    use super::*;

    fn positions<T: Component>(world: &mut World) -> Vec<(f32, f32)> {
        let mut q = world.query_filtered::<&WorldPosition, With<T>>();
        q.iter(world).map(|p| (p.pos.x, p.pos.z)).collect()
    }

    #[test]
    fn setup_populates_board() {
        let mut world = World::new();
        setup_world(&mut world, 3, BOT_COUNT, TRASH_COUNT, DumpApproach::Direct);

        assert!(world.contains_resource::<DisposalStation>());
        assert!(world.contains_resource::<Arena>());
        assert!(world.contains_resource::<SimRng>());
        assert!(world.contains_resource::<WorldTime>());

        let mut bots = world.query::<(&CleaningBot, &WorldPosition)>();
        let mut count = 0;
        for (bot, pos) in bots.iter(&world) {
            assert_eq!(pos.pos, bot.home);
            assert_eq!(bot.approach, DumpApproach::Direct);
            count += 1;
        }
        assert_eq!(count, BOT_COUNT);

        let trash = positions::<Trash>(&mut world);
        assert_eq!(trash.len(), TRASH_COUNT);
        for (x, z) in trash {
            assert!(!Arena::in_exclusion(Vector3::new(x, 0.0, z)));
        }
    }

    #[test]
    fn same_seed_same_board() {
        let mut a = World::new();
        let mut b = World::new();
        setup_world(&mut a, 99, 2, 10, DumpApproach::Docking);
        setup_world(&mut b, 99, 2, 10, DumpApproach::Docking);
        assert_eq!(positions::<Trash>(&mut a), positions::<Trash>(&mut b));
    }

    #[test]
    fn both_trash_helpers_spawn_uncollected_trash() {
        let mut world = World::new();
        let direct = spawn_trash_now(&mut world, Vector3::new(40.0, 0.0, -30.0));

        let mut commands_world = World::new();
        let deferred = spawn_trash(
            &mut commands_world.commands(),
            Vector3::new(40.0, 0.0, -30.0),
        );
        commands_world.flush();

        for (world, entity) in [(&world, direct), (&commands_world, deferred)] {
            assert!(!world.get::<Trash>(entity).unwrap().collected);
            let pos = world.get::<WorldPosition>(entity).unwrap().pos;
            assert_eq!((pos.x, pos.y, pos.z), (40.0, 0.0, -30.0));
        }
    }

    #[test]
    fn lanes_do_not_overlap() {
        let mut world = World::new();
        setup_world(&mut world, 5, BOT_COUNT, 0, DumpApproach::Direct);
        let mut q = world.query::<&CleaningBot>();
        let mut lanes: Vec<_> = q.iter(&world).map(|b| b.lane).collect();
        lanes.sort_by(|l, r| l.min_x.total_cmp(&r.min_x));
        for pair in lanes.windows(2) {
            assert!(pair[0].max_x <= pair[1].min_x + 1e-3);
        }
    }
}

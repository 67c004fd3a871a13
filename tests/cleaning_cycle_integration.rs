//! Bot controller integration tests: pickup, the full dump cycle, the docking
//! approach, and ownership of trash across many ticks.

use bevy_ecs::prelude::*;
use raylib::prelude::Vector3;
use std::collections::HashSet;

use trashbots::components::cleaningbot::{
    BotState, CleaningBot, DOCKING_RING, DockingStep, DumpApproach, FATNESS_REST,
    RETURN_THRESHOLD, STATION_FOOTPRINT, SweepLane,
};
use trashbots::components::rotation::Rotation;
use trashbots::components::trash::Trash;
use trashbots::components::worldposition::WorldPosition;
use trashbots::game::{setup_world, simulation_schedule, spawn_bot};
use trashbots::kinematics::{angle_delta, heading_towards, planar_distance};
use trashbots::resources::disposalstation::{
    DisposalStation, FILL_STEP, INITIAL_FILL, PARTICLES_PER_WASTE,
};
use trashbots::resources::worldtime::WorldTime;

const MAX_TICKS: usize = 2000;

fn make_world() -> World {
    let mut world = World::new();
    world.insert_resource(WorldTime::default());
    world.insert_resource(DisposalStation::with_seed(1));
    world
}

fn lane_around(home: Vector3) -> SweepLane {
    SweepLane::new(home.x - 5.0, home.x + 45.0, -165.0, 165.0)
}

fn spawn_bot_at(world: &mut World, x: f32, z: f32) -> Entity {
    let home = Vector3::new(x, 0.0, z);
    spawn_bot(world, CleaningBot::new(home, lane_around(home)))
}

fn spawn_trash_at(world: &mut World, x: f32, z: f32) -> Entity {
    world
        .spawn((Trash::new(), WorldPosition::new(x, 0.0, z)))
        .id()
}

fn bot(world: &World, entity: Entity) -> CleaningBot {
    world.get::<CleaningBot>(entity).cloned().unwrap()
}

fn position(world: &World, entity: Entity) -> Vector3 {
    world.get::<WorldPosition>(entity).unwrap().pos
}

fn heading(world: &World, entity: Entity) -> f32 {
    world.get::<Rotation>(entity).unwrap().degrees
}

#[test]
fn searching_bot_picks_up_trash_within_reach() {
    let mut world = make_world();
    let b = spawn_bot_at(&mut world, 50.0, 50.0);
    let t = spawn_trash_at(&mut world, 52.0, 48.0);
    let mut schedule = simulation_schedule();

    schedule.run(&mut world);

    assert!(world.get::<Trash>(t).unwrap().collected);
    let state = bot(&world, b);
    assert_eq!(state.state.label(), "eating");
    assert_eq!(state.carrying, Some(t));
    // the pickup tick does not move the bot
    let pos = position(&world, b);
    assert_eq!((pos.x, pos.z), (50.0, 50.0));
}

#[test]
fn trash_outside_reach_is_left_alone() {
    let mut world = make_world();
    let b = spawn_bot_at(&mut world, 50.0, 50.0);
    let t = spawn_trash_at(&mut world, 56.0, 50.0);
    let mut schedule = simulation_schedule();

    schedule.run(&mut world);

    assert!(!world.get::<Trash>(t).unwrap().collected);
    assert_eq!(bot(&world, b).state, BotState::Searching);
}

#[test]
fn full_cycle_returns_to_searching_and_feeds_station_once() {
    let mut world = make_world();
    let b = spawn_bot_at(&mut world, 50.0, 50.0);
    let t = spawn_trash_at(&mut world, 52.0, 48.0);
    let mut schedule = simulation_schedule();

    let mut visited: Vec<&'static str> = Vec::new();
    for _ in 0..MAX_TICKS {
        schedule.run(&mut world);
        let current = bot(&world, b);
        let label = current.state.label();

        if visited.last() != Some(&label) {
            if label == "dumping_animation" {
                let pos = position(&world, b);
                assert!(planar_distance(pos, Vector3::zero()) < RETURN_THRESHOLD);
                let outward = heading_towards(Vector3::zero(), pos).unwrap();
                assert!(angle_delta(heading(&world, b), outward).abs() < 1e-3);
            }
            visited.push(label);
        }

        // the carried trash travels with the bot
        if current.carrying.is_some() {
            let (bp, tp) = (position(&world, b), position(&world, t));
            assert!((bp.x - tp.x).abs() < 1e-4 && (bp.z - tp.z).abs() < 1e-4);
        }

        if visited.len() > 1 && label == "searching" {
            break;
        }
    }

    assert_eq!(
        visited,
        vec![
            "eating",
            "returning",
            "dumping_animation",
            "restart_position",
            "searching"
        ]
    );

    let done = bot(&world, b);
    assert!(done.carrying.is_none());
    assert_eq!(done.target_fatness, FATNESS_REST);
    assert!(planar_distance(position(&world, b), done.home) < 5.0 + 1e-3);

    let station = world.resource::<DisposalStation>();
    assert_eq!(station.particles.len(), PARTICLES_PER_WASTE);
    assert!((station.fill_level - (INITIAL_FILL + FILL_STEP)).abs() < 1e-5);
}

#[test]
fn two_bots_never_share_one_trash() {
    let mut world = make_world();
    let first = spawn_bot_at(&mut world, 50.0, 50.0);
    let second = spawn_bot_at(&mut world, 50.0, 50.0);
    let t = spawn_trash_at(&mut world, 51.0, 51.0);
    let mut schedule = simulation_schedule();

    schedule.run(&mut world);

    let carriers: Vec<Entity> = [first, second]
        .into_iter()
        .filter(|e| bot(&world, *e).carrying == Some(t))
        .collect();
    assert_eq!(carriers.len(), 1);

    let other = if carriers[0] == first { second } else { first };
    assert_eq!(bot(&world, other).state, BotState::Searching);
}

#[test]
fn docking_bot_holds_on_the_ring_facing_the_station() {
    let mut world = make_world();
    let b = spawn_bot_at(&mut world, 60.0, 0.0);
    let t = spawn_trash_at(&mut world, 60.0, 0.0);
    world.get_mut::<Trash>(t).unwrap().collected = true;
    {
        let mut entity = world.entity_mut(b);
        let mut state = entity.get_mut::<CleaningBot>().unwrap();
        state.approach = DumpApproach::Docking;
        state.carrying = Some(t);
        state.state = BotState::Returning;
    }
    let mut schedule = simulation_schedule();

    let mut docked = false;
    let mut dumping_at = None;
    for _ in 0..MAX_TICKS {
        schedule.run(&mut world);
        match bot(&world, b).state {
            BotState::Docking(_) => docked = true,
            BotState::DumpingAnimation(_) => {
                dumping_at = Some(position(&world, b));
                break;
            }
            _ => {}
        }
    }

    assert!(docked);
    let pos = dumping_at.expect("bot never started dumping");
    assert!((planar_distance(pos, Vector3::zero()) - DOCKING_RING).abs() < 0.01);
    let facing = heading_towards(pos, Vector3::zero()).unwrap();
    assert!(angle_delta(heading(&world, b), facing).abs() < 1e-3);
}

#[test]
fn docking_pushes_bot_out_of_station_footprint_then_turns() {
    let mut world = make_world();
    let b = spawn_bot_at(&mut world, 3.0, 4.0);
    {
        let mut entity = world.entity_mut(b);
        let mut state = entity.get_mut::<CleaningBot>().unwrap();
        state.approach = DumpApproach::Docking;
        state.state = BotState::Docking(DockingStep::Clearing);
    }
    let mut schedule = simulation_schedule();

    schedule.run(&mut world);
    let pos = position(&world, b);
    assert!((planar_distance(pos, Vector3::zero()) - STATION_FOOTPRINT).abs() < 1e-3);
    // pushed straight out along the same ray
    assert!((pos.x / pos.z - 0.75).abs() < 1e-3);

    let mut aligning_ticks = 0;
    for _ in 0..MAX_TICKS {
        schedule.run(&mut world);
        let current = bot(&world, b);
        let dist = planar_distance(position(&world, b), Vector3::zero());
        assert!(dist >= STATION_FOOTPRINT - 1e-3);
        match current.state {
            BotState::Docking(DockingStep::Aligning) => aligning_ticks += 1,
            BotState::DumpingAnimation(_) => break,
            _ => {}
        }
    }
    // heading 0 has to swing round by well over one turn step
    assert!(aligning_ticks > 1);
}

#[test]
fn zero_distance_steering_does_not_move_the_bot() {
    let mut world = make_world();
    let b = spawn_bot_at(&mut world, 0.0, 0.0);
    world.get_mut::<CleaningBot>(b).unwrap().state = BotState::Returning;
    world.get_mut::<Rotation>(b).unwrap().degrees = 42.0;
    let mut schedule = simulation_schedule();

    schedule.run(&mut world);

    let pos = position(&world, b);
    assert!(pos.x.is_finite() && pos.z.is_finite());
    assert_eq!((pos.x, pos.z), (0.0, 0.0));
    assert_eq!(heading(&world, b), 42.0);
    assert_eq!(bot(&world, b).state.label(), "dumping_animation");
}

#[test]
fn populated_board_keeps_ownership_invariants() {
    let mut world = World::new();
    setup_world(&mut world, 7, 5, 20, DumpApproach::Direct);
    let mut schedule = simulation_schedule();

    let mut collected_before = 0;
    let mut deliveries_seen = false;
    for _ in 0..MAX_TICKS {
        schedule.run(&mut world);

        let carried: Vec<Entity> = {
            let mut q = world.query::<&CleaningBot>();
            q.iter(&world).filter_map(|b| b.carrying).collect()
        };
        let unique: HashSet<Entity> = carried.iter().copied().collect();
        assert_eq!(unique.len(), carried.len(), "trash held by two bots");
        for t in &carried {
            assert!(world.get::<Trash>(*t).unwrap().collected);
        }

        let collected = {
            let mut q = world.query::<&Trash>();
            q.iter(&world).filter(|t| t.collected).count()
        };
        assert!(collected >= collected_before, "collected flag was reset");
        collected_before = collected;

        let mut q = world.query::<&WorldPosition>();
        for p in q.iter(&world) {
            assert_eq!(p.pos.y, 0.0);
        }

        deliveries_seen |= !world.resource::<DisposalStation>().particles.is_empty();
    }

    assert!(collected_before > 0);
    assert!(deliveries_seen);
}

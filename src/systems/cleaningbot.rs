//! Cleaning bot controller.
//!
//! Advances every [`CleaningBot`] by one tick of its state machine. Bots are
//! processed one after another inside a single system run, so when two bots
//! reach the same [`Trash`] in the same tick the first one in query order
//! claims it and the second sees `collected == true`. Running bots in
//! parallel would need an atomic compare-and-set on that flag instead.
//!
//! # Per-state behavior
//!
//! - `searching` – check every uncollected trash against the per-axis pickup
//!   reach; on a hit claim it, otherwise walk the sweep pattern
//! - `eating` – chew through the mouth cycles while getting fatter
//! - `returning` – walk straight at the station, dragging the trash along
//! - `docking` – clear the station footprint, hold on the ring, face the station
//! - `dumping_animation` – throw the waste, notify the station once, let go
//! - `restart_position` – walk back home, then resume the sweep
//!
//! # Related
//!
//! - [`crate::components::cleaningbot`] – bot data and tuning constants
//! - [`crate::kinematics`] – the heading/advance formulas used for walking

use bevy_ecs::prelude::*;
use log::debug;
use raylib::prelude::Vector3;
use std::f32::consts::TAU;

use crate::components::cleaningbot::{
    BotState, Chewing, CleaningBot, DOCKING_RING, DOCKING_TURN_STEP, DUMP_NOTIFY_AT, DUMP_STEP,
    DockingStep, DumpApproach, FATNESS_FULL, FATNESS_REST, HOME_THRESHOLD, LEG_PHASE_STEP,
    MOUTH_HEIGHT, PICKUP_REACH, RETURN_THRESHOLD, ROW_SPACING, STATION_FOOTPRINT, WasteThrow,
};
use crate::components::rotation::Rotation;
use crate::components::trash::Trash;
use crate::components::worldposition::WorldPosition;
use crate::kinematics::{
    advance, angle_delta, heading_towards, normalize_degrees, planar_distance,
};
use crate::resources::disposalstation::DisposalStation;

/// Distance under which a docking bot counts as standing on the ring.
const RING_TOLERANCE: f32 = 1e-3;

type TrashQuery<'w, 's> =
    Query<'w, 's, (Entity, &'static mut Trash, &'static mut WorldPosition), Without<CleaningBot>>;

/// Advance every bot by one tick.
pub fn cleaning_bot_system(
    mut bots: Query<
        (Entity, &mut CleaningBot, &mut WorldPosition, &mut Rotation),
        Without<Trash>,
    >,
    mut trash: TrashQuery,
    mut station: ResMut<DisposalStation>,
) {
    for (entity, mut bot, mut position, mut rotation) in bots.iter_mut() {
        let before = bot.state.label();
        step_bot(
            &mut bot,
            &mut position.pos,
            &mut rotation.degrees,
            &mut trash,
            &mut station,
        );
        if before != bot.state.label() {
            debug!("Bot {:?}: {} -> {}", entity, before, bot.state);
        }
    }
}

fn step_bot(
    bot: &mut CleaningBot,
    pos: &mut Vector3,
    heading: &mut f32,
    trash: &mut TrashQuery,
    station: &mut DisposalStation,
) {
    bot.update_fatness();

    match bot.state {
        BotState::Searching => search(bot, pos, heading, trash),
        BotState::Eating(mut chewing) => {
            bot.state = if chewing.tick() {
                BotState::Returning
            } else {
                BotState::Eating(chewing)
            };
        }
        BotState::Returning => return_to_station(bot, pos, heading, station.position),
        BotState::Docking(step) => dock(bot, pos, heading, step, station.position),
        BotState::DumpingAnimation(throw) => dump(bot, throw, station),
        BotState::RestartPosition => walk_home(bot, pos, heading),
    }

    if bot.state.is_walking() {
        bot.leg_phase = (bot.leg_phase + LEG_PHASE_STEP) % TAU;
    }

    drag_carried(bot, *pos, trash);
}

fn search(bot: &mut CleaningBot, pos: &mut Vector3, heading: &mut f32, trash: &mut TrashQuery) {
    if let Some(found) = claim_trash_in_reach(*pos, trash) {
        bot.carrying = Some(found);
        bot.target_fatness = FATNESS_FULL;
        bot.state = BotState::Eating(Chewing::default());
        return;
    }
    sweep_step(bot, pos, heading);
}

/// Claim the first uncollected trash within [`PICKUP_REACH`] on both axes.
fn claim_trash_in_reach(pos: Vector3, trash: &mut TrashQuery) -> Option<Entity> {
    for (entity, mut item, item_pos) in trash.iter_mut() {
        if item.collected {
            continue;
        }
        if (item_pos.pos.x - pos.x).abs() <= PICKUP_REACH
            && (item_pos.pos.z - pos.z).abs() <= PICKUP_REACH
        {
            item.collected = true;
            return Some(entity);
        }
    }
    None
}

/// One tick of the boustrophedon sweep.
///
/// The bot first lines up with the current row, then walks it along Z. At a
/// Z bound it turns around and moves on to the next row, wrapping back to the
/// first row past the end of its lane.
fn sweep_step(bot: &mut CleaningBot, pos: &mut Vector3, heading: &mut f32) {
    let lane = bot.lane;
    let speed = bot.speed;

    if (pos.x - bot.sweep.row_x).abs() > RING_TOLERANCE {
        let row_start = Vector3::new(bot.sweep.row_x, pos.y, pos.z);
        if planar_distance(*pos, row_start) <= speed {
            pos.x = bot.sweep.row_x;
        } else if let Some(h) = heading_towards(*pos, row_start) {
            *heading = h;
            advance(pos, h, speed);
        }
        return;
    }

    *heading = if bot.sweep.forward { 0.0 } else { 180.0 };
    advance(pos, *heading, speed);

    let at_bound = if bot.sweep.forward {
        pos.z >= lane.max_z
    } else {
        pos.z <= lane.min_z
    };
    if at_bound {
        pos.z = pos.z.clamp(lane.min_z, lane.max_z);
        bot.sweep.forward = !bot.sweep.forward;
        *heading = normalize_degrees(*heading + 180.0);
        let next_row = bot.sweep.row_x + ROW_SPACING;
        bot.sweep.row_x = if next_row > lane.max_x {
            lane.first_row()
        } else {
            next_row
        };
    }
}

fn return_to_station(bot: &mut CleaningBot, pos: &mut Vector3, heading: &mut f32, station: Vector3) {
    let distance = planar_distance(*pos, station);
    match bot.approach {
        DumpApproach::Direct if distance < RETURN_THRESHOLD => {
            // face away from the station and throw over the shoulder
            if let Some(outward) = heading_towards(station, *pos) {
                *heading = outward;
            }
            bot.state = BotState::DumpingAnimation(begin_throw(*pos, station));
            return;
        }
        DumpApproach::Docking if distance < DOCKING_RING => {
            bot.state = BotState::Docking(DockingStep::Clearing);
            return;
        }
        _ => {}
    }

    if let Some(h) = heading_towards(*pos, station) {
        *heading = h;
        advance(pos, h, bot.speed);
    }
}

fn dock(
    bot: &mut CleaningBot,
    pos: &mut Vector3,
    heading: &mut f32,
    step: DockingStep,
    station: Vector3,
) {
    match step {
        DockingStep::Clearing => {
            let outward = heading_towards(station, *pos).unwrap_or(*heading);
            let distance = planar_distance(*pos, station);
            if distance < STATION_FOOTPRINT {
                // overlapping the station: snap out onto the footprint edge
                let h = outward.to_radians();
                pos.x = station.x + h.sin() * STATION_FOOTPRINT;
                pos.z = station.z + h.cos() * STATION_FOOTPRINT;
            } else if distance < DOCKING_RING - RING_TOLERANCE {
                advance(pos, outward, (DOCKING_RING - distance).min(bot.speed));
            } else {
                bot.state = BotState::Docking(DockingStep::Aligning);
            }
        }
        DockingStep::Aligning => {
            let Some(facing) = heading_towards(*pos, station) else {
                bot.state = BotState::DumpingAnimation(begin_throw(*pos, station));
                return;
            };
            let delta = angle_delta(*heading, facing);
            if delta.abs() <= DOCKING_TURN_STEP {
                *heading = facing;
                bot.state = BotState::DumpingAnimation(begin_throw(*pos, station));
            } else {
                *heading = normalize_degrees(*heading + DOCKING_TURN_STEP * delta.signum());
            }
        }
    }
}

fn begin_throw(pos: Vector3, station: Vector3) -> WasteThrow {
    WasteThrow::new(Vector3::new(pos.x, pos.y + MOUTH_HEIGHT, pos.z), station)
}

fn dump(bot: &mut CleaningBot, mut throw: WasteThrow, station: &mut DisposalStation) {
    throw.progress = (throw.progress + DUMP_STEP).min(1.0);

    if throw.progress > DUMP_NOTIFY_AT && !throw.delivered {
        station.receive_waste();
        throw.delivered = true;
    }

    if throw.progress >= 1.0 {
        bot.carrying = None;
        bot.target_fatness = FATNESS_REST;
        bot.state = BotState::RestartPosition;
    } else {
        bot.state = BotState::DumpingAnimation(throw);
    }
}

fn walk_home(bot: &mut CleaningBot, pos: &mut Vector3, heading: &mut f32) {
    if planar_distance(*pos, bot.home) < HOME_THRESHOLD {
        bot.reset_sweep();
        bot.state = BotState::Searching;
        return;
    }
    if let Some(h) = heading_towards(*pos, bot.home) {
        *heading = h;
        advance(pos, h, bot.speed);
    }
}

/// Keep the carried trash on the bot's ground position.
fn drag_carried(bot: &CleaningBot, pos: Vector3, trash: &mut TrashQuery) {
    let Some(entity) = bot.carrying else {
        return;
    };
    if let Ok((_, _, mut item_pos)) = trash.get_mut(entity) {
        item_pos.pos.x = pos.x;
        item_pos.pos.z = pos.z;
    }
}

//! Render pass.
//!
//! The main loop opens raylib's drawing scopes and hands them to
//! [`render_pass`] (inside 3D mode) and [`render_debug_ui`] (screen space).
//! Both read the ECS world only; nothing here mutates simulation state.
//!
//! Submodules:
//! - [`scene`] – axes, floor and base pad
//! - [`station`] – the disposal station model
//! - [`bot`] – bots, trash cubes and the thrown waste block

pub mod bot;
pub mod scene;
pub mod station;

use bevy_ecs::prelude::*;
use raylib::prelude::*;
use std::collections::BTreeMap;

use crate::components::cleaningbot::{CleaningBot, DOCKING_RING, STATION_FOOTPRINT};
use crate::components::rotation::Rotation;
use crate::components::trash::Trash;
use crate::components::worldposition::WorldPosition;
use crate::immediate::{double_sided, ellipse_ring, lines, translate, with_transform};
use crate::resources::arena::Arena;
use crate::resources::camera3d::Camera3DRes;
use crate::resources::debugmode::DebugMode;
use crate::resources::disposalstation::DisposalStation;
use crate::resources::texturestore::TextureStore;
use crate::resources::worldtime::WorldTime;

const LANE_COLOR: Color = Color::YELLOW;
const FOOTPRINT_COLOR: Color = Color::ORANGE;
const RING_COLOR: Color = Color::SKYBLUE;

/// Draw the whole scene in 3D camera space.
pub fn render_pass(world: &mut World, d3: &mut RaylibMode3D<RaylibDrawHandle>) {
    let trash: Vec<Vector3> = {
        let mut q = world.query::<(&Trash, &WorldPosition)>();
        q.iter(world)
            .filter(|(t, _)| !t.collected)
            .map(|(_, p)| p.pos)
            .collect()
    };
    let bots: Vec<(CleaningBot, Vector3, f32)> = {
        let mut q = world.query::<(&CleaningBot, &WorldPosition, &Rotation)>();
        q.iter(world)
            .map(|(b, p, r)| (b.clone(), p.pos, r.degrees))
            .collect()
    };
    let arena = *world.resource::<Arena>();
    let debug = world.contains_resource::<DebugMode>();
    let station = world.resource::<DisposalStation>();
    let textures = world.get_non_send_resource::<TextureStore>();

    double_sided(d3, |d| {
        scene::draw_axes(d);
        scene::draw_floor(d, arena.half_extent);
        scene::draw_base_pad(d);
        station::draw_station(d, station);

        for pos in &trash {
            bot::draw_trash(d, *pos);
        }
        for (b, pos, heading) in &bots {
            bot::draw_bot(d, b, *pos, *heading, textures);
        }

        if debug {
            for (b, _, _) in &bots {
                let lane = b.lane;
                scene::draw_ground_rect(d, LANE_COLOR, lane.min_x, lane.max_x, lane.min_z, lane.max_z);
            }
            draw_ground_circle(d, FOOTPRINT_COLOR, station.position, STATION_FOOTPRINT);
            draw_ground_circle(d, RING_COLOR, station.position, DOCKING_RING);
        }
    });
}

fn draw_ground_circle<D: RaylibDraw3D>(d: &mut D, tint: Color, center: Vector3, radius: f32) {
    let ring = ellipse_ring(48, radius, radius, 0.1);
    let segments: Vec<(Vector3, Vector3)> = ring.windows(2).map(|w| (w[0], w[1])).collect();
    with_transform(d, |d| {
        translate(d, center);
        lines(d, tint, &segments);
    });
}

/// Screen-space debug overlay, drawn while [`DebugMode`] is present.
pub fn render_debug_ui(world: &mut World, d: &mut RaylibDrawHandle) {
    if !world.contains_resource::<DebugMode>() {
        return;
    }

    let bots: Vec<(&'static str, Vector3)> = {
        let mut q = world.query::<(&CleaningBot, &WorldPosition)>();
        q.iter(world).map(|(b, p)| (b.state.label(), p.pos)).collect()
    };
    let remaining = {
        let mut q = world.query::<&Trash>();
        q.iter(world).filter(|t| !t.collected).count()
    };
    let cam = world.resource::<Camera3DRes>().0;
    let time = *world.resource::<WorldTime>();
    let station = world.resource::<DisposalStation>();

    let fps = d.get_fps();
    let text = format!(
        "DEBUG MODE (press F11 to toggle) | FPS: {} | tick {} | {:.1}s",
        fps, time.frame_count, time.elapsed
    );
    d.draw_text(&text, 10, 10, 10, Color::WHITE);

    let text = format!(
        "Station fill: {:.2}{}",
        station.fill_level,
        if station.is_flushing { " (flushing)" } else { "" }
    );
    d.draw_text(&text, 10, 30, 10, Color::WHITE);

    let text = format!("Trash remaining: {}", remaining);
    d.draw_text(&text, 10, 50, 10, Color::WHITE);

    let mut counts: BTreeMap<&'static str, usize> = BTreeMap::new();
    for (label, _) in &bots {
        *counts.entry(*label).or_default() += 1;
    }
    let mut y = 70;
    for (label, count) in &counts {
        d.draw_text(&format!("{}: {}", label, count), 10, y, 10, Color::WHITE);
        y += 15;
    }

    for (label, pos) in &bots {
        let above = Vector3::new(pos.x, pos.y + 14.0, pos.z);
        let screen = d.get_world_to_screen(above, cam);
        d.draw_text(label, screen.x as i32, screen.y as i32, 10, Color::YELLOW);
    }

    let cam_text = format!(
        "Camera pos: ({:.1}, {:.1}, {:.1}) fovy: {:.0}",
        cam.position.x, cam.position.y, cam.position.z, cam.fovy
    );
    let h = d.get_screen_height();
    d.draw_text(&cam_text, 10, h - 20, 10, Color::WHITE);
}

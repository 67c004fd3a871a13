//! Static scenery: coordinate axes, the floor and the base pad.

use raylib::prelude::*;

use crate::immediate::{lines, quads};

/// Length of each half axis.
const AXIS_EXTENT: f32 = 500.0;
/// Half size of the base pad under the station.
const PAD_HALF_EXTENT: f32 = 10.0;
/// Lift for ground overlays, so they do not z-fight with the floor.
const GROUND_LIFT: f32 = 0.05;

const FLOOR_COLOR: Color = Color::new(77, 77, 77, 255);
const PAD_COLOR: Color = Color::new(128, 128, 255, 255);

pub fn draw_axes<D: RaylibDraw3D>(d: &mut D) {
    let e = AXIS_EXTENT;
    lines(d, Color::RED, &[(Vector3::new(-e, 0.0, 0.0), Vector3::new(e, 0.0, 0.0))]);
    lines(d, Color::GREEN, &[(Vector3::new(0.0, -e, 0.0), Vector3::new(0.0, e, 0.0))]);
    lines(d, Color::BLUE, &[(Vector3::new(0.0, 0.0, -e), Vector3::new(0.0, 0.0, e))]);
}

pub fn draw_floor<D: RaylibDraw3D>(d: &mut D, half_extent: f32) {
    quads(d, FLOOR_COLOR, &ground_square(half_extent, 0.0));
}

pub fn draw_base_pad<D: RaylibDraw3D>(d: &mut D) {
    quads(d, PAD_COLOR, &ground_square(PAD_HALF_EXTENT, GROUND_LIFT));
}

/// Outline of a ground rectangle, used by the debug overlay.
pub fn draw_ground_rect<D: RaylibDraw3D>(
    d: &mut D,
    tint: Color,
    min_x: f32,
    max_x: f32,
    min_z: f32,
    max_z: f32,
) {
    let y = GROUND_LIFT * 2.0;
    let c = [
        Vector3::new(min_x, y, min_z),
        Vector3::new(max_x, y, min_z),
        Vector3::new(max_x, y, max_z),
        Vector3::new(min_x, y, max_z),
    ];
    lines(d, tint, &[(c[0], c[1]), (c[1], c[2]), (c[2], c[3]), (c[3], c[0])]);
}

fn ground_square(half: f32, y: f32) -> [Vector3; 4] {
    [
        Vector3::new(-half, y, -half),
        Vector3::new(-half, y, half),
        Vector3::new(half, y, half),
        Vector3::new(half, y, -half),
    ]
}

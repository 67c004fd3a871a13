//! Planar steering and projectile helpers shared by the bot controller and
//! the renderer.
//!
//! # Coordinate convention
//!
//! Headings are in degrees and measured with `atan2(dx, dz)`, so a heading of
//! 0° walks along +Z and 90° walks along +X. Moving one tick along a heading
//! adds `speed * (sin h, 0, cos h)` to the position. The Y axis is up and is
//! never touched by the planar helpers.

use raylib::prelude::Vector3;
use std::f32::consts::PI;

/// Below this planar distance a direction is considered undefined.
pub const MIN_STEER_DISTANCE: f32 = 1e-4;

/// Distance between two points ignoring height.
pub fn planar_distance(a: Vector3, b: Vector3) -> f32 {
    let dx = b.x - a.x;
    let dz = b.z - a.z;
    (dx * dx + dz * dz).sqrt()
}

/// Heading in degrees that points from `from` to `to`.
///
/// Returns `None` when both points share the same planar location, in which
/// case callers skip movement for the tick.
pub fn heading_towards(from: Vector3, to: Vector3) -> Option<f32> {
    let dx = to.x - from.x;
    let dz = to.z - from.z;
    if (dx * dx + dz * dz).sqrt() < MIN_STEER_DISTANCE {
        return None;
    }
    Some(dx.atan2(dz).to_degrees())
}

/// Advance `pos` by `speed` units along `heading_deg`.
pub fn advance(pos: &mut Vector3, heading_deg: f32, speed: f32) {
    let h = heading_deg.to_radians();
    pos.x += speed * h.sin();
    pos.z += speed * h.cos();
}

/// Wrap an angle in degrees into `[0, 360)`.
pub fn normalize_degrees(deg: f32) -> f32 {
    deg.rem_euclid(360.0)
}

/// Signed shortest rotation from `from` to `to`, in `(-180, 180]` degrees.
pub fn angle_delta(from: f32, to: f32) -> f32 {
    let d = normalize_degrees(to - from);
    if d > 180.0 { d - 360.0 } else { d }
}

/// Point along a thrown arc at progress `t` (clamped to `[0, 1]`).
///
/// Horizontally the point interpolates linearly from `start` to `end` and is
/// pushed sideways by `curve * sin(pi t)` along the planar perpendicular.
/// Vertically it blends the two heights and adds a parabolic lift of
/// `arc_height * 4 t (1 - t)`. Both offsets vanish at the endpoints.
pub fn projectile_point(start: Vector3, end: Vector3, t: f32, arc_height: f32, curve: f32) -> Vector3 {
    let t = t.clamp(0.0, 1.0);
    let dx = end.x - start.x;
    let dz = end.z - start.z;
    let len = (dx * dx + dz * dz).sqrt();

    let sway = curve * (PI * t).sin();
    let (side_x, side_z) = if len < MIN_STEER_DISTANCE {
        (0.0, 0.0)
    } else {
        (-dz / len * sway, dx / len * sway)
    };

    Vector3::new(
        start.x + dx * t + side_x,
        start.y + (end.y - start.y) * t + arc_height * 4.0 * t * (1.0 - t),
        start.z + dz * t + side_z,
    )
}

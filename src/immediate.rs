//! Safe wrappers around raylib's rlgl immediate-mode calls.
//!
//! Raylib's `draw_*` helpers cover boxes and lines, but the station bowl, the
//! water fan and the textured bot face need raw vertex batches. Every function
//! here takes the active 3D draw handle, so vertices can only be emitted
//! inside `begin_mode3D`, and transforms only change inside a
//! [`with_transform`] scope that always pops what it pushed.
//!
//! rlgl has no triangle fan or quad strip mode; [`triangle_fan`] and
//! [`quad_strip`] expand them into plain triangles and quads.

use raylib::ffi;
use raylib::prelude::*;

const RL_LINES: i32 = 0x0001;
const RL_TRIANGLES: i32 = 0x0004;
const RL_QUADS: i32 = 0x0007;

/// Run `f` inside a push/pop of the rlgl matrix stack.
pub fn with_transform<D: RaylibDraw3D, F: FnOnce(&mut D)>(d: &mut D, f: F) {
    unsafe { ffi::rlPushMatrix() };
    f(d);
    unsafe { ffi::rlPopMatrix() };
}

/// Run `f` with backface culling off, so winding order does not matter.
pub fn double_sided<D: RaylibDraw3D, F: FnOnce(&mut D)>(d: &mut D, f: F) {
    unsafe { ffi::rlDisableBackfaceCulling() };
    f(d);
    unsafe { ffi::rlEnableBackfaceCulling() };
}

pub fn translate<D: RaylibDraw3D>(_d: &mut D, by: Vector3) {
    unsafe { ffi::rlTranslatef(by.x, by.y, by.z) };
}

/// Rotate around the vertical axis. Local +Z ends up at `(sin h, 0, cos h)`.
pub fn rotate_y<D: RaylibDraw3D>(_d: &mut D, degrees: f32) {
    unsafe { ffi::rlRotatef(degrees, 0.0, 1.0, 0.0) };
}

pub fn rotate_x<D: RaylibDraw3D>(_d: &mut D, degrees: f32) {
    unsafe { ffi::rlRotatef(degrees, 1.0, 0.0, 0.0) };
}

pub fn scale<D: RaylibDraw3D>(_d: &mut D, by: Vector3) {
    unsafe { ffi::rlScalef(by.x, by.y, by.z) };
}

fn color(c: Color) {
    unsafe { ffi::rlColor4ub(c.r, c.g, c.b, c.a) };
}

fn vertex(v: Vector3) {
    unsafe { ffi::rlVertex3f(v.x, v.y, v.z) };
}

/// Emit quads; `corners` holds four vertices per quad.
pub fn quads<D: RaylibDraw3D>(_d: &mut D, tint: Color, corners: &[Vector3]) {
    unsafe { ffi::rlBegin(RL_QUADS) };
    color(tint);
    for v in corners {
        vertex(*v);
    }
    unsafe { ffi::rlEnd() };
}

/// Emit the strip of quads between two rings of equal length.
pub fn quad_strip<D: RaylibDraw3D>(d: &mut D, tint: Color, lower: &[Vector3], upper: &[Vector3]) {
    let corners: Vec<Vector3> = lower
        .windows(2)
        .zip(upper.windows(2))
        .flat_map(|(lo, up)| [lo[0], lo[1], up[1], up[0]])
        .collect();
    quads(d, tint, &corners);
}

/// Emit a fan of triangles from `center` to consecutive `rim` points.
pub fn triangle_fan<D: RaylibDraw3D>(_d: &mut D, tint: Color, center: Vector3, rim: &[Vector3]) {
    unsafe { ffi::rlBegin(RL_TRIANGLES) };
    color(tint);
    for pair in rim.windows(2) {
        vertex(center);
        vertex(pair[0]);
        vertex(pair[1]);
    }
    unsafe { ffi::rlEnd() };
}

/// Emit independent line segments.
pub fn lines<D: RaylibDraw3D>(_d: &mut D, tint: Color, segments: &[(Vector3, Vector3)]) {
    unsafe { ffi::rlBegin(RL_LINES) };
    color(tint);
    for (a, b) in segments {
        vertex(*a);
        vertex(*b);
    }
    unsafe { ffi::rlEnd() };
}

/// Emit the six faces of the axis-aligned box between `min` and `max`.
pub fn cuboid<D: RaylibDraw3D>(d: &mut D, tint: Color, min: Vector3, max: Vector3) {
    quads(d, tint, &cuboid_corners(min, max));
}

/// One quad with `texture` mapped over it. Corners go bottom-left,
/// bottom-right, top-right, top-left as seen from the front.
pub fn textured_quad<D: RaylibDraw3D>(
    _d: &mut D,
    texture: &Texture2D,
    tint: Color,
    corners: [Vector3; 4],
) {
    const UV: [(f32, f32); 4] = [(0.0, 1.0), (1.0, 1.0), (1.0, 0.0), (0.0, 0.0)];
    unsafe {
        ffi::rlSetTexture(texture.id);
        ffi::rlBegin(RL_QUADS);
    }
    color(tint);
    for (corner, (u, v)) in corners.iter().zip(UV) {
        unsafe { ffi::rlTexCoord2f(u, v) };
        vertex(*corner);
    }
    unsafe {
        ffi::rlEnd();
        ffi::rlSetTexture(0);
    }
}

/// The 24 corners (six quads) of an axis-aligned box.
#[rustfmt::skip]
pub fn cuboid_corners(min: Vector3, max: Vector3) -> [Vector3; 24] {
    let v = |x: f32, y: f32, z: f32| Vector3::new(x, y, z);
    let (a, b) = (min, max);
    [
        // front (+z)
        v(a.x, a.y, b.z), v(b.x, a.y, b.z), v(b.x, b.y, b.z), v(a.x, b.y, b.z),
        // back (-z)
        v(b.x, a.y, a.z), v(a.x, a.y, a.z), v(a.x, b.y, a.z), v(b.x, b.y, a.z),
        // left (-x)
        v(a.x, a.y, a.z), v(a.x, a.y, b.z), v(a.x, b.y, b.z), v(a.x, b.y, a.z),
        // right (+x)
        v(b.x, a.y, b.z), v(b.x, a.y, a.z), v(b.x, b.y, a.z), v(b.x, b.y, b.z),
        // top
        v(a.x, b.y, b.z), v(b.x, b.y, b.z), v(b.x, b.y, a.z), v(a.x, b.y, a.z),
        // bottom
        v(a.x, a.y, a.z), v(b.x, a.y, a.z), v(b.x, a.y, b.z), v(a.x, a.y, b.z),
    ]
}

/// `segments + 1` points on a horizontal ellipse at height `y`, closing the loop.
pub fn ellipse_ring(segments: usize, radius_x: f32, radius_z: f32, y: f32) -> Vec<Vector3> {
    (0..=segments)
        .map(|i| {
            let angle = std::f32::consts::TAU * i as f32 / segments as f32;
            Vector3::new(angle.cos() * radius_x, y, angle.sin() * radius_z)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ring_closes_on_itself() {
        let ring = ellipse_ring(32, 10.0, 5.0, 2.0);
        assert_eq!(ring.len(), 33);
        let (first, last) = (ring[0], ring[32]);
        assert!((first.x - last.x).abs() < 1e-4);
        assert!((first.z - last.z).abs() < 1e-4);
        assert!(ring.iter().all(|p| p.y == 2.0));
        assert!((ring[8].z - 5.0).abs() < 1e-4);
    }

    #[test]
    fn cuboid_corners_stay_on_the_box() {
        let min = Vector3::new(-1.0, 0.0, -2.0);
        let max = Vector3::new(1.0, 3.0, 2.0);
        let corners = cuboid_corners(min, max);
        for c in corners {
            assert!(c.x == min.x || c.x == max.x);
            assert!(c.y == min.y || c.y == max.y);
            assert!(c.z == min.z || c.z == max.z);
        }
        // every face is planar on one axis
        for face in corners.chunks(4) {
            let flat_x = face.iter().all(|c| c.x == face[0].x);
            let flat_y = face.iter().all(|c| c.y == face[0].y);
            let flat_z = face.iter().all(|c| c.z == face[0].z);
            assert!(flat_x || flat_y || flat_z);
        }
    }
}

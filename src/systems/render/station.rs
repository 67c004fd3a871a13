//! Disposal station model.
//!
//! Pedestal, tapered bowl, water surface and tank, all sized from the
//! station's `scale`. The water rises with `fill_level`, swirls and waves
//! while flushing, and carries the waste particles as small double cones.

use raylib::prelude::*;

use crate::immediate::{
    cuboid, ellipse_ring, quad_strip, rotate_y, translate, triangle_fan, with_transform,
};
use crate::resources::disposalstation::{DisposalStation, WasteParticle};

const SEGMENTS: usize = 32;
const PARTICLE_SEGMENTS: usize = 8;

const PORCELAIN: Color = Color::new(242, 242, 242, 255);
const BOWL_INSIDE: Color = Color::new(230, 230, 230, 255);
const WATER: Color = Color::new(51, 153, 255, 153);
const TANK: Color = Color::new(237, 237, 237, 255);
const TANK_LID: Color = Color::new(225, 225, 225, 255);

pub fn draw_station<D: RaylibDraw3D>(d: &mut D, station: &DisposalStation) {
    let s = station.scale;
    with_transform(d, |d| {
        translate(d, station.position);

        // pedestal
        let half = s * 0.4;
        cuboid(
            d,
            PORCELAIN,
            Vector3::new(-half, 0.0, -half),
            Vector3::new(half, s * 0.3, half),
        );

        draw_bowl(d, s);
        draw_water(d, station);
        draw_tank(d, s);
    });
}

fn draw_bowl<D: RaylibDraw3D>(d: &mut D, s: f32) {
    let height = s * 0.4;
    with_transform(d, |d| {
        translate(d, Vector3::new(0.0, s * 0.3, 0.0));
        let lower = ellipse_ring(SEGMENTS, s * 0.7, s * 0.6, 0.0);
        let upper = ellipse_ring(SEGMENTS, s * 0.6, s * 0.5, height);
        quad_strip(d, PORCELAIN, &lower, &upper);

        let rim = ellipse_ring(SEGMENTS, s * 0.55, s * 0.45, height);
        triangle_fan(d, BOWL_INSIDE, Vector3::new(0.0, height * 0.7, 0.0), &rim);
    });
}

fn draw_water<D: RaylibDraw3D>(d: &mut D, station: &DisposalStation) {
    let s = station.scale;
    with_transform(d, |d| {
        translate(d, Vector3::new(0.0, water_height(s, station.fill_level), 0.0));
        if station.is_flushing {
            rotate_y(d, station.swirl_degrees);
        }
        let rim = water_rim(s, station.is_flushing, station.swirl_degrees);
        triangle_fan(d, WATER, Vector3::zero(), &rim);

        for particle in &station.particles {
            draw_particle(d, particle, s);
        }
    });
}

fn draw_particle<D: RaylibDraw3D>(d: &mut D, particle: &WasteParticle, s: f32) {
    let size = particle.size * s * 0.05;
    let [r, g, b] = particle.color;
    let tint = Color::new(
        (r * 255.0) as u8,
        (g * 255.0) as u8,
        (b * 255.0) as u8,
        255,
    );
    with_transform(d, |d| {
        translate(d, Vector3::new(particle.x, -particle.y, particle.z));
        let rim = ellipse_ring(PARTICLE_SEGMENTS, size, size, 0.0);
        triangle_fan(d, tint, Vector3::new(0.0, size, 0.0), &rim);
        triangle_fan(d, tint, Vector3::new(0.0, -size, 0.0), &rim);
    });
}

fn draw_tank<D: RaylibDraw3D>(d: &mut D, s: f32) {
    let width = s * 0.8;
    let height = s * 0.8;
    let depth = s * 0.4;
    let overhang = s * 0.05;
    with_transform(d, |d| {
        translate(d, Vector3::new(0.0, s * 0.3, -s * 0.6));
        cuboid(
            d,
            TANK,
            Vector3::new(-width / 2.0, 0.0, -depth / 2.0),
            Vector3::new(width / 2.0, height, depth / 2.0),
        );
        cuboid(
            d,
            TANK_LID,
            Vector3::new(-width / 2.0 - overhang, height, -depth / 2.0 - overhang),
            Vector3::new(width / 2.0 + overhang, height + overhang, depth / 2.0 + overhang),
        );
    });
}

/// Height of the water surface above the ground for a fill level in `0..=1`.
pub fn water_height(scale: f32, fill_level: f32) -> f32 {
    let bowl_height = scale * 0.7;
    bowl_height * 0.4 + bowl_height * 0.3 * fill_level
}

/// Outline of the water surface. While flushing the rim ripples with four
/// waves that travel with the swirl.
pub fn water_rim(scale: f32, flushing: bool, swirl_degrees: f32) -> Vec<Vector3> {
    let mut rim = ellipse_ring(SEGMENTS, scale * 0.45, scale * 0.35, 0.0);
    if flushing {
        for (i, p) in rim.iter_mut().enumerate() {
            let angle = std::f32::consts::TAU * i as f32 / SEGMENTS as f32;
            let wave = (angle * 4.0 + swirl_degrees * 0.1).sin() * 0.5;
            p.x *= 1.0 + wave * 0.1;
            p.z *= 1.0 + wave * 0.1;
        }
    }
    rim
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn water_rises_with_fill_level() {
        let low = water_height(15.0, 0.2);
        let high = water_height(15.0, 0.8);
        assert!(high > low);
        assert!((water_height(15.0, 0.0) - 15.0 * 0.7 * 0.4).abs() < 1e-5);
    }

    #[test]
    fn calm_water_is_an_ellipse() {
        let rim = water_rim(15.0, false, 90.0);
        assert!((rim[0].x - 15.0 * 0.45).abs() < 1e-4);
        assert!((rim[8].z - 15.0 * 0.35).abs() < 1e-4);
    }

    #[test]
    fn flushing_water_ripples_within_five_percent() {
        let calm = water_rim(15.0, false, 0.0);
        let rippled = water_rim(15.0, true, 30.0);
        assert_ne!(calm, rippled);
        for (c, r) in calm.iter().zip(&rippled) {
            let (cr, rr) = (c.x.hypot(c.z), r.x.hypot(r.z));
            assert!((rr - cr).abs() <= cr * 0.05 + 1e-4);
        }
    }
}

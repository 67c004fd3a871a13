//! Disposal station resource.
//!
//! The station sits at the world origin and collects the waste thrown by the
//! bots. Every delivery drops a handful of [`WasteParticle`]s into the bowl
//! and raises the fill level; crossing the high-water mark starts a flush
//! that spirals the particles down the drain and lowers the level again.
//!
//! # Flush cycle
//!
//! 1. [`DisposalStation::receive_waste`] adds particles and raises `fill_level`
//! 2. Above [`HIGH_WATER`] it calls [`DisposalStation::flush`]
//! 3. [`DisposalStation::update`] advances `flush_progress` each tick
//! 4. At progress 1 the particles are cleared and the level drains

use bevy_ecs::prelude::*;
use fastrand::Rng;
use log::info;
use raylib::prelude::Vector3;

/// Base size of the station model. Particle radii and heights scale with it.
pub const STATION_SCALE: f32 = 15.0;
/// Fill of a fresh station. Five deliveries take it past [`HIGH_WATER`].
pub const INITIAL_FILL: f32 = 0.3;
/// Fill added per delivery.
pub const FILL_STEP: f32 = 0.1;
/// Fill levels above this trigger an automatic flush.
pub const HIGH_WATER: f32 = 0.8;
/// Fill removed by a completed flush.
pub const FLUSH_DRAIN: f32 = 0.3;
/// A flush never drains below this level.
pub const FILL_FLOOR: f32 = 0.2;
pub const FLUSH_STEP: f32 = 0.02;
/// Swirl rotation per flushing tick, in degrees.
pub const SWIRL_STEP: f32 = 15.0;
pub const PARTICLES_PER_WASTE: usize = 5;
/// Height new particles drop in from.
pub const PARTICLE_SPAWN_HEIGHT: f32 = 2.0;
/// Idle particles sink until they reach this height.
pub const SETTLE_HEIGHT: f32 = 0.1;
pub const SETTLE_STEP: f32 = 0.05;

/// One blob of waste floating in the bowl.
///
/// `x`/`z` are relative to the station centre; `y` is the depth below the
/// water surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WasteParticle {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub size: f32,
    /// RGB in `0..1`.
    pub color: [f32; 3],
    /// Distance from the centre when dropped in.
    pub radius: f32,
    /// Angular offset on the flush spiral, in degrees.
    pub offset: f32,
    /// Depth the particle spirals from while flushing.
    pub base_y: f32,
}

/// The central disposal station.
#[derive(Resource, Debug, Clone)]
pub struct DisposalStation {
    pub position: Vector3,
    pub scale: f32,
    /// Water level in `0..=1`.
    pub fill_level: f32,
    pub is_flushing: bool,
    /// Progress of the running flush, `0..1`.
    pub flush_progress: f32,
    /// Accumulated swirl angle in degrees.
    pub swirl_degrees: f32,
    pub particles: Vec<WasteParticle>,
    rng: Rng,
}

impl Default for DisposalStation {
    fn default() -> Self {
        Self::new()
    }
}

impl DisposalStation {
    pub fn new() -> Self {
        Self::with_rng(Rng::new())
    }

    /// Create a station whose particle jitter is reproducible.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(Rng::with_seed(seed))
    }

    fn with_rng(rng: Rng) -> Self {
        Self {
            position: Vector3::zero(),
            scale: STATION_SCALE,
            fill_level: INITIAL_FILL,
            is_flushing: false,
            flush_progress: 0.0,
            swirl_degrees: 0.0,
            particles: Vec::new(),
            rng,
        }
    }

    /// Accept one delivery of waste.
    ///
    /// Drops [`PARTICLES_PER_WASTE`] particles into the bowl and raises the
    /// fill level by [`FILL_STEP`]. Crossing [`HIGH_WATER`] starts a flush.
    pub fn receive_waste(&mut self) {
        for _ in 0..PARTICLES_PER_WASTE {
            let angle = self.random_range(0.0, 360.0).to_radians();
            let radius = self.random_range(0.0, self.scale * 0.3);
            let particle = WasteParticle {
                x: angle.cos() * radius,
                y: PARTICLE_SPAWN_HEIGHT,
                z: angle.sin() * radius,
                size: self.random_range(0.8, 1.2),
                color: [
                    self.random_range(0.3, 0.5),
                    self.random_range(0.15, 0.25),
                    0.0,
                ],
                radius,
                offset: self.random_range(0.0, 360.0),
                base_y: self.random_range(0.1, 0.5),
            };
            self.particles.push(particle);
        }

        self.fill_level = (self.fill_level + FILL_STEP).min(1.0);
        if self.fill_level > HIGH_WATER {
            self.flush();
        }
    }

    /// Start a flush. Does nothing while a flush is already running.
    pub fn flush(&mut self) {
        if self.is_flushing {
            return;
        }
        info!("Disposal station flushing at fill level {:.2}", self.fill_level);
        self.is_flushing = true;
        self.flush_progress = 0.0;
    }

    /// Advance the station by one tick.
    pub fn update(&mut self) {
        if self.is_flushing {
            self.flush_progress += FLUSH_STEP;
            self.swirl_degrees += SWIRL_STEP;

            let shrink = (1.0 - self.flush_progress).max(0.0);
            for particle in self.particles.iter_mut() {
                let angle = (self.swirl_degrees + particle.offset).to_radians();
                let radius = particle.radius * shrink;
                particle.x = angle.cos() * radius;
                particle.z = angle.sin() * radius;
                particle.y = particle.base_y * shrink;
            }

            if self.flush_progress >= 1.0 {
                self.flush_progress = 0.0;
                self.is_flushing = false;
                self.fill_level = (self.fill_level - FLUSH_DRAIN).max(FILL_FLOOR);
                self.particles.clear();
            }
        }

        if !self.is_flushing {
            for particle in self.particles.iter_mut() {
                if particle.y > SETTLE_HEIGHT {
                    particle.y = (particle.y - SETTLE_STEP).max(SETTLE_HEIGHT);
                }
            }
        }
    }

    /// Uniform sample in `[min, max)`.
    fn random_range(&mut self, min: f32, max: f32) -> f32 {
        min + self.rng.f32() * (max - min)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    #[test]
    fn receive_waste_adds_particles_and_fill() {
        let mut station = DisposalStation::with_seed(7);
        station.receive_waste();
        assert_eq!(station.particles.len(), PARTICLES_PER_WASTE);
        assert!((station.fill_level - (INITIAL_FILL + FILL_STEP)).abs() < EPS);
        assert!(!station.is_flushing);

        for p in &station.particles {
            assert_eq!(p.y, PARTICLE_SPAWN_HEIGHT);
            assert!(p.radius >= 0.0 && p.radius <= STATION_SCALE * 0.3);
            assert!(p.size >= 0.8 && p.size <= 1.2);
            assert!(p.base_y >= 0.1 && p.base_y <= 0.5);
            assert!((p.x * p.x + p.z * p.z).sqrt() <= p.radius + EPS);
        }
    }

    #[test]
    fn crossing_high_water_starts_flush() {
        let mut station = DisposalStation::with_seed(1);
        station.fill_level = 0.75;
        station.receive_waste();
        assert!((station.fill_level - 0.85).abs() < EPS);
        assert!(station.is_flushing);
        assert_eq!(station.flush_progress, 0.0);
    }

    #[test]
    fn fifth_delivery_from_fresh_station_flushes() {
        let mut station = DisposalStation::with_seed(3);
        for _ in 0..4 {
            station.receive_waste();
        }
        assert!(!station.is_flushing);

        station.receive_waste();
        assert!(station.fill_level >= HIGH_WATER);
        assert!(station.is_flushing);
        assert_eq!(station.particles.len(), 5 * PARTICLES_PER_WASTE);
    }

    #[test]
    fn fill_level_is_capped() {
        let mut station = DisposalStation::with_seed(3);
        station.fill_level = 0.97;
        station.receive_waste();
        assert_eq!(station.fill_level, 1.0);
    }

    #[test]
    fn flush_is_idempotent() {
        let mut station = DisposalStation::with_seed(3);
        station.flush();
        for _ in 0..10 {
            station.update();
        }
        let progress = station.flush_progress;
        station.flush();
        assert!(station.is_flushing);
        assert_eq!(station.flush_progress, progress);
    }

    #[test]
    fn flush_completes_drains_and_clears() {
        let mut station = DisposalStation::with_seed(9);
        station.fill_level = 0.75;
        station.receive_waste();
        assert!(station.is_flushing);

        let mut ticks = 0;
        while station.is_flushing {
            station.update();
            ticks += 1;
            assert!(ticks <= 60, "flush never finished");
        }
        assert!(station.particles.is_empty());
        assert!((station.fill_level - 0.55).abs() < EPS);
        assert_eq!(station.flush_progress, 0.0);
    }

    #[test]
    fn flush_never_drains_below_floor() {
        let mut station = DisposalStation::with_seed(9);
        station.flush();
        while station.is_flushing {
            station.update();
        }
        assert_eq!(station.fill_level, FILL_FLOOR);
    }

    #[test]
    fn particles_spiral_inwards_while_flushing() {
        let mut station = DisposalStation::with_seed(11);
        station.receive_waste();
        station.flush();
        for _ in 0..25 {
            station.update();
        }
        for p in &station.particles {
            let r = (p.x * p.x + p.z * p.z).sqrt();
            assert!(r <= p.radius * 0.5 + EPS);
            assert!(p.y <= p.base_y * 0.5 + EPS);
        }
    }

    #[test]
    fn idle_particles_settle() {
        let mut station = DisposalStation::with_seed(5);
        station.receive_waste();
        for _ in 0..100 {
            station.update();
        }
        for p in &station.particles {
            assert_eq!(p.y, SETTLE_HEIGHT);
        }
    }
}

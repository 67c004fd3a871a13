//! Ground board dimensions and placement rules.
//!
//! The board is a square of `2 * half_extent` centred on the disposal station.
//! Trash is scattered over the inner 80% of it, but never right next to the
//! station, and each bot is assigned its own lane of the board to sweep.

use bevy_ecs::prelude::*;
use fastrand::Rng;
use raylib::prelude::Vector3;

use crate::components::cleaningbot::{PICKUP_REACH, SweepLane};

pub const BOARD_HALF_EXTENT: f32 = 200.0;
/// Fraction of the board trash is scattered over.
pub const TRASH_AREA_FRACTION: f32 = 0.8;
/// Trash is re-rolled while it lies inside this square around the station.
pub const STATION_EXCLUSION: f32 = 20.0;

#[derive(Resource, Debug, Clone, Copy)]
pub struct Arena {
    pub half_extent: f32,
}

impl Default for Arena {
    fn default() -> Self {
        Self {
            half_extent: BOARD_HALF_EXTENT,
        }
    }
}

impl Arena {
    /// Half size of the square trash may be scattered on.
    pub fn trash_area(&self) -> f32 {
        self.half_extent * TRASH_AREA_FRACTION
    }

    /// Half size of the square the bots sweep. Slightly wider than the trash
    /// area so trash on its edge is still within reach.
    pub fn sweep_area(&self) -> f32 {
        self.trash_area() + PICKUP_REACH
    }

    /// Whether a ground position is too close to the station for trash.
    pub fn in_exclusion(pos: Vector3) -> bool {
        pos.x.abs() < STATION_EXCLUSION && pos.z.abs() < STATION_EXCLUSION
    }

    /// Random trash position on the ground, outside the station exclusion.
    pub fn random_trash_position(&self, rng: &mut Rng) -> Vector3 {
        let area = self.trash_area();
        loop {
            let pos = Vector3::new(
                -area + rng.f32() * 2.0 * area,
                0.0,
                -area + rng.f32() * 2.0 * area,
            );
            if !Self::in_exclusion(pos) {
                return pos;
            }
        }
    }

    /// Lane `index` of `count` equal strips of the sweep area, split along X.
    pub fn lane(&self, index: usize, count: usize) -> SweepLane {
        let area = self.sweep_area();
        let count = count.max(1);
        let width = 2.0 * area / count as f32;
        let min_x = -area + width * index as f32;
        SweepLane::new(min_x, min_x + width, -area, area)
    }

    /// Home coordinate of a bot sweeping `lane`: the start of its first row.
    pub fn home_for(lane: &SweepLane) -> Vector3 {
        Vector3::new(lane.first_row(), 0.0, lane.min_z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trash_avoids_station_and_stays_on_board() {
        let arena = Arena::default();
        let mut rng = Rng::with_seed(42);
        for _ in 0..500 {
            let p = arena.random_trash_position(&mut rng);
            assert!(!Arena::in_exclusion(p));
            assert!(p.x.abs() <= arena.trash_area());
            assert!(p.z.abs() <= arena.trash_area());
            assert_eq!(p.y, 0.0);
        }
    }

    #[test]
    fn lanes_tile_the_sweep_area() {
        let arena = Arena::default();
        let lanes: Vec<SweepLane> = (0..5).map(|i| arena.lane(i, 5)).collect();
        assert!((lanes[0].min_x + arena.sweep_area()).abs() < 1e-3);
        assert!((lanes[4].max_x - arena.sweep_area()).abs() < 1e-3);
        for pair in lanes.windows(2) {
            assert!((pair[0].max_x - pair[1].min_x).abs() < 1e-3);
        }
    }

    #[test]
    fn home_sits_on_first_row_at_lane_start() {
        let arena = Arena::default();
        let lane = arena.lane(2, 5);
        let home = Arena::home_for(&lane);
        assert_eq!(home.x, lane.first_row());
        assert_eq!(home.z, lane.min_z);
        assert!(home.x > lane.min_x && home.x < lane.max_x);
    }
}

//! World-space position of an entity.
//!
//! Positions live on the XZ ground plane with Y pointing up. Trash and bots
//! keep `y == 0`; only rendered effects (the thrown waste block, station
//! particles) leave the ground.

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector3;

/// World-space position (pivot) of an entity.
#[derive(Component, Clone, Copy, Debug)]
pub struct WorldPosition {
    pub pos: Vector3,
}

impl WorldPosition {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self {
            pos: Vector3::new(x, y, z),
        }
    }

    pub fn from_vec(pos: Vector3) -> Self {
        Self { pos }
    }
}

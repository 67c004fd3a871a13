//! Shared 3D camera resource.
//!
//! Wraps raylib's [`raylib::prelude::Camera3D`]. The default looks down at the
//! disposal station from above one corner of the board.

use bevy_ecs::prelude::Resource;
use raylib::prelude::{Camera3D, Vector3};

pub const FOVY: f32 = 60.0;

/// ECS resource that holds the active 3D camera parameters.
#[derive(Resource, Clone, Copy)]
pub struct Camera3DRes(pub Camera3D);

impl Default for Camera3DRes {
    fn default() -> Self {
        Self(Camera3D::perspective(
            Vector3::new(300.0, 200.0, 300.0),
            Vector3::zero(),
            Vector3::new(0.0, 1.0, 0.0),
            FOVY,
        ))
    }
}

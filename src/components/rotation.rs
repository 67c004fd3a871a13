use bevy_ecs::prelude::Component;

/// Heading around the Y axis in degrees, following the `atan2(dx, dz)`
/// convention of [`crate::kinematics`].
#[derive(Component, Clone, Debug, Copy, Default)]
pub struct Rotation {
    pub degrees: f32,
}

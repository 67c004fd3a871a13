//! Collectable trash.
//!
//! A [`Trash`] entity is spawned once and never despawned. Picking it up only
//! flips `collected`; the bot holding it keeps the entity handle and drags its
//! [`WorldPosition`](super::worldposition::WorldPosition) along until the
//! waste is dumped.

use bevy_ecs::prelude::Component;

#[derive(Component, Clone, Copy, Debug, Default)]
pub struct Trash {
    /// Set once a bot claims the trash. Never reset.
    pub collected: bool,
}

impl Trash {
    pub fn new() -> Self {
        Self { collected: false }
    }
}

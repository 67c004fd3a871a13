//! Spawn-on-demand trash.
//!
//! A [`SpawnTrashEvent`] drops one more [`Trash`](crate::components::trash::Trash)
//! entity at a random board position outside the station exclusion.
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::info;

use crate::game::spawn_trash;
use crate::resources::arena::Arena;
use crate::resources::simrng::SimRng;

#[derive(Event, Debug, Clone, Copy)]
pub struct SpawnTrashEvent {}

pub fn spawn_trash_observer(
    _trigger: On<SpawnTrashEvent>,
    mut commands: Commands,
    arena: Res<Arena>,
    mut rng: ResMut<SimRng>,
) {
    let pos = arena.random_trash_position(&mut rng.0);
    let entity = spawn_trash(&mut commands, pos);
    info!(
        "Spawned trash {:?} at ({:.1}, {:.1})",
        entity, pos.x, pos.z
    );
}

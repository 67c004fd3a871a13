//! Quit request.
//!
//! Emitting a [`QuitEvent`] inserts the
//! [`QuitRequested`](crate::resources::quit::QuitRequested) marker; the main
//! loop exits before the next tick.
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::info;

use crate::resources::quit::QuitRequested;

#[derive(Event, Debug, Clone, Copy)]
pub struct QuitEvent {}

pub fn quit_observer(_trigger: On<QuitEvent>, mut commands: Commands) {
    info!("Quit requested");
    commands.insert_resource(QuitRequested);
}

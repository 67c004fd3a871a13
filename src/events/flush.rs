//! Manual flush request.
//!
//! Emitting a [`FlushEvent`] asks the
//! [`DisposalStation`](crate::resources::disposalstation::DisposalStation) to
//! flush now, regardless of its fill level. A flush that is already running
//! is left alone.
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::info;

use crate::resources::disposalstation::DisposalStation;

#[derive(Event, Debug, Clone, Copy)]
pub struct FlushEvent {}

pub fn flush_observer(_trigger: On<FlushEvent>, mut station: ResMut<DisposalStation>) {
    info!("Manual flush requested");
    station.flush();
}

//! Disposal station tick.
//!
//! Advances the flush animation and lets idle particles settle. Runs before
//! the bots so a delivery made this tick is first animated on the next one.
use bevy_ecs::prelude::*;

use crate::resources::disposalstation::DisposalStation;

pub fn disposal_station_system(mut station: ResMut<DisposalStation>) {
    station.update();
}

//! Shared random number generator.
//!
//! Everything random in the simulation (trash placement, spawned trash) draws
//! from this single seeded generator so a run can be replayed with `--seed`.

use bevy_ecs::prelude::Resource;
use fastrand::Rng;

#[derive(Resource, Debug, Clone)]
pub struct SimRng(pub Rng);

impl SimRng {
    pub fn with_seed(seed: u64) -> Self {
        Self(Rng::with_seed(seed))
    }
}

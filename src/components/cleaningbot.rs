//! Cleaning bot component and its finite-state controller data.
//!
//! A [`CleaningBot`] cycles through the states of [`BotState`]:
//!
//! ```text
//! searching -> eating -> returning -> dumping_animation -> restart_position -> searching
//!                            |                ^
//!                            +--> docking ----+      (DumpApproach::Docking only)
//! ```
//!
//! The transition logic lives in [`crate::systems::cleaningbot`]; this module
//! holds the per-bot data, the tuning constants, and the pure animation
//! helpers the renderer reads (mouth flag, leg swing, fatness, thrown waste).
//!
//! # Related
//!
//! - [`crate::kinematics`] – heading and projectile formulas
//! - [`crate::resources::disposalstation::DisposalStation`] – receives the dumped waste

use bevy_ecs::prelude::*;
use raylib::prelude::Vector3;
use std::fmt;

use crate::kinematics::projectile_point;

/// Distance walked per tick.
pub const BOT_SPEED: f32 = 2.0;
/// Trash is picked up when it lies within this distance on both X and Z.
pub const PICKUP_REACH: f32 = 5.0;
/// Distance between two sweep rows. Twice the pickup reach, so rows touch.
pub const ROW_SPACING: f32 = 2.0 * PICKUP_REACH;
/// Number of open/close mouth cycles while eating.
pub const MOUTH_CYCLES: u8 = 3;
/// Progress added per tick to the current mouth half-cycle.
pub const MOUTH_STEP: f32 = 0.1;
pub const FATNESS_REST: f32 = 1.0;
pub const FATNESS_FULL: f32 = 1.6;
pub const FATNESS_STEP: f32 = 0.02;
/// Returning bots start dumping once closer than this to the station.
pub const RETURN_THRESHOLD: f32 = 10.0;
/// Progress added per tick to the dump animation.
pub const DUMP_STEP: f32 = 0.02;
/// The station is notified once the thrown waste passes this progress.
pub const DUMP_NOTIFY_AT: f32 = 0.9;
/// Restarting bots resume searching once closer than this to home.
pub const HOME_THRESHOLD: f32 = 5.0;
/// Docking bots hold at this distance from the station.
pub const DOCKING_RING: f32 = 18.0;
/// Radius of the station's physical footprint.
pub const STATION_FOOTPRINT: f32 = 12.0;
/// Degrees turned per tick while aligning with the station.
pub const DOCKING_TURN_STEP: f32 = 10.0;
/// Leg phase (radians) advanced per walking tick.
pub const LEG_PHASE_STEP: f32 = 0.35;
pub const LEG_SWING_DEGREES: f32 = 30.0;
/// Height above the bot's feet the waste block is thrown from.
pub const MOUTH_HEIGHT: f32 = 6.0;
pub const DUMP_ARC_HEIGHT: f32 = 25.0;
/// Sideways sway of the thrown waste at mid-flight.
pub const DUMP_CURVE: f32 = 5.0;

/// How a returning bot gets into dumping position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum DumpApproach {
    /// Dump as soon as the return threshold is crossed, facing away from the station.
    #[default]
    Direct,
    /// Clear the station footprint, hold on the docking ring and face the station first.
    Docking,
}

/// Rectangle of the ground a bot sweeps in boustrophedon rows.
///
/// Rows run along Z between `min_z` and `max_z`; successive rows step along X
/// from `min_x` towards `max_x`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SweepLane {
    pub min_x: f32,
    pub max_x: f32,
    pub min_z: f32,
    pub max_z: f32,
}

impl SweepLane {
    pub fn new(min_x: f32, max_x: f32, min_z: f32, max_z: f32) -> Self {
        Self {
            min_x,
            max_x,
            min_z,
            max_z,
        }
    }

    /// X coordinate of the first row.
    pub fn first_row(&self) -> f32 {
        (self.min_x + ROW_SPACING * 0.5).min(self.max_x)
    }
}

/// Progress through the sweep pattern.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sweep {
    /// X coordinate of the row being swept.
    pub row_x: f32,
    /// `true` while walking towards +Z.
    pub forward: bool,
}

/// Mouth animation while swallowing a piece of trash.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Chewing {
    /// Progress through the current half-cycle, `0..1`.
    pub progress: f32,
    pub mouth_open: bool,
    /// Completed open/close cycles.
    pub cycles: u8,
}

impl Chewing {
    /// Advance one tick. Returns `true` once all cycles are done.
    pub fn tick(&mut self) -> bool {
        self.progress += MOUTH_STEP;
        if self.progress >= 1.0 {
            self.progress = 0.0;
            self.mouth_open = !self.mouth_open;
            if !self.mouth_open {
                self.cycles += 1;
            }
        }
        self.cycles >= MOUTH_CYCLES
    }
}

/// Sub-steps of [`DumpApproach::Docking`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DockingStep {
    /// Back out of the station footprint and onto the docking ring.
    Clearing,
    /// Hold on the ring and turn towards the station.
    Aligning,
}

/// The waste block in flight from the bot to the station.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WasteThrow {
    /// Animation progress, `0..=1`.
    pub progress: f32,
    /// Whether the station has already received this waste.
    pub delivered: bool,
    pub launch: Vector3,
    pub target: Vector3,
}

impl WasteThrow {
    pub fn new(launch: Vector3, target: Vector3) -> Self {
        Self {
            progress: 0.0,
            delivered: false,
            launch,
            target,
        }
    }

    /// Current position of the waste block.
    pub fn position(&self) -> Vector3 {
        projectile_point(
            self.launch,
            self.target,
            self.progress,
            DUMP_ARC_HEIGHT,
            DUMP_CURVE,
        )
    }
}

/// Controller state of a [`CleaningBot`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BotState {
    Searching,
    Eating(Chewing),
    Returning,
    Docking(DockingStep),
    DumpingAnimation(WasteThrow),
    RestartPosition,
}

impl BotState {
    /// Stable lower-case label, used in logs and the debug overlay.
    pub fn label(&self) -> &'static str {
        match self {
            BotState::Searching => "searching",
            BotState::Eating(_) => "eating",
            BotState::Returning => "returning",
            BotState::Docking(_) => "docking",
            BotState::DumpingAnimation(_) => "dumping_animation",
            BotState::RestartPosition => "restart_position",
        }
    }

    /// Whether the bot walks (and swings its legs) in this state.
    pub fn is_walking(&self) -> bool {
        matches!(
            self,
            BotState::Searching
                | BotState::Returning
                | BotState::RestartPosition
                | BotState::Docking(DockingStep::Clearing)
        )
    }
}

impl fmt::Display for BotState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Autonomous trash collector.
///
/// The bot's position and heading live in the
/// [`WorldPosition`](super::worldposition::WorldPosition) and
/// [`Rotation`](super::rotation::Rotation) components of the same entity.
#[derive(Component, Clone, Debug)]
pub struct CleaningBot {
    pub state: BotState,
    pub approach: DumpApproach,
    pub speed: f32,
    /// Spawn point, revisited after every dump.
    pub home: Vector3,
    pub lane: SweepLane,
    pub sweep: Sweep,
    /// The trash entity being carried. At most one.
    pub carrying: Option<Entity>,
    /// Body width scale, grows while the bot is full.
    pub fatness: f32,
    pub target_fatness: f32,
    /// Leg swing phase in radians.
    pub leg_phase: f32,
}

impl CleaningBot {
    /// Create a searching bot that starts sweeping its lane from `home`.
    pub fn new(home: Vector3, lane: SweepLane) -> Self {
        Self {
            state: BotState::Searching,
            approach: DumpApproach::Direct,
            speed: BOT_SPEED,
            home,
            lane,
            sweep: Sweep {
                row_x: home.x,
                forward: true,
            },
            carrying: None,
            fatness: FATNESS_REST,
            target_fatness: FATNESS_REST,
            leg_phase: 0.0,
        }
    }

    pub fn with_approach(mut self, approach: DumpApproach) -> Self {
        self.approach = approach;
        self
    }

    /// Restart the sweep pattern on the home row, walking towards +Z.
    pub fn reset_sweep(&mut self) {
        self.sweep = Sweep {
            row_x: self.home.x,
            forward: true,
        };
    }

    /// Step `fatness` towards `target_fatness` by at most [`FATNESS_STEP`].
    pub fn update_fatness(&mut self) {
        if self.fatness < self.target_fatness {
            self.fatness = (self.fatness + FATNESS_STEP).min(self.target_fatness);
        } else if self.fatness > self.target_fatness {
            self.fatness = (self.fatness - FATNESS_STEP).max(self.target_fatness);
        }
    }

    pub fn mouth_open(&self) -> bool {
        matches!(self.state, BotState::Eating(Chewing { mouth_open: true, .. }))
    }

    /// Current leg swing in degrees. Legs rest when the bot stands still.
    pub fn leg_swing_degrees(&self) -> f32 {
        if self.state.is_walking() {
            self.leg_phase.sin() * LEG_SWING_DEGREES
        } else {
            0.0
        }
    }

    /// Position of the thrown waste block, if one is in flight.
    pub fn waste_position(&self) -> Option<Vector3> {
        match self.state {
            BotState::DumpingAnimation(throw) => Some(throw.position()),
            _ => None,
        }
    }
}

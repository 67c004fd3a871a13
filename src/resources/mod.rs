//! ECS resources made available to systems.
//!
//! This module groups the long-lived data injected into the ECS world and
//! accessed by systems during execution: the disposal station, the board,
//! input state, timing, rendering handles and configuration.
//!
//! Overview
//! - `appconfig` – window and asset settings loaded from an INI file
//! - `arena` – board size, trash placement and sweep lanes
//! - `camera3d` – shared 3D camera used by the render pass
//! - `debugmode` – presence toggles the debug overlay
//! - `disposalstation` – the central station that receives and flushes waste
//! - `input` – per-frame keyboard state of keys relevant to the simulation
//! - `quit` – presence stops the main loop
//! - `simrng` – seeded random number generator
//! - `texturestore` – loaded textures keyed by string IDs
//! - `worldtime` – tick counter and frame time
pub mod appconfig;
pub mod arena;
pub mod camera3d;
pub mod debugmode;
pub mod disposalstation;
pub mod input;
pub mod quit;
pub mod simrng;
pub mod texturestore;
pub mod worldtime;

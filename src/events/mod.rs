//! Event types and observers used by the simulation.
//!
//! Input handling triggers these events; observers apply their effect on the
//! world. This keeps key polling separate from what the keys do.
//!
//! Submodules:
//! - [`flush`] – flush the disposal station by hand
//! - [`quit`] – stop the main loop
//! - [`spawntrash`] – drop one more piece of trash on the board
//! - [`switchdebug`] – toggle the debug overlay on/off
pub mod flush;
pub mod quit;
pub mod spawntrash;
pub mod switchdebug;

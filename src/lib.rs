//! Trash bots library.
//!
//! This module exposes the simulation's ECS components, resources, systems,
//! and events for use in integration tests and by the binary.

pub mod components;
pub mod error;
pub mod events;
pub mod game;
pub mod immediate;
pub mod kinematics;
pub mod resources;
pub mod systems;

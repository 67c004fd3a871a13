//! Simulation systems.
//!
//! This module groups the ECS systems that advance the simulation, read
//! input, and draw the world.
//!
//! Submodules overview
//! - [`cleaningbot`] – the per-bot state machine (search, eat, return, dump, restart)
//! - [`disposalstation`] – flush animation and particle settling
//! - [`input`] – read key presses into [`crate::resources::input::InputState`] and trigger events
//! - [`render`] – draw the scene and the debug overlay using Raylib
//! - [`time`] – update wall time and the tick counter

pub mod cleaningbot;
pub mod disposalstation;
pub mod input;
pub mod render;
pub mod time;

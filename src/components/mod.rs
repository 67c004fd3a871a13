//! ECS components for entities.
//!
//! Bots and trash are plain entities; their behavior lives in the systems and
//! the render pass reads these components to draw them.
//!
//! Submodules overview:
//! - [`cleaningbot`] – bot state machine data, sweep lane and animation helpers
//! - [`rotation`] – heading around the vertical axis, in degrees
//! - [`trash`] – a piece of trash and its collected flag
//! - [`worldposition`] – position on the 3D board

pub mod cleaningbot;
pub mod rotation;
pub mod trash;
pub mod worldposition;

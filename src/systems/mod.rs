//! Engine systems.
//!
//! This module groups all ECS systems that advance simulation and rendering,
//! plus the per-frame helpers the engine runs before them.
//!
//! Submodules overview
//! - [`animation`] – advance sprite animations by the frame delta
//! - [`collision`] – all-pairs overlap checks, separation and grounding
//! - [`input`] – sample the input collaborator into [`crate::resources::input::InputState`]
//! - [`movement`] – translate player intent into velocity
//! - [`physics`] – gravity, ground friction and position integration
//! - [`render`] – draw sprites through the [`crate::resources::surface::DrawSurface`] backend
//! - [`time`] – update simulation time and delta
//!
//! The built-in pipeline, in order, is movement → physics → collision →
//! animation → render.

pub mod animation;
pub mod collision;
pub mod input;
pub mod movement;
pub mod physics;
pub mod render;
pub mod time;

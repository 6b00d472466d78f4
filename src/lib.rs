//! Plinth Engine library.
//!
//! A small 2D ECS runtime with platformer physics. This module exposes the
//! engine's components, resources, systems and the [`engine::Engine`] driver
//! for use by games, integration tests and the headless binary.

pub mod components;
pub mod engine;
pub mod entity;
pub mod error;
pub mod resources;
pub mod scene;
pub mod systems;

//! ECS components for entities.
//!
//! Components are plain data: systems read and write their fields in place
//! during their update pass. Every gameplay component derives `serde` with
//! `#[serde(default)]`, so partial JSON objects deserialize into the default
//! instance with only the named fields overridden.
//!
//! Submodules overview:
//! - [`collectible`] – pickup data (coins, keys, power-ups)
//! - [`enemy`] – enemy AI tuning and patrol data
//! - [`kind`] – the closed [`ComponentKind`](kind::ComponentKind) set and the [`GameComponent`](kind::GameComponent) trait
//! - [`physics`] – velocity, material and collider of a simulated body
//! - [`playercontroller`] – player abilities and dash/jump state
//! - [`sprite`] – visual data and sprite animation playback state
//! - [`tags`] – caller-supplied entity id and string tags
//! - [`transform`] – position, scale, rotation and z-index
//! - [`trigger`] – invisible activation zones

pub mod collectible;
pub mod enemy;
pub mod kind;
pub mod physics;
pub mod playercontroller;
pub mod sprite;
pub mod tags;
pub mod transform;
pub mod trigger;

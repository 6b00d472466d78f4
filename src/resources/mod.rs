//! ECS resources made available to systems.
//!
//! This module groups the long-lived data injected into the ECS world and
//! accessed by systems during execution: timing, input, configuration, the
//! entity registry and the drawing surface. Each submodule documents the
//! semantics and intended usage of its resource(s).
//!
//! Overview
//! - `collisionreport` – contacts detected during the current frame
//! - `control` – stop requests from systems and frame statistics
//! - `engineconfig` – viewport, background, gravity and debug settings (INI)
//! - `input` – per-frame state of the abstract player actions
//! - `registry` – string ids to entities, in creation order
//! - `snapshot` – entity list captured at the start of each frame
//! - `surface` – drawing backend collaborator
//! - `systemsstore` – named one-shot systems (shutdown hooks)
//! - `worldtime` – simulation time and delta
pub mod collisionreport;
pub mod control;
pub mod engineconfig;
pub mod input;
pub mod registry;
pub mod snapshot;
pub mod surface;
pub mod systemsstore;
pub mod worldtime;

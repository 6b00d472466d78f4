//! Invisible zones that gameplay code activates.
//!
//! A trigger entity normally also carries a [`Physics`](super::physics::Physics)
//! with `collider.is_trigger = true`, so the collision system reports its
//! overlaps without pushing anything around. Deciding whether an overlap
//! activates the trigger (tag matching, repeatability, teleporting) is left to
//! the gameplay layer.

use bevy_ecs::prelude::Component;
use glam::Vec2;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TriggerKind {
    Goal,
    Checkpoint,
    Hazard,
    Teleport,
    #[default]
    Custom,
}

#[derive(Component, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Trigger {
    pub kind: TriggerKind,
    pub is_activated: bool,
    /// Can be activated more than once.
    pub repeatable: bool,
    /// Tags an entity needs (any of) to activate this trigger.
    pub activation_tags: Vec<String>,
    pub event_name: String,
    pub event_data: FxHashMap<String, serde_json::Value>,
    /// Destination for teleport triggers.
    pub teleport: Option<Vec2>,
}

impl Default for Trigger {
    fn default() -> Self {
        Self {
            kind: TriggerKind::Custom,
            is_activated: false,
            repeatable: false,
            activation_tags: vec!["player".to_string()],
            event_name: String::new(),
            event_data: FxHashMap::default(),
            teleport: None,
        }
    }
}

impl Trigger {
    /// Whether an entity carrying `tags` is allowed to activate this trigger
    /// right now.
    pub fn accepts<'a>(&self, mut tags: impl Iterator<Item = &'a str>) -> bool {
        if self.is_activated && !self.repeatable {
            return false;
        }
        tags.any(|tag| self.activation_tags.iter().any(|t| t == tag))
    }
}

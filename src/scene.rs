//! JSON scene descriptions.
//!
//! A scene lists entities by id, each with optional tags and components.
//! Component objects are partial: missing fields keep their defaults.
//!
//! ```json
//! {
//!   "entities": [
//!     {
//!       "id": "player",
//!       "tags": ["player"],
//!       "transform": { "position": [100.0, 50.0] },
//!       "physics": { "collider": { "width": 24, "height": 32 } },
//!       "sprite": { "texture": "#4ecca3", "width": 24, "height": 32 },
//!       "player_controller": { "can_double_jump": true }
//!     }
//!   ]
//! }
//! ```

use std::path::Path;

use log::info;
use serde::{Deserialize, Serialize};

use crate::components::collectible::Collectible;
use crate::components::enemy::Enemy;
use crate::components::physics::Physics;
use crate::components::playercontroller::PlayerController;
use crate::components::sprite::Sprite;
use crate::components::transform::Transform;
use crate::components::trigger::Trigger;
use crate::engine::Engine;
use crate::error::Result;

/// One entity of a scene.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct SceneEntity {
    pub id: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transform: Option<Transform>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub physics: Option<Physics>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sprite: Option<Sprite>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub player_controller: Option<PlayerController>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enemy: Option<Enemy>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collectible: Option<Collectible>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trigger: Option<Trigger>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Scene {
    #[serde(default)]
    pub entities: Vec<SceneEntity>,
}

impl Scene {
    /// Read and parse a scene file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        let scene = Self::from_json(&text)?;
        info!(
            "Loaded scene {} ({} entities)",
            path.as_ref().display(),
            scene.entities.len()
        );
        Ok(scene)
    }

    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Create every entity of the scene in `engine`, in listed order.
    /// Ids already present in the engine are replaced.
    pub fn spawn_into(&self, engine: &mut Engine) {
        for desc in &self.entities {
            let mut handle = engine.create_entity(desc.id.as_str());
            for tag in &desc.tags {
                handle.add_tag(tag.as_str());
            }
            if let Some(c) = desc.transform {
                handle.add_component(c);
            }
            if let Some(c) = desc.physics {
                handle.add_component(c);
            }
            if let Some(c) = &desc.sprite {
                handle.add_component(c.clone());
            }
            if let Some(c) = desc.player_controller {
                handle.add_component(c);
            }
            if let Some(c) = &desc.enemy {
                handle.add_component(c.clone());
            }
            if let Some(c) = &desc.collectible {
                handle.add_component(c.clone());
            }
            if let Some(c) = &desc.trigger {
                handle.add_component(c.clone());
            }
        }
    }
}

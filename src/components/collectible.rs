use bevy_ecs::prelude::Component;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CollectibleKind {
    #[default]
    Coin,
    Powerup,
    Health,
    Key,
    Custom,
}

/// Pickup data. The core never sets `is_collected`; gameplay code does, by
/// watching the frame's [`CollisionReport`](crate::resources::collisionreport::CollisionReport).
#[derive(Component, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Collectible {
    pub kind: CollectibleKind,
    pub value: i32,
    pub is_collected: bool,
    pub respawns: bool,
    /// Milliseconds.
    pub respawn_time: f32,
    pub respawn_time_remaining: f32,
    pub custom_data: FxHashMap<String, serde_json::Value>,
}

impl Default for Collectible {
    fn default() -> Self {
        Self {
            kind: CollectibleKind::Coin,
            value: 1,
            is_collected: false,
            respawns: false,
            respawn_time: 5000.0,
            respawn_time_remaining: 0.0,
            custom_data: FxHashMap::default(),
        }
    }
}

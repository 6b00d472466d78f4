//! Registry of named one-shot systems.
//!
//! Used for shutdown hooks: systems registered here with
//! [`Engine::on_shutdown`](crate::engine::Engine::on_shutdown) are run once,
//! in registration order, when the engine is torn down.

use bevy_ecs::prelude::Resource;
use bevy_ecs::system::SystemId;
use rustc_hash::FxHashMap;

/// Map of string names to system IDs, remembering insertion order.
#[derive(Resource, Default)]
pub struct SystemsStore {
    pub map: FxHashMap<String, SystemId>,
    order: Vec<String>,
}

impl SystemsStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a system ID under a human-readable name. Re-using a name
    /// replaces the previous system but keeps its position.
    pub fn insert(&mut self, name: impl Into<String>, id: SystemId) -> Option<SystemId> {
        let name = name.into();
        let previous = self.map.insert(name.clone(), id);
        if previous.is_none() {
            self.order.push(name);
        }
        previous
    }

    /// Retrieve a system ID by name, if present.
    pub fn get(&self, name: impl AsRef<str>) -> Option<&SystemId> {
        self.map.get(name.as_ref())
    }

    /// Remove every system, returning `(name, id)` pairs in insertion order.
    pub fn drain_ordered(&mut self) -> Vec<(String, SystemId)> {
        let order = std::mem::take(&mut self.order);
        order
            .into_iter()
            .filter_map(|name| self.map.remove(&name).map(|id| (name, id)))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

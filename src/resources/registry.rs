//! String-id registry of live entities.
//!
//! Maps caller-supplied ids to bevy [`Entity`] handles and remembers creation
//! order, which is the iteration order of `all_entities`, tag queries and the
//! per-frame [`FrameSnapshot`](super::snapshot::FrameSnapshot).

use bevy_ecs::prelude::*;
use rustc_hash::FxHashMap;

#[derive(Resource, Debug, Clone, Default)]
pub struct EntityRegistry {
    ids: FxHashMap<String, Entity>,
    order: Vec<Entity>,
}

impl EntityRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `entity` under `id`.
    ///
    /// If the id was already taken, the new entity takes the old one's place
    /// in creation order and the replaced handle is returned.
    pub fn insert(&mut self, id: impl Into<String>, entity: Entity) -> Option<Entity> {
        let previous = self.ids.insert(id.into(), entity);
        match previous.and_then(|old| self.order.iter().position(|e| *e == old)) {
            Some(index) => self.order[index] = entity,
            None => self.order.push(entity),
        }
        previous
    }

    /// Forget `id`, returning its entity.
    pub fn remove(&mut self, id: &str) -> Option<Entity> {
        let entity = self.ids.remove(id)?;
        self.order.retain(|e| *e != entity);
        Some(entity)
    }

    pub fn get(&self, id: &str) -> Option<Entity> {
        self.ids.get(id).copied()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains_key(id)
    }

    /// Live entities in creation order.
    pub fn entities(&self) -> &[Entity] {
        &self.order
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Forget every id whose entity is in `dead`. Returns how many were
    /// dropped.
    pub fn forget(&mut self, dead: &[Entity]) -> usize {
        let before = self.order.len();
        self.ids.retain(|_, e| !dead.contains(e));
        self.order.retain(|e| !dead.contains(e));
        before - self.order.len()
    }

    /// Forget everything, returning the entities that were registered.
    pub fn drain(&mut self) -> Vec<Entity> {
        self.ids.clear();
        std::mem::take(&mut self.order)
    }
}

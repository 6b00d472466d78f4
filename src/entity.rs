//! Id-addressed views over engine entities.
//!
//! [`EntityHandle`] wraps a mutable bevy entity reference and exposes the
//! per-entity part of the registry API: typed component access, removal by
//! [`ComponentKind`] and tag management. [`EntityView`] is its read-only
//! counterpart.
//!
//! Every entity created through the engine carries an
//! [`EntityId`](crate::components::tags::EntityId) and a
//! [`Tags`](crate::components::tags::Tags) component; those are bookkeeping
//! and never reported as component kinds.

use bevy_ecs::change_detection::Mut;
use bevy_ecs::entity::Entity;
use bevy_ecs::world::{EntityRef, EntityWorldMut};
use log::warn;

use crate::components::collectible::Collectible;
use crate::components::enemy::Enemy;
use crate::components::kind::{ComponentKind, GameComponent};
use crate::components::physics::Physics;
use crate::components::playercontroller::PlayerController;
use crate::components::sprite::Sprite;
use crate::components::tags::{EntityId, Tags};
use crate::components::transform::Transform;
use crate::components::trigger::Trigger;

fn kinds_where(contains: impl Fn(ComponentKind) -> bool) -> Vec<ComponentKind> {
    ComponentKind::ALL
        .into_iter()
        .filter(|kind| contains(*kind))
        .collect()
}

macro_rules! contains_kind {
    ($entity:expr, $kind:expr) => {
        match $kind {
            ComponentKind::Transform => $entity.contains::<Transform>(),
            ComponentKind::Physics => $entity.contains::<Physics>(),
            ComponentKind::Sprite => $entity.contains::<Sprite>(),
            ComponentKind::PlayerController => $entity.contains::<PlayerController>(),
            ComponentKind::Enemy => $entity.contains::<Enemy>(),
            ComponentKind::Collectible => $entity.contains::<Collectible>(),
            ComponentKind::Trigger => $entity.contains::<Trigger>(),
        }
    };
}

/// Mutable access to one entity.
pub struct EntityHandle<'w> {
    inner: EntityWorldMut<'w>,
}

impl<'w> EntityHandle<'w> {
    pub(crate) fn new(inner: EntityWorldMut<'w>) -> Self {
        Self { inner }
    }

    /// Caller-supplied id.
    pub fn id(&self) -> &str {
        self.inner.get::<EntityId>().map_or("", EntityId::as_str)
    }

    /// Underlying ECS entity.
    pub fn entity(&self) -> Entity {
        self.inner.id()
    }

    /// Attach `component`, replacing (never merging) an existing one of the
    /// same kind.
    pub fn add_component<C: GameComponent>(&mut self, component: C) -> &mut Self {
        if self.inner.contains::<C>() {
            warn!(
                "Entity '{}' already has a {} component; replacing it",
                self.id(),
                C::KIND
            );
        }
        self.inner.insert(component);
        self
    }

    /// Attach a default-constructed component after applying `overrides`.
    pub fn add_component_with<C: GameComponent>(
        &mut self,
        overrides: impl FnOnce(&mut C),
    ) -> &mut Self {
        let mut component = C::default();
        overrides(&mut component);
        self.add_component(component)
    }

    pub fn get_component<C: GameComponent>(&self) -> Option<&C> {
        self.inner.get::<C>()
    }

    pub fn get_component_mut<C: GameComponent>(&mut self) -> Option<Mut<'_, C>> {
        self.inner.get_mut::<C>()
    }

    pub fn has_component<C: GameComponent>(&self) -> bool {
        self.inner.contains::<C>()
    }

    /// Detach and return the component of type `C`, if present.
    pub fn remove_component<C: GameComponent>(&mut self) -> Option<C> {
        self.inner.take::<C>()
    }

    /// Detach whatever component is stored under `kind`. Returns whether one
    /// was present.
    pub fn remove_kind(&mut self, kind: ComponentKind) -> bool {
        match kind {
            ComponentKind::Transform => self.remove_component::<Transform>().is_some(),
            ComponentKind::Physics => self.remove_component::<Physics>().is_some(),
            ComponentKind::Sprite => self.remove_component::<Sprite>().is_some(),
            ComponentKind::PlayerController => {
                self.remove_component::<PlayerController>().is_some()
            }
            ComponentKind::Enemy => self.remove_component::<Enemy>().is_some(),
            ComponentKind::Collectible => self.remove_component::<Collectible>().is_some(),
            ComponentKind::Trigger => self.remove_component::<Trigger>().is_some(),
        }
    }

    pub fn has_kind(&self, kind: ComponentKind) -> bool {
        contains_kind!(self.inner, kind)
    }

    /// Kinds currently attached, in [`ComponentKind::ALL`] order.
    pub fn component_kinds(&self) -> Vec<ComponentKind> {
        kinds_where(|kind| self.has_kind(kind))
    }

    pub fn add_tag(&mut self, tag: impl Into<String>) -> &mut Self {
        if let Some(mut tags) = self.inner.get_mut::<Tags>() {
            tags.add(tag);
        }
        self
    }

    pub fn remove_tag(&mut self, tag: &str) -> bool {
        self.inner
            .get_mut::<Tags>()
            .is_some_and(|mut tags| tags.remove(tag))
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.inner.get::<Tags>().is_some_and(|tags| tags.contains(tag))
    }

    /// Tags in unspecified order.
    pub fn tags(&self) -> Vec<&str> {
        self.inner
            .get::<Tags>()
            .map(|tags| tags.iter().collect())
            .unwrap_or_default()
    }
}

/// Read-only access to one entity.
pub struct EntityView<'w> {
    inner: EntityRef<'w>,
}

impl<'w> EntityView<'w> {
    pub(crate) fn new(inner: EntityRef<'w>) -> Self {
        Self { inner }
    }

    pub fn id(&self) -> &'w str {
        self.inner.get::<EntityId>().map_or("", EntityId::as_str)
    }

    pub fn entity(&self) -> Entity {
        self.inner.id()
    }

    pub fn get_component<C: GameComponent>(&self) -> Option<&'w C> {
        self.inner.get::<C>()
    }

    pub fn has_component<C: GameComponent>(&self) -> bool {
        self.inner.contains::<C>()
    }

    pub fn has_kind(&self, kind: ComponentKind) -> bool {
        contains_kind!(self.inner, kind)
    }

    pub fn component_kinds(&self) -> Vec<ComponentKind> {
        kinds_where(|kind| self.has_kind(kind))
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.inner.get::<Tags>().is_some_and(|tags| tags.contains(tag))
    }

    pub fn tags(&self) -> Vec<&'w str> {
        self.inner
            .get::<Tags>()
            .map(|tags| tags.iter().collect())
            .unwrap_or_default()
    }
}

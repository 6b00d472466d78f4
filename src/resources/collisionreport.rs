//! Contacts detected during the current frame.
//!
//! The collision system rewrites this resource every frame with every
//! overlapping pair it found, trigger pairs included. Gameplay code reads it
//! after the frame to implement pickups, hazards or goals.

use bevy_ecs::prelude::*;
use glam::Vec2;

/// One overlapping pair, in detection order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    pub first: Entity,
    pub second: Entity,
    /// Per-axis penetration measured before resolution.
    pub overlap: Vec2,
    /// Either collider is a trigger; the pair was not resolved.
    pub is_trigger: bool,
}

impl Contact {
    /// Whether `entity` is one of the two participants.
    pub fn involves(&self, entity: Entity) -> bool {
        self.first == entity || self.second == entity
    }

    /// The participant that is not `entity`.
    pub fn other(&self, entity: Entity) -> Option<Entity> {
        if self.first == entity {
            Some(self.second)
        } else if self.second == entity {
            Some(self.first)
        } else {
            None
        }
    }
}

#[derive(Resource, Debug, Clone, Default)]
pub struct CollisionReport {
    pub contacts: Vec<Contact>,
}

impl CollisionReport {
    pub fn clear(&mut self) {
        self.contacts.clear();
    }

    pub fn push(&mut self, contact: Contact) {
        self.contacts.push(contact);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Contact> {
        self.contacts.iter()
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    /// Contacts `entity` takes part in.
    pub fn involving(&self, entity: Entity) -> impl Iterator<Item = &Contact> {
        self.contacts.iter().filter(move |c| c.involves(entity))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_other_participant() {
        let mut world = World::new();
        let a = world.spawn_empty().id();
        let b = world.spawn_empty().id();
        let c = world.spawn_empty().id();
        let contact = Contact {
            first: a,
            second: b,
            overlap: Vec2::ONE,
            is_trigger: false,
        };
        assert_eq!(contact.other(a), Some(b));
        assert_eq!(contact.other(b), Some(a));
        assert_eq!(contact.other(c), None);

        let mut report = CollisionReport::default();
        report.push(contact);
        assert_eq!(report.involving(a).count(), 1);
        assert_eq!(report.involving(c).count(), 0);
        report.clear();
        assert!(report.is_empty());
    }
}

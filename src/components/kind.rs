//! The closed set of gameplay component kinds.
//!
//! Entities hold at most one component per kind; [`GameComponent`] ties each
//! component type to its [`ComponentKind`] so the registry can warn on
//! overwrites and answer "which kinds does this entity have" without any
//! runtime type names.

use std::fmt;

use bevy_ecs::component::{Component, Mutable};

use super::collectible::Collectible;
use super::enemy::Enemy;
use super::physics::Physics;
use super::playercontroller::PlayerController;
use super::sprite::Sprite;
use super::transform::Transform;
use super::trigger::Trigger;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ComponentKind {
    Transform,
    Physics,
    Sprite,
    PlayerController,
    Enemy,
    Collectible,
    Trigger,
}

impl ComponentKind {
    pub const ALL: [ComponentKind; 7] = [
        ComponentKind::Transform,
        ComponentKind::Physics,
        ComponentKind::Sprite,
        ComponentKind::PlayerController,
        ComponentKind::Enemy,
        ComponentKind::Collectible,
        ComponentKind::Trigger,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ComponentKind::Transform => "Transform",
            ComponentKind::Physics => "Physics",
            ComponentKind::Sprite => "Sprite",
            ComponentKind::PlayerController => "PlayerController",
            ComponentKind::Enemy => "Enemy",
            ComponentKind::Collectible => "Collectible",
            ComponentKind::Trigger => "Trigger",
        }
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A component type that belongs to the closed [`ComponentKind`] set.
pub trait GameComponent: Component<Mutability = Mutable> + Default {
    const KIND: ComponentKind;
}

impl GameComponent for Transform {
    const KIND: ComponentKind = ComponentKind::Transform;
}

impl GameComponent for Physics {
    const KIND: ComponentKind = ComponentKind::Physics;
}

impl GameComponent for Sprite {
    const KIND: ComponentKind = ComponentKind::Sprite;
}

impl GameComponent for PlayerController {
    const KIND: ComponentKind = ComponentKind::PlayerController;
}

impl GameComponent for Enemy {
    const KIND: ComponentKind = ComponentKind::Enemy;
}

impl GameComponent for Collectible {
    const KIND: ComponentKind = ComponentKind::Collectible;
}

impl GameComponent for Trigger {
    const KIND: ComponentKind = ComponentKind::Trigger;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kinds_are_distinct() {
        let mut kinds = ComponentKind::ALL.to_vec();
        kinds.sort();
        kinds.dedup();
        assert_eq!(kinds.len(), ComponentKind::ALL.len());
    }

    #[test]
    fn test_kind_constants_match_types() {
        assert_eq!(Transform::KIND, ComponentKind::Transform);
        assert_eq!(Physics::KIND, ComponentKind::Physics);
        assert_eq!(Trigger::KIND.to_string(), "Trigger");
    }
}

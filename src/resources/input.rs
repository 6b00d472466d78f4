//! Per-frame input resource and the input collaborator interface.
//!
//! The engine never reads devices. Whatever drives the game (keyboard, gamepad,
//! network, AI, a test script) implements [`InputSource`]; once per frame the
//! engine samples it into the [`InputState`] resource that systems read.
use bevy_ecs::prelude::*;
use rustc_hash::FxHashSet;

/// Logical actions the core understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Action {
    Left,
    Right,
    Up,
    Jump,
    Dash,
}

impl Action {
    pub const ALL: [Action; 5] = [
        Action::Left,
        Action::Right,
        Action::Up,
        Action::Jump,
        Action::Dash,
    ];
}

/// Answers "is this logical action currently held".
pub trait InputSource {
    fn is_held(&self, action: Action) -> bool;
}

impl<F> InputSource for F
where
    F: Fn(Action) -> bool,
{
    fn is_held(&self, action: Action) -> bool {
        self(action)
    }
}

/// Input source that never reports anything held.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoInput;

impl InputSource for NoInput {
    fn is_held(&self, _action: Action) -> bool {
        false
    }
}

/// A plain set of held actions, handy for scripted input and tests.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeldActions {
    pub held: FxHashSet<Action>,
}

impl HeldActions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: mark an action as held.
    pub fn with(mut self, action: Action) -> Self {
        self.held.insert(action);
        self
    }

    pub fn press(&mut self, action: Action) {
        self.held.insert(action);
    }

    pub fn release(&mut self, action: Action) {
        self.held.remove(&action);
    }
}

impl InputSource for HeldActions {
    fn is_held(&self, action: Action) -> bool {
        self.held.contains(&action)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
/// Boolean action state with edge information.
pub struct BoolState {
    /// Whether the action is held this frame.
    pub active: bool,
    /// Whether the action became held this frame.
    pub just_pressed: bool,
    /// Whether the action stopped being held this frame.
    pub just_released: bool,
}

impl BoolState {
    /// Advance to the next frame's held value, computing edges.
    pub fn update(&mut self, held: bool) {
        self.just_pressed = held && !self.active;
        self.just_released = !held && self.active;
        self.active = held;
    }
}

/// Resource capturing the per-frame state of every [`Action`].
#[derive(Resource, Debug, Clone, Default, PartialEq, Eq)]
pub struct InputState {
    pub left: BoolState,
    pub right: BoolState,
    pub up: BoolState,
    pub jump: BoolState,
    pub dash: BoolState,
}

impl InputState {
    pub fn get(&self, action: Action) -> &BoolState {
        match action {
            Action::Left => &self.left,
            Action::Right => &self.right,
            Action::Up => &self.up,
            Action::Jump => &self.jump,
            Action::Dash => &self.dash,
        }
    }

    pub fn get_mut(&mut self, action: Action) -> &mut BoolState {
        match action {
            Action::Left => &mut self.left,
            Action::Right => &mut self.right,
            Action::Up => &mut self.up,
            Action::Jump => &mut self.jump,
            Action::Dash => &mut self.dash,
        }
    }

    /// Sample every action from `source`.
    pub fn sample(&mut self, source: &dyn InputSource) {
        for action in Action::ALL {
            let held = source.is_held(action);
            self.get_mut(action).update(held);
        }
    }

    /// Jump intent: Up or Jump held.
    pub fn jump_held(&self) -> bool {
        self.up.active || self.jump.active
    }
}

impl InputSource for InputState {
    fn is_held(&self, action: Action) -> bool {
        self.get(action).active
    }
}

//! Input sampling.
//!
//! [`update_input_state`] is called by the engine once per frame, before the
//! schedule runs, with whatever [`InputSource`] the driver supplied.
use bevy_ecs::prelude::*;

use crate::resources::input::{InputSource, InputState};

/// Sample `source` into the `InputState` resource.
pub fn update_input_state(world: &mut World, source: &dyn InputSource) {
    let mut input = world.resource_mut::<InputState>();
    input.sample(source);
}

//! Simulation clock shared by all systems.
//!
//! The frame driver measures elapsed time in milliseconds; systems that work
//! with timers (movement, animation) use [`WorldTime::delta`] directly while
//! the physics system converts it with [`WorldTime::delta_seconds`].

use bevy_ecs::prelude::Resource;

#[derive(Resource, Clone, Copy, Debug, PartialEq)]
pub struct WorldTime {
    /// Total scaled time since the engine started, in milliseconds.
    pub elapsed: f32,
    /// Scaled duration of the current frame, in milliseconds.
    pub delta: f32,
    pub time_scale: f32,
    pub frame_count: u64,
}

impl Default for WorldTime {
    fn default() -> Self {
        WorldTime {
            elapsed: 0.0,
            delta: 0.0,
            time_scale: 1.0,
            frame_count: 0,
        }
    }
}

impl WorldTime {
    /// Builder: set the time scale (1.0 = real time).
    pub fn with_time_scale(mut self, time_scale: f32) -> Self {
        self.time_scale = time_scale;
        self
    }

    /// Frame delta converted to seconds.
    pub fn delta_seconds(&self) -> f32 {
        self.delta / 1000.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delta_seconds() {
        let wt = WorldTime {
            delta: 16.0,
            ..WorldTime::default()
        };
        assert!((wt.delta_seconds() - 0.016).abs() < 1e-7);
    }

    #[test]
    fn test_with_time_scale() {
        let wt = WorldTime::default().with_time_scale(0.5);
        assert_eq!(wt.time_scale, 0.5);
        assert_eq!(wt.frame_count, 0);
    }
}

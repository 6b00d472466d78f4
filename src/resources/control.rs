//! Driver control and frame statistics.
//!
//! [`EngineControl`] lets a system ask the driver to stop; the request is
//! honoured after the current frame completes, never mid-frame.
//! [`FrameStats`] keeps a frames-per-second estimate refreshed every
//! [`FPS_SAMPLE_FRAMES`] frames.

use bevy_ecs::prelude::*;

/// Number of frames between FPS refreshes.
pub const FPS_SAMPLE_FRAMES: u64 = 60;

#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EngineControl {
    pub stop_requested: bool,
}

impl EngineControl {
    pub fn request_stop(&mut self) {
        self.stop_requested = true;
    }

    /// Consume a pending stop request.
    pub fn take_stop_request(&mut self) -> bool {
        std::mem::take(&mut self.stop_requested)
    }
}

#[derive(Resource, Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameStats {
    pub fps: u32,
    pub frame_count: u64,
}

impl FrameStats {
    /// Count one frame of `delta_ms`. Returns `true` when the FPS estimate was
    /// refreshed this frame.
    pub fn record(&mut self, delta_ms: f32) -> bool {
        self.frame_count += 1;
        if self.frame_count % FPS_SAMPLE_FRAMES != 0 {
            return false;
        }
        if delta_ms > 0.0 {
            self.fps = (1000.0 / delta_ms).round() as u32;
        }
        true
    }
}

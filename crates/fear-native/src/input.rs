use fear_core::{FrameInputs, DEFAULT_DREAD_LEVEL, SLIDER_MAX};
use glam::Vec2;

/// Slider change per arrow key press.
pub const SLIDER_KEY_STEP: f32 = 10.0;

/// Pointer and keyboard-driven slider state for the desktop window.
#[derive(Clone, Copy, Debug)]
pub struct NativeInput {
    pub pointer: Vec2,
    pub slider: f32,
}

impl Default for NativeInput {
    fn default() -> Self {
        Self {
            pointer: Vec2::ZERO,
            slider: DEFAULT_DREAD_LEVEL * SLIDER_MAX,
        }
    }
}

impl NativeInput {
    #[inline]
    pub fn frame_inputs(&self) -> FrameInputs {
        FrameInputs {
            pointer: self.pointer,
            slider: Some(self.slider),
        }
    }

    pub fn nudge_slider(&mut self, steps: i32) {
        self.slider = step_slider(self.slider, steps);
    }
}

/// Move a slider value by whole key steps, staying inside `[0, SLIDER_MAX]`.
#[inline]
pub fn step_slider(value: f32, steps: i32) -> f32 {
    (value + steps as f32 * SLIDER_KEY_STEP).clamp(0.0, SLIDER_MAX)
}

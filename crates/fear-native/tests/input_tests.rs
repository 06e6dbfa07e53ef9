// Host-side tests for the desktop input helpers.
// The front-end is a binary crate, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}

use fear_core::{dread_from_slider, DEFAULT_DREAD_LEVEL, SLIDER_MAX};
use input::*;

#[test]
fn default_slider_matches_default_dread() {
    let ni = NativeInput::default();
    assert!((dread_from_slider(ni.slider) - DEFAULT_DREAD_LEVEL).abs() < 1e-6);
    assert_eq!(ni.frame_inputs().slider, Some(ni.slider));
}

#[test]
fn slider_steps_and_clamps() {
    assert_eq!(step_slider(40.0, 1), 50.0);
    assert_eq!(step_slider(40.0, -2), 20.0);
    assert_eq!(step_slider(5.0, -1), 0.0);
    assert_eq!(step_slider(SLIDER_MAX - 5.0, 1), SLIDER_MAX);
}

#[test]
fn nudging_to_the_top_saturates() {
    let mut ni = NativeInput::default();
    for _ in 0..100 {
        ni.nudge_slider(1);
    }
    assert_eq!(ni.slider, SLIDER_MAX);
    assert!((dread_from_slider(ni.slider) - 1.0).abs() < 1e-6);
}

#[test]
fn pointer_is_forwarded() {
    let ni = NativeInput {
        pointer: glam::Vec2::new(12.0, 34.0),
        ..NativeInput::default()
    };
    assert_eq!(ni.frame_inputs().pointer, glam::Vec2::new(12.0, 34.0));
}

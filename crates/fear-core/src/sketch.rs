//! Top-level frame orchestration shared by every host.
//!
//! A [`Sketch`] is the explicit context a host drives: it creates the
//! simulation once the surface has a real size, shows a placeholder until
//! then, forwards press/resize events, and overlays the webcam inset.

use crate::color::Hsba;
use crate::constants::*;
use crate::error::FearError;
use crate::fear::{FearState, FrameInputs, SimParams};
use crate::surface::{Rect, Surface, Viewport};

pub struct Sketch {
    params: SimParams,
    state: Option<FearState>,
}

impl Sketch {
    pub fn new(params: SimParams) -> Self {
        Self {
            params,
            state: None,
        }
    }

    /// Create the simulation if the surface has a usable size. Returns
    /// `Ok(false)` while still waiting for one.
    pub fn start(&mut self, surface: &mut impl Surface) -> Result<bool, FearError> {
        if self.state.is_some() {
            return Ok(true);
        }
        let viewport = surface.viewport();
        if viewport.is_empty() {
            return Ok(false);
        }
        let state = FearState::new(&self.params, viewport)?;
        state.paint_background(surface);
        self.state = Some(state);
        Ok(true)
    }

    pub fn frame(&mut self, inputs: &FrameInputs, surface: &mut impl Surface) {
        if self.state.is_none() {
            if let Err(e) = self.start(surface) {
                log::error!("[sketch] cannot start: {}", e);
            }
        }
        match self.state.as_mut() {
            Some(state) => {
                state.tick(inputs, surface);
            }
            None => draw_placeholder(surface),
        }
        draw_webcam_inset(surface);
    }

    pub fn press(&mut self, surface: &mut impl Surface) {
        if let Some(state) = self.state.as_mut() {
            state.press(surface);
        }
    }

    pub fn resize(&mut self, viewport: Viewport, surface: &mut impl Surface) {
        match self.state.as_mut() {
            Some(state) => state.resize(viewport, surface),
            None => log::debug!("[sketch] resize before start"),
        }
    }

    #[inline]
    pub fn state(&self) -> Option<&FearState> {
        self.state.as_ref()
    }

    #[inline]
    pub fn state_mut(&mut self) -> Option<&mut FearState> {
        self.state.as_mut()
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.state.is_some()
    }
}

/// Placeholder shown while no simulation exists.
pub fn draw_placeholder(surface: &mut impl Surface) {
    let viewport = surface.viewport();
    surface.reset_transform();
    surface.fill_rect(Rect::covering(viewport), Hsba::BLACK);
    surface.fill_text(
        PLACEHOLDER_TEXT,
        viewport.center(),
        PLACEHOLDER_TEXT_SIZE,
        Hsba::new(0.0, 100.0, 100.0, 1.0),
    );
}

/// Where the webcam frame goes: fixed width, aspect-correct height,
/// anchored to the bottom-left corner.
pub fn webcam_inset(viewport: Viewport, frame_width: f32, frame_height: f32) -> Option<Rect> {
    if !(frame_width > 0.0 && frame_height > 0.0) {
        return None;
    }
    let w = WEBCAM_INSET_WIDTH;
    let h = frame_height / frame_width * w;
    Some(Rect::new(
        WEBCAM_INSET_MARGIN,
        viewport.height - h - WEBCAM_INSET_MARGIN,
        w,
        h,
    ))
}

pub fn draw_webcam_inset(surface: &mut impl Surface) {
    let Some((fw, fh)) = surface.video_frame_size() else {
        return;
    };
    if let Some(rect) = webcam_inset(surface.viewport(), fw, fh) {
        surface.reset_transform();
        surface.draw_video(rect);
    }
}

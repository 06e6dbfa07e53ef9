//! Drawing contract between the simulation and a host canvas.
//!
//! The simulation only ever fills rectangles and discs in HSB color, moves
//! the drawing origin, and (for the placeholder and webcam inset) draws text
//! and a video frame. Hosts implement [`Surface`] over whatever they render
//! with; [`CommandList`] records the calls for replay or inspection.

use crate::color::Hsba;
use glam::Vec2;

/// Canvas size in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width * 0.5, self.height * 0.5)
    }

    #[inline]
    pub fn half_extent(&self) -> Vec2 {
        self.center()
    }
}

/// Axis-aligned rectangle in canvas pixels (top-left origin).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    pub fn covering(viewport: Viewport) -> Self {
        Self::new(0.0, 0.0, viewport.width, viewport.height)
    }
}

pub trait Surface {
    fn viewport(&self) -> Viewport;

    /// Fill `rect` (relative to the current origin). Alpha blends over
    /// whatever is already on the canvas; nothing is ever cleared.
    fn fill_rect(&mut self, rect: Rect, color: Hsba);

    /// Fill a disc of `diameter` centred at `center` (relative to the
    /// current origin).
    fn fill_disc(&mut self, center: Vec2, diameter: f32, color: Hsba);

    /// Move the drawing origin by `offset`.
    fn translate(&mut self, offset: Vec2);

    /// Restore the origin to the canvas top-left.
    fn reset_transform(&mut self);

    /// Centered text; hosts without text rendering may ignore it.
    fn fill_text(&mut self, _text: &str, _center: Vec2, _size: f32, _color: Hsba) {}

    /// Size of the newest decoded webcam frame, or `None` when no frame is
    /// ready yet.
    fn video_frame_size(&self) -> Option<(f32, f32)> {
        None
    }

    /// Blit the newest webcam frame into `rect` (absolute canvas pixels).
    fn draw_video(&mut self, _rect: Rect) {}
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Rect { rect: Rect, color: Hsba },
    Disc { center: Vec2, diameter: f32, color: Hsba },
    Text { text: String, center: Vec2, size: f32, color: Hsba },
    Video { rect: Rect },
}

/// A [`Surface`] that records commands in absolute canvas coordinates.
#[derive(Clone, Debug, Default)]
pub struct CommandList {
    viewport: Viewport,
    origin: Vec2,
    video_size: Option<(f32, f32)>,
    pub commands: Vec<DrawCommand>,
}

impl CommandList {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            ..Self::default()
        }
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    /// Report a ready video frame of the given size to the simulation.
    pub fn set_video_frame_size(&mut self, size: Option<(f32, f32)>) {
        self.video_size = size;
    }

    /// Take the recorded commands, leaving the list empty and the origin reset.
    pub fn drain(&mut self) -> Vec<DrawCommand> {
        self.origin = Vec2::ZERO;
        std::mem::take(&mut self.commands)
    }

    pub fn discs(&self) -> impl Iterator<Item = (Vec2, f32, Hsba)> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Disc {
                center,
                diameter,
                color,
            } => Some((*center, *diameter, *color)),
            _ => None,
        })
    }

    pub fn rects(&self) -> impl Iterator<Item = (Rect, Hsba)> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Rect { rect, color } => Some((*rect, *color)),
            _ => None,
        })
    }
}

impl Surface for CommandList {
    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn fill_rect(&mut self, rect: Rect, color: Hsba) {
        let rect = Rect::new(rect.x + self.origin.x, rect.y + self.origin.y, rect.w, rect.h);
        self.commands.push(DrawCommand::Rect { rect, color });
    }

    fn fill_disc(&mut self, center: Vec2, diameter: f32, color: Hsba) {
        self.commands.push(DrawCommand::Disc {
            center: center + self.origin,
            diameter,
            color,
        });
    }

    fn translate(&mut self, offset: Vec2) {
        self.origin += offset;
    }

    fn reset_transform(&mut self) {
        self.origin = Vec2::ZERO;
    }

    fn fill_text(&mut self, text: &str, center: Vec2, size: f32, color: Hsba) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            center: center + self.origin,
            size,
            color,
        });
    }

    fn video_frame_size(&self) -> Option<(f32, f32)> {
        self.video_size
    }

    fn draw_video(&mut self, rect: Rect) {
        self.commands.push(DrawCommand::Video { rect });
    }
}

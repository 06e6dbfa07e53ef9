//! Turns recorded draw commands into GPU instances.

use fear_core::{DrawCommand, Viewport};

pub const SHAPE_RECT: f32 = 0.0;
pub const SHAPE_DISC: f32 = 1.0;

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct InstanceData {
    pub center: [f32; 2],
    pub size: [f32; 2],
    pub color: [f32; 4],
    pub shape: f32,
    pub _pad: [f32; 3],
}

#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Uniforms {
    pub viewport: [f32; 2],
    pub _pad: [f32; 2],
}

impl Uniforms {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport: [viewport.width.max(1.0), viewport.height.max(1.0)],
            _pad: [0.0; 2],
        }
    }
}

/// Instance for a single command. Text and video have no GPU path here.
pub fn instance_for(cmd: &DrawCommand) -> Option<InstanceData> {
    match cmd {
        DrawCommand::Rect { rect, color } => Some(InstanceData {
            center: [rect.x + rect.w * 0.5, rect.y + rect.h * 0.5],
            size: [rect.w, rect.h],
            color: color.to_rgba(),
            shape: SHAPE_RECT,
            _pad: [0.0; 3],
        }),
        DrawCommand::Disc {
            center,
            diameter,
            color,
        } => Some(InstanceData {
            center: center.to_array(),
            size: [*diameter, *diameter],
            color: color.to_rgba(),
            shape: SHAPE_DISC,
            _pad: [0.0; 3],
        }),
        DrawCommand::Text { .. } | DrawCommand::Video { .. } => None,
    }
}

/// Rebuild `out` from `commands`, keeping draw order. Returns how many
/// commands were skipped.
pub fn build_instances(commands: &[DrawCommand], out: &mut Vec<InstanceData>) -> usize {
    out.clear();
    let mut skipped = 0;
    for cmd in commands {
        match instance_for(cmd) {
            Some(inst) => out.push(inst),
            None => skipped += 1,
        }
    }
    skipped
}

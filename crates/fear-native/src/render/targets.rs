use super::helpers;

pub const CANVAS_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Rgba8Unorm;

/// Persistent offscreen canvas. Frames draw over its previous contents, so
/// it is only cleared right after (re)creation.
pub struct CanvasTarget {
    pub tex: wgpu::Texture,
    pub view: wgpu::TextureView,
    pub needs_clear: bool,
}

impl CanvasTarget {
    pub fn new(device: &wgpu::Device, width: u32, height: u32) -> Self {
        let (tex, view) = create(device, width, height);
        Self {
            tex,
            view,
            needs_clear: true,
        }
    }

    pub fn recreate(&mut self, device: &wgpu::Device, width: u32, height: u32) {
        (self.tex, self.view) = create(device, width, height);
        self.needs_clear = true;
    }

    /// Load op for the next draw into the canvas; clears to black once.
    pub fn take_load_op(&mut self) -> wgpu::LoadOp<wgpu::Color> {
        if std::mem::take(&mut self.needs_clear) {
            wgpu::LoadOp::Clear(wgpu::Color::BLACK)
        } else {
            wgpu::LoadOp::Load
        }
    }
}

fn create(device: &wgpu::Device, width: u32, height: u32) -> (wgpu::Texture, wgpu::TextureView) {
    helpers::create_color_texture(
        device,
        "canvas_tex",
        width,
        height,
        CANVAS_FORMAT,
        wgpu::TextureUsages::RENDER_ATTACHMENT | wgpu::TextureUsages::TEXTURE_BINDING,
    )
}

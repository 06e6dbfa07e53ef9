use fear_core::{CommandList, SimParams, Sketch, Viewport};
use glam::Vec2;
use winit::{
    event::*,
    event_loop::EventLoop,
    keyboard::{Key, NamedKey},
    window::WindowBuilder,
};

mod input;
mod render;

use input::NativeInput;
use render::GpuState;

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title("Fear")
        .with_inner_size(winit::dpi::LogicalSize::new(1280.0, 800.0))
        .build(&event_loop)?;

    let mut gpu = pollster::block_on(GpuState::new(&window))?;

    let params = SimParams {
        seed: rand::random(),
        ..SimParams::default()
    };
    log::info!("[native] seed {}", params.seed);
    let mut sketch = Sketch::new(params);
    // Commands from events and frames accumulate here until the next present
    let mut pending = CommandList::new(gpu.viewport());
    match sketch.start(&mut pending) {
        Ok(true) => log::info!("[native] simulation started"),
        Ok(false) => log::warn!("[native] window has no size yet; showing placeholder"),
        Err(e) => log::error!("[native] cannot start simulation: {}", e),
    }
    let mut input = NativeInput::default();
    log::info!("[native] click to jolt, Up/Down adjust dread, Esc quits");

    event_loop.run(move |event, elwt| match event {
        Event::WindowEvent { event, .. } => match event {
            WindowEvent::CloseRequested => elwt.exit(),
            WindowEvent::Resized(size) => {
                if gpu.resize(size) {
                    let viewport: Viewport = gpu.viewport();
                    pending.set_viewport(viewport);
                    sketch.resize(viewport, &mut pending);
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                input.pointer = Vec2::new(position.x as f32, position.y as f32);
            }
            WindowEvent::MouseInput {
                state: ElementState::Pressed,
                button: MouseButton::Left,
                ..
            } => sketch.press(&mut pending),
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        logical_key,
                        state: ElementState::Pressed,
                        ..
                    },
                ..
            } => match logical_key {
                Key::Named(NamedKey::ArrowUp) => {
                    input.nudge_slider(1);
                    log::info!("[native] dread slider {}", input.slider);
                }
                Key::Named(NamedKey::ArrowDown) => {
                    input.nudge_slider(-1);
                    log::info!("[native] dread slider {}", input.slider);
                }
                Key::Named(NamedKey::Escape) => elwt.exit(),
                _ => {}
            },
            _ => {}
        },
        Event::AboutToWait => {
            pending.set_viewport(gpu.viewport());
            sketch.frame(&input.frame_inputs(), &mut pending);
            let commands = pending.drain();
            match gpu.render(&commands) {
                Ok(_) => gpu.window.request_redraw(),
                Err(wgpu::SurfaceError::Lost) => {
                    let size = gpu.window.inner_size();
                    gpu.resize(size);
                }
                Err(wgpu::SurfaceError::OutOfMemory) => elwt.exit(),
                Err(e) => log::warn!("[gpu] frame skipped: {:?}", e),
            }
        }
        _ => {}
    })?;
    Ok(())
}

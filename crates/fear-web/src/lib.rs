#![cfg(target_arch = "wasm32")]
use fear_core::{SimParams, Sketch};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod overlay;
mod render;
mod webcam;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("fear-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas = dom::find_or_create_canvas(&document)?;
    let (w, h) = dom::sync_canvas_to_window(&canvas);
    log::info!("[init] canvas {}x{}", w, h);
    let surface = Rc::new(RefCell::new(render::CanvasSurface::new(canvas.clone())?));

    let slider = dom::find_slider(&document);
    if slider.is_none() {
        log::error!("[init] #{} not found; dread stays at its default", constants::SLIDER_ID);
    }

    // Fresh field every page load
    let params = SimParams {
        seed: (js_sys::Math::random() * u32::MAX as f64) as u64,
        ..SimParams::default()
    };
    let sketch = Rc::new(RefCell::new(Sketch::new(params)));
    match sketch.borrow_mut().start(&mut *surface.borrow_mut()) {
        Ok(true) => log::info!("[init] simulation started"),
        Ok(false) => log::warn!("[init] canvas has no size yet; showing placeholder"),
        Err(e) => log::error!("[init] cannot start simulation: {}", e),
    }

    let mouse = Rc::new(RefCell::new(input::MouseState::default()));

    events::wire_input_handlers(events::InputWiring {
        canvas,
        sketch: sketch.clone(),
        surface: surface.clone(),
        mouse_state: mouse.clone(),
    });
    events::wire_resize(sketch.clone(), surface.clone());
    events::wire_info_box(&document);

    {
        let surface = surface.clone();
        let document = document.clone();
        spawn_local(async move {
            match webcam::start_capture(&document).await {
                Ok(video) => surface.borrow_mut().set_video(video),
                Err(e) => log::warn!("[webcam] unavailable: {:?}", e),
            }
        });
    }

    frame::start_loop(frame::FrameContext {
        sketch,
        surface,
        mouse,
        slider,
    });

    Ok(())
}

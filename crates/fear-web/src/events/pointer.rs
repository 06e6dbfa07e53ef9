use crate::constants::UI_PRESS_SELECTORS;
use crate::input;
use crate::render::CanvasSurface;
use fear_core::Sketch;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct InputWiring {
    pub canvas: web::HtmlCanvasElement,
    pub sketch: Rc<RefCell<Sketch>>,
    pub surface: Rc<RefCell<CanvasSurface>>,
    pub mouse_state: Rc<RefCell<input::MouseState>>,
}

pub fn wire_input_handlers(w: InputWiring) {
    let Some(window) = web::window() else {
        log::error!("[input] no window; pointer input disabled");
        return;
    };

    // pointermove: tracked window-wide so the pointer keeps steering when it
    // leaves the canvas
    {
        let mouse_m = w.mouse_state.clone();
        let canvas_m = w.canvas.clone();
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
            let pos = input::pointer_canvas_px(&ev, &canvas_m);
            let mut ms = mouse_m.borrow_mut();
            ms.x = pos.x;
            ms.y = pos.y;
        }) as Box<dyn FnMut(_)>);
        let _ =
            window.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    // pointerdown: palette swap + panic jolt, unless the press is on the UI
    {
        let mouse_m = w.mouse_state.clone();
        let canvas_m = w.canvas.clone();
        let sketch_m = w.sketch.clone();
        let surface_m = w.surface.clone();
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
            if input::is_ui_press(ev.target(), &UI_PRESS_SELECTORS) {
                log::debug!("[input] press on UI panel ignored");
                return;
            }
            let pos = input::pointer_canvas_px(&ev, &canvas_m);
            {
                let mut ms = mouse_m.borrow_mut();
                ms.x = pos.x;
                ms.y = pos.y;
            }
            sketch_m.borrow_mut().press(&mut *surface_m.borrow_mut());
        }) as Box<dyn FnMut(_)>);
        let _ =
            window.add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

use crate::constants::INFO_BOX_ID;
use crate::dom;
use crate::overlay;
use crate::render::CanvasSurface;
use fear_core::{Sketch, Surface};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Keep the canvas the size of the window and rebuild the sketch on change.
pub fn wire_resize(sketch: Rc<RefCell<Sketch>>, surface: Rc<RefCell<CanvasSurface>>) {
    let resize_closure = Closure::wrap(Box::new(move || {
        let mut surface = surface.borrow_mut();
        let (w, h) = dom::sync_canvas_to_window(surface.canvas());
        log::info!("[window] resized to {}x{}", w, h);
        let viewport = surface.viewport();
        sketch.borrow_mut().resize(viewport, &mut *surface);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

/// Clicking the instructions box collapses or expands it.
pub fn wire_info_box(document: &web::Document) {
    let doc = document.clone();
    dom::add_click_listener(document, INFO_BOX_ID, move || overlay::toggle(&doc));
}

use crate::input;
use crate::render::CanvasSurface;
use fear_core::{FrameInputs, Sketch};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub sketch: Rc<RefCell<Sketch>>,
    pub surface: Rc<RefCell<CanvasSurface>>,
    pub mouse: Rc<RefCell<input::MouseState>>,
    pub slider: Option<web::HtmlInputElement>,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let inputs = FrameInputs {
            pointer: self.mouse.borrow().position(),
            slider: self.read_slider(),
        };
        let mut surface = self.surface.borrow_mut();
        self.sketch.borrow_mut().frame(&inputs, &mut *surface);
    }

    fn read_slider(&self) -> Option<f32> {
        self.slider
            .as_ref()
            .and_then(|s| input::parse_slider_value(&s.value()))
    }
}

/// Drive `ctx.frame()` from `requestAnimationFrame` for the lifetime of the page.
pub fn start_loop(mut ctx: FrameContext) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        ctx.frame();
        if let (Some(w), Some(cb)) = (web::window(), tick_clone.borrow().as_ref()) {
            let _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }) as Box<dyn FnMut()>));
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        let _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}

use crate::constants::{CANVAS_ID, SLIDER_ID};
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
        let _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

/// Find the sketch canvas, creating a full-window one when the page has none.
pub fn find_or_create_canvas(document: &web::Document) -> anyhow::Result<web::HtmlCanvasElement> {
    if let Some(el) = document.get_element_by_id(CANVAS_ID) {
        return el
            .dyn_into::<web::HtmlCanvasElement>()
            .map_err(|_| anyhow::anyhow!("#{} is not a canvas", CANVAS_ID));
    }
    let canvas = document
        .create_element("canvas")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|_| anyhow::anyhow!("created element is not a canvas"))?;
    canvas.set_id(CANVAS_ID);
    let _ = canvas.set_attribute(
        "style",
        "position:fixed;left:0;top:0;width:100vw;height:100vh;display:block",
    );
    let body = document.body().ok_or_else(|| anyhow::anyhow!("no body"))?;
    body.append_child(&canvas)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    Ok(canvas)
}

/// Size the backing store to the window in CSS pixels. The sketch draws at a
/// pixel density of one, so the device pixel ratio is ignored.
pub fn sync_canvas_to_window(canvas: &web::HtmlCanvasElement) -> (u32, u32) {
    let (w, h) = web::window()
        .map(|w| {
            let iw = w.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
            let ih = w.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
            (iw as u32, ih as u32)
        })
        .unwrap_or((0, 0));
    canvas.set_width(w);
    canvas.set_height(h);
    (w, h)
}

/// The dread slider, if the page provides one.
pub fn find_slider(document: &web::Document) -> Option<web::HtmlInputElement> {
    document
        .get_element_by_id(SLIDER_ID)
        .and_then(|el| el.dyn_into::<web::HtmlInputElement>().ok())
}

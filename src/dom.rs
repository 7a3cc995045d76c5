use crate::core::{Viewport, VizError, FRAGMENT_SHADER_ID, VERTEX_SHADER_ID};
use crate::render::ShaderSources;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn add_click_listener(element: &web::EventTarget, mut handler: impl FnMut() + 'static) {
    let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
    _ = element.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Current window size in CSS pixels and the device pixel ratio.
pub fn window_viewport() -> Viewport {
    let Some(w) = web::window() else {
        return Viewport::new(1.0, 1.0, 1.0);
    };
    let dim = |v: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
        v.ok().and_then(|v| v.as_f64()).unwrap_or(1.0) as f32
    };
    Viewport::new(
        dim(w.inner_width()),
        dim(w.inner_height()),
        w.device_pixel_ratio() as f32,
    )
}

pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement, viewport: &Viewport) {
    let (w_px, h_px) = viewport.buffer_size();
    canvas.set_width(w_px);
    canvas.set_height(h_px);
}

fn shader_text(document: &web::Document, id: &str) -> Result<String, VizError> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.text_content())
        .filter(|s| !s.trim().is_empty())
        .ok_or_else(|| VizError::ShaderSourceMissing { id: id.to_string() })
}

pub fn read_shader_sources(document: &web::Document) -> Result<ShaderSources, VizError> {
    Ok(ShaderSources {
        vertex: shader_text(document, VERTEX_SHADER_ID)?,
        fragment: shader_text(document, FRAGMENT_SHADER_ID)?,
    })
}

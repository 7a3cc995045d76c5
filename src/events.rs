use crate::dom;
use crate::frame::SharedApp;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Document-wide pointer tracking; every event overwrites the offset.
pub fn wire_pointer_move(document: &web::Document, app: SharedApp) {
    let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        app.borrow_mut()
            .pointer_moved(ev.client_x() as f32, ev.client_y() as f32);
    }) as Box<dyn FnMut(_)>);
    _ = document.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
    closure.forget();
}

pub fn wire_resize(canvas: web::HtmlCanvasElement, app: SharedApp) {
    let closure = Closure::wrap(Box::new(move || {
        let vp = dom::window_viewport();
        dom::sync_canvas_backing_size(&canvas, &vp);
        app.borrow_mut().resize(vp.width, vp.height, vp.pixel_ratio);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

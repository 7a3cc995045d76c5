use crate::core::STATUS_OVERLAY_ID;
use web_sys as web;

/// Show a message on the status overlay.
pub fn show_message(document: &web::Document, message: &str) {
    if let Some(el) = document.get_element_by_id(STATUS_OVERLAY_ID) {
        el.set_text_content(Some(message));
        _ = el.class_list().remove_1("hidden");
        // fallback for environments without CSS class
        _ = el.set_attribute("style", "");
    }
}

#[inline]
pub fn hide(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(STATUS_OVERLAY_ID) {
        _ = el.class_list().add_1("hidden");
        _ = el.set_attribute("style", "display:none");
    }
}

/// Log an error and surface it to the viewer, if a document is available.
pub fn report(message: &str) {
    log::error!("{}", message);
    if let Some(document) = crate::dom::window_document() {
        show_message(&document, message);
    }
}

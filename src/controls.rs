use crate::core::{
    Controls, StatusNotice, VizError, Widget, CONTROLS_Z_INDEX, PAUSE_BUTTON_ID, PLAY_BUTTON_ID,
};
use crate::dom;
use crate::frame::RunLoop;
use crate::overlay;
use wasm_bindgen::JsCast;
use web_sys as web;

// Triangle with rounded corners
const PLAY_ICON_SVG: &str = r#"<svg width="100" height="100" viewBox="0 0 100 100">
    <polygon points="30,20 80,50 30,80" fill="black" stroke="black" stroke-width="5" stroke-linejoin="round"/>
</svg>"#;

// Two rounded bars
const PAUSE_ICON_SVG: &str = r#"<svg width="100" height="100" viewBox="0 0 100 100">
    <rect x="30" y="20" width="15" height="60" fill="black" rx="8" ry="8"/>
    <rect x="55" y="20" width="15" height="60" fill="black" rx="8" ry="8"/>
</svg>"#;

/// The two overlapping, centered play/pause buttons.
#[derive(Clone)]
pub struct ControlWidgets {
    play: web::HtmlElement,
    pause: web::HtmlElement,
}

fn make_button(
    document: &web::Document,
    id: &str,
    label: &str,
    svg: &str,
) -> Result<web::HtmlElement, VizError> {
    let js = |e: wasm_bindgen::JsValue| VizError::Dom(format!("{} button: {:?}", label, e));
    let el = document.create_element("button").map_err(js)?;
    el.set_id(id);
    el.set_inner_html(svg);
    _ = el.set_attribute("aria-label", label);
    let button: web::HtmlElement = el
        .dyn_into()
        .map_err(|_| VizError::Dom(format!("{} button is not an HtmlElement", label)))?;
    let style = button.style();
    let z_index = CONTROLS_Z_INDEX.to_string();
    for (prop, value) in [
        ("position", "absolute"),
        ("top", "50%"),
        ("left", "50%"),
        ("transform", "translate(-50%, -50%)"),
        ("padding", "0"),
        ("background-color", "transparent"),
        ("border", "none"),
        ("cursor", "pointer"),
        ("z-index", z_index.as_str()),
    ] {
        style.set_property(prop, value).map_err(js)?;
    }
    Ok(button)
}

impl ControlWidgets {
    pub fn create(document: &web::Document) -> Result<Self, VizError> {
        let body = document
            .body()
            .ok_or_else(|| VizError::Dom("document has no body".into()))?;
        let play = make_button(document, PLAY_BUTTON_ID, "Play", PLAY_ICON_SVG)?;
        let pause = make_button(document, PAUSE_BUTTON_ID, "Pause", PAUSE_ICON_SVG)?;
        for b in [&play, &pause] {
            body.append_child(b)
                .map_err(|e| VizError::Dom(format!("append button: {:?}", e)))?;
        }
        Ok(Self { play, pause })
    }

    /// Show exactly the widget the state machine says is visible.
    pub fn sync(&self, controls: &Controls) {
        let (shown, hidden) = match controls.visible() {
            Widget::Play => (&self.play, &self.pause),
            Widget::Pause => (&self.pause, &self.play),
        };
        _ = shown.style().set_property("display", "inline");
        _ = hidden.style().set_property("display", "none");
    }

    pub fn wire(&self, run_loop: &RunLoop) {
        let rl = run_loop.clone();
        dom::add_click_listener(&self.play, move || {
            let notice = rl.app().borrow_mut().play_clicked();
            rl.widgets().sync(rl.app().borrow().controls());
            if let Some(document) = dom::window_document() {
                match notice {
                    StatusNotice::Clear => overlay::hide(&document),
                    StatusNotice::Show(message) => overlay::show_message(&document, &message),
                }
            }
            log::info!("[controls] play");
            rl.start();
        });

        let rl = run_loop.clone();
        dom::add_click_listener(&self.pause, move || {
            rl.app().borrow_mut().pause_clicked();
            rl.widgets().sync(rl.app().borrow().controls());
            log::info!("[controls] pause");
            rl.stop();
        });
    }
}

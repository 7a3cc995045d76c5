#![cfg(target_arch = "wasm32")]
use crate::core::{
    App, AudioTransport, BloomParams, OutputParams, AUDIO_ASSET_PATH, CANVAS_ID,
};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod audio;
mod controls;
mod core;
mod dom;
mod events;
mod frame;
mod overlay;
mod render;

use audio::WebAudio;
use controls::ControlWidgets;
use frame::{RunLoop, SharedApp};
use render::GpuState;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("sonic-icosa starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            overlay::report(&format!("init error: {:#}", e));
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", CANVAS_ID))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    // Fail fast before touching the GPU when the page lacks shader text.
    let shaders = dom::read_shader_sources(&document)?;

    let viewport = dom::window_viewport();
    dom::sync_canvas_backing_size(&canvas, &viewport);

    let gpu = GpuState::new(
        &canvas,
        viewport.buffer_size(),
        &shaders,
        BloomParams::default(),
        OutputParams::default(),
    )
    .await?;
    let audio = WebAudio::new()?;

    let app: SharedApp = Rc::new(RefCell::new(App::new(gpu, audio, viewport)));

    let widgets = ControlWidgets::create(&document)?;
    widgets.sync(app.borrow().controls());
    let run_loop = RunLoop::new(app.clone(), widgets.clone());
    widgets.wire(&run_loop);

    events::wire_pointer_move(&document, app.clone());
    events::wire_resize(canvas.clone(), app.clone());

    spawn_local(load_audio(app.clone()));

    run_loop.start();
    Ok(())
}

async fn load_audio(app: SharedApp) {
    let ctx = app.borrow().audio().context().clone();
    match audio::fetch_audio_buffer(&ctx, AUDIO_ASSET_PATH).await {
        Ok(buffer) => {
            let mut app = app.borrow_mut();
            app.audio_mut().attach_buffer(buffer);
            if app.is_playing() {
                app.audio_mut().play();
            }
        }
        Err(e) => {
            app.borrow_mut().audio_mut().mark_failed(&e);
            overlay::report(&e.to_string());
        }
    }
}

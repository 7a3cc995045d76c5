use crate::audio::WebAudio;
use crate::controls::ControlWidgets;
use crate::core::{App, ElapsedClock};
use crate::overlay;
use crate::render::GpuState;
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub type VizApp = App<GpuState, WebAudio>;
pub type SharedApp = Rc<RefCell<VizApp>>;

struct LoopInner {
    app: SharedApp,
    widgets: ControlWidgets,
    clock: RefCell<ElapsedClock>,
    // Handle of the requested animation frame, if one is outstanding.
    pending: Cell<Option<i32>>,
    tick: RefCell<Option<Closure<dyn FnMut()>>>,
}

/// Animation-frame driver with explicit start/stop.
///
/// At most one frame request is outstanding at a time, so repeated `start()`
/// calls never fork a second loop. `stop()` cancels the outstanding request by
/// handle; a tick that still fires finds the app paused and does nothing.
#[derive(Clone)]
pub struct RunLoop {
    inner: Rc<LoopInner>,
}

impl RunLoop {
    pub fn new(app: SharedApp, widgets: ControlWidgets) -> Self {
        let inner = Rc::new(LoopInner {
            app,
            widgets,
            clock: RefCell::new(ElapsedClock::new()),
            pending: Cell::new(None),
            tick: RefCell::new(None),
        });
        let weak: Weak<LoopInner> = Rc::downgrade(&inner);
        *inner.tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            if let Some(inner) = weak.upgrade() {
                inner.on_frame();
            }
        }) as Box<dyn FnMut()>));
        Self { inner }
    }

    pub fn app(&self) -> &SharedApp {
        &self.inner.app
    }

    pub fn widgets(&self) -> &ControlWidgets {
        &self.inner.widgets
    }

    pub fn start(&self) {
        if self.inner.pending.get().is_some() {
            return;
        }
        log::info!("[loop] start");
        self.inner.schedule();
    }

    pub fn stop(&self) {
        if let Some(handle) = self.inner.pending.take() {
            if let Some(w) = web::window() {
                _ = w.cancel_animation_frame(handle);
            }
        }
        log::info!("[loop] stop");
    }
}

impl LoopInner {
    fn schedule(&self) {
        let Some(w) = web::window() else {
            return;
        };
        let tick = self.tick.borrow();
        if let Some(cb) = tick.as_ref() {
            match w.request_animation_frame(cb.as_ref().unchecked_ref()) {
                Ok(handle) => self.pending.set(Some(handle)),
                Err(e) => log::error!("[loop] requestAnimationFrame failed: {:?}", e),
            }
        }
    }

    fn on_frame(&self) {
        self.pending.set(None);
        let elapsed = self.clock.borrow_mut().elapsed_sec();
        let result = self.app.borrow_mut().tick(elapsed);
        match result {
            Ok(true) => self.schedule(),
            Ok(false) => {}
            Err(e) => {
                self.widgets.sync(self.app.borrow().controls());
                overlay::report(&format!("Rendering stopped: {}", e));
            }
        }
    }
}

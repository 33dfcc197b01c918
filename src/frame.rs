use crate::surface::CanvasSurface;
use field_core::{FrameRate, Simulation};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub sim: Rc<RefCell<Simulation>>,
    pub surface: CanvasSurface,
    pub last_instant: Instant,
    pub frame_rate: FrameRate,
}

impl FrameContext {
    pub fn new(sim: Rc<RefCell<Simulation>>, surface: CanvasSurface) -> Self {
        Self {
            sim,
            surface,
            last_instant: Instant::now(),
            frame_rate: FrameRate::new(),
        }
    }

    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt = now - self.last_instant;
        self.last_instant = now;

        let stats = self.sim.borrow_mut().frame(&mut self.surface);

        if let Some(fps) = self.frame_rate.tick(dt) {
            log::debug!(
                "[frame] fps={} lines={} triangles={} capped={}",
                fps,
                stats.lines,
                stats.triangles,
                stats.capped
            );
        }
    }
}

/// Run `frame` once per display refresh for the lifetime of the page.
/// The next frame is requested only after the current one has finished.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        let _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}

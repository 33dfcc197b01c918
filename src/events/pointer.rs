use crate::dom;
use crate::input;
use field_core::{PointerTarget, Simulation};
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct PointerWiring {
    pub canvas: web::HtmlCanvasElement,
    pub sim: Rc<RefCell<Simulation>>,
}

pub fn wire_pointer_handlers(w: PointerWiring) {
    wire_mousedown(&w);
    wire_resize(&w);
}

// Listens on the window: the canvas sits behind page content and clicks on
// that content should still ripple unless they hit a control.
fn wire_mousedown(w: &PointerWiring) {
    let sim = w.sim.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        let target = ev
            .target()
            .and_then(|t| t.dyn_into::<web::Element>().ok())
            .map(|el| input::pointer_target_for_tag(&el.tag_name()))
            .unwrap_or(PointerTarget::Surface);
        let point = Vec2::new(ev.client_x() as f32, ev.client_y() as f32);
        sim.borrow_mut().pointer_down(point, target);
    }) as Box<dyn FnMut(_)>);
    if let Some(wnd) = web::window() {
        let _ = wnd.add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn wire_resize(w: &PointerWiring) {
    let canvas = w.canvas.clone();
    let sim = w.sim.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || {
        let bounds = dom::sync_canvas_to_window(&canvas);
        sim.borrow_mut().resize(bounds);
    }) as Box<dyn FnMut()>);
    if let Some(wnd) = web::window() {
        let _ = wnd.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

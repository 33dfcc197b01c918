use crate::constants::{DARK_MODE_CLASS, MODE_BUTTON_ID};
use crate::input;
use field_core::{SimMode, Theme};
use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Wire a click handler if the element exists. Returns whether it was wired;
/// every page control is optional.
#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) -> bool {
    let Some(el) = document.get_element_by_id(element_id) else {
        log::debug!("[dom] no #{}; skipping", element_id);
        return false;
    };
    let closure =
        wasm_bindgen::closure::Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
    let _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
    true
}

/// Size the canvas backing store to the window and return the new bounds.
pub fn sync_canvas_to_window(canvas: &web::HtmlCanvasElement) -> Vec2 {
    let (w, h) = match web::window() {
        Some(win) => {
            let iw = win.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
            let ih = win.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
            input::surface_size(iw, ih)
        }
        None => (canvas.width().max(1), canvas.height().max(1)),
    };
    canvas.set_width(w);
    canvas.set_height(h);
    Vec2::new(w as f32, h as f32)
}

pub fn apply_theme_class(document: &web::Document, theme: Theme) {
    let targets = [
        document.body().map(|b| b.class_list()),
        document.document_element().map(|e| e.class_list()),
    ];
    for cl in targets.into_iter().flatten() {
        if theme.is_dark() {
            _ = cl.add_1(DARK_MODE_CLASS);
        } else {
            _ = cl.remove_1(DARK_MODE_CLASS);
        }
    }
}

pub fn update_mode_button(document: &web::Document, mode: SimMode) {
    if let Some(el) = document.get_element_by_id(MODE_BUTTON_ID) {
        el.set_text_content(Some(input::mode_button_label(mode)));
    }
}

use crate::constants::{MODE_BUTTON_ID, SHAKE_BUTTON_ID, THEME_BUTTON_ID};
use crate::dom;
use crate::storage::LocalPrefs;
use field_core::Simulation;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

// Each control is optional; a missing button simply never fires.
pub fn wire_buttons(
    document: &web::Document,
    sim: Rc<RefCell<Simulation>>,
    prefs: Rc<RefCell<LocalPrefs>>,
) {
    {
        let sim = sim.clone();
        dom::add_click_listener(document, SHAKE_BUTTON_ID, move || {
            sim.borrow_mut().shake();
        });
    }

    {
        let sim = sim.clone();
        let prefs = prefs.clone();
        let doc = document.clone();
        dom::add_click_listener(document, THEME_BUTTON_ID, move || {
            let theme = sim.borrow_mut().toggle_theme(&mut *prefs.borrow_mut());
            dom::apply_theme_class(&doc, theme);
        });
    }

    {
        let doc = document.clone();
        dom::add_click_listener(document, MODE_BUTTON_ID, move || {
            let mode = sim.borrow_mut().toggle_mode(&mut *prefs.borrow_mut());
            dom::update_mode_button(&doc, mode);
        });
    }
}

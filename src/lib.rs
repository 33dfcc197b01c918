#![cfg(target_arch = "wasm32")]
use field_core::{Simulation, SimulationConfig};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod storage;
mod surface;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(input::console_log_level(cfg!(debug_assertions))).ok();
    log::info!("neural-field starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let document =
        dom::window_document().ok_or_else(|| anyhow::anyhow!("no window or document"))?;

    let canvas_el = document
        .get_element_by_id(constants::CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", constants::CANVAS_ID))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    // Nothing can render without a 2D context; stop before wiring anything.
    let ctx = canvas
        .get_context("2d")
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?
        .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    let bounds = dom::sync_canvas_to_window(&canvas);
    let prefs = Rc::new(RefCell::new(storage::LocalPrefs::from_window()));

    let sim = {
        let mut sim =
            Simulation::with_rng(SimulationConfig::default(), bounds, StdRng::from_entropy());
        sim.load_preferences(&*prefs.borrow());
        Rc::new(RefCell::new(sim))
    };
    {
        let s = sim.borrow();
        dom::apply_theme_class(&document, s.theme());
        dom::update_mode_button(&document, s.mode());
        log::info!(
            "[sim] mode={} particles={} surface={:.0}x{:.0}",
            s.mode(),
            s.particles().len(),
            bounds.x,
            bounds.y
        );
    }

    events::wire_pointer_handlers(events::PointerWiring {
        canvas: canvas.clone(),
        sim: sim.clone(),
    });
    events::wire_buttons(&document, sim.clone(), prefs);

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext::new(
        sim,
        surface::CanvasSurface::new(ctx),
    )));
    frame::start_loop(frame_ctx);
    Ok(())
}

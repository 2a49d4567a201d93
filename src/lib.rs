#![cfg(target_arch = "wasm32")]
use crate::core::field::FIELD_PARTICLE_COUNT;
use crate::core::orb::OrbFlags;
use crate::core::skills::{demo_insights, demo_readiness, demo_skills};
use crate::frame::RafLoop;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;

mod constants;
mod core;
mod dom;
mod frame;
mod gauge;
mod insights;
mod render;

use constants::RADAR_SIZE;

// Loop handles live for the page lifetime; keeping them here (instead of
// leaking) preserves cancel-on-drop if the page ever tears the app down.
thread_local! {
    static MOUNTS: RefCell<Vec<RafLoop>> = RefCell::new(Vec::new());
}

fn retain(handle: RafLoop) {
    MOUNTS.with(|m| m.borrow_mut().push(handle));
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("skillscan-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    // Ambient particle background behind everything
    if let Some(canvas) = dom::canvas_by_id(&document, "field-canvas") {
        let seed = js_sys::Date::now() as u64;
        retain(render::field::mount(canvas, FIELD_PARTICLE_COUNT, seed)?);
        log::info!("[mount] particle field ({FIELD_PARTICLE_COUNT} particles)");
    }

    // AI orb; the analyze control flips its thinking flag
    if let Some(canvas) = dom::canvas_by_id(&document, "orb-canvas") {
        let flags = Rc::new(Cell::new(OrbFlags::default()));
        retain(render::orb::mount(canvas, flags.clone())?);
        log::info!("[mount] orb");

        dom::add_click_listener(&document, "analyze-button", move || {
            let mut f = flags.get();
            f.thinking = !f.thinking;
            flags.set(f);
            log::info!("[orb] thinking={}", f.thinking);
        });
    }

    // Results dashboard widgets over the mock analysis data
    let skills = demo_skills();
    if let Some(canvas) = dom::canvas_by_id(&document, "radar-canvas") {
        retain(render::radar::mount(canvas, skills.clone(), RADAR_SIZE)?);
        log::info!("[mount] radar chart ({} skills)", skills.len());
    }
    if let Some(handle) = gauge::mount_readiness(&document, demo_readiness().percentage) {
        retain(handle);
        log::info!("[mount] readiness gauge");
    }
    if let Some(handle) = gauge::mount_score_list(&document, &skills) {
        retain(handle);
        log::info!("[mount] score list");
    }
    insights::render_into(&document, &demo_insights());

    // Landing-page controls are presentational only: nothing is parsed,
    // uploaded, or fetched.
    dom::add_click_listener(&document, "upload-zone", || {
        log::info!("[upload] resume upload is mocked; the file is not read");
    });
    dom::add_click_listener(&document, "github-connect", || {
        log::info!("[github] connect is mocked; no network request is made");
    });

    Ok(())
}

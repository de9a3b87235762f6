#![cfg(target_arch = "wasm32")]
use anyhow::anyhow;
use site_core::{FieldParams, OnceRegistry, ParticleField};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

mod canvas;
mod constants;
mod counters;
mod dom;
mod events;
mod format;
mod frame;
mod observe;
mod page;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("site-fx starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

/// Resolve once the document has been parsed.
async fn dom_ready(document: &web::Document) -> anyhow::Result<()> {
    if document.ready_state() != "loading" {
        return Ok(());
    }
    let doc = document.clone();
    let ready = js_sys::Promise::new(&mut |resolve, _reject| {
        _ = doc.add_event_listener_with_callback("DOMContentLoaded", &resolve);
    });
    JsFuture::from(ready)
        .await
        .map_err(|e| anyhow!("DOMContentLoaded: {:?}", e))?;
    Ok(())
}

fn init_particles(document: &web::Document) -> anyhow::Result<()> {
    let Some(canvas) = document
        .get_element_by_id(constants::CANVAS_ID)
        .and_then(|el| el.dyn_into::<web::HtmlCanvasElement>().ok())
    else {
        log::debug!("[particles] no #{} canvas", constants::CANVAS_ID);
        return Ok(());
    };
    let Some(surface) = canvas::CanvasSurface::new(&canvas) else {
        log::debug!("[particles] 2d context unavailable");
        return Ok(());
    };
    let (w, h) =
        dom::sync_canvas_to_viewport(&canvas).ok_or_else(|| anyhow!("no viewport size"))?;

    let field = Rc::new(RefCell::new(ParticleField::new(
        FieldParams::default(),
        w,
        h,
        rand::random(),
    )));
    log::info!(
        "[particles] {} particles on {:.0}x{:.0}",
        field.borrow().particles().len(),
        w,
        h
    );

    events::wire_pointermove(field.clone());
    events::wire_resize(canvas, field.clone());
    frame::start_loop(Rc::new(RefCell::new(frame::FrameContext { field, surface })));
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow!("no document"))?;
    dom_ready(&document).await?;

    let registry: counters::Registry = Rc::new(RefCell::new(OnceRegistry::new()));

    // Each feature stands alone; one failing leaves the others running.
    let results = [
        ("particles", init_particles(&document)),
        ("counters", counters::init_counters(&document, &registry)),
        ("card sweep", counters::arm_card_sweep(&document, &registry)),
        ("year", page::stamp_year(&document)),
        ("timeline", page::split_timeline_dates(&document)),
        ("nav", page::init_nav_highlight(&document)),
        ("back-to-top", page::wire_back_to_top(&document)),
    ];
    for (name, result) in results {
        if let Err(e) = result {
            log::warn!("[init] {} disabled: {:?}", name, e);
        }
    }
    log::info!(
        "[init] ready, {} regions awaiting visibility",
        registry.borrow().pending()
    );
    Ok(())
}

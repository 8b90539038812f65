#![cfg(target_arch = "wasm32")]
use instant::Instant;
use obvix_core::SceneState;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod dom;
mod events;
mod frame;
mod render;

const HERO_CANVAS_ID: &str = "hero-canvas";

fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_backing_size(canvas);
    let Some(window) = web::window() else {
        return;
    };
    let canvas_resize = canvas.clone();
    dom::listen(&window, "resize", move |_ev: web::Event| {
        dom::sync_canvas_backing_size(&canvas_resize);
    });
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("obvix-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    // Page widgets work with or without the hero canvas.
    let cards = events::wire_tilt_cards(&document);
    events::wire_faq_accordions(&document);
    events::wire_waitlist_form(&document);
    log::info!("[page] wired {} tilt cards", cards);

    let Some(canvas_el) = document.get_element_by_id(HERO_CANVAS_ID) else {
        log::info!("[scene] no #{} on this page; skipping 3D hero", HERO_CANVAS_ID);
        return Ok(());
    };
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    wire_canvas_resize(&canvas);

    let scene = Rc::new(RefCell::new(SceneState::default()));
    {
        let s = scene.borrow();
        log::info!(
            "[scene] orbit count={} r={:.2} camera=({:.2},{:.2},{:.2})",
            s.layout_params.count,
            s.layout_params.radius,
            s.camera.eye.x,
            s.camera.eye.y,
            s.camera.eye.z
        );
    }
    events::wire_hero_pointer(canvas.clone(), scene.clone());

    let gpu = frame::init_gpu(&canvas).await;
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        scene,
        canvas,
        gpu,
        last_instant: Instant::now(),
    }));
    frame::start_loop(frame_ctx);

    Ok(())
}

use crate::dom;
use obvix_core::{ndc_from_client, SceneState};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Track the pointer on the window and hand samples that land over the hero
/// canvas to the scene. Moves elsewhere on the page keep the last sample.
pub fn wire_hero_pointer(canvas: web::HtmlCanvasElement, scene: Rc<RefCell<SceneState>>) {
    let Some(window) = web::window() else {
        return;
    };
    dom::listen(&window, "pointermove", move |ev: web::PointerEvent| {
        if !canvas.is_connected() {
            return;
        }
        let rect = dom::element_rect(&canvas);
        if let Some(ndc) = ndc_from_client(dom::client_point(&ev), &rect) {
            scene.borrow_mut().set_pointer(ndc);
        }
    });
}

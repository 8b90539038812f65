use crate::dom;
use obvix_core::ShineTracker;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Every `[data-tilt]` card gets its own shine tracker driving the
/// `background` of its `[data-shine]` child.
pub fn wire_tilt_cards(document: &web::Document) -> usize {
    let Some(root) = document.document_element() else {
        return 0;
    };
    let cards = dom::query_all(&root, "[data-tilt]");
    for card in &cards {
        let Ok(Some(shine)) = card.query_selector("[data-shine]") else {
            log::warn!("[tilt] card without [data-shine] layer");
            continue;
        };
        let tracker = Rc::new(RefCell::new(ShineTracker::new()));
        dom::set_style(&shine, "background", &tracker.borrow().gradient_css());

        let tracker_move = tracker.clone();
        let shine_move = shine.clone();
        dom::listen(card, "mousemove", move |ev: web::MouseEvent| {
            let Some(target) = ev
                .current_target()
                .and_then(|t| t.dyn_into::<web::Element>().ok())
            else {
                return;
            };
            let rect = dom::element_rect(&target);
            let css = {
                let mut t = tracker_move.borrow_mut();
                t.on_move(dom::client_point(&ev), &rect);
                t.gradient_css()
            };
            dom::set_style(&shine_move, "background", &css);
        });

        // The shine freezes where the cursor left; nothing to restyle.
        dom::listen(card, "mouseleave", move |_ev: web::MouseEvent| {
            tracker.borrow_mut().on_leave();
        });
    }
    cards.len()
}

use crate::dom;
use obvix_core::{LogOnlyBackend, WaitlistBackend, WaitlistForm};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire_waitlist_form(document: &web::Document) {
    let Some(form) = document.get_element_by_id("waitlist-form") else {
        log::info!("[waitlist] no #waitlist-form on this page");
        return;
    };
    let state = Rc::new(RefCell::new(WaitlistForm::new()));
    let mut backend = LogOnlyBackend;
    let form_el = form.clone();

    dom::listen(&form, "submit", move |ev: web::Event| {
        ev.prevent_default();
        let value = form_el
            .query_selector("input[type=email]")
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<web::HtmlInputElement>().ok())
            .map(|input| input.value())
            .unwrap_or_default();

        let mut form_state = state.borrow_mut();
        let email = match form_state.begin_submit(&value) {
            Ok(email) => email,
            Err(e) => {
                log::warn!("[waitlist] {}", e);
                _ = form_el.set_attribute("data-error", &e.to_string());
                return;
            }
        };
        _ = form_el.set_attribute("data-loading", "1");
        let result = backend.submit(&email);
        let outcome = form_state.finish_submit(result);
        _ = form_el.set_attribute("data-loading", "0");
        match outcome {
            Ok(()) => {
                _ = form_el.remove_attribute("data-error");
                _ = form_el.set_attribute("data-submitted", "1");
            }
            Err(e) => {
                _ = form_el.set_attribute("data-error", &e.to_string());
            }
        }
    });
}

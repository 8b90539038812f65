use crate::dom;
use obvix_core::Accordion;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

fn sync_items(items: &[web::Element], accordion: &Accordion) {
    for (i, item) in items.iter().enumerate() {
        let open = accordion.is_open(i);
        _ = item.set_attribute("data-open", if open { "1" } else { "0" });
        _ = item.set_attribute("aria-expanded", if open { "true" } else { "false" });
    }
}

/// Wire each `[data-faq]` block as a single-open accordion over its
/// `[data-faq-item]` children.
pub fn wire_faq_accordions(document: &web::Document) {
    let Some(root) = document.document_element() else {
        return;
    };
    for block in dom::query_all(&root, "[data-faq]") {
        let items = Rc::new(dom::query_all(&block, "[data-faq-item]"));
        let accordion = Rc::new(RefCell::new(Accordion::new(items.len())));
        sync_items(&items, &accordion.borrow());
        for (i, item) in items.iter().enumerate() {
            let items = items.clone();
            let accordion = accordion.clone();
            dom::listen(item, "click", move |_ev: web::MouseEvent| {
                let mut acc = accordion.borrow_mut();
                acc.toggle(i);
                log::debug!("[faq] open={:?}", acc.open_index());
                sync_items(&items, &acc);
            });
        }
    }
}

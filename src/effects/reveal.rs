use crate::constants::{REVEAL_ROOT_MARGIN, REVEAL_STAGGER_MS, REVEAL_THRESHOLD};
use crate::dom;
use crate::effects::observe;
use web_sys as web;

/// Mark `.section` and `.reveal-text` elements `visible` as they scroll in.
pub fn wire_scroll_reveal(document: &web::Document) {
    let observer = match observe::observer(
        REVEAL_THRESHOLD,
        Some(REVEAL_ROOT_MARGIN),
        |entry: web::IntersectionObserverEntry| {
            if entry.is_intersecting() {
                dom::set_class(&entry.target(), "visible", true);
            }
        },
    ) {
        Ok(obs) => obs,
        Err(e) => {
            log::warn!("[reveal] observer unavailable: {:?}", e);
            return;
        }
    };

    for section in dom::query_all::<web::Element>(document, ".section") {
        observer.observe(&section);
    }

    // Reveal texts join the observer one after another.
    for (i, text) in dom::query_all::<web::Element>(document, ".reveal-text")
        .into_iter()
        .enumerate()
    {
        let observer = observer.clone();
        dom::set_timeout(i as i32 * REVEAL_STAGGER_MS, move || observer.observe(&text));
    }
}

use crate::dom;
use wasm_bindgen::JsCast;
use web_sys as web;

const NAV: &str = ".nav";
const TOGGLE: &str = ".mobile-menu-toggle";
const ACTIVE: &str = "active";

fn parts(document: &web::Document) -> Option<(web::Element, web::Element)> {
    Some((
        dom::query::<web::Element>(document, NAV)?,
        dom::query::<web::Element>(document, TOGGLE)?,
    ))
}

#[inline]
pub fn is_open(document: &web::Document) -> bool {
    dom::query::<web::Element>(document, NAV)
        .map(|nav| nav.class_list().contains(ACTIVE))
        .unwrap_or(false)
}

#[inline]
pub fn close(document: &web::Document) {
    if let Some((nav, button)) = parts(document) {
        dom::set_class(&nav, ACTIVE, false);
        dom::set_class(&button, ACTIVE, false);
    }
}

#[inline]
pub fn toggle(document: &web::Document) {
    if let Some((nav, button)) = parts(document) {
        _ = nav.class_list().toggle(ACTIVE);
        _ = button.class_list().toggle(ACTIVE);
    }
}

/// Hamburger toggle, close on nav link click, close on click outside.
pub fn wire_mobile_menu(document: &web::Document) {
    let Some((nav, toggle_btn)) = parts(document) else {
        log::debug!("[menu] no mobile menu toggle");
        return;
    };

    let doc = document.clone();
    dom::add_click_listener(&toggle_btn, move |_| toggle(&doc));

    for link in dom::query_all::<web::Element>(document, ".nav-link") {
        let doc = document.clone();
        dom::add_click_listener(&link, move |_| close(&doc));
    }

    let doc = document.clone();
    dom::add_click_listener(document, move |ev| {
        let target = ev.target().and_then(|t| t.dyn_into::<web::Node>().ok());
        let inside = |el: &web::Element| el.contains(target.as_ref());
        if !inside(&nav) && !inside(&toggle_btn) {
            close(&doc);
        }
    });
}

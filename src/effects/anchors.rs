use crate::core::scroll::{anchor_scroll_top, anchor_target};
use crate::dom;
use web_sys as web;

/// In-page links scroll smoothly, leaving room for the fixed header.
pub fn wire_smooth_scroll(window: &web::Window, document: &web::Document) {
    for link in dom::query_all::<web::Element>(document, "a[href^=\"#\"]") {
        let (wnd, doc, href_el) = (window.clone(), document.clone(), link.clone());
        dom::add_click_listener(&link, move |ev| {
            ev.prevent_default();
            let href = href_el.get_attribute("href").unwrap_or_default();
            let Some(selector) = anchor_target(&href) else {
                return;
            };
            let Some(target) = dom::query::<web::HtmlElement>(&doc, selector) else {
                return;
            };
            let header_h = dom::query::<web::HtmlElement>(&doc, ".header")
                .map(|h| h.offset_height() as f64)
                .unwrap_or(0.0);
            dom::smooth_scroll_to(&wnd, anchor_scroll_top(target.offset_top() as f64, header_h));
        });
    }
}

pub fn wire_scroll_to_top(window: &web::Window, document: &web::Document) {
    let Some(btn) = dom::query::<web::Element>(document, ".scroll-to-top") else {
        return;
    };
    let wnd = window.clone();
    dom::add_click_listener(&btn, move |_| dom::smooth_scroll_to(&wnd, 0.0));
}

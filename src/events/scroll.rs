use crate::core::scroll;
use crate::dom;
use web_sys as web;

/// Everything that reacts to the window scroll position, in one listener.
pub fn wire_scroll_handlers(window: &web::Window, document: &web::Document) {
    let wnd = window.clone();
    let doc = document.clone();
    let header = dom::query::<web::Element>(document, ".header");
    let progress = dom::query::<web::HtmlElement>(document, ".scroll-progress");
    let to_top = dom::query::<web::Element>(document, ".scroll-to-top");
    let sections = dom::query_all::<web::HtmlElement>(document, ".section, .hero");
    let nav_links = dom::query_all::<web::Element>(document, ".nav-link");

    dom::listen(window, "scroll", move |_: web::Event| {
        let y = dom::scroll_y(&wnd);

        if let (Some(bar), Some(root)) = (&progress, doc.document_element()) {
            let pct = scroll::progress_percent(
                y,
                root.scroll_height() as f64,
                root.client_height() as f64,
            );
            dom::set_style(bar, "width", &format!("{}%", pct));
        }

        if let Some(header) = &header {
            dom::set_class(header, "scrolled", scroll::header_scrolled(y));
        }

        let ids: Vec<(String, f64)> = sections
            .iter()
            .map(|s| (s.id(), s.offset_top() as f64))
            .collect();
        let active = scroll::active_section(ids.iter().map(|(id, top)| (id.as_str(), *top)), y);
        let wanted = scroll::nav_href(active);
        for link in &nav_links {
            let is_active = link.get_attribute("href").as_deref() == Some(wanted.as_str());
            dom::set_class(link, "active", is_active);
        }

        if let Some(btn) = &to_top {
            dom::set_class(btn, "visible", scroll::scroll_to_top_visible(y));
        }

        for el in dom::query_all::<web::HtmlElement>(&doc, ".hero-content") {
            dom::set_style(&el, "transform", &scroll::parallax_transform(y));
        }
    });
}

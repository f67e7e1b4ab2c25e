use crate::constants::{LOADING_HIDE_DELAY_MS, RAINBOW_KEYFRAMES};
use crate::core::ReadyState;
use crate::dom;
use web_sys as web;

/// Run `f` on the window `load` event, or now if it has already fired.
fn after_window_load(window: &web::Window, document: &web::Document, f: impl FnOnce() + 'static) {
    if ReadyState::parse(&document.ready_state()).window_loaded() {
        f();
        return;
    }
    let mut pending = Some(f);
    dom::listen(window, "load", move |_: web::Event| {
        if let Some(f) = pending.take() {
            f();
        }
    });
}

/// Hide the loading screen shortly after the page has fully loaded.
pub fn wire_loading_screen(window: &web::Window, document: &web::Document) {
    let doc = document.clone();
    after_window_load(window, document, move || {
        dom::set_timeout(LOADING_HIDE_DELAY_MS, move || {
            if let Some(screen) = dom::query::<web::Element>(&doc, ".loading-screen") {
                dom::set_class(&screen, "hidden", true);
            }
            if let Some(body) = doc.body() {
                dom::set_class(&body, "loaded", true);
            }
        });
    });
}

/// Tag images `loaded` once they have decoded.
pub fn wire_image_preload(window: &web::Window, document: &web::Document) {
    let doc = document.clone();
    after_window_load(window, document, move || {
        for img in dom::query_all::<web::HtmlImageElement>(&doc, "img") {
            if img.complete() {
                dom::set_class(&img, "loaded", true);
            } else {
                let loaded = img.clone();
                dom::listen(&img, "load", move |_: web::Event| {
                    dom::set_class(&loaded, "loaded", true);
                });
            }
        }
    });
}

/// Inject the keyframes used by the easter egg.
pub fn inject_rainbow_style(document: &web::Document) {
    let (Some(head), Ok(style)) = (document.head(), document.create_element("style")) else {
        return;
    };
    style.set_text_content(Some(RAINBOW_KEYFRAMES));
    _ = head.append_child(&style);
}

pub fn print_console_banner() {
    let lines = [
        (
            "%c👋 Welcome to my portfolio!",
            "font-size: 24px; font-weight: bold; color: #3b82f6;",
        ),
        (
            "%c✨ Built with passion using Rust and WebAssembly",
            "font-size: 14px; color: #64748b;",
        ),
        (
            "%c🚀 Interested in the code? Check out the source!",
            "font-size: 14px; color: #8b5cf6;",
        ),
    ];
    for (text, css) in lines {
        web::console::log_2(&text.into(), &css.into());
    }
}

use crate::constants::KONAMI_ANIMATION;
use crate::core::KonamiDetector;
use crate::dom;
use crate::menu;
use web_sys as web;

pub fn handle_global_keydown(
    ev: &web::KeyboardEvent,
    document: &web::Document,
    konami: &mut KonamiDetector,
) {
    let key = ev.key();
    if key == "Escape" && menu::is_open(document) {
        menu::close(document);
        log::debug!("[keys] menu closed");
    }
    if konami.push(&key) {
        activate_easter_egg(document);
    }
}

fn activate_easter_egg(document: &web::Document) {
    web::console::log_2(
        &"%c🎮 Konami Code Activated! You found the easter egg!".into(),
        &"font-size: 20px; font-weight: bold; color: #10b981;".into(),
    );
    log::info!("[keys] konami code");
    if let Some(body) = document.body() {
        dom::set_style(&body, "animation", KONAMI_ANIMATION);
    }
}

pub fn wire_global_keydown(document: &web::Document) {
    let doc = document.clone();
    let mut konami = KonamiDetector::new();
    dom::listen(document, "keydown", move |ev: web::KeyboardEvent| {
        handle_global_keydown(&ev, &doc, &mut konami);
    });
}

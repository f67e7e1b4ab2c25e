use crate::constants::TYPING_START_DELAY_MS;
use crate::core::Typewriter;
use crate::dom;
use web_sys as web;

pub fn wire_typing_effect(document: &web::Document) {
    let Some(el) = dom::query::<web::Element>(document, ".typing-text") else {
        return;
    };
    schedule(el, Typewriter::default(), TYPING_START_DELAY_MS);
}

// Each step re-arms a one-shot timer with the delay the typewriter asks for.
fn schedule(el: web::Element, mut writer: Typewriter, delay_ms: u32) {
    dom::set_timeout(delay_ms as i32, move || {
        let step = writer.step();
        el.set_text_content(Some(&step.text));
        schedule(el, writer, step.delay_ms);
    });
}

use crate::constants::{FORM_MISSING_FIELDS_MSG, FORM_THANK_YOU_MSG};
use crate::core::form::{label_stays_raised, validate_contact};
use crate::dom;
use wasm_bindgen::JsCast;
use web_sys as web;

fn field_value(document: &web::Document, id: &str) -> String {
    document
        .get_element_by_id(id)
        .map(|el| element_value(&el))
        .unwrap_or_default()
}

fn element_value(el: &web::Element) -> String {
    if let Some(input) = el.dyn_ref::<web::HtmlInputElement>() {
        input.value()
    } else if let Some(area) = el.dyn_ref::<web::HtmlTextAreaElement>() {
        area.value()
    } else {
        String::new()
    }
}

fn alert(message: &str) {
    if let Some(w) = web::window() {
        _ = w.alert_with_message(message);
    }
}

pub fn wire_contact_form(document: &web::Document) {
    let Some(form) = dom::query::<web::HtmlFormElement>(document, ".contact-form") else {
        return;
    };

    let doc = document.clone();
    let form_reset = form.clone();
    dom::listen(&form, "submit", move |ev: web::Event| {
        ev.prevent_default();
        let name = field_value(&doc, "name");
        let email = field_value(&doc, "email");
        let message = field_value(&doc, "message");
        match validate_contact(&name, &email, &message) {
            Ok(msg) => {
                log::debug!("[form] message from {}", msg.name);
                alert(FORM_THANK_YOU_MSG);
                form_reset.reset();
            }
            Err(e) => {
                log::debug!("[form] rejected: {}", e);
                alert(FORM_MISSING_FIELDS_MSG);
            }
        }
    });

    // Floating labels
    for input in dom::query_all::<web::Element>(document, ".form-input") {
        let focused = input.clone();
        dom::listen(&input, "focus", move |_: web::Event| {
            if let Some(parent) = focused.parent_element() {
                dom::set_class(&parent, "focused", true);
            }
        });
        let blurred = input.clone();
        dom::listen(&input, "blur", move |_: web::Event| {
            if let Some(parent) = blurred.parent_element() {
                if !label_stays_raised(&element_value(&blurred)) {
                    dom::set_class(&parent, "focused", false);
                }
            }
        });
    }
}

use crate::core::tilt::{tilt_angles, tilt_reset, tilt_transform};
use crate::dom;
use crate::events::pointer::pointer_local_px;
use web_sys as web;

pub fn wire_tilt(document: &web::Document) {
    for el in dom::query_all::<web::HtmlElement>(document, "[data-tilt]") {
        let target = el.clone();
        dom::listen(&el, "mousemove", move |ev: web::MouseEvent| {
            let (local, size) = pointer_local_px(&ev, &target);
            let (rx, ry) = tilt_angles(local, size);
            dom::set_style(&target, "transform", &tilt_transform(rx, ry));
        });

        let target = el.clone();
        dom::listen(&el, "mouseleave", move |_: web::MouseEvent| {
            dom::set_style(&target, "transform", &tilt_reset());
        });
    }
}

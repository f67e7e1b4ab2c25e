use crate::core::Pointer;
use crate::dom;
use std::cell::Cell;
use std::rc::Rc;
use web_sys as web;

/// Keep `pointer` at the latest client coordinates. The particle canvas spans
/// the viewport, so client space is surface space.
pub fn wire_pointer_tracking(document: &web::Document, pointer: Rc<Cell<Pointer>>) {
    dom::listen(document, "mousemove", move |ev: web::MouseEvent| {
        pointer.set(Pointer::new(ev.client_x() as f64, ev.client_y() as f64));
    });
}

/// Pointer position relative to an element's top-left corner.
#[inline]
pub fn pointer_local_px(ev: &web::MouseEvent, el: &web::Element) -> (glam::DVec2, glam::DVec2) {
    let rect = el.get_bounding_client_rect();
    let local = glam::DVec2::new(
        ev.client_x() as f64 - rect.left(),
        ev.client_y() as f64 - rect.top(),
    );
    (local, glam::DVec2::new(rect.width(), rect.height()))
}

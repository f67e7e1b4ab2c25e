use crate::core::{CursorFollower, CursorStyle, Pointer};
use crate::dom;
use crate::frame;
use std::cell::Cell;
use std::rc::Rc;
use web_sys as web;

const HOVER_TARGETS: &str = "a, button, .btn, .project-card, .skill-card";

pub fn wire_custom_cursor(document: &web::Document, pointer: Rc<Cell<Pointer>>) {
    let (Some(dot), Some(outline)) = (
        dom::query::<web::HtmlElement>(document, ".cursor-dot"),
        dom::query::<web::HtmlElement>(document, ".cursor-outline"),
    ) else {
        log::debug!("[cursor] no cursor elements");
        return;
    };

    let mut follower = CursorFollower::default();
    let (dot_anim, outline_anim) = (dot.clone(), outline.clone());
    frame::request_frames(move || {
        follower.step(pointer.get().position());
        place(&dot_anim, follower.dot);
        place(&outline_anim, follower.outline);
        true
    });

    for el in dom::query_all::<web::Element>(document, HOVER_TARGETS) {
        for (event, hovering) in [("mouseenter", true), ("mouseleave", false)] {
            let (dot, outline) = (dot.clone(), outline.clone());
            dom::listen(&el, event, move |_: web::MouseEvent| {
                apply_style(&dot, &outline, CursorStyle::for_hover(hovering));
            });
        }
    }
}

fn place(el: &web::HtmlElement, pos: glam::DVec2) {
    dom::set_style(el, "left", &format!("{}px", pos.x));
    dom::set_style(el, "top", &format!("{}px", pos.y));
}

fn apply_style(dot: &web::HtmlElement, outline: &web::HtmlElement, style: CursorStyle) {
    dom::set_style(dot, "transform", &style.dot_transform());
    let size = style.outline_size();
    dom::set_style(outline, "width", &size);
    dom::set_style(outline, "height", &size);
}

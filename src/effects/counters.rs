use crate::constants::COUNTER_VISIBLE_THRESHOLD;
use crate::core::counter::{parse_target, Counter};
use crate::dom;
use crate::effects::observe;
use crate::frame;
use std::cell::Cell;
use std::rc::Rc;
use web_sys as web;

/// Count `.stat-number` elements up the first time `.hero-stats` is half visible.
pub fn wire_counter_animation(document: &web::Document) {
    let Some(stats) = dom::query::<web::Element>(document, ".hero-stats") else {
        return;
    };
    let counters = dom::query_all::<web::Element>(document, ".stat-number");
    let started = Rc::new(Cell::new(false));

    let observer = observe::observer(
        COUNTER_VISIBLE_THRESHOLD,
        None,
        move |entry: web::IntersectionObserverEntry| {
            if !entry.is_intersecting() || started.replace(true) {
                return;
            }
            log::debug!("[counters] animating {} counters", counters.len());
            for el in &counters {
                animate(el.clone());
            }
        },
    );
    match observer {
        Ok(obs) => obs.observe(&stats),
        Err(e) => log::warn!("[counters] observer unavailable: {:?}", e),
    }
}

fn animate(el: web::Element) {
    let raw = el.get_attribute("data-target").unwrap_or_default();
    let Some(target) = parse_target(&raw) else {
        log::warn!("[counters] bad data-target {:?}", raw);
        return;
    };
    let mut counter = Counter::new(target);
    frame::request_frames(move || {
        let shown = counter.step();
        el.set_text_content(Some(&shown.to_string()));
        !counter.is_finished()
    });
}

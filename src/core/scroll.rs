//! Scroll-position derived page state.

use crate::constants::*;

/// Reading progress in percent. A page that cannot scroll reports 0.
#[inline]
pub fn progress_percent(scroll_y: f64, scroll_height: f64, client_height: f64) -> f64 {
    let scrollable = scroll_height - client_height;
    if scrollable <= 0.0 {
        return 0.0;
    }
    scroll_y / scrollable * 100.0
}

#[inline]
pub fn header_scrolled(scroll_y: f64) -> bool {
    scroll_y > HEADER_SCROLLED_AFTER_PX
}

#[inline]
pub fn scroll_to_top_visible(scroll_y: f64) -> bool {
    scroll_y > SCROLL_TOP_VISIBLE_AFTER_PX
}

/// Id of the last section whose top (less the lead) has been scrolled past.
///
/// `sections` are `(id, offset_top)` pairs in document order. Sections
/// without an id can never be linked to and are skipped.
pub fn active_section<'a, I>(sections: I, scroll_y: f64) -> Option<&'a str>
where
    I: IntoIterator<Item = (&'a str, f64)>,
{
    sections
        .into_iter()
        .filter(|(id, _)| !id.is_empty())
        .filter(|(_, top)| scroll_y >= top - ACTIVE_SECTION_LEAD_PX)
        .last()
        .map(|(id, _)| id)
}

/// `href` a nav link must carry to be the active one.
pub fn nav_href(active: Option<&str>) -> String {
    format!("#{}", active.unwrap_or(""))
}

pub fn parallax_transform(scroll_y: f64) -> String {
    format!("translateY({}px)", scroll_y * PARALLAX_SPEED)
}

/// In-page anchor target for a link's `href`; bare `#` and non-fragment
/// links are left to the browser.
pub fn anchor_target(href: &str) -> Option<&str> {
    (href.starts_with('#') && href.len() > 1).then_some(href)
}

/// Scroll offset that lands a section just below the fixed header.
#[inline]
pub fn anchor_scroll_top(target_offset_top: f64, header_height: f64) -> f64 {
    target_offset_top - header_height
}

pub mod anchors;
pub mod counters;
pub mod cursor;
pub mod form;
mod observe;
pub mod page;
pub mod reveal;
pub mod tilt;
pub mod typing;

pub mod keyboard;
pub mod pointer;
pub mod scroll;

pub use keyboard::wire_global_keydown;
pub use pointer::wire_pointer_tracking;
pub use scroll::wire_scroll_handlers;

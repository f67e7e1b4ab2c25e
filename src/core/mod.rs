//! Host-testable page logic. Nothing in here touches the DOM.

pub mod constants;
pub mod counter;
pub mod cursor;
pub mod form;
pub mod konami;
pub mod paint;
pub mod particles;
pub mod readiness;
pub mod render_loop;
pub mod scroll;
pub mod surface;
pub mod tilt;
pub mod typing;

pub use constants::*;
pub use counter::*;
pub use cursor::*;
pub use form::*;
pub use konami::*;
pub use paint::*;
pub use particles::*;
pub use readiness::*;
pub use render_loop::*;
pub use surface::*;
pub use typing::*;

use crate::constants::{TILT_DIVISOR, TILT_HOVER_SCALE, TILT_PERSPECTIVE_PX};
use glam::DVec2;

/// Rotation (degrees) for a pointer at `local` inside an element of `size`.
/// Returns `(rotate_x, rotate_y)`.
#[inline]
pub fn tilt_angles(local: DVec2, size: DVec2) -> (f64, f64) {
    let center = size / 2.0;
    let rotate_x = (local.y - center.y) / TILT_DIVISOR;
    let rotate_y = (center.x - local.x) / TILT_DIVISOR;
    (rotate_x, rotate_y)
}

pub fn tilt_transform(rotate_x: f64, rotate_y: f64) -> String {
    format!(
        "perspective({}px) rotateX({}deg) rotateY({}deg) scale3d({s}, {s}, {s})",
        TILT_PERSPECTIVE_PX,
        rotate_x,
        rotate_y,
        s = TILT_HOVER_SCALE
    )
}

pub fn tilt_reset() -> String {
    format!(
        "perspective({}px) rotateX(0) rotateY(0) scale3d(1, 1, 1)",
        TILT_PERSPECTIVE_PX
    )
}

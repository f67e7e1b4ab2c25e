use crate::constants::*;
use glam::DVec2;

/// Two-stage cursor: a dot that nearly snaps to the pointer and an outline
/// that trails behind it.
#[derive(Default, Clone, Copy, Debug, PartialEq)]
pub struct CursorFollower {
    pub dot: DVec2,
    pub outline: DVec2,
}

impl CursorFollower {
    pub fn step(&mut self, target: DVec2) {
        self.dot += (target - self.dot) * CURSOR_DOT_EASE;
        self.outline += (target - self.outline) * CURSOR_OUTLINE_EASE;
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CursorStyle {
    pub dot_scale: f64,
    pub outline_px: f64,
}

impl CursorStyle {
    pub fn for_hover(hovering: bool) -> Self {
        if hovering {
            Self {
                dot_scale: CURSOR_HOVER_DOT_SCALE,
                outline_px: CURSOR_HOVER_OUTLINE_PX,
            }
        } else {
            Self {
                dot_scale: CURSOR_IDLE_DOT_SCALE,
                outline_px: CURSOR_IDLE_OUTLINE_PX,
            }
        }
    }

    pub fn dot_transform(&self) -> String {
        format!("translate(-50%, -50%) scale({})", self.dot_scale)
    }

    pub fn outline_size(&self) -> String {
        format!("{}px", self.outline_px)
    }
}

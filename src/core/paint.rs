//! Drawing seam between the simulation and whatever surface displays it.
//!
//! The browser implements [`Painter`] over a 2D canvas context; tests use
//! [`DisplayList`] to capture the exact sequence of primitives.

use glam::DVec2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Rgba {
    pub fn new(rgb: [u8; 3], a: f64) -> Self {
        Self {
            r: rgb[0],
            g: rgb[1],
            b: rgb[2],
            a,
        }
    }

    /// CSS `rgba(...)` string accepted by canvas fill/stroke styles.
    pub fn to_css(&self) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

pub trait Painter {
    fn clear(&mut self, width: f64, height: f64);
    fn fill_circle(&mut self, center: DVec2, radius: f64, color: Rgba);
    fn stroke_line(&mut self, from: DVec2, to: DVec2, width: f64, color: Rgba);
}

#[derive(Clone, Debug, PartialEq)]
pub enum PaintOp {
    Clear {
        width: f64,
        height: f64,
    },
    Circle {
        center: DVec2,
        radius: f64,
        color: Rgba,
    },
    Line {
        from: DVec2,
        to: DVec2,
        width: f64,
        color: Rgba,
    },
}

/// Records paint calls instead of rasterizing them.
#[derive(Clone, Debug, Default)]
pub struct DisplayList {
    pub ops: Vec<PaintOp>,
}

impl DisplayList {
    pub fn circles(&self) -> impl Iterator<Item = &PaintOp> {
        self.ops
            .iter()
            .filter(|op| matches!(op, PaintOp::Circle { .. }))
    }

    pub fn lines(&self) -> impl Iterator<Item = &PaintOp> {
        self.ops.iter().filter(|op| matches!(op, PaintOp::Line { .. }))
    }
}

impl Painter for DisplayList {
    fn clear(&mut self, width: f64, height: f64) {
        self.ops.push(PaintOp::Clear { width, height });
    }

    fn fill_circle(&mut self, center: DVec2, radius: f64, color: Rgba) {
        self.ops.push(PaintOp::Circle {
            center,
            radius,
            color,
        });
    }

    fn stroke_line(&mut self, from: DVec2, to: DVec2, width: f64, color: Rgba) {
        self.ops.push(PaintOp::Line {
            from,
            to,
            width,
            color,
        });
    }
}

use glam::DVec2;

/// Full-window drawing area in device pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Surface {
    pub width: u32,
    pub height: u32,
}

impl Surface {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Adopt new viewport dimensions. Particles are left where they are; the
    /// next update wraps any that now lie outside.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
    }

    #[inline]
    pub fn extent(&self) -> DVec2 {
        DVec2::new(self.width as f64, self.height as f64)
    }

    #[inline]
    pub fn area(&self) -> f64 {
        self.width as f64 * self.height as f64
    }

    /// Number of particles this surface supports at the given density.
    pub fn particle_budget(&self, area_per_particle: f64) -> usize {
        if area_per_particle <= 0.0 {
            return 0;
        }
        (self.area() / area_per_particle).floor() as usize
    }
}

//! Ambient particle field: drifting dots that react to the pointer and link
//! up with their neighbours.

use super::constants::*;
use super::paint::{Painter, Rgba};
use super::surface::Surface;
use glam::DVec2;
use rand::Rng;
use std::ops::Range;

/// How particles near the pointer are nudged each frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum PointerMode {
    /// `pos -= (pointer - pos) / divisor`: particles are pushed away.
    #[default]
    Repel,
    /// `pos += (pointer - pos) / divisor`: particles are drawn in.
    Attract,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FieldParams {
    pub area_per_particle: f64,
    pub link_distance: f64,
    pub link_alpha_max: f64,
    pub link_line_width: f64,
    pub pointer_radius: f64,
    pub pointer_nudge_divisor: f64,
    pub pointer_mode: PointerMode,
    pub size: Range<f64>,
    pub speed: Range<f64>,
    pub opacity: Range<f64>,
    pub color_rgb: [u8; 3],
}

impl Default for FieldParams {
    fn default() -> Self {
        Self {
            area_per_particle: AREA_PER_PARTICLE,
            link_distance: LINK_DISTANCE,
            link_alpha_max: LINK_ALPHA_MAX,
            link_line_width: LINK_LINE_WIDTH,
            pointer_radius: POINTER_RADIUS,
            pointer_nudge_divisor: POINTER_NUDGE_DIVISOR,
            pointer_mode: PointerMode::Repel,
            size: SIZE_MIN..SIZE_MAX,
            speed: SPEED_MIN..SPEED_MAX,
            opacity: OPACITY_MIN..OPACITY_MAX,
            color_rgb: PARTICLE_RGB,
        }
    }
}

/// Last observed pointer position in surface space. Defaults to the origin
/// until the first pointer-move arrives.
#[derive(Default, Clone, Copy, Debug, PartialEq)]
pub struct Pointer {
    pub x: f64,
    pub y: f64,
}

impl Pointer {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn position(self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub pos: DVec2,
    pub vel: DVec2,
    pub size: f64,
    pub opacity: f64,
}

impl Particle {
    /// Sample a particle uniformly inside `extent` using the ranges in `params`.
    pub fn random<R: Rng + ?Sized>(rng: &mut R, extent: DVec2, params: &FieldParams) -> Self {
        let pos = DVec2::new(rng.gen::<f64>() * extent.x, rng.gen::<f64>() * extent.y);
        let size = sample(rng, &params.size);
        let vel = DVec2::new(sample(rng, &params.speed), sample(rng, &params.speed));
        let opacity = sample(rng, &params.opacity);
        Self {
            pos,
            vel,
            size,
            opacity,
        }
    }
}

#[inline]
fn sample<R: Rng + ?Sized>(rng: &mut R, range: &Range<f64>) -> f64 {
    range.start + rng.gen::<f64>() * (range.end - range.start)
}

/// Wrap one coordinate into `[0, extent)`.
///
/// Leaving past the far edge snaps to 0; leaving below 0 re-enters from the
/// far side. A degenerate (zero-sized) axis pins everything to 0.
#[inline]
pub fn wrap_axis(v: f64, extent: f64) -> f64 {
    if extent <= 0.0 || v >= extent {
        return 0.0;
    }
    if v < 0.0 {
        let w = v.rem_euclid(extent);
        return if w < extent { w } else { 0.0 };
    }
    v
}

#[inline]
pub fn wrap(pos: DVec2, extent: DVec2) -> DVec2 {
    DVec2::new(wrap_axis(pos.x, extent.x), wrap_axis(pos.y, extent.y))
}

/// An edge between two particles closer than the link distance.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Link {
    pub a: usize,
    pub b: usize,
    pub distance: f64,
    pub alpha: f64,
}

#[derive(Clone, Debug, Default)]
pub struct ParticleField {
    particles: Vec<Particle>,
    params: FieldParams,
}

impl ParticleField {
    pub fn new(params: FieldParams) -> Self {
        Self {
            particles: Vec::new(),
            params,
        }
    }

    pub fn with_particles(params: FieldParams, particles: Vec<Particle>) -> Self {
        Self { particles, params }
    }

    pub fn params(&self) -> &FieldParams {
        &self.params
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Replace the field with `count` freshly sampled particles.
    pub fn create<R: Rng + ?Sized>(&mut self, count: usize, surface: &Surface, rng: &mut R) {
        let extent = surface.extent();
        self.particles.clear();
        self.particles.reserve(count);
        for _ in 0..count {
            self.particles.push(Particle::random(rng, extent, &self.params));
        }
    }

    /// Recreate the field at the density budget of `surface`; returns the new count.
    pub fn fill_surface<R: Rng + ?Sized>(&mut self, surface: &Surface, rng: &mut R) -> usize {
        let count = surface.particle_budget(self.params.area_per_particle);
        self.create(count, surface, rng);
        count
    }

    /// Advance every particle by one frame.
    pub fn update(&mut self, surface: &Surface, pointer: Pointer) {
        let extent = surface.extent();
        let target = pointer.position();
        let params = &self.params;
        for p in self.particles.iter_mut() {
            p.pos = wrap(p.pos + p.vel, extent);

            let delta = target - p.pos;
            if delta.length() < params.pointer_radius {
                let nudge = delta / params.pointer_nudge_divisor;
                p.pos = match params.pointer_mode {
                    PointerMode::Repel => p.pos - nudge,
                    PointerMode::Attract => p.pos + nudge,
                };
                p.pos = wrap(p.pos, extent);
            }
        }
    }

    /// Every unordered pair `(i, j)`, `i < j`, closer than the link distance.
    pub fn links(&self) -> impl Iterator<Item = Link> + '_ {
        let n = self.particles.len();
        let cutoff = self.params.link_distance;
        let alpha_max = self.params.link_alpha_max;
        (0..n).flat_map(move |i| {
            ((i + 1)..n).filter_map(move |j| {
                let distance = self.particles[i].pos.distance(self.particles[j].pos);
                (distance < cutoff).then(|| Link {
                    a: i,
                    b: j,
                    distance,
                    alpha: alpha_max * (1.0 - distance / cutoff),
                })
            })
        })
    }

    /// Dots first, then links on top.
    pub fn draw<P: Painter + ?Sized>(&self, painter: &mut P) {
        let rgb = self.params.color_rgb;
        for p in &self.particles {
            painter.fill_circle(p.pos, p.size, Rgba::new(rgb, p.opacity));
        }
        for link in self.links() {
            painter.stroke_line(
                self.particles[link.a].pos,
                self.particles[link.b].pos,
                self.params.link_line_width,
                Rgba::new(rgb, link.alpha),
            );
        }
    }
}

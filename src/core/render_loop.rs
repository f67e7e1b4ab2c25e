//! Frame-driven loop around the particle field.
//!
//! The host calls [`RenderLoop::tick`] once per display refresh and keeps
//! rescheduling while it returns `true`. Shutdown goes through a shared
//! [`CancelToken`] so event handlers can stop the loop without owning it.

use super::paint::Painter;
use super::particles::{FieldParams, ParticleField, Pointer};
use super::surface::Surface;
use rand::Rng;
use std::cell::Cell;
use std::rc::Rc;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopState {
    Idle,
    Running,
    Stopped,
}

/// Shared stop flag, checked at the top of every tick.
#[derive(Clone, Debug, Default)]
pub struct CancelToken(Rc<Cell<bool>>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.get()
    }
}

pub struct RenderLoop {
    surface: Surface,
    field: ParticleField,
    state: LoopState,
    cancel: CancelToken,
    frames: u64,
}

impl RenderLoop {
    pub fn new(surface: Surface, params: FieldParams) -> Self {
        Self {
            surface,
            field: ParticleField::new(params),
            state: LoopState::Idle,
            cancel: CancelToken::new(),
            frames: 0,
        }
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    pub fn field(&self) -> &ParticleField {
        &self.field
    }

    /// Frames rendered while running.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn cancel_token(&self) -> CancelToken {
        self.cancel.clone()
    }

    /// Populate the field for the current surface; returns the particle count.
    pub fn populate<R: Rng + ?Sized>(&mut self, rng: &mut R) -> usize {
        let n = self.field.fill_surface(&self.surface, rng);
        log::info!(
            "[particles] field created: {} particles for {}x{}",
            n,
            self.surface.width,
            self.surface.height
        );
        n
    }

    /// Adopt new viewport dimensions and recreate the field wholesale.
    pub fn resize<R: Rng + ?Sized>(&mut self, width: u32, height: u32, rng: &mut R) -> usize {
        self.surface.resize(width, height);
        self.populate(rng)
    }

    /// Idle -> Running. A stopped loop stays stopped.
    pub fn start(&mut self) -> LoopState {
        match self.state {
            LoopState::Idle if self.cancel.is_cancelled() => self.state = LoopState::Stopped,
            LoopState::Idle => {
                self.state = LoopState::Running;
                log::info!("[loop] running");
            }
            LoopState::Running | LoopState::Stopped => {}
        }
        self.state
    }

    pub fn stop(&mut self) {
        self.cancel.cancel();
        if self.state != LoopState::Stopped {
            self.state = LoopState::Stopped;
            log::info!("[loop] stopped after {} frames", self.frames);
        }
    }

    /// Render one frame. Returns whether the host should schedule another.
    pub fn tick<P: Painter + ?Sized>(&mut self, pointer: Pointer, painter: &mut P) -> bool {
        if self.cancel.is_cancelled() {
            self.stop();
            return false;
        }
        match self.state {
            LoopState::Idle | LoopState::Stopped => false,
            LoopState::Running => {
                let extent = self.surface.extent();
                painter.clear(extent.x, extent.y);
                self.field.update(&self.surface, pointer);
                self.field.draw(painter);
                self.frames += 1;
                true
            }
        }
    }
}

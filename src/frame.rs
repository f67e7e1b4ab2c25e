use crate::canvas::CanvasPainter;
use crate::core::{FieldParams, LoopState, Pointer, RenderLoop, Surface};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub render_loop: RenderLoop,
    pub painter: CanvasPainter,
    pub pointer: Rc<Cell<Pointer>>,
}

impl FrameContext {
    pub fn new(
        canvas: &web::HtmlCanvasElement,
        pointer: Rc<Cell<Pointer>>,
    ) -> anyhow::Result<Self> {
        let painter = CanvasPainter::new(canvas)?;
        let surface = Surface::new(canvas.width(), canvas.height());
        let mut render_loop = RenderLoop::new(surface, FieldParams::default());
        render_loop.populate(&mut rand::thread_rng());
        Ok(Self {
            render_loop,
            painter,
            pointer,
        })
    }

    /// One display refresh; `false` once the loop has been stopped.
    pub fn frame(&mut self) -> bool {
        let pointer = self.pointer.get();
        self.render_loop.tick(pointer, &mut self.painter)
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.render_loop
            .resize(width, height, &mut rand::thread_rng());
    }
}

/// Start the particle loop; a loop that was already stopped is not revived.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    if frame_ctx.borrow_mut().render_loop.start() != LoopState::Running {
        return;
    }
    request_frames(move || frame_ctx.borrow_mut().frame());
}

/// Drive `step` from `requestAnimationFrame` until it returns `false`.
pub fn request_frames(mut step: impl FnMut() -> bool + 'static) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if !step() {
            return;
        }
        schedule(&tick_clone);
    }) as Box<dyn FnMut()>));
    schedule(&tick);
}

fn schedule(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}

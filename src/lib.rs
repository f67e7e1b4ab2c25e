//! Client-side behavior for a static portfolio page, compiled to WebAssembly.
//!
//! `core` holds the host-testable logic (particle field, render loop state
//! machine, typing/counter/tilt/scroll math, easter egg, form validation).
//! The remaining modules wire it to the DOM and only build for `wasm32`.

pub mod constants;
pub mod core;

#[cfg(target_arch = "wasm32")]
mod canvas;
#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod effects;
#[cfg(target_arch = "wasm32")]
mod events;
#[cfg(target_arch = "wasm32")]
mod frame;
#[cfg(target_arch = "wasm32")]
mod menu;

#[cfg(target_arch = "wasm32")]
pub use web_entry::start;

#[cfg(target_arch = "wasm32")]
mod web_entry {
    use crate::core::{Pointer, ReadyState};
    use crate::{dom, effects, events, frame, menu};
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_futures::spawn_local;
    use web_sys as web;

    fn wire_canvas_resize(
        canvas: &web::HtmlCanvasElement,
        frame_ctx: &Rc<RefCell<frame::FrameContext>>,
    ) {
        let canvas = canvas.clone();
        let frame_ctx = frame_ctx.clone();
        if let Some(window) = web::window() {
            dom::listen(&window, "resize", move |_: web::Event| {
                let (w, h) = dom::sync_canvas_to_viewport(&canvas);
                frame_ctx.borrow_mut().resize(w, h);
            });
        }
    }

    /// Particle canvas; a page without `#particles-canvas` simply has none.
    /// A canvas that cannot be drawn on is logged and skipped.
    fn init_particles(document: &web::Document, pointer: Rc<Cell<Pointer>>) {
        if let Err(e) = try_init_particles(document, pointer) {
            log::warn!("[particles] disabled: {:?}", e);
        }
    }

    fn try_init_particles(
        document: &web::Document,
        pointer: Rc<Cell<Pointer>>,
    ) -> anyhow::Result<()> {
        let Some(el) = document.get_element_by_id("particles-canvas") else {
            log::info!("[particles] no #particles-canvas, skipping");
            return Ok(());
        };
        let canvas: web::HtmlCanvasElement = el
            .dyn_into::<web::HtmlCanvasElement>()
            .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

        dom::sync_canvas_to_viewport(&canvas);
        let frame_ctx = Rc::new(RefCell::new(frame::FrameContext::new(&canvas, pointer)?));
        wire_canvas_resize(&canvas, &frame_ctx);
        frame::start_loop(frame_ctx);
        Ok(())
    }

    #[wasm_bindgen(start)]
    pub fn start() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).ok();
        log::info!("portfolio-fx starting");

        spawn_local(async move {
            if let Err(e) = init().await {
                log::error!("init error: {:?}", e);
            }
        });
        Ok(())
    }

    async fn init() -> anyhow::Result<()> {
        let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| anyhow::anyhow!("no document"))?;

        // Wire after the DOM is parsed, whether or not that has happened yet.
        if !ReadyState::parse(&document.ready_state()).dom_parsed() {
            let (wnd, doc) = (window.clone(), document.clone());
            let mut pending = Some(());
            dom::listen(&document, "DOMContentLoaded", move |_: web::Event| {
                if pending.take().is_some() {
                    if let Err(e) = wire_page(&wnd, &doc) {
                        log::error!("init error: {:?}", e);
                    }
                }
            });
            Ok(())
        } else {
            wire_page(&window, &document)
        }
    }

    fn wire_page(window: &web::Window, document: &web::Document) -> anyhow::Result<()> {
        let pointer = Rc::new(Cell::new(Pointer::default()));

        effects::page::print_console_banner();
        effects::page::inject_rainbow_style(document);
        effects::page::wire_loading_screen(window, document);
        effects::page::wire_image_preload(window, document);

        events::wire_pointer_tracking(document, pointer.clone());
        effects::cursor::wire_custom_cursor(document, pointer.clone());
        events::wire_scroll_handlers(window, document);
        events::wire_global_keydown(document);
        menu::wire_mobile_menu(document);
        effects::anchors::wire_smooth_scroll(window, document);
        effects::anchors::wire_scroll_to_top(window, document);

        init_particles(document, pointer);

        effects::typing::wire_typing_effect(document);
        effects::counters::wire_counter_animation(document);
        effects::reveal::wire_scroll_reveal(document);
        effects::tilt::wire_tilt(document);
        effects::form::wire_contact_form(document);

        log::info!("[page] behaviors wired");
        Ok(())
    }
}

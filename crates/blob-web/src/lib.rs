#![cfg(target_arch = "wasm32")]

mod dom;
mod frame;
mod input;
mod render;

use blob_core::{pointer_sentinel, BlobEffect};
use glam::Vec2;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("blob-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    // A missing container means the effect simply does not start.
    let container = document
        .get_element_by_id(dom::CONTAINER_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", dom::CONTAINER_ID))?;

    let canvas = dom::attach_canvas(&document, &container)?;
    dom::sync_canvas_backing_size(&container, &canvas);

    // Window resize keeps the canvas backing store in sync; the frame loop
    // picks the new size up on its next tick.
    {
        let container_resize = container.clone();
        let canvas_resize = canvas.clone();
        let resize_closure = Closure::wrap(Box::new(move || {
            dom::sync_canvas_backing_size(&container_resize, &canvas_resize);
        }) as Box<dyn FnMut()>);
        if let Some(w) = web::window() {
            w.add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref())
                .ok();
        }
        resize_closure.forget();
    }

    // Last-write-wins pointer cell, seeded with the off-screen sentinel so
    // no intersection can happen before the first pointer event.
    let pointer: Rc<RefCell<Vec2>> = Rc::new(RefCell::new(pointer_sentinel()));
    {
        let pointer_move = pointer.clone();
        let container_move = container.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
            *pointer_move.borrow_mut() = input::pointer_event_ndc(&ev, &container_move);
        }) as Box<dyn FnMut(_)>);
        if let Some(w) = web::window() {
            w.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref())
                .ok();
        }
        closure.forget();
    }

    let gpu = frame::init_gpu(&canvas)
        .await
        .ok_or_else(|| anyhow::anyhow!("WebGPU unavailable"))?;

    let aspect = canvas.width() as f32 / canvas.height().max(1) as f32;
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        canvas,
        gpu,
        effect: BlobEffect::new(aspect),
        pointer,
        last_instant: Instant::now(),
    }));
    frame::start_loop(frame_ctx);

    Ok(())
}

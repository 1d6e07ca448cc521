#![cfg(target_arch = "wasm32")]
use anyhow::anyhow;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

mod capability;
mod constants;
mod dom;
mod effects;
mod events;
mod faq;
mod forms;
mod nav;
mod scroll;
mod share;
mod site;
mod storage;
mod tabs;
mod timing;
mod toast;

/// Script errors and rejected promises are logged, never shown to visitors.
fn wire_global_error_logging(window: &web::Window) {
    dom::listen(window, "error", |ev| match ev.dyn_ref::<web::ErrorEvent>() {
        Some(e) => log::error!("global error: {} {:?}", e.message(), e.error()),
        None => log::error!("global error: {}", ev.type_()),
    });
    dom::listen(window, "unhandledrejection", |ev| {
        let reason = ev
            .dyn_ref::<web::PromiseRejectionEvent>()
            .map(|e| e.reason())
            .unwrap_or(JsValue::UNDEFINED);
        log::error!("unhandled promise rejection: {:?}", reason);
    });
}

async fn dom_ready(document: &web::Document) -> anyhow::Result<()> {
    if document.ready_state() != "loading" {
        return Ok(());
    }
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        dom::listen(document, "DOMContentLoaded", move |_| {
            _ = resolve.call0(&JsValue::UNDEFINED);
        });
    });
    JsFuture::from(promise)
        .await
        .map_err(|e| anyhow!("{:?}", e))?;
    Ok(())
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("infoevents-web starting");
    if let Some(window) = web::window() {
        wire_global_error_logging(&window);
    }

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow!("no document"))?;
    dom_ready(&document).await?;
    let site = Rc::new(site::Site::from_window()?);

    // Core
    let drawer = nav::wire(&site);
    events::wire_global_keydown(&site, drawer);
    events::wire_pointer_focus_reset(&site);
    scroll::wire_header_and_back_to_top(&site);
    scroll::wire_anchor_links(&site);

    // Page specific
    tabs::wire(&site);
    faq::wire(&site);
    forms::wire_contact(&site);
    forms::wire_newsletter(&site);
    share::wire_share_buttons(&site);

    // Enhancements
    effects::wire_reveal(&site);
    effects::wire_lazy_images(&site);
    scroll::wire_nav_highlight(&site);
    effects::wire_floating_cards(&site);
    effects::wire_counters(&site);
    forms::wire_field_hints(&site);
    events::wire_ripples(&site);
    scroll::wire_progress_bar(&site);
    effects::wire_preloader(&site);
    effects::ensure_skip_link(&site);
    effects::update_copyright_year(&site);

    log::info!("Info Events Bali ready");
    Ok(())
}

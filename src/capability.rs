//! Probes for optional browser features. Each probe returns a handle only
//! when the feature is present; callers take the fallback path otherwise.

use crate::site::Site;
use infoevents_core::Notice;
use js_sys::{Function, Object, Promise, Reflect};
use std::rc::Rc;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

fn method(target: &JsValue, name: &str) -> Option<Function> {
    Reflect::get(target, &JsValue::from_str(name))
        .ok()
        .and_then(|f| f.dyn_into::<Function>().ok())
}

/// `navigator.clipboard.writeText`
pub struct ClipboardHandle {
    clipboard: JsValue,
    write_text: Function,
}

impl ClipboardHandle {
    pub fn write_text(&self, text: &str) -> Result<Promise, JsValue> {
        self.write_text
            .call1(&self.clipboard, &JsValue::from_str(text))?
            .dyn_into::<Promise>()
    }
}

/// `navigator.share`
pub struct ShareHandle {
    navigator: web::Navigator,
    share: Function,
}

impl ShareHandle {
    pub fn share(&self, title: &str, text: &str, url: &str) -> Result<Promise, JsValue> {
        let data = Object::new();
        Reflect::set(&data, &"title".into(), &title.into())?;
        Reflect::set(&data, &"text".into(), &text.into())?;
        Reflect::set(&data, &"url".into(), &url.into())?;
        self.share.call1(&self.navigator, &data)?.dyn_into::<Promise>()
    }
}

pub fn clipboard(window: &web::Window) -> Option<ClipboardHandle> {
    let clipboard = Reflect::get(&window.navigator(), &JsValue::from_str("clipboard")).ok()?;
    if clipboard.is_undefined() || clipboard.is_null() {
        return None;
    }
    let write_text = method(&clipboard, "writeText")?;
    Some(ClipboardHandle {
        clipboard,
        write_text,
    })
}

pub fn share(window: &web::Window) -> Option<ShareHandle> {
    let navigator = window.navigator();
    let share = method(&navigator, "share")?;
    Some(ShareHandle { navigator, share })
}

pub fn has_intersection_observer(window: &web::Window) -> bool {
    Reflect::has(window, &JsValue::from_str("IntersectionObserver")).unwrap_or(false)
}

fn copied_notice() -> Notice {
    Notice::success("Berhasil Disalin!", "Teks telah disalin ke clipboard.")
}

fn copy_failed_notice() -> Notice {
    Notice::error("Gagal Menyalin", "Tidak dapat menyalin teks ke clipboard.")
}

/// Off-screen textarea + `execCommand("copy")`.
fn fallback_copy(site: &Site, text: &str) {
    let copied = (|| -> Result<bool, JsValue> {
        let area = site
            .document
            .create_element("textarea")?
            .dyn_into::<web::HtmlTextAreaElement>()?;
        area.set_value(text);
        _ = area.style().set_property("position", "fixed");
        _ = area.style().set_property("left", "-9999px");
        site.body.append_child(&area)?;
        area.select();
        let ok = site
            .document
            .dyn_ref::<web::HtmlDocument>()
            .map(|d| d.exec_command("copy"))
            .unwrap_or(Ok(false));
        area.remove();
        ok
    })();
    match copied {
        Ok(true) => {
            site.notify(&copied_notice());
        }
        other => {
            log::warn!("[clipboard] fallback copy failed: {:?}", other);
            site.notify(&copy_failed_notice());
        }
    }
}

pub fn copy_to_clipboard(site: &Rc<Site>, text: String) {
    let Some(handle) = clipboard(&site.window) else {
        fallback_copy(site, &text);
        return;
    };
    let site = site.clone();
    spawn_local(async move {
        let result = match handle.write_text(&text) {
            Ok(p) => JsFuture::from(p).await.map(|_| ()),
            Err(e) => Err(e),
        };
        match result {
            Ok(()) => {
                site.notify(&copied_notice());
            }
            Err(e) => {
                log::debug!("[clipboard] writeText rejected: {:?}", e);
                fallback_copy(&site, &text);
            }
        }
    });
}

/// Web Share when available; otherwise copy `text` to the clipboard.
pub fn share_or_copy(site: &Rc<Site>, title: String, text: String, url: String) {
    let Some(handle) = share(&site.window) else {
        copy_to_clipboard(site, text);
        return;
    };
    spawn_local(async move {
        let result = match handle.share(&title, &text, &url) {
            Ok(p) => JsFuture::from(p).await.map(|_| ()),
            Err(e) => Err(e),
        };
        if let Err(e) = result {
            log::info!("[share] cancelled: {:?}", e);
        }
    });
}

use crate::constants::{
    BUTTON_SELECTOR, KEYBOARD_NAV_CLASS, RIPPLE_CLASS, RIPPLE_SIZE_PX, RIPPLE_STYLE_ID,
};
use crate::dom;
use crate::site::Site;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

const RIPPLE_KEYFRAMES: &str =
    "@keyframes ripple { to { transform: translate(-50%, -50%) scale(4); opacity: 0; } }";

/// Add the ripple keyframes to `<head>` unless they are already there.
fn ensure_ripple_styles(document: &web::Document) {
    if document.get_element_by_id(RIPPLE_STYLE_ID).is_some() {
        return;
    }
    let (Some(head), Ok(style)) = (document.head(), document.create_element("style")) else {
        return;
    };
    style.set_id(RIPPLE_STYLE_ID);
    style.set_text_content(Some(RIPPLE_KEYFRAMES));
    _ = head.append_child(&style);
}

fn spawn_ripple(site: &Site, button: &web::HtmlElement, ev: &web::MouseEvent) {
    let rect = button.get_bounding_client_rect();
    let x = ev.client_x() as f64 - rect.left();
    let y = ev.client_y() as f64 - rect.top();
    let Some(ripple) = dom::create_with_class(&site.document, "span", RIPPLE_CLASS) else {
        return;
    };
    let size = format!("{}px", RIPPLE_SIZE_PX);
    let left = format!("{}px", x);
    let top = format!("{}px", y);
    for (prop, value) in [
        ("position", "absolute"),
        ("width", size.as_str()),
        ("height", size.as_str()),
        ("background", "rgba(255, 255, 255, 0.3)"),
        ("border-radius", "50%"),
        ("transform", "translate(-50%, -50%) scale(0)"),
        ("animation", "ripple 0.6s linear"),
        ("pointer-events", "none"),
        ("left", left.as_str()),
        ("top", top.as_str()),
    ] {
        dom::set_style(&ripple, prop, value);
    }
    dom::set_style(button, "position", "relative");
    dom::set_style(button, "overflow", "hidden");
    _ = button.append_child(&ripple);
    dom::set_timeout(site.config.ripple_lifetime, move || ripple.remove());
}

pub fn wire_ripples(site: &Rc<Site>) {
    let buttons = dom::query_html(&site.document, BUTTON_SELECTOR);
    if buttons.is_empty() {
        return;
    }
    ensure_ripple_styles(&site.document);
    for button in buttons {
        let s = site.clone();
        let b = button.clone();
        dom::listen(&button, "click", move |ev| {
            if let Some(ev) = ev.dyn_ref::<web::MouseEvent>() {
                spawn_ripple(&s, &b, ev);
            }
        });
    }
}

/// Pointer use hides the keyboard focus outlines again.
pub fn wire_pointer_focus_reset(site: &Rc<Site>) {
    let body = site.body.clone();
    dom::listen(&site.document, "mousedown", move |_| {
        dom::set_class(&body, KEYBOARD_NAV_CLASS, false);
    });
}

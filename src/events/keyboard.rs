use super::keys::{classify_key, GlobalKey};
use crate::constants::KEYBOARD_NAV_CLASS;
use crate::dom;
use crate::nav::Drawer;
use crate::site::Site;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn handle_global_keydown(ev: &web::KeyboardEvent, site: &Site, drawer: Option<&Rc<Drawer>>) {
    let Some(key) = classify_key(&ev.key(), ev.shift_key()) else {
        return;
    };
    match key {
        GlobalKey::Escape => {
            if let Some(d) = drawer {
                d.close();
            }
        }
        GlobalKey::Tab { shift } => {
            // Tab means a keyboard user: show focus outlines from now on.
            dom::set_class(&site.body, KEYBOARD_NAV_CLASS, true);
            if let Some(d) = drawer {
                let active = site.document.active_element();
                if d.trap_focus(active.as_ref(), shift) {
                    ev.prevent_default();
                }
            }
        }
    }
}

pub fn wire_global_keydown(site: &Rc<Site>, drawer: Option<Rc<Drawer>>) {
    let s = site.clone();
    dom::listen(&site.document, "keydown", move |ev| {
        if let Some(ev) = ev.dyn_ref::<web::KeyboardEvent>() {
            handle_global_keydown(ev, &s, drawer.as_ref());
        }
    });
}

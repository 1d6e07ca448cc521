//! Mobile navigation drawer.
//!
//! [`NavigationState`] decides; this module mirrors every accepted
//! transition onto the toggle, the drawer, the overlay and the body, in one
//! place, so the `active` class and the state can never drift apart.

use crate::constants::{
    ACTIVE_CLASS, NAV_FOCUSABLE_SELECTOR, NAV_ID, NAV_LINK_SELECTOR, NAV_OPEN_CLASS,
    NAV_OVERLAY_CLASS, NAV_TOGGLE_ID,
};
use crate::dom;
use crate::site::Site;
use crate::timing;
use infoevents_core::{focus_trap_target, NavTransition, NavigationState};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct Drawer {
    state: RefCell<NavigationState>,
    toggle: web::HtmlElement,
    drawer: web::HtmlElement,
    overlay: web::Element,
    body: web::HtmlElement,
    transition: Duration,
}

/// The single `.nav-overlay`, created on first use.
fn overlay(site: &Site) -> Option<web::Element> {
    let selector = format!(".{}", NAV_OVERLAY_CLASS);
    if let Ok(Some(existing)) = site.document.query_selector(&selector) {
        return Some(existing);
    }
    let el = dom::create_with_class(&site.document, "div", NAV_OVERLAY_CLASS)?;
    _ = el.set_attribute("aria-hidden", "true");
    _ = site.body.append_child(&el);
    Some(el.into())
}

impl Drawer {
    /// `None` (with a warning) when the toggle or drawer is missing.
    pub fn mount(site: &Site) -> Option<Rc<Self>> {
        let toggle = dom::by_id::<web::HtmlElement>(&site.document, NAV_TOGGLE_ID);
        let drawer = dom::by_id::<web::HtmlElement>(&site.document, NAV_ID);
        let (Some(toggle), Some(drawer)) = (toggle, drawer) else {
            log::warn!("[nav] #{} or #{} missing; drawer disabled", NAV_TOGGLE_ID, NAV_ID);
            return None;
        };
        let overlay = overlay(site)?;
        let state = NavigationState::new();
        _ = toggle.set_attribute("aria-expanded", state.aria_expanded());
        _ = drawer.set_attribute("aria-hidden", state.aria_hidden());
        Some(Rc::new(Self {
            state: RefCell::new(state),
            toggle,
            drawer,
            overlay,
            body: site.body.clone(),
            transition: site.config.nav_transition,
        }))
    }

    #[inline]
    pub fn is_open(&self) -> bool {
        self.state.borrow().is_open()
    }

    pub fn toggle(self: &Rc<Self>) {
        let t = self.state.borrow_mut().toggle();
        self.after(t);
    }

    pub fn open(self: &Rc<Self>) {
        let t = self.state.borrow_mut().open();
        self.after(t);
    }

    pub fn close(self: &Rc<Self>) {
        let t = self.state.borrow_mut().close();
        self.after(t);
    }

    fn after(self: &Rc<Self>, transition: Option<NavTransition>) {
        let Some(t) = transition else {
            return;
        };
        self.apply(t);
        let this = self.clone();
        dom::set_timeout(self.transition, move || {
            this.state.borrow_mut().settle();
        });
    }

    fn apply(&self, t: NavTransition) {
        let open = t == NavTransition::Opened;
        let state = *self.state.borrow();
        dom::set_class(&self.toggle, ACTIVE_CLASS, open);
        dom::set_class(&self.drawer, ACTIVE_CLASS, open);
        dom::set_class(&self.overlay, ACTIVE_CLASS, open);
        dom::set_class(&self.body, NAV_OPEN_CLASS, open);
        // fallback for stylesheets without the lock class
        dom::set_style(&self.body, "overflow", if open { "hidden" } else { "" });
        _ = self.toggle.set_attribute("aria-expanded", state.aria_expanded());
        _ = self.drawer.set_attribute("aria-hidden", state.aria_hidden());
        if open {
            log::debug!("[nav] opened");
        } else {
            _ = self.toggle.focus();
            log::debug!("[nav] closed");
        }
    }

    fn focusables(&self) -> Vec<web::HtmlElement> {
        dom::query_all_in(&self.drawer, NAV_FOCUSABLE_SELECTOR)
            .into_iter()
            .filter_map(|el| el.dyn_into::<web::HtmlElement>().ok())
            .collect()
    }

    /// Keep Tab inside the open drawer. Returns true when focus was moved.
    pub fn trap_focus(&self, active: Option<&web::Element>, shift: bool) -> bool {
        if !self.is_open() {
            return false;
        }
        let items = self.focusables();
        let current = active.and_then(|a| {
            items
                .iter()
                .position(|el| AsRef::<web::Element>::as_ref(el) == a)
        });
        match focus_trap_target(current, items.len(), shift) {
            Some(i) => {
                _ = items[i].focus();
                true
            }
            None => false,
        }
    }
}

/// Mount the drawer and wire everything that opens or closes it except the
/// keyboard, which lives in `events::keyboard`.
pub fn wire(site: &Rc<Site>) -> Option<Rc<Drawer>> {
    let drawer = Drawer::mount(site)?;

    let d = drawer.clone();
    dom::listen(&drawer.toggle, "click", move |_| d.toggle());

    let d = drawer.clone();
    dom::listen(&drawer.overlay, "click", move |_| d.close());

    // Links keep their default action; the drawer closes a moment later so
    // the browser acts on the link first.
    let delay = site.config.nav_link_close_delay;
    for link in dom::query_all_in(&drawer.drawer, NAV_LINK_SELECTOR) {
        let d = drawer.clone();
        dom::listen(&link, "click", move |_| {
            let d = d.clone();
            dom::set_timeout(delay, move || d.close());
        });
    }

    let d = drawer.clone();
    let s = site.clone();
    dom::listen(
        &site.window,
        "resize",
        timing::debounced(site.config.resize_debounce, move || {
            if d.is_open() && s.config.is_desktop_width(dom::viewport_width(&s.window)) {
                d.close();
            }
        }),
    );

    Some(drawer)
}

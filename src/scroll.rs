//! Everything driven by the page's vertical scroll position.

use crate::constants::{
    ACTIVE_CLASS, ANCHOR_SELECTOR, BACK_TO_TOP_ID, MONTH_TAB_SELECTOR, NAV_LINK_SELECTOR,
    PAGE_SECTION_SELECTOR, PROGRESS_BAR_CLASS, PROGRESS_BAR_HEIGHT_PX, SCROLLED_CLASS,
    VISIBLE_CLASS,
};
use crate::dom;
use crate::site::Site;
use crate::timing;
use infoevents_core::{
    active_section, classify, fragment_id, probe_line, progress_percent, scroll_target,
    SECTION_LOOKAHEAD,
};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Header shadow and back-to-top visibility.
pub fn wire_header_and_back_to_top(site: &Rc<Site>) {
    let back_to_top = site.document.get_element_by_id(BACK_TO_TOP_ID);
    if site.header.is_none() && back_to_top.is_none() {
        log::warn!("[scroll] no header or back-to-top control; skipping");
        return;
    }

    if let Some(btn) = &back_to_top {
        let s = site.clone();
        dom::listen(btn, "click", move |_| dom::smooth_scroll_page_to(&s.window, 0.0));
    }

    let s = site.clone();
    let update = move || {
        let c = classify(&s.metrics(None), &[], 0.0);
        if let Some(h) = &s.header {
            dom::set_class(h, SCROLLED_CLASS, c.is_header_scrolled);
        }
        if let Some(b) = &back_to_top {
            dom::set_class(b, VISIBLE_CLASS, c.is_back_to_top_visible);
        }
    };
    dom::listen(
        &site.window,
        "scroll",
        timing::throttled(site.config.header_throttle, update),
    );
}

/// Thin bar across the top of the viewport showing how far down the page is.
pub fn wire_progress_bar(site: &Rc<Site>) {
    let selector = format!(".{}", PROGRESS_BAR_CLASS);
    let existing = site
        .document
        .query_selector(&selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok());
    let bar = match existing {
        Some(bar) => bar,
        None => {
            let Some(bar) = dom::create_with_class(&site.document, "div", PROGRESS_BAR_CLASS)
            else {
                return;
            };
            let height = format!("{}px", PROGRESS_BAR_HEIGHT_PX);
            for (prop, value) in [
                ("position", "fixed"),
                ("top", "0"),
                ("left", "0"),
                ("width", "0%"),
                ("height", height.as_str()),
                ("z-index", "9999"),
                ("transition", "width 0.1s ease"),
                (
                    "background",
                    "linear-gradient(90deg, var(--accent-blue), var(--accent-cyan))",
                ),
            ] {
                dom::set_style(&bar, prop, value);
            }
            _ = site.body.append_child(&bar);
            bar
        }
    };

    let s = site.clone();
    dom::listen(
        &site.window,
        "scroll",
        timing::throttled(site.config.progress_throttle, move || {
            let pct = progress_percent(&s.metrics(None));
            dom::set_style(&bar, "width", &format!("{:.2}%", pct));
        }),
    );
}

/// Mark the nav link whose section is under the header.
pub fn wire_nav_highlight(site: &Rc<Site>) {
    let sections = dom::query_html(&site.document, PAGE_SECTION_SELECTOR);
    let links = dom::query_all(&site.document, NAV_LINK_SELECTOR);
    if sections.is_empty() || links.is_empty() {
        return;
    }

    let s = site.clone();
    let mut current: Option<String> = None;
    let update = move || {
        let bounds = dom::section_bounds(&sections);
        let probe = probe_line(&s.metrics(None), SECTION_LOOKAHEAD);
        let Some(active) = active_section(&bounds, probe) else {
            return;
        };
        if current.as_deref() == Some(active.id.as_str()) {
            return;
        }
        for link in &links {
            let target = link.get_attribute("href");
            let is_active = target.as_deref().and_then(fragment_id) == Some(active.id.as_str());
            dom::set_class(link, ACTIVE_CLASS, is_active);
        }
        current = Some(active.id.clone());
    };
    dom::listen(
        &site.window,
        "scroll",
        timing::throttled(site.config.section_throttle, update),
    );
}

/// Where to land for an in-page target, below the fixed header.
fn anchor_target(site: &Site, target: &web::Element) -> f64 {
    scroll_target(dom::document_top(&site.window, target), &site.metrics(None))
}

/// Smooth scrolling for in-page links. Month tabs scroll themselves, and nav
/// links keep their native jump so the drawer can close behind them.
pub fn wire_anchor_links(site: &Rc<Site>) {
    for anchor in dom::query_all(&site.document, ANCHOR_SELECTOR) {
        if anchor.matches(MONTH_TAB_SELECTOR).unwrap_or(false)
            || anchor.matches(NAV_LINK_SELECTOR).unwrap_or(false)
        {
            continue;
        }
        let s = site.clone();
        let a = anchor.clone();
        dom::listen(&anchor, "click", move |ev| {
            let href = a.get_attribute("href").unwrap_or_default();
            let Some(id) = fragment_id(&href) else {
                return;
            };
            let Some(target) = s.document.get_element_by_id(id) else {
                return;
            };
            ev.prevent_default();
            dom::smooth_scroll_page_to(&s.window, anchor_target(&s, &target));
        });
    }
}

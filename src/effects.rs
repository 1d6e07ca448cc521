//! Independent decorative effects. None of them share state.

use crate::capability;
use crate::constants::{
    COUNTER_SELECTOR, COUNTER_THRESHOLD, FLOATING_CARD_SELECTOR, HIDDEN_CLASS, LAZY_IMAGE_SELECTOR,
    LAZY_ROOT_MARGIN, LAZY_SRC_ATTR, LOADED_CLASS, LOAD_ERROR_CLASS, MAIN_CONTENT_ID,
    PRELOADER_SELECTOR, REVEAL_DURATION_SEC, REVEAL_OFFSET_PX, REVEAL_SELECTOR,
    REVEAL_STAGGER_SEC, REVEAL_THRESHOLD, SKIP_LINK_CLASS, SKIP_LINK_TEXT, YEAR_SELECTOR,
};
use crate::dom;
use crate::site::Site;
use infoevents_core::{CounterAnimation, CounterTarget};
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// Call `on_visible` once per element the first time it enters the viewport.
/// Without IntersectionObserver every element counts as visible right away.
fn observe_once(
    site: &Site,
    elements: Vec<web::Element>,
    init: &web::IntersectionObserverInit,
    mut on_visible: impl FnMut(&web::Element) + 'static,
) {
    if !capability::has_intersection_observer(&site.window) {
        log::debug!("[effects] no IntersectionObserver; revealing immediately");
        elements.iter().for_each(|el| on_visible(el));
        return;
    }
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: web::IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
                    continue;
                };
                if entry.is_intersecting() {
                    let target = entry.target();
                    on_visible(&target);
                    observer.unobserve(&target);
                }
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);
    match web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), init) {
        Ok(observer) => {
            for el in &elements {
                observer.observe(el);
            }
            callback.forget();
        }
        Err(e) => log::warn!("[effects] IntersectionObserver failed: {:?}", e),
    }
}

fn observer_init(threshold: f64, root_margin: &str) -> web::IntersectionObserverInit {
    let init = web::IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(threshold));
    init.set_root_margin(root_margin);
    init
}

/// Cards fade and slide in, staggered by document order.
pub fn wire_reveal(site: &Rc<Site>) {
    let elements = dom::query_all(&site.document, REVEAL_SELECTOR);
    if elements.is_empty() {
        return;
    }
    for (i, el) in elements.iter().enumerate() {
        let Some(el) = el.dyn_ref::<web::HtmlElement>() else {
            continue;
        };
        let delay = i as f64 * REVEAL_STAGGER_SEC;
        dom::set_style(el, "opacity", "0");
        dom::set_style(el, "transform", &format!("translateY({}px)", REVEAL_OFFSET_PX));
        dom::set_style(
            el,
            "transition",
            &format!(
                "opacity {d}s ease {delay:.1}s, transform {d}s ease {delay:.1}s",
                d = REVEAL_DURATION_SEC,
                delay = delay
            ),
        );
    }
    observe_once(
        site,
        elements,
        &observer_init(REVEAL_THRESHOLD, "0px"),
        |el| {
            if let Some(el) = el.dyn_ref::<web::HtmlElement>() {
                dom::set_style(el, "opacity", "1");
                dom::set_style(el, "transform", "translateY(0)");
            }
        },
    );
}

fn load_image(el: &web::Element) {
    let Some(img) = el.dyn_ref::<web::HtmlImageElement>() else {
        return;
    };
    let Some(src) = img.get_attribute(LAZY_SRC_ATTR) else {
        return;
    };
    let ok = img.clone();
    dom::listen(img, "load", move |_| dom::set_class(&ok, LOADED_CLASS, true));
    let failed = img.clone();
    dom::listen(img, "error", move |_| {
        log::warn!("[lazy] failed to load {}", failed.src());
        dom::set_class(&failed, LOAD_ERROR_CLASS, true);
    });
    img.set_src(&src);
    _ = img.remove_attribute(LAZY_SRC_ATTR);
}

/// `<img data-src>` swaps in its real source shortly before it scrolls in.
pub fn wire_lazy_images(site: &Rc<Site>) {
    let images = dom::query_all(&site.document, LAZY_IMAGE_SELECTOR);
    if images.is_empty() {
        return;
    }
    observe_once(site, images, &observer_init(0.0, LAZY_ROOT_MARGIN), load_image);
}

fn run_counter(el: web::Element, mut anim: CounterAnimation, tick: Duration) {
    el.set_text_content(Some(&anim.step()));
    if anim.is_done() {
        return;
    }
    dom::set_timeout(tick, move || run_counter(el, anim, tick));
}

/// `.stat-number` counts up from zero once half of it is visible.
pub fn wire_counters(site: &Rc<Site>) {
    let counters = dom::query_all(&site.document, COUNTER_SELECTOR);
    if counters.is_empty() {
        return;
    }
    let steps = site.config.counter_steps;
    let tick = site.config.counter_tick;
    observe_once(
        site,
        counters,
        &observer_init(COUNTER_THRESHOLD, "0px"),
        move |el| {
            let text = el.text_content().unwrap_or_default();
            let Some(target) = CounterTarget::parse(&text) else {
                return;
            };
            let anim = CounterAnimation::new(target, steps);
            el.set_text_content(Some(&anim.initial_text()));
            let el = el.clone();
            dom::set_timeout(tick, move || run_counter(el, anim, tick));
        },
    );
}

pub fn update_copyright_year(site: &Site) {
    let year = js_sys::Date::new_0().get_full_year().to_string();
    for el in dom::query_all(&site.document, YEAR_SELECTOR) {
        el.set_text_content(Some(&year));
    }
}

/// Hovering a floating card pauses its CSS animation.
pub fn wire_floating_cards(site: &Rc<Site>) {
    for card in dom::query_html(&site.document, FLOATING_CARD_SELECTOR) {
        let c = card.clone();
        dom::listen(&card, "mouseenter", move |_| {
            dom::set_style(&c, "animation-play-state", "paused");
        });
        let c = card.clone();
        dom::listen(&card, "mouseleave", move |_| {
            dom::set_style(&c, "animation-play-state", "running");
        });
    }
}

/// Fade the preloader out shortly after the page has loaded.
pub fn wire_preloader(site: &Rc<Site>) {
    let Ok(Some(preloader)) = site.document.query_selector(PRELOADER_SELECTOR) else {
        return;
    };
    let delay = site.config.preloader_delay;
    let fade = site.config.preloader_fade;
    let dismiss = move || {
        dom::set_timeout(delay, move || {
            dom::set_class(&preloader, HIDDEN_CLASS, true);
            dom::set_timeout(fade, move || preloader.remove());
        });
    };
    if site.document.ready_state() == "complete" {
        dismiss();
    } else {
        let mut dismiss = Some(dismiss);
        dom::listen(&site.window, "load", move |_| {
            if let Some(d) = dismiss.take() {
                d();
            }
        });
    }
}

/// Insert a "skip to content" link unless the markup already has one.
pub fn ensure_skip_link(site: &Site) {
    let selector = format!(".{}", SKIP_LINK_CLASS);
    if let Ok(Some(_)) = site.document.query_selector(&selector) {
        return;
    }
    let Ok(Some(main)) = site.document.query_selector("main") else {
        return;
    };
    if main.id().is_empty() {
        main.set_id(MAIN_CONTENT_ID);
    }
    if !main.has_attribute("tabindex") {
        _ = main.set_attribute("tabindex", "-1");
    }
    let Some(link) = dom::create_with_class(&site.document, "a", SKIP_LINK_CLASS) else {
        return;
    };
    _ = link.set_attribute("href", &format!("#{}", main.id()));
    link.set_text_content(Some(SKIP_LINK_TEXT));
    let target = main.clone();
    dom::listen(&link, "click", move |_| {
        if let Some(t) = target.dyn_ref::<web::HtmlElement>() {
            _ = t.focus();
        }
    });
    _ = site
        .body
        .insert_before(&link, site.body.first_child().as_ref());
}

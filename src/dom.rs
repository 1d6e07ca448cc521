use infoevents_core::{ScrollMetrics, SectionBounds};
use std::time::Duration;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Element by id, cast to a concrete type.
#[inline]
pub fn by_id<T: JsCast>(document: &web::Document, id: &str) -> Option<T> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<T>().ok())
}

fn collect_elements(list: Result<web::NodeList, wasm_bindgen::JsValue>) -> Vec<web::Element> {
    let Ok(list) = list else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|n| n.dyn_into::<web::Element>().ok())
        .collect()
}

#[inline]
pub fn query_all(document: &web::Document, selector: &str) -> Vec<web::Element> {
    collect_elements(document.query_selector_all(selector))
}

#[inline]
pub fn query_all_in(root: &web::Element, selector: &str) -> Vec<web::Element> {
    collect_elements(root.query_selector_all(selector))
}

#[inline]
pub fn query_in(root: &web::Element, selector: &str) -> Option<web::Element> {
    root.query_selector(selector).ok().flatten()
}

/// Html elements matching `selector`; anything else (SVG, etc.) is skipped.
pub fn query_html(document: &web::Document, selector: &str) -> Vec<web::HtmlElement> {
    query_all(document, selector)
        .into_iter()
        .filter_map(|el| el.dyn_into::<web::HtmlElement>().ok())
        .collect()
}

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
        _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

/// Attach a listener for the page's lifetime.
pub fn listen(
    target: &web::EventTarget,
    event: &str,
    handler: impl FnMut(web::Event) + 'static,
) {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
    _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Fire-and-forget timer. Returns the handle, or `None` without a window.
pub fn set_timeout(delay: Duration, f: impl FnOnce() + 'static) -> Option<i32> {
    let window = web::window()?;
    let cb = Closure::once_into_js(f);
    window
        .set_timeout_with_callback_and_timeout_and_arguments_0(
            cb.unchecked_ref(),
            delay.as_millis().min(i32::MAX as u128) as i32,
        )
        .ok()
}

/// Run `f` on the next rendering opportunity.
pub fn next_frame(f: impl FnOnce() + 'static) {
    if let Some(window) = web::window() {
        let cb = Closure::once_into_js(f);
        _ = window.request_animation_frame(cb.unchecked_ref());
    }
}

#[inline]
pub fn set_class(el: &web::Element, class: &str, on: bool) {
    let cl = el.class_list();
    _ = if on { cl.add_1(class) } else { cl.remove_1(class) };
}

#[inline]
pub fn set_style(el: &web::HtmlElement, property: &str, value: &str) {
    _ = el.style().set_property(property, value);
}

#[inline]
pub fn page_scroll_y(window: &web::Window) -> f64 {
    window.page_y_offset().unwrap_or(0.0)
}

pub fn viewport_width(window: &web::Window) -> f64 {
    window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
}

#[inline]
pub fn element_height(el: Option<&web::HtmlElement>) -> f64 {
    el.map(|e| e.offset_height() as f64).unwrap_or(0.0)
}

/// Top edge of `el` in document coordinates.
pub fn document_top(window: &web::Window, el: &web::Element) -> f64 {
    el.get_bounding_client_rect().top() + page_scroll_y(window)
}

pub fn scroll_metrics(
    window: &web::Window,
    document: &web::Document,
    header: Option<&web::HtmlElement>,
    secondary_nav: Option<&web::HtmlElement>,
) -> ScrollMetrics {
    let (document_height, viewport_height) = document
        .document_element()
        .map(|root| (root.scroll_height() as f64, root.client_height() as f64))
        .unwrap_or((0.0, 0.0));
    ScrollMetrics {
        scroll_y: page_scroll_y(window),
        viewport_height,
        document_height,
        header_height: element_height(header),
        secondary_nav_height: element_height(secondary_nav),
    }
}

/// Geometry of the given sections in document order; sections without an id
/// are skipped.
pub fn section_bounds(sections: &[web::HtmlElement]) -> Vec<SectionBounds> {
    sections
        .iter()
        .filter(|s| !s.id().is_empty())
        .map(|s| SectionBounds::new(s.id(), s.offset_top() as f64, s.offset_height() as f64))
        .collect()
}

fn smooth_options() -> web::ScrollToOptions {
    let opts = web::ScrollToOptions::new();
    opts.set_behavior(web::ScrollBehavior::Smooth);
    opts
}

pub fn smooth_scroll_page_to(window: &web::Window, top: f64) {
    let opts = smooth_options();
    opts.set_top(top);
    window.scroll_to_with_scroll_to_options(&opts);
}

/// Horizontal-only scroll of a container; never moves the page.
pub fn smooth_scroll_strip_to(container: &web::Element, left: f64) {
    let opts = smooth_options();
    opts.set_left(left);
    container.scroll_to_with_scroll_to_options(&opts);
}

pub fn smooth_scroll_strip_by(container: &web::Element, delta: f64) {
    let opts = smooth_options();
    opts.set_left(delta);
    container.scroll_by_with_scroll_to_options(&opts);
}

/// `div`, `span` etc. with a class already set.
pub fn create_with_class(
    document: &web::Document,
    tag: &str,
    class: &str,
) -> Option<web::HtmlElement> {
    let el = document.create_element(tag).ok()?;
    el.set_class_name(class);
    el.dyn_into::<web::HtmlElement>().ok()
}

//! Month tabs on the events page.

use crate::constants::{
    ACTIVE_CLASS, MONTH_NAV_SELECTOR, MONTH_NEXT_ID, MONTH_PREV_ID, MONTH_SECTION_SELECTOR,
    MONTH_TABS_ID, MONTH_TAB_SELECTOR,
};
use crate::dom;
use crate::site::Site;
use crate::timing;
use infoevents_core::{
    classify, centered_strip_offset, scroll_target, StripDirection, TabStrip, SECTION_LOOKAHEAD,
};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

struct MonthTabs {
    site: Rc<Site>,
    tabs: Vec<web::HtmlElement>,
    strip: RefCell<TabStrip>,
    container: Option<web::HtmlElement>,
    month_nav: Option<web::HtmlElement>,
}

impl MonthTabs {
    fn render_active(&self) {
        let active = self.strip.borrow().active();
        for (i, tab) in self.tabs.iter().enumerate() {
            dom::set_class(tab, ACTIVE_CLASS, active == Some(i));
        }
    }

    /// Center a tab in the strip by scrolling the strip sideways only.
    fn reveal_tab(&self, index: usize) {
        let (Some(container), Some(tab)) = (&self.container, self.tabs.get(index)) else {
            return;
        };
        let strip_rect = container.get_bounding_client_rect();
        let tab_rect = tab.get_bounding_client_rect();
        let tab_left = tab_rect.left() - strip_rect.left() + container.scroll_left() as f64;
        let left = centered_strip_offset(
            tab_left,
            tab_rect.width(),
            container.client_width() as f64,
            container.scroll_width() as f64,
        );
        dom::smooth_scroll_strip_to(container, left);
    }

    fn on_click(&self, index: usize) {
        if !self.strip.borrow_mut().activate(index) {
            return;
        }
        self.render_active();

        let target = self
            .strip
            .borrow()
            .target(index)
            .and_then(|id| self.site.document.get_element_by_id(id));
        if let Some(section) = target {
            let m = self.site.metrics(self.month_nav.as_ref());
            let top = scroll_target(dom::document_top(&self.site.window, &section), &m);
            dom::smooth_scroll_page_to(&self.site.window, top);
        }
        self.reveal_tab(index);
    }

    fn on_scroll(&self, sections: &[web::HtmlElement]) {
        let bounds = dom::section_bounds(sections);
        let m = self.site.metrics(self.month_nav.as_ref());
        let c = classify(&m, &bounds, SECTION_LOOKAHEAD);
        let Some(id) = c.active_section_id else {
            return;
        };
        let changed = self.strip.borrow_mut().sync_to_section(&id);
        if let Some(index) = changed {
            self.render_active();
            self.reveal_tab(index);
        }
    }
}

pub fn wire(site: &Rc<Site>) {
    let tabs = dom::query_html(&site.document, MONTH_TAB_SELECTOR);
    if tabs.is_empty() {
        return;
    }
    let strip = TabStrip::from_hrefs(tabs.iter().map(|t| t.get_attribute("href")));
    let container = dom::by_id::<web::HtmlElement>(&site.document, MONTH_TABS_ID);
    let month_nav = site
        .document
        .query_selector(MONTH_NAV_SELECTOR)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok());

    let month_tabs = Rc::new(MonthTabs {
        site: site.clone(),
        tabs,
        strip: RefCell::new(strip),
        container,
        month_nav,
    });

    for (i, tab) in month_tabs.tabs.iter().enumerate() {
        let mt = month_tabs.clone();
        dom::listen(tab, "click", move |ev| {
            ev.prevent_default();
            mt.on_click(i);
        });
    }

    if let Some(container) = month_tabs.container.clone() {
        for (id, direction) in [
            (MONTH_PREV_ID, StripDirection::Prev),
            (MONTH_NEXT_ID, StripDirection::Next),
        ] {
            let c = container.clone();
            dom::add_click_listener(&site.document, id, move || {
                dom::smooth_scroll_strip_by(&c, direction.delta());
            });
        }
    } else {
        log::warn!("[tabs] #{} missing; prev/next disabled", MONTH_TABS_ID);
    }

    let sections = dom::query_html(&site.document, MONTH_SECTION_SELECTOR);
    if sections.is_empty() {
        return;
    }
    let mt = month_tabs.clone();
    dom::listen(
        &site.window,
        "scroll",
        timing::throttled(site.config.section_throttle, move || mt.on_scroll(&sections)),
    );
}

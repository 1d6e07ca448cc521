//! Toast notifications rendered into a single lazily created container.

use crate::constants::{HIDING_CLASS, SHOW_CLASS, TOAST_CONTAINER_CLASS};
use crate::dom;
use infoevents_core::{Notice, SiteConfig, ToastLifecycle, ToastRecord};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;
use web_sys as web;

pub struct ToastSurface {
    document: web::Document,
    container: RefCell<Option<web::Element>>,
    next_id: Cell<u64>,
    duration: Duration,
    exit: Duration,
}

/// One toast on the page. Cheap to clone; all clones share the lifecycle.
#[derive(Clone)]
pub struct ToastHandle {
    pub record: Rc<ToastRecord>,
    element: web::Element,
    lifecycle: Rc<RefCell<ToastLifecycle>>,
    exit: Duration,
}

impl ToastSurface {
    pub fn new(document: web::Document, config: &SiteConfig) -> Self {
        Self {
            document,
            container: RefCell::new(None),
            next_id: Cell::new(1),
            duration: config.toast_duration,
            exit: config.toast_exit,
        }
    }

    /// Reuse the page's container when one exists, otherwise create it.
    fn container(&self) -> Option<web::Element> {
        if let Some(c) = self.container.borrow().as_ref() {
            return Some(c.clone());
        }
        let selector = format!(".{}", TOAST_CONTAINER_CLASS);
        let found = self.document.query_selector(&selector).ok().flatten();
        let container = match found {
            Some(c) => c,
            None => {
                let body = self.document.body()?;
                let c = self.document.create_element("div").ok()?;
                c.set_class_name(TOAST_CONTAINER_CLASS);
                _ = c.set_attribute("aria-live", "polite");
                _ = body.append_child(&c);
                c
            }
        };
        *self.container.borrow_mut() = Some(container.clone());
        Some(container)
    }

    fn build(&self, record: &ToastRecord) -> Option<(web::Element, web::Element)> {
        let doc = &self.document;
        let notice = &record.notice;
        let toast = doc.create_element("div").ok()?;
        toast.set_class_name(&format!("toast {}", notice.kind.class_name()));
        _ = toast.set_attribute("role", "status");

        let icon = doc.create_element("span").ok()?;
        icon.set_class_name("toast-icon");
        icon.set_text_content(Some(notice.kind.icon()));

        let content = doc.create_element("div").ok()?;
        content.set_class_name("toast-content");
        let title = doc.create_element("div").ok()?;
        title.set_class_name("toast-title");
        title.set_text_content(Some(&notice.title));
        let message = doc.create_element("div").ok()?;
        message.set_class_name("toast-message");
        message.set_text_content(Some(&notice.message));
        _ = content.append_child(&title);
        _ = content.append_child(&message);

        let close = doc.create_element("button").ok()?;
        close.set_class_name("toast-close");
        _ = close.set_attribute("type", "button");
        _ = close.set_attribute("aria-label", "Tutup notifikasi");
        close.set_text_content(Some("×"));

        _ = toast.append_child(&icon);
        _ = toast.append_child(&content);
        _ = toast.append_child(&close);
        Some((toast, close))
    }

    pub fn show(&self, notice: &Notice) -> Option<ToastHandle> {
        let container = self.container()?;
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        let record = ToastRecord::new(id, notice.clone());
        let (element, close) = self.build(&record)?;
        _ = container.append_child(&element);

        let handle = ToastHandle {
            record: Rc::new(record),
            element,
            lifecycle: Rc::new(RefCell::new(ToastLifecycle::default())),
            exit: self.exit,
        };
        log::debug!("[toast] #{} {}", id, notice.title);

        let shown = handle.element.clone();
        dom::next_frame(move || dom::set_class(&shown, SHOW_CLASS, true));

        let on_close = handle.clone();
        dom::listen(&close, "click", move |_| on_close.dismiss());

        let on_timeout = handle.clone();
        dom::set_timeout(self.duration, move || on_timeout.dismiss());

        Some(handle)
    }
}

impl ToastHandle {
    /// Start the exit animation, then detach. Safe to call any number of
    /// times from any path.
    pub fn dismiss(&self) {
        if !self.lifecycle.borrow_mut().begin_hide() {
            return;
        }
        dom::set_class(&self.element, HIDING_CLASS, true);
        let element = self.element.clone();
        let lifecycle = self.lifecycle.clone();
        let id = self.record.id;
        dom::set_timeout(self.exit, move || {
            if lifecycle.borrow_mut().detach() && element.parent_node().is_some() {
                element.remove();
                log::debug!("[toast] #{} removed", id);
            }
        });
    }
}

use crate::constants::{CONTACT_FORM_ID, HEADER_ID, WHATSAPP_NUMBER_ATTR};
use crate::dom;
use crate::toast::{ToastHandle, ToastSurface};
use anyhow::anyhow;
use infoevents_core::{Notice, ScrollMetrics, SiteConfig};
use web_sys as web;

/// Page-wide handles built once at startup and shared by every component.
pub struct Site {
    pub window: web::Window,
    pub document: web::Document,
    pub body: web::HtmlElement,
    pub header: Option<web::HtmlElement>,
    pub config: SiteConfig,
    pub toasts: ToastSurface,
}

impl Site {
    pub fn from_window() -> anyhow::Result<Self> {
        let window = web::window().ok_or_else(|| anyhow!("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| anyhow!("no document"))?;
        let body = document.body().ok_or_else(|| anyhow!("no body"))?;
        let header = dom::by_id::<web::HtmlElement>(&document, HEADER_ID);

        let number = document
            .get_element_by_id(CONTACT_FORM_ID)
            .and_then(|f| f.get_attribute(WHATSAPP_NUMBER_ATTR));
        let config = SiteConfig::default().with_whatsapp_number(number.as_deref());
        let toasts = ToastSurface::new(document.clone(), &config);

        Ok(Self {
            window,
            document,
            body,
            header,
            config,
            toasts,
        })
    }

    #[inline]
    pub fn metrics(&self, secondary_nav: Option<&web::HtmlElement>) -> ScrollMetrics {
        dom::scroll_metrics(&self.window, &self.document, self.header.as_ref(), secondary_nav)
    }

    #[inline]
    pub fn notify(&self, notice: &Notice) -> Option<ToastHandle> {
        self.toasts.show(notice)
    }
}

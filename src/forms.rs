//! Contact form, newsletter form and the focus/filled hints on form groups.

use crate::constants::{
    CONTACT_FORM_ID, FILLED_CLASS, FOCUSED_CLASS, FORM_CONTROL_SELECTOR, FORM_GROUP_SELECTOR,
    NEWSLETTER_EMAIL_SELECTOR, NEWSLETTER_FORM_ID, SUBMIT_BUTTON_SELECTOR,
};
use crate::dom;
use crate::site::Site;
use crate::storage;
use infoevents_core::{
    plan_contact_submit, subscribed_notice, ContactOutcome, ContactSubmission,
    NewsletterSubscription, NEWSLETTER_BUSY_LABEL,
};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

fn field(data: &web::FormData, name: &str) -> String {
    data.get(name).as_string().unwrap_or_default()
}

fn read_contact(form: &web::HtmlFormElement) -> Option<ContactSubmission> {
    let data = web::FormData::new_with_form(form).ok()?;
    let phone = field(&data, "phone");
    Some(ContactSubmission::from_fields(
        &field(&data, "name"),
        &field(&data, "email"),
        Some(phone.as_str()),
        &field(&data, "subject"),
        &field(&data, "message"),
    ))
}

/// Contact form. A valid submit opens WhatsApp with the message prefilled.
///
/// The submit button stays enabled, so a double submit schedules two opens.
pub fn wire_contact(site: &Rc<Site>) {
    let Some(form) = dom::by_id::<web::HtmlFormElement>(&site.document, CONTACT_FORM_ID) else {
        log::warn!("[contact] #{} missing; contact form disabled", CONTACT_FORM_ID);
        return;
    };
    let s = site.clone();
    let f = form.clone();
    dom::listen(&form, "submit", move |ev| {
        ev.prevent_default();
        let Some(submission) = read_contact(&f) else {
            log::error!("[contact] could not read form data");
            return;
        };
        match plan_contact_submit(&submission, &s.config) {
            ContactOutcome::Rejected(notice) => {
                s.notify(&notice);
            }
            ContactOutcome::Accepted {
                notice,
                link,
                open_after,
            } => {
                log::info!("[contact] sending '{}' via WhatsApp", submission.subject_label());
                s.notify(&notice);
                let window = s.window.clone();
                dom::set_timeout(open_after, move || {
                    if let Err(e) = window.open_with_url_and_target(&link, "_blank") {
                        log::warn!("[contact] could not open WhatsApp: {:?}", e);
                    }
                });
                f.reset();
            }
        }
    });
}

fn now_iso() -> String {
    String::from(js_sys::Date::new_0().to_iso_string())
}

/// Newsletter form. There is no backend yet: the request is simulated and
/// the signup is remembered locally.
pub fn wire_newsletter(site: &Rc<Site>) {
    let Some(form) = dom::by_id::<web::HtmlFormElement>(&site.document, NEWSLETTER_FORM_ID) else {
        log::warn!("[newsletter] #{} missing; newsletter form disabled", NEWSLETTER_FORM_ID);
        return;
    };
    let Some(input) = form
        .query_selector(NEWSLETTER_EMAIL_SELECTOR)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<web::HtmlInputElement>().ok())
    else {
        log::warn!("[newsletter] email input missing; newsletter form disabled");
        return;
    };
    let button = form
        .query_selector(SUBMIT_BUTTON_SELECTOR)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<web::HtmlButtonElement>().ok());

    if let Some(previous) = storage::load_subscription() {
        log::info!("[newsletter] already subscribed since {}", previous.date);
    }

    let s = site.clone();
    let f = form.clone();
    dom::listen(&form, "submit", move |ev| {
        ev.prevent_default();
        let sub = match NewsletterSubscription::create(&input.value(), now_iso()) {
            Ok(sub) => sub,
            Err(e) => {
                s.notify(&e.notice());
                return;
            }
        };

        let label = button.as_ref().and_then(|b| b.text_content());
        if let Some(b) = &button {
            b.set_disabled(true);
            b.set_text_content(Some(NEWSLETTER_BUSY_LABEL));
        }

        let s2 = s.clone();
        let f2 = f.clone();
        let b2 = button.clone();
        dom::set_timeout(s.config.newsletter_latency, move || {
            s2.notify(&subscribed_notice());
            if let Some(b) = &b2 {
                b.set_disabled(false);
                b.set_text_content(label.as_deref());
            }
            f2.reset();
            if let Err(e) = storage::save_subscription(&sub) {
                log::warn!("[newsletter] not remembered: {}", e);
            }
        });
    });
}

fn control_value(control: &web::Element) -> String {
    if let Some(i) = control.dyn_ref::<web::HtmlInputElement>() {
        return i.value();
    }
    if let Some(t) = control.dyn_ref::<web::HtmlTextAreaElement>() {
        return t.value();
    }
    if let Some(s) = control.dyn_ref::<web::HtmlSelectElement>() {
        return s.value();
    }
    String::new()
}

/// `focused` while a group's control has focus, `filled` while it holds text.
pub fn wire_field_hints(site: &Rc<Site>) {
    for group in dom::query_all(&site.document, FORM_GROUP_SELECTOR) {
        let Some(control) = dom::query_in(&group, FORM_CONTROL_SELECTOR) else {
            continue;
        };
        let filled = |g: &web::Element, c: &web::Element| {
            dom::set_class(g, FILLED_CLASS, !control_value(c).trim().is_empty());
        };
        filled(&group, &control);

        let g = group.clone();
        dom::listen(&control, "focus", move |_| dom::set_class(&g, FOCUSED_CLASS, true));
        let g = group.clone();
        let c = control.clone();
        dom::listen(&control, "blur", move |_| {
            dom::set_class(&g, FOCUSED_CLASS, false);
            filled(&g, &c);
        });
    }
}

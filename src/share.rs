use crate::capability;
use crate::constants::{
    EVENT_CARD_SELECTOR, EVENT_DATE_SELECTOR, EVENT_LINK_SELECTOR, EVENT_LOCATION_SELECTOR,
    EVENT_TITLE_SELECTOR, SHARE_BUTTON_SELECTOR,
};
use crate::dom;
use crate::site::Site;
use infoevents_core::event_share_text;
use std::rc::Rc;
use web_sys as web;

fn text_of(card: &web::Element, selector: &str) -> String {
    dom::query_in(card, selector)
        .and_then(|el| el.text_content())
        .unwrap_or_default()
}

/// Share buttons placed inside event cards by the markup.
pub fn wire_share_buttons(site: &Rc<Site>) {
    for card in dom::query_all(&site.document, EVENT_CARD_SELECTOR) {
        let Some(button) = dom::query_in(&card, SHARE_BUTTON_SELECTOR) else {
            continue;
        };
        let s = site.clone();
        let c = card.clone();
        dom::listen(&button, "click", move |_| {
            let title = text_of(&c, EVENT_TITLE_SELECTOR).trim().to_string();
            let link = dom::query_in(&c, EVENT_LINK_SELECTOR)
                .and_then(|a| a.get_attribute("href"))
                .unwrap_or_default();
            let text = event_share_text(
                &title,
                &text_of(&c, EVENT_DATE_SELECTOR),
                &text_of(&c, EVENT_LOCATION_SELECTOR),
                &link,
            );
            capability::share_or_copy(&s, title, text, link);
        });
    }
}

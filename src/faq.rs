use crate::constants::{ACTIVE_CLASS, FAQ_ITEM_SELECTOR, FAQ_QUESTION_SELECTOR};
use crate::dom;
use crate::site::Site;
use infoevents_core::{is_activation_key, Accordion};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

struct FaqItem {
    item: web::Element,
    question: web::Element,
}

fn render(items: &[FaqItem], state: &Accordion) {
    for (i, it) in items.iter().enumerate() {
        let open = state.is_open(i);
        dom::set_class(&it.item, ACTIVE_CLASS, open);
        _ = it
            .question
            .set_attribute("aria-expanded", if open { "true" } else { "false" });
    }
}

pub fn wire(site: &Rc<Site>) {
    let items: Vec<FaqItem> = dom::query_all(&site.document, FAQ_ITEM_SELECTOR)
        .into_iter()
        .filter_map(|item| match dom::query_in(&item, FAQ_QUESTION_SELECTOR) {
            Some(question) => Some(FaqItem { item, question }),
            None => {
                log::warn!("[faq] item without {}; skipped", FAQ_QUESTION_SELECTOR);
                None
            }
        })
        .collect();
    if items.is_empty() {
        return;
    }

    // Markup may ship one item expanded; keep it open.
    let shipped_open = items
        .iter()
        .position(|it| it.item.class_list().contains(ACTIVE_CLASS));
    let state = Rc::new(RefCell::new(Accordion::with_open(items.len(), shipped_open)));
    let items = Rc::new(items);
    render(&items, &state.borrow());

    for (i, it) in items.iter().enumerate() {
        let activate = {
            let items = items.clone();
            let state = state.clone();
            move || {
                let mut s = state.borrow_mut();
                s.activate(i);
                render(&items, &s);
            }
        };
        let on_click = activate.clone();
        dom::listen(&it.question, "click", move |_| on_click());
        dom::listen(&it.question, "keydown", move |ev| {
            let Some(kev) = ev.dyn_ref::<web::KeyboardEvent>() else {
                return;
            };
            if is_activation_key(&kev.key()) {
                ev.prevent_default();
                activate();
            }
        });
    }
}

//! Best-effort local storage. Failures are reported to the caller, which
//! logs them and carries on.

use infoevents_core::{NewsletterSubscription, StorageError, NEWSLETTER_STORAGE_KEY};
use web_sys as web;

fn local_storage() -> Result<web::Storage, StorageError> {
    web::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .ok_or(StorageError::Unavailable)
}

pub fn save_subscription(sub: &NewsletterSubscription) -> Result<(), StorageError> {
    let raw = sub.to_json()?;
    local_storage()?
        .set_item(NEWSLETTER_STORAGE_KEY, &raw)
        .map_err(|_| StorageError::Unavailable)
}

pub fn load_subscription() -> Option<NewsletterSubscription> {
    let raw = local_storage().ok()?.get_item(NEWSLETTER_STORAGE_KEY).ok()??;
    match NewsletterSubscription::from_json(&raw) {
        Ok(sub) => Some(sub),
        Err(e) => {
            log::warn!("[storage] ignoring stored subscription: {}", e);
            None
        }
    }
}

//! Newsletter signup. There is no backend yet; a successful signup is only
//! remembered in local storage.

use crate::forms::{check_email, ValidationError};
use crate::toast::Notice;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const NEWSLETTER_STORAGE_KEY: &str = "newsletter_subscribed";
pub const NEWSLETTER_BUSY_LABEL: &str = "Mendaftar...";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("local storage is not available")]
    Unavailable,
    #[error("could not encode record: {0}")]
    Encode(#[from] serde_json::Error),
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsletterSubscription {
    pub email: String,
    /// ISO-8601 timestamp of the signup.
    pub date: String,
}

impl NewsletterSubscription {
    /// Validate the address and stamp it with `date_iso`.
    pub fn create(email: &str, date_iso: impl Into<String>) -> Result<Self, ValidationError> {
        let email = email.trim();
        check_email(email)?;
        Ok(Self {
            email: email.to_string(),
            date: date_iso.into(),
        })
    }

    pub fn to_json(&self) -> Result<String, StorageError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(raw: &str) -> Result<Self, StorageError> {
        Ok(serde_json::from_str(raw)?)
    }
}

pub fn subscribed_notice() -> Notice {
    Notice::success(
        "Berhasil Terdaftar! 🎉",
        "Terima kasih sudah berlangganan. Kamu akan menerima update event terbaru.",
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_malformed_address() {
        assert_eq!(
            NewsletterSubscription::create("nope", "2026-01-01T00:00:00.000Z"),
            Err(ValidationError::InvalidEmail)
        );
    }

    #[test]
    fn trims_before_checking() {
        let s = NewsletterSubscription::create("  ana@x.com ", "2026-01-01T00:00:00.000Z")
            .expect("valid");
        assert_eq!(s.email, "ana@x.com");
    }

    #[test]
    fn stored_record_shape() {
        let s = NewsletterSubscription::create("ana@x.com", "2026-10-19T08:00:00.000Z")
            .expect("valid");
        let raw = s.to_json().expect("encode");
        let v: serde_json::Value = serde_json::from_str(&raw).expect("json");
        assert_eq!(v["email"], "ana@x.com");
        assert_eq!(v["date"], "2026-10-19T08:00:00.000Z");
        assert_eq!(v.as_object().map(|o| o.len()), Some(2));
    }

    #[test]
    fn garbage_record_is_an_error() {
        assert!(NewsletterSubscription::from_json("{\"email\":1}").is_err());
    }
}

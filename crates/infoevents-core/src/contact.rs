//! Contact form → WhatsApp hand-off.

use crate::config::{SiteConfig, WHATSAPP_HOST};
use crate::forms::{check_email, check_message_length, ValidationError};
use crate::toast::Notice;
use std::time::Duration;

/// Subject codes offered by the form's `<select>` and their display labels.
pub const SUBJECT_LABELS: &[(&str, &str)] = &[
    ("info-event", "Informasi Event"),
    ("promosi-event", "Promosi Event Saya"),
    ("media-partner", "Media Partner"),
    ("kerja-sama", "Kerja Sama Lainnya"),
    ("saran", "Saran & Masukan"),
    ("lainnya", "Lainnya"),
];

/// Human label for a subject code; unknown codes are shown as-is.
pub fn subject_label(key: &str) -> &str {
    SUBJECT_LABELS
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, label)| *label)
        .unwrap_or(key)
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub subject_key: String,
    pub message: String,
}

impl ContactSubmission {
    /// Collect form values exactly as typed. An empty phone counts as not
    /// given.
    pub fn from_fields(
        name: &str,
        email: &str,
        phone: Option<&str>,
        subject_key: &str,
        message: &str,
    ) -> Self {
        Self {
            name: name.to_string(),
            email: email.to_string(),
            phone: phone.filter(|p| !p.is_empty()).map(str::to_string),
            subject_key: subject_key.to_string(),
            message: message.to_string(),
        }
    }

    /// Required fields first, then email shape, then message length. Values
    /// are checked untrimmed: a padded email fails the shape check.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if [&self.name, &self.email, &self.subject_key, &self.message]
            .iter()
            .any(|v| v.is_empty())
        {
            return Err(ValidationError::MissingFields);
        }
        check_email(&self.email)?;
        check_message_length(&self.message)?;
        Ok(())
    }

    pub fn subject_label(&self) -> &str {
        subject_label(&self.subject_key)
    }

    /// Plain-text chat message, WhatsApp `*bold*` markup included.
    pub fn format_message(&self) -> String {
        let mut out = String::from("Halo Admin Info Events Bali! 👋\n\n");
        out.push_str(&format!("*Nama:* {}\n", self.name));
        out.push_str(&format!("*Email:* {}\n", self.email));
        if let Some(phone) = &self.phone {
            out.push_str(&format!("*WhatsApp:* {}\n", phone));
        }
        out.push_str(&format!("*Keperluan:* {}\n\n", self.subject_label()));
        out.push_str(&format!("*Pesan:*\n{}\n\n", self.message));
        out.push_str("---\nDikirim melalui website Info Events Bali");
        out
    }

    pub fn deep_link(&self, number: &str) -> String {
        whatsapp_link(number, &self.format_message())
    }
}

pub fn whatsapp_link(number: &str, text: &str) -> String {
    format!(
        "https://{}/{}?text={}",
        WHATSAPP_HOST,
        number,
        urlencoding::encode(text)
    )
}

pub fn contact_sent_notice() -> Notice {
    Notice::success(
        "Pesan Terkirim!",
        "Anda akan diarahkan ke WhatsApp untuk melanjutkan percakapan.",
    )
}

/// What the page should do with one submit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ContactOutcome {
    /// Show the error toast; nothing else happens.
    Rejected(Notice),
    /// Show the confirmation, clear the form, open `link` after `open_after`.
    Accepted {
        notice: Notice,
        link: String,
        open_after: Duration,
    },
}

pub fn plan_contact_submit(submission: &ContactSubmission, config: &SiteConfig) -> ContactOutcome {
    match submission.validate() {
        Err(e) => {
            log::debug!("[contact] rejected: {}", e);
            ContactOutcome::Rejected(e.notice())
        }
        Ok(()) => ContactOutcome::Accepted {
            notice: contact_sent_notice(),
            link: submission.deep_link(&config.whatsapp_number),
            open_after: config.whatsapp_open_delay,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn budi() -> ContactSubmission {
        ContactSubmission::from_fields(
            "Budi",
            "budi@x.com",
            None,
            "promosi-event",
            "Saya ingin mempromosikan event saya.",
        )
    }

    #[test]
    fn unknown_subject_falls_back_to_code() {
        assert_eq!(subject_label("saran"), "Saran & Masukan");
        assert_eq!(subject_label("custom-thing"), "custom-thing");
    }

    #[test]
    fn phone_line_only_when_given() {
        assert!(!budi().format_message().contains("*WhatsApp:*"));
        let mut s = budi();
        s.phone = Some("0812".into());
        assert!(s.format_message().contains("*WhatsApp:* 0812\n"));
    }

    #[test]
    fn empty_phone_is_none() {
        let s = ContactSubmission::from_fields("a", "b", Some(""), "c", "d");
        assert_eq!(s.phone, None);
        let s = ContactSubmission::from_fields("a", "b", Some(" 0812 "), "c", "d");
        assert_eq!(s.phone.as_deref(), Some(" 0812 "));
    }

    #[test]
    fn message_layout() {
        let text = budi().format_message();
        assert!(text.starts_with("Halo Admin Info Events Bali!"));
        assert!(text.contains("*Nama:* Budi\n*Email:* budi@x.com\n*Keperluan:* Promosi Event Saya\n\n"));
        assert!(text.ends_with("---\nDikirim melalui website Info Events Bali"));
    }

    #[test]
    fn deep_link_escapes_text() {
        let link = budi().deep_link("628873434754");
        assert!(link.starts_with("https://wa.me/628873434754?text="));
        let query = link.split_once("?text=").map(|(_, q)| q).unwrap_or_default();
        assert!(!query.contains(' '));
        assert!(!query.contains('\n'));
        assert!(!query.contains('&'));
        assert!(query.contains("%0A"));
    }
}

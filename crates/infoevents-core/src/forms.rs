//! Field checks shared by the contact and newsletter forms.
//!
//! The email check is deliberately loose (`something@something.something`
//! with no whitespace or extra `@`), matching what the site has always
//! accepted.

use crate::config::MESSAGE_MIN_CHARS;
use crate::toast::{Notice, ToastKind};
use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("required field is empty")]
    MissingFields,
    #[error("email address is malformed")]
    InvalidEmail,
    #[error("message shorter than {min} characters")]
    MessageTooShort { min: usize },
}

impl ValidationError {
    /// Toast shown to the visitor for this failure.
    pub fn notice(&self) -> Notice {
        match self {
            ValidationError::MissingFields => Notice::new(
                ToastKind::Error,
                "Form Tidak Lengkap",
                "Mohon lengkapi semua field yang wajib diisi.",
            ),
            ValidationError::InvalidEmail => Notice::new(
                ToastKind::Error,
                "Email Tidak Valid",
                "Mohon masukkan alamat email yang valid.",
            ),
            ValidationError::MessageTooShort { min } => Notice::new(
                ToastKind::Error,
                "Pesan Terlalu Pendek",
                format!("Pesan minimal {} karakter.", min),
            ),
        }
    }
}

#[inline]
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

pub fn check_email(email: &str) -> Result<(), ValidationError> {
    if is_valid_email(email) {
        Ok(())
    } else {
        Err(ValidationError::InvalidEmail)
    }
}

pub fn check_message_length(message: &str) -> Result<(), ValidationError> {
    if message.chars().count() < MESSAGE_MIN_CHARS {
        return Err(ValidationError::MessageTooShort {
            min: MESSAGE_MIN_CHARS,
        });
    }
    Ok(())
}

// Contact submit outcomes for representative visitor input.

use infoevents_core::{
    plan_contact_submit, ContactOutcome, ContactSubmission, SiteConfig, ToastKind,
};
use std::time::Duration;

fn submit(name: &str, email: &str, subject: &str, message: &str) -> ContactOutcome {
    let s = ContactSubmission::from_fields(name, email, None, subject, message);
    plan_contact_submit(&s, &SiteConfig::default())
}

#[test]
fn malformed_email_rejected_without_link() {
    match submit("Ana", "not-an-email", "info-event", "Hello there") {
        ContactOutcome::Rejected(n) => {
            assert_eq!(n.kind, ToastKind::Error);
            assert_eq!(n.title, "Email Tidak Valid");
        }
        other => panic!("expected rejection, got {:?}", other),
    }
}

#[test]
fn short_message_rejected() {
    match submit("Ana", "ana@x.com", "info-event", "Hi") {
        ContactOutcome::Rejected(n) => {
            assert_eq!(n.kind, ToastKind::Error);
            assert_eq!(n.title, "Pesan Terlalu Pendek");
        }
        other => panic!("expected rejection, got {:?}", other),
    }
}

#[test]
fn missing_subject_rejected_first() {
    match submit("Ana", "bad", "", "Hi") {
        ContactOutcome::Rejected(n) => assert_eq!(n.title, "Form Tidak Lengkap"),
        other => panic!("expected rejection, got {:?}", other),
    }
}

#[test]
fn valid_submission_uses_subject_label() {
    let s = ContactSubmission::from_fields(
        "Budi",
        "budi@x.com",
        None,
        "promosi-event",
        "Saya ingin mempromosikan event saya.",
    );
    assert!(s.format_message().contains("Promosi Event Saya"));
    assert!(!s.format_message().contains("promosi-event"));

    match plan_contact_submit(&s, &SiteConfig::default()) {
        ContactOutcome::Accepted {
            notice,
            link,
            open_after,
        } => {
            assert_eq!(notice.kind, ToastKind::Success);
            assert_eq!(open_after, Duration::from_millis(1500));
            assert!(link.starts_with("https://wa.me/628873434754?text="));
            assert!(link.contains("Promosi%20Event%20Saya"));
        }
        other => panic!("expected acceptance, got {:?}", other),
    }
}

#[test]
fn configured_number_is_used() {
    let cfg = SiteConfig::default().with_whatsapp_number(Some("6281111"));
    let s = ContactSubmission::from_fields("Budi", "budi@x.com", None, "saran", "Terima kasih banyak!");
    match plan_contact_submit(&s, &cfg) {
        ContactOutcome::Accepted { link, .. } => assert!(link.starts_with("https://wa.me/6281111?")),
        other => panic!("expected acceptance, got {:?}", other),
    }
}

#[test]
fn padded_email_is_rejected_as_typed() {
    assert!(!infoevents_core::is_valid_email(" ana@x.com"));
    match submit("Ana", " ana@x.com", "info-event", "Hello there") {
        ContactOutcome::Rejected(n) => assert_eq!(n.title, "Email Tidak Valid"),
        other => panic!("expected rejection, got {:?}", other),
    }
}

#[test]
fn whitespace_name_counts_as_filled() {
    match submit("   ", "ana@x.com", "info-event", "Hello there") {
        ContactOutcome::Accepted { link, .. } => assert!(link.contains("Nama%3A%2A%20%20%20%20")),
        other => panic!("expected acceptance, got {:?}", other),
    }
}

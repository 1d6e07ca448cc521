//! Share text for event cards.

/// Collapse runs of whitespace, the way the card's date line is laid out
/// across several elements in the markup.
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

pub fn event_share_text(title: &str, date: &str, location: &str, link: &str) -> String {
    format!(
        "🎉 {}\n📅 {}\n{}\n\n🔗 Info: {}\n\nvia Info Events Bali",
        title.trim(),
        collapse_whitespace(date),
        location.trim(),
        link
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_whitespace_is_collapsed() {
        assert_eq!(collapse_whitespace("  12 \n   Okt\t2026 "), "12 Okt 2026");
    }

    #[test]
    fn share_text_layout() {
        let t = event_share_text("Bali Jazz", "12\n  Okt", "📍 Denpasar", "https://e.x/1");
        assert_eq!(
            t,
            "🎉 Bali Jazz\n📅 12 Okt\n📍 Denpasar\n\n🔗 Info: https://e.x/1\n\nvia Info Events Bali"
        );
    }
}

// Scroll classifier behaviour at the page level.

use infoevents_core::{
    classify, progress_percent, ScrollMetrics, SectionBounds, SECTION_LOOKAHEAD,
};
use proptest::prelude::*;

fn metrics(scroll_y: f64) -> ScrollMetrics {
    ScrollMetrics {
        scroll_y,
        viewport_height: 900.0,
        document_height: 5000.0,
        header_height: 72.0,
        secondary_nav_height: 0.0,
    }
}

fn sections() -> Vec<SectionBounds> {
    vec![
        SectionBounds::new("home", 0.0, 900.0),
        SectionBounds::new("events", 900.0, 1600.0),
        SectionBounds::new("about", 2500.0, 1200.0),
        SectionBounds::new("contact", 3700.0, 1300.0),
    ]
}

#[test]
fn top_of_page_is_idle() {
    let c = classify(&metrics(0.0), &sections(), SECTION_LOOKAHEAD);
    assert!(!c.is_header_scrolled);
    assert!(!c.is_back_to_top_visible);
    assert_eq!(c.progress_percent, 0.0);
    assert_eq!(c.active_section_id.as_deref(), Some("home"));
}

#[test]
fn deep_scroll_shows_back_to_top() {
    let c = classify(&metrics(1200.0), &sections(), SECTION_LOOKAHEAD);
    assert!(c.is_header_scrolled);
    assert!(c.is_back_to_top_visible);
    assert!(c.progress_percent > 0.0 && c.progress_percent < 100.0);
    assert_eq!(c.active_section_id.as_deref(), Some("events"));
}

#[test]
fn bottom_reaches_full_progress() {
    let c = classify(&metrics(4100.0), &sections(), SECTION_LOOKAHEAD);
    assert_eq!(c.progress_percent, 100.0);
    assert_eq!(c.active_section_id.as_deref(), Some("contact"));
}

#[test]
fn overlapping_sections_resolve_to_first() {
    let overlapping = vec![
        SectionBounds::new("first", 0.0, 2000.0),
        SectionBounds::new("second", 500.0, 2000.0),
    ];
    let c = classify(&metrics(800.0), &overlapping, SECTION_LOOKAHEAD);
    assert_eq!(c.active_section_id.as_deref(), Some("first"));
}

#[test]
fn gap_between_sections_has_no_active() {
    let gappy = vec![
        SectionBounds::new("a", 0.0, 100.0),
        SectionBounds::new("b", 3000.0, 100.0),
    ];
    let c = classify(&metrics(1000.0), &gappy, SECTION_LOOKAHEAD);
    assert_eq!(c.active_section_id, None);
}

proptest! {
    #[test]
    fn progress_always_in_bounds(
        y in -1000.0f64..20000.0,
        vh in 0.0f64..3000.0,
        dh in 0.0f64..20000.0,
    ) {
        let m = ScrollMetrics { scroll_y: y, viewport_height: vh, document_height: dh, ..Default::default() };
        let p = progress_percent(&m);
        prop_assert!((0.0..=100.0).contains(&p));
    }

    #[test]
    fn past_back_to_top_threshold_progress_is_open_interval(y in 500.5f64..4099.0) {
        let c = classify(&metrics(y), &sections(), SECTION_LOOKAHEAD);
        prop_assert!(c.is_back_to_top_visible);
        prop_assert!(c.progress_percent > 0.0 && c.progress_percent < 100.0);
    }
}

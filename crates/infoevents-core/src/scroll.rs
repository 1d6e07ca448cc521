//! Scroll classifier shared by the header, back-to-top control, progress bar,
//! nav-link highlighting and month-tab scroll-spy.

use crate::config::{
    BACK_TO_TOP_THRESHOLD, HEADER_SCROLLED_THRESHOLD, SCROLL_TARGET_MARGIN,
};

/// Page geometry sampled on one scroll tick. All values in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollMetrics {
    pub scroll_y: f64,
    pub viewport_height: f64,
    pub document_height: f64,
    pub header_height: f64,
    /// Height of a sticky bar under the header (the month tab strip), 0 if none.
    pub secondary_nav_height: f64,
}

/// A page section in document coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    pub fn new(id: impl Into<String>, top: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            top,
            height,
        }
    }

    /// Half-open `[top, top + height)` containment.
    #[inline]
    pub fn contains(&self, y: f64) -> bool {
        y >= self.top && y < self.top + self.height
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScrollClassification {
    pub scroll_y: f64,
    pub is_header_scrolled: bool,
    pub is_back_to_top_visible: bool,
    pub progress_percent: f64,
    pub active_section_id: Option<String>,
}

#[inline]
pub fn is_header_scrolled(scroll_y: f64) -> bool {
    scroll_y > HEADER_SCROLLED_THRESHOLD
}

#[inline]
pub fn is_back_to_top_visible(scroll_y: f64) -> bool {
    scroll_y > BACK_TO_TOP_THRESHOLD
}

/// Percentage of the scrollable range already scrolled, in `[0, 100]`.
/// A page that cannot scroll reports 0.
pub fn progress_percent(m: &ScrollMetrics) -> f64 {
    let scrollable = m.document_height - m.viewport_height;
    if scrollable <= 0.0 || !scrollable.is_finite() {
        return 0.0;
    }
    (m.scroll_y / scrollable * 100.0).clamp(0.0, 100.0)
}

/// Document-space line used to decide which section is "current".
#[inline]
pub fn probe_line(m: &ScrollMetrics, lookahead: f64) -> f64 {
    m.scroll_y + m.header_height + m.secondary_nav_height + lookahead
}

/// First section (document order) containing `probe`.
pub fn active_section(sections: &[SectionBounds], probe: f64) -> Option<&SectionBounds> {
    sections.iter().find(|s| s.contains(probe))
}

pub fn classify(
    m: &ScrollMetrics,
    sections: &[SectionBounds],
    lookahead: f64,
) -> ScrollClassification {
    let probe = probe_line(m, lookahead);
    ScrollClassification {
        scroll_y: m.scroll_y,
        is_header_scrolled: is_header_scrolled(m.scroll_y),
        is_back_to_top_visible: is_back_to_top_visible(m.scroll_y),
        progress_percent: progress_percent(m),
        active_section_id: active_section(sections, probe).map(|s| s.id.clone()),
    }
}

/// Page offset that puts a section's top just below the fixed bars.
///
/// `target_top` is the section's top in document coordinates.
pub fn scroll_target(target_top: f64, m: &ScrollMetrics) -> f64 {
    (target_top - m.header_height - m.secondary_nav_height - SCROLL_TARGET_MARGIN).max(0.0)
}

/// Resolve an in-page `href` ("#events") to its id. Returns `None` for the
/// bare "#" and for anything that is not a fragment link.
pub fn fragment_id(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SECTION_LOOKAHEAD;

    fn page(scroll_y: f64) -> ScrollMetrics {
        ScrollMetrics {
            scroll_y,
            viewport_height: 800.0,
            document_height: 4800.0,
            header_height: 80.0,
            secondary_nav_height: 0.0,
        }
    }

    #[test]
    fn thresholds_are_strict() {
        assert!(!is_header_scrolled(50.0));
        assert!(is_header_scrolled(50.5));
        assert!(!is_back_to_top_visible(500.0));
        assert!(is_back_to_top_visible(501.0));
    }

    #[test]
    fn progress_spans_scrollable_range() {
        assert_eq!(progress_percent(&page(0.0)), 0.0);
        assert_eq!(progress_percent(&page(2000.0)), 50.0);
        assert_eq!(progress_percent(&page(4000.0)), 100.0);
        assert_eq!(progress_percent(&page(9000.0)), 100.0);
    }

    #[test]
    fn short_page_reports_zero_progress() {
        let m = ScrollMetrics {
            document_height: 600.0,
            ..page(0.0)
        };
        assert_eq!(progress_percent(&m), 0.0);
    }

    #[test]
    fn probe_includes_bars_and_lookahead() {
        let m = ScrollMetrics {
            secondary_nav_height: 60.0,
            ..page(1000.0)
        };
        assert_eq!(probe_line(&m, SECTION_LOOKAHEAD), 1240.0);
    }

    #[test]
    fn section_end_is_exclusive() {
        let sections = vec![
            SectionBounds::new("a", 0.0, 500.0),
            SectionBounds::new("b", 500.0, 500.0),
        ];
        assert_eq!(active_section(&sections, 499.9).map(|s| s.id.as_str()), Some("a"));
        assert_eq!(active_section(&sections, 500.0).map(|s| s.id.as_str()), Some("b"));
        assert!(active_section(&sections, 1000.0).is_none());
    }

    #[test]
    fn scroll_target_never_negative() {
        assert_eq!(scroll_target(50.0, &page(0.0)), 0.0);
        let m = ScrollMetrics {
            secondary_nav_height: 60.0,
            ..page(0.0)
        };
        assert_eq!(scroll_target(1000.0, &m), 840.0);
    }

    #[test]
    fn fragment_id_rejects_bare_hash() {
        assert_eq!(fragment_id("#events"), Some("events"));
        assert_eq!(fragment_id("#"), None);
        assert_eq!(fragment_id("https://x.com/#a"), None);
    }
}

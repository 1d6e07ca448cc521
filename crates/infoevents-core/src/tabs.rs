//! Month tab strip: which tab is active and where the strip should scroll.
//!
//! Strip positions are horizontal offsets of the tab container only. Nothing
//! here ever produces a page scroll.

use crate::config::TAB_STRIP_STEP;
use crate::scroll::fragment_id;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StripDirection {
    Prev,
    Next,
}

impl StripDirection {
    /// Relative horizontal scroll applied by the prev/next controls.
    #[inline]
    pub fn delta(self) -> f64 {
        match self {
            StripDirection::Prev => -TAB_STRIP_STEP,
            StripDirection::Next => TAB_STRIP_STEP,
        }
    }
}

/// Horizontal offset that centers a tab inside the strip, clamped to the
/// strip's scrollable range.
pub fn centered_strip_offset(
    tab_left: f64,
    tab_width: f64,
    strip_width: f64,
    strip_scroll_width: f64,
) -> f64 {
    let max = (strip_scroll_width - strip_width).max(0.0);
    (tab_left - (strip_width - tab_width) / 2.0).clamp(0.0, max)
}

#[derive(Clone, Debug, Default)]
pub struct TabStrip {
    /// Section id each tab points at, in document order.
    targets: Vec<Option<String>>,
    active: Option<usize>,
}

impl TabStrip {
    /// Build from each tab's `href`; tabs without a fragment target never
    /// match a section.
    pub fn from_hrefs<I, S>(hrefs: I) -> Self
    where
        I: IntoIterator<Item = Option<S>>,
        S: AsRef<str>,
    {
        let targets = hrefs
            .into_iter()
            .map(|h| h.and_then(|h| fragment_id(h.as_ref()).map(str::to_string)))
            .collect();
        Self {
            targets,
            active: None,
        }
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    pub fn active(&self) -> Option<usize> {
        self.active
    }

    pub fn target(&self, index: usize) -> Option<&str> {
        self.targets.get(index).and_then(|t| t.as_deref())
    }

    /// Mark `index` as the only active tab (click path).
    pub fn activate(&mut self, index: usize) -> bool {
        if index >= self.targets.len() {
            return false;
        }
        self.active = Some(index);
        true
    }

    /// Scroll-spy path: activate the tab bound to `section_id`.
    ///
    /// Returns the new index only when the active tab actually changed, so
    /// callers re-center the strip once per change rather than every tick.
    pub fn sync_to_section(&mut self, section_id: &str) -> Option<usize> {
        let index = self
            .targets
            .iter()
            .position(|t| t.as_deref() == Some(section_id))?;
        if self.active == Some(index) {
            return None;
        }
        self.active = Some(index);
        Some(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strip() -> TabStrip {
        TabStrip::from_hrefs(vec![
            Some("#januari"),
            Some("#februari"),
            None,
            Some("#maret"),
        ])
    }

    #[test]
    fn prev_next_step_is_fixed() {
        assert_eq!(StripDirection::Prev.delta(), -200.0);
        assert_eq!(StripDirection::Next.delta(), 200.0);
    }

    #[test]
    fn centering_clamps_to_scroll_range() {
        assert_eq!(centered_strip_offset(500.0, 100.0, 300.0, 1200.0), 400.0);
        assert_eq!(centered_strip_offset(20.0, 100.0, 300.0, 1200.0), 0.0);
        assert_eq!(centered_strip_offset(1150.0, 50.0, 300.0, 1200.0), 900.0);
        assert_eq!(centered_strip_offset(100.0, 50.0, 300.0, 200.0), 0.0);
    }

    #[test]
    fn sync_reports_only_changes() {
        let mut s = strip();
        assert_eq!(s.sync_to_section("februari"), Some(1));
        assert_eq!(s.sync_to_section("februari"), None);
        assert_eq!(s.sync_to_section("maret"), Some(3));
        assert_eq!(s.sync_to_section("desember"), None);
        assert_eq!(s.active(), Some(3));
    }

    #[test]
    fn click_activation_is_exclusive() {
        let mut s = strip();
        assert!(s.activate(0));
        assert!(s.activate(2));
        assert_eq!(s.active(), Some(2));
        assert!(!s.activate(9));
        assert_eq!(s.active(), Some(2));
        assert_eq!(s.target(2), None);
        assert_eq!(s.target(0), Some("januari"));
    }
}

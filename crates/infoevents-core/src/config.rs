use std::time::Duration;

// Fixed tuning values shared by the web front-end.

// Scroll thresholds (px)
pub const HEADER_SCROLLED_THRESHOLD: f64 = 50.0;
pub const BACK_TO_TOP_THRESHOLD: f64 = 500.0;

// Lookahead added to the probe line when picking the active section (px)
pub const SECTION_LOOKAHEAD: f64 = 100.0;
// Gap left above a section when scrolling to it (px)
pub const SCROLL_TARGET_MARGIN: f64 = 20.0;

// Month tab strip step for the prev/next controls (px)
pub const TAB_STRIP_STEP: f64 = 200.0;

// Viewport width above which the drawer is never shown (px)
pub const DESKTOP_BREAKPOINT: f64 = 768.0;

pub const MESSAGE_MIN_CHARS: usize = 10;

pub const WHATSAPP_HOST: &str = "wa.me";
pub const WHATSAPP_NUMBER: &str = "628873434754";

/// Every fixed number the site script runs on.
///
/// Built once at startup from `Default` and handed to each component by
/// reference. `nav_transition` must equal the drawer's CSS transition.
#[derive(Clone, Debug)]
pub struct SiteConfig {
    pub whatsapp_number: String,
    pub desktop_breakpoint: f64,

    pub nav_transition: Duration,
    pub nav_link_close_delay: Duration,
    pub resize_debounce: Duration,

    pub progress_throttle: Duration,
    pub header_throttle: Duration,
    pub section_throttle: Duration,

    pub toast_duration: Duration,
    pub toast_exit: Duration,

    pub whatsapp_open_delay: Duration,
    pub newsletter_latency: Duration,

    pub counter_steps: u32,
    pub counter_tick: Duration,
    pub ripple_lifetime: Duration,

    pub preloader_delay: Duration,
    pub preloader_fade: Duration,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            whatsapp_number: WHATSAPP_NUMBER.to_string(),
            desktop_breakpoint: DESKTOP_BREAKPOINT,

            nav_transition: Duration::from_millis(300),
            nav_link_close_delay: Duration::from_millis(120),
            resize_debounce: Duration::from_millis(250),

            progress_throttle: Duration::from_millis(10),
            header_throttle: Duration::from_millis(50),
            section_throttle: Duration::from_millis(100),

            toast_duration: Duration::from_millis(5000),
            toast_exit: Duration::from_millis(300),

            whatsapp_open_delay: Duration::from_millis(1500),
            newsletter_latency: Duration::from_millis(1000),

            counter_steps: 50,
            counter_tick: Duration::from_millis(30),
            ripple_lifetime: Duration::from_millis(600),

            preloader_delay: Duration::from_millis(500),
            preloader_fade: Duration::from_millis(500),
        }
    }
}

impl SiteConfig {
    /// Replace the messaging number when the markup supplies a non-blank one.
    pub fn with_whatsapp_number(mut self, number: Option<&str>) -> Self {
        if let Some(n) = number.map(str::trim).filter(|n| !n.is_empty()) {
            self.whatsapp_number = n.to_string();
        }
        self
    }

    #[inline]
    pub fn is_desktop_width(&self, viewport_width: f64) -> bool {
        viewport_width > self.desktop_breakpoint
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_timings_match_site_css() {
        let c = SiteConfig::default();
        assert_eq!(c.nav_transition, Duration::from_millis(300));
        assert_eq!(c.toast_duration, Duration::from_secs(5));
        assert_eq!(c.toast_exit, Duration::from_millis(300));
        assert_eq!(c.whatsapp_open_delay, Duration::from_millis(1500));
        assert!(c.nav_link_close_delay < c.nav_transition);
    }

    #[test]
    fn whatsapp_override_ignores_blank_values() {
        let c = SiteConfig::default().with_whatsapp_number(Some("   "));
        assert_eq!(c.whatsapp_number, WHATSAPP_NUMBER);
        let c = SiteConfig::default().with_whatsapp_number(None);
        assert_eq!(c.whatsapp_number, WHATSAPP_NUMBER);
        let c = SiteConfig::default().with_whatsapp_number(Some(" 6281234 "));
        assert_eq!(c.whatsapp_number, "6281234");
    }

    #[test]
    fn breakpoint_is_exclusive() {
        let c = SiteConfig::default();
        assert!(!c.is_desktop_width(768.0));
        assert!(c.is_desktop_width(769.0));
    }
}

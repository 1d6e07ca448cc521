//! Open/close lifecycle of the mobile navigation drawer.
//!
//! The state only changes through [`NavigationState::open`],
//! [`NavigationState::close`] and [`NavigationState::toggle`]. Each accepted
//! transition leaves the machine animating until [`NavigationState::settle`]
//! is called, and every request made while animating is dropped.

/// Observable phase, derived from the two flags.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavPhase {
    Closed,
    Opening,
    Open,
    Closing,
}

/// Accepted transition; the caller mirrors it onto the page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavTransition {
    Opened,
    Closed,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavigationState {
    is_open: bool,
    is_animating: bool,
}

impl NavigationState {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    #[inline]
    pub fn is_animating(&self) -> bool {
        self.is_animating
    }

    pub fn phase(&self) -> NavPhase {
        match (self.is_open, self.is_animating) {
            (false, false) => NavPhase::Closed,
            (true, true) => NavPhase::Opening,
            (true, false) => NavPhase::Open,
            (false, true) => NavPhase::Closing,
        }
    }

    pub fn toggle(&mut self) -> Option<NavTransition> {
        if self.is_animating {
            log::debug!("[nav] toggle dropped while animating");
            return None;
        }
        if self.is_open {
            self.close()
        } else {
            self.open()
        }
    }

    pub fn open(&mut self) -> Option<NavTransition> {
        if self.is_open || self.is_animating {
            return None;
        }
        self.is_open = true;
        self.is_animating = true;
        Some(NavTransition::Opened)
    }

    pub fn close(&mut self) -> Option<NavTransition> {
        if !self.is_open || self.is_animating {
            return None;
        }
        self.is_open = false;
        self.is_animating = true;
        Some(NavTransition::Closed)
    }

    /// End the transition window. Returns false when nothing was animating.
    pub fn settle(&mut self) -> bool {
        std::mem::replace(&mut self.is_animating, false)
    }

    #[inline]
    pub fn aria_expanded(&self) -> &'static str {
        if self.is_open {
            "true"
        } else {
            "false"
        }
    }

    #[inline]
    pub fn aria_hidden(&self) -> &'static str {
        if self.is_open {
            "false"
        } else {
            "true"
        }
    }
}

/// Where focus should wrap to when Tab leaves the open drawer.
///
/// `current` is the index of the focused element among the drawer's
/// focusable elements. Returns `None` when the browser's default tab order
/// should apply.
pub fn focus_trap_target(current: Option<usize>, len: usize, shift: bool) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let last = len - 1;
    match (current, shift) {
        (Some(0), true) => Some(last),
        (Some(i), false) if i == last => Some(0),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_closed_and_idle() {
        let s = NavigationState::new();
        assert_eq!(s.phase(), NavPhase::Closed);
        assert_eq!(s.aria_expanded(), "false");
        assert_eq!(s.aria_hidden(), "true");
    }

    #[test]
    fn open_then_settle_then_close() {
        let mut s = NavigationState::new();
        assert_eq!(s.open(), Some(NavTransition::Opened));
        assert_eq!(s.phase(), NavPhase::Opening);
        assert!(s.settle());
        assert_eq!(s.phase(), NavPhase::Open);
        assert_eq!(s.close(), Some(NavTransition::Closed));
        assert_eq!(s.phase(), NavPhase::Closing);
        assert!(s.settle());
        assert!(!s.settle());
        assert_eq!(s.phase(), NavPhase::Closed);
    }

    #[test]
    fn requests_during_animation_are_dropped() {
        let mut s = NavigationState::new();
        s.open();
        assert_eq!(s.close(), None);
        assert_eq!(s.toggle(), None);
        assert!(s.is_open());
    }

    #[test]
    fn redundant_requests_are_noops() {
        let mut s = NavigationState::new();
        assert_eq!(s.close(), None);
        s.open();
        s.settle();
        assert_eq!(s.open(), None);
        assert!(!s.is_animating());
    }

    #[test]
    fn focus_wraps_at_both_ends() {
        assert_eq!(focus_trap_target(Some(0), 4, true), Some(3));
        assert_eq!(focus_trap_target(Some(3), 4, false), Some(0));
        assert_eq!(focus_trap_target(Some(1), 4, false), None);
        assert_eq!(focus_trap_target(Some(0), 4, false), None);
        assert_eq!(focus_trap_target(None, 4, true), None);
        assert_eq!(focus_trap_target(Some(0), 0, true), None);
    }
}

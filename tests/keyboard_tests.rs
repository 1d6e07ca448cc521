// Host-side tests for the page-wide key mapping.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod keys {
    include!("../src/events/keys.rs");
}

use keys::{classify_key, GlobalKey};

#[test]
fn escape_closes_regardless_of_shift() {
    assert_eq!(classify_key("Escape", false), Some(GlobalKey::Escape));
    assert_eq!(classify_key("Escape", true), Some(GlobalKey::Escape));
    // Legacy Edge/IE name
    assert_eq!(classify_key("Esc", false), Some(GlobalKey::Escape));
}

#[test]
fn tab_carries_shift_direction() {
    assert_eq!(classify_key("Tab", false), Some(GlobalKey::Tab { shift: false }));
    assert_eq!(classify_key("Tab", true), Some(GlobalKey::Tab { shift: true }));
}

#[test]
fn other_keys_are_ignored() {
    for key in ["Enter", " ", "a", "A", "ArrowDown", "Shift", "tab", "escape", ""] {
        assert_eq!(classify_key(key, false), None, "{key:?}");
        assert_eq!(classify_key(key, true), None, "{key:?}");
    }
}

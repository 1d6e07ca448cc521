// Page-wide key meanings. Free of `web_sys` so host tests can `include!` it.

/// What a key press on the page means, independent of any element.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GlobalKey {
    Escape,
    Tab { shift: bool },
}

#[inline]
pub fn classify_key(key: &str, shift: bool) -> Option<GlobalKey> {
    match key {
        "Escape" | "Esc" => Some(GlobalKey::Escape),
        "Tab" => Some(GlobalKey::Tab { shift }),
        _ => None,
    }
}

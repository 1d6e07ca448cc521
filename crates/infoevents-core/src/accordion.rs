//! Single-open FAQ accordion.

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Accordion {
    len: usize,
    open: Option<usize>,
}

impl Accordion {
    pub fn new(len: usize) -> Self {
        Self { len, open: None }
    }

    /// Start from the markup: `open` is the item shipped expanded, if any.
    /// Out-of-range indices are ignored.
    pub fn with_open(len: usize, open: Option<usize>) -> Self {
        Self {
            len,
            open: open.filter(|&i| i < len),
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn open_index(&self) -> Option<usize> {
        self.open
    }

    #[inline]
    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }

    /// Close everything, then open `index` unless it was the open one.
    /// Returns the item left open, if any.
    pub fn activate(&mut self, index: usize) -> Option<usize> {
        if index >= self.len {
            return self.open;
        }
        let was_open = self.is_open(index);
        self.open = None;
        if !was_open {
            self.open = Some(index);
        }
        self.open
    }
}

/// Keys that activate a question trigger besides a click.
#[inline]
pub fn is_activation_key(key: &str) -> bool {
    matches!(key, "Enter" | " ")
}

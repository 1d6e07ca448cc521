//! Toast notifications: kinds, records and the two-phase removal guard.

use instant::Instant;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ToastKind {
    Success,
    Error,
    Warning,
    Info,
}

impl ToastKind {
    pub fn icon(self) -> &'static str {
        match self {
            ToastKind::Success => "✅",
            ToastKind::Error => "❌",
            ToastKind::Warning => "⚠️",
            ToastKind::Info => "ℹ️",
        }
    }

    /// Modifier class next to `toast` on the element.
    pub fn class_name(self) -> &'static str {
        match self {
            ToastKind::Success => "success",
            ToastKind::Error => "error",
            ToastKind::Warning => "warning",
            ToastKind::Info => "info",
        }
    }
}

/// What a toast says, before it is placed on the page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub kind: ToastKind,
    pub title: String,
    pub message: String,
}

impl Notice {
    pub fn new(kind: ToastKind, title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn success(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ToastKind::Success, title, message)
    }

    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ToastKind::Error, title, message)
    }
}

#[derive(Clone, Debug)]
pub struct ToastRecord {
    pub id: u64,
    pub notice: Notice,
    pub created_at: Instant,
}

impl ToastRecord {
    pub fn new(id: u64, notice: Notice) -> Self {
        Self {
            id,
            notice,
            created_at: Instant::now(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastPhase {
    Visible,
    Hiding,
    Detached,
}

/// Removal runs in two phases (exit animation, then detach). Both the close
/// button and the auto-dismiss timer may ask for removal; only the first
/// request starts it and the element is detached exactly once.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ToastLifecycle {
    phase: ToastPhase,
}

impl Default for ToastLifecycle {
    fn default() -> Self {
        Self {
            phase: ToastPhase::Visible,
        }
    }
}

impl ToastLifecycle {
    pub fn phase(&self) -> ToastPhase {
        self.phase
    }

    /// Returns true when the caller should start the exit animation.
    pub fn begin_hide(&mut self) -> bool {
        if self.phase != ToastPhase::Visible {
            return false;
        }
        self.phase = ToastPhase::Hiding;
        true
    }

    /// Returns true when the caller should detach the element.
    pub fn detach(&mut self) -> bool {
        if self.phase == ToastPhase::Detached {
            return false;
        }
        self.phase = ToastPhase::Detached;
        true
    }
}

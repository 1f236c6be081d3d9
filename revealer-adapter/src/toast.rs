use alloc::string::String;
use alloc::vec::Vec;

use crate::form::sanitize;

/// Delay before the slide-in transition starts.
pub const TOAST_ENTER_DELAY_MS: u64 = 100;
/// Time from show to the start of the slide-out.
pub const TOAST_VISIBLE_MS: u64 = 3000;
/// Duration of the slide-out transition.
pub const TOAST_EXIT_MS: u64 = 300;
/// Off-screen slide distance.
pub const TOAST_SLIDE_PX: i32 = 400;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ToastKind {
    Success,
    Error,
}

/// A toast notification.
///
/// The message is sanitized at construction, so it is safe to insert into
/// rendered output as-is.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Toast {
    message: String,
    kind: ToastKind,
}

impl Toast {
    pub fn new(kind: ToastKind, message: &str) -> Self {
        Self {
            message: sanitize(message),
            kind,
        }
    }

    pub fn success(message: &str) -> Self {
        Self::new(ToastKind::Success, message)
    }

    pub fn error(message: &str) -> Self {
        Self::new(ToastKind::Error, message)
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn kind(&self) -> ToastKind {
        self.kind
    }
}

/// Lifecycle of a toast on screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ToastStage {
    /// Appended off-screen; the slide-in has not started yet.
    Entering,
    Visible,
    /// Sliding back out.
    Leaving,
    /// Safe to remove from the tree.
    Done,
}

/// A toast that was handed to the UI at a known instant.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShownToast {
    toast: Toast,
    shown_at_ms: u64,
}

impl ShownToast {
    pub fn new(toast: Toast, now_ms: u64) -> Self {
        Self {
            toast,
            shown_at_ms: now_ms,
        }
    }

    pub fn toast(&self) -> &Toast {
        &self.toast
    }

    pub fn stage(&self, now_ms: u64) -> ToastStage {
        let t = now_ms.saturating_sub(self.shown_at_ms);
        if t < TOAST_ENTER_DELAY_MS {
            ToastStage::Entering
        } else if t < TOAST_VISIBLE_MS {
            ToastStage::Visible
        } else if t < TOAST_VISIBLE_MS + TOAST_EXIT_MS {
            ToastStage::Leaving
        } else {
            ToastStage::Done
        }
    }

    /// Target x-translation for the UI's transition at `now_ms`: off-screen
    /// while entering or leaving, resting at `0` while visible.
    pub fn offset_px(&self, now_ms: u64) -> i32 {
        match self.stage(now_ms) {
            ToastStage::Visible => 0,
            ToastStage::Entering | ToastStage::Leaving | ToastStage::Done => TOAST_SLIDE_PX,
        }
    }

    pub fn is_done(&self, now_ms: u64) -> bool {
        self.stage(now_ms) == ToastStage::Done
    }
}

/// Active toasts, pruned once their exit transition completes.
#[derive(Clone, Debug, Default)]
pub struct ToastRack {
    shown: Vec<ShownToast>,
}

impl ToastRack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.shown.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shown.is_empty()
    }

    pub fn push(&mut self, toast: Toast, now_ms: u64) {
        self.shown.push(ShownToast::new(toast, now_ms));
    }

    /// Drops toasts whose lifecycle has finished. Idempotent.
    pub fn tick(&mut self, now_ms: u64) {
        self.shown.retain(|toast| !toast.is_done(now_ms));
    }

    pub fn iter(&self) -> core::slice::Iter<'_, ShownToast> {
        self.shown.iter()
    }
}

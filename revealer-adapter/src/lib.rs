//! Adapter utilities for the `revealer` crate.
//!
//! The `revealer` crate is UI-agnostic and focuses on the core state and
//! math behind scroll-reactive effects. This crate provides the small,
//! framework-neutral workflows a page layer builds on top of it:
//!
//! - A controller tying the engine to deferred reveals, toasts, and smooth
//!   keyboard section navigation
//! - Tween-based glide scrolling
//! - Contact-form validation with sanitized output (simulated submission)
//! - An explicit event-subscription registry for deterministic dispatch
//! - Menu/disclosure toggles and stat count-up animation
//!
//! This crate is intentionally framework-agnostic (no DOM/ratatui/egui
//! bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

mod controller;
mod defer;
mod events;
mod form;
mod key;
mod menu;
mod nav;
mod stats;
mod toast;
mod tween;


pub use controller::{PageController, SECTION_GLIDE_MS};
pub use defer::DeferredQueue;
pub use events::{EventKind, EventRegistry};
pub use form::{ContactForm, Field, FormError, SanitizedForm, sanitize};
pub use key::PageKey;
pub use menu::{Disclosure, MenuState};
pub use nav::{Key, NavCommand, nav_command};
pub use stats::{COUNT_UP_STEPS, CountUp};
pub use toast::{
    ShownToast, TOAST_ENTER_DELAY_MS, TOAST_EXIT_MS, TOAST_SLIDE_PX, TOAST_VISIBLE_MS, Toast,
    ToastKind, ToastRack, ToastStage,
};
pub use tween::{Easing, ScrollTween};

//! A headless scroll-reveal engine for scroll-reactive page effects.
//!
//! For adapter-level workflows (smooth scrolling, deferred reveals, form
//! validation, toasts), see the `revealer-adapter` crate.
//!
//! This crate focuses on the state and math behind scroll-driven UI behavior:
//! a drop-trailing throttle, strict-boundary visibility tests, one-shot
//! reveal tracking, and a dispatcher that turns each scroll tick into a fixed
//! sequence of visual effects (navbar swap, reveals, parallax, progress).
//!
//! It is UI-agnostic. A DOM/GUI layer is expected to provide:
//! - page metrics (scroll offset, viewport height, document height)
//! - element geometry (viewport-relative bounding boxes), queried per key
//! - a monotonic timestamp with each event
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod effects;
mod engine;
mod key;
mod options;
mod sections;
mod state;
mod throttle;
mod tracker;
mod types;
mod visibility;

#[cfg(test)]
mod tests;

pub use effects::{
    NAVBAR_SOLID_OFFSET, PARALLAX_BASE_SPEED, PARALLAX_SPEED_STEP, navbar_solid, parallax_speed,
    parallax_y, scroll_progress,
};
pub use engine::Revealer;
pub use options::{OnChangeCallback, RevealerOptions};
pub use sections::{current_section, nav_target};
pub use state::PageMetrics;
pub use throttle::Throttle;
pub use tracker::{Animatable, RevealTracker};
pub use types::{Effect, ElementId, ViewportBox};
pub use visibility::{is_past_threshold, is_visible};

#[doc(hidden)]
pub use key::ElementKey;

use alloc::sync::Arc;
use core::cell::Cell;

use crate::effects::{navbar_solid, parallax_y, scroll_progress};
use crate::key::ElementKey;
use crate::throttle::Throttle;
use crate::tracker::{Animatable, RevealTracker};
use crate::{Effect, ElementId, PageMetrics, RevealerOptions, ViewportBox};

/// The scroll-reactive dispatcher.
///
/// This type is intentionally UI-agnostic:
/// - It does not hold any UI objects; elements are identified by foreign keys.
/// - Your adapter drives it by passing page metrics, element geometry, and a
///   timestamp with each event.
/// - Visual changes are exposed as [`Effect`] values pushed through a
///   zero-allocation `emit` callback, in a fixed deterministic order.
///
/// One engine composes a drop-trailing [`Throttle`], a one-shot
/// [`RevealTracker`], and the continuous per-tick effects (navbar swap,
/// parallax, scroll progress). For page-level workflows (smooth scrolling,
/// deferred reveals, forms, toasts), see the `revealer-adapter` crate.
#[derive(Clone, Debug)]
pub struct Revealer<K = ElementId> {
    options: RevealerOptions<K>,
    throttle: Throttle,
    tracker: RevealTracker<K>,
    metrics: PageMetrics,

    notify_depth: Cell<usize>,
    notify_pending: Cell<bool>,
}

impl<K: ElementKey + Clone> Revealer<K> {
    pub fn new(options: RevealerOptions<K>) -> Self {
        rdebug!(
            throttle_ms = options.throttle_ms,
            enabled = options.enabled,
            parallax_count = options.parallax_count,
            "Revealer::new"
        );
        Self {
            throttle: Throttle::new(options.throttle_ms),
            tracker: RevealTracker::new(),
            metrics: PageMetrics::default(),
            options,
            notify_depth: Cell::new(0),
            notify_pending: Cell::new(false),
        }
    }

    pub fn options(&self) -> &RevealerOptions<K> {
        &self.options
    }

    pub fn set_options(&mut self, options: RevealerOptions<K>) {
        let was_enabled = self.options.enabled;
        let prev_throttle_ms = self.options.throttle_ms;
        self.options = options;

        if self.options.throttle_ms != prev_throttle_ms {
            self.throttle = Throttle::new(self.options.throttle_ms);
        }
        if was_enabled && !self.options.enabled {
            self.reset_transient();
        }
        self.notify();
    }

    /// Clones the current options, applies `f`, then delegates to
    /// `set_options`.
    pub fn update_options(&mut self, f: impl FnOnce(&mut RevealerOptions<K>)) {
        let mut next = self.options.clone();
        f(&mut next);
        self.set_options(next);
    }

    pub fn set_on_change(
        &mut self,
        on_change: Option<impl Fn(&Revealer<K>) + Send + Sync + 'static>,
    ) {
        self.options.on_change = on_change.map(|f| Arc::new(f) as _);
        self.notify();
    }

    pub fn enabled(&self) -> bool {
        self.options.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        if self.options.enabled == enabled {
            return;
        }
        self.options.enabled = enabled;
        if !enabled {
            self.reset_transient();
        }
        self.notify();
    }

    /// Drops transient per-session scroll state. Triggered flags survive:
    /// a reveal that has fired stays fired for the engine's lifetime.
    fn reset_transient(&mut self) {
        self.metrics = PageMetrics::default();
        self.throttle.reset();
    }

    fn notify_now(&self) {
        if let Some(cb) = &self.options.on_change {
            cb(self);
        }
    }

    fn notify(&self) {
        if self.notify_depth.get() > 0 {
            self.notify_pending.set(true);
            return;
        }
        self.notify_now();
    }

    /// Batches multiple updates into a single `on_change` notification.
    ///
    /// Recommended when applying several setters on one frame, since the
    /// callback may drive rendering.
    pub fn batch_update(&mut self, f: impl FnOnce(&mut Self)) {
        let depth = self.notify_depth.get();
        self.notify_depth.set(depth.saturating_add(1));

        f(self);

        let depth = self.notify_depth.get();
        debug_assert!(depth > 0, "notify_depth underflow");
        let next = depth.saturating_sub(1);
        self.notify_depth.set(next);

        if next == 0 && self.notify_pending.replace(false) {
            self.notify_now();
        }
    }

    /// The most recently applied page metrics.
    pub fn metrics(&self) -> PageMetrics {
        self.metrics
    }

    pub fn set_metrics(&mut self, metrics: PageMetrics) {
        if self.metrics == metrics {
            return;
        }
        self.metrics = metrics;
        self.notify();
    }

    /// Registers an animatable element. Registration happens once at page
    /// initialization; re-registering a key is ignored.
    pub fn register(&mut self, entry: Animatable<K>) -> bool {
        let added = self.tracker.register(entry);
        if added {
            self.notify();
        }
        added
    }

    pub fn register_all(&mut self, entries: impl IntoIterator<Item = Animatable<K>>) {
        self.batch_update(|v| {
            for entry in entries {
                v.register(entry);
            }
        });
    }

    pub fn tracker(&self) -> &RevealTracker<K> {
        &self.tracker
    }

    pub fn is_triggered(&self, key: &K) -> bool {
        self.tracker.is_triggered(key)
    }

    pub fn in_cooldown(&self, now_ms: u64) -> bool {
        self.throttle.in_cooldown(now_ms)
    }

    /// Clears an expired throttle cooldown. Idempotent; call it from your
    /// frame timer so a cooldown does not linger past its deadline between
    /// scroll events.
    pub fn tick(&mut self, now_ms: u64) {
        self.throttle.tick(now_ms);
    }

    /// Applies a scroll event.
    ///
    /// The metrics snapshot is stored unconditionally so the next dispatched
    /// tick always sees fresh geometry, but the dispatch itself is throttled:
    /// within the cooldown window the call is dropped (drop-trailing, no
    /// queueing) and this returns `false`.
    ///
    /// When the gate opens, the sub-effects run in a fixed deterministic
    /// order (navbar swap, one-shot reveals over the full registered set,
    /// parallax offsets, scroll progress), each pushed through `emit`.
    /// `geometry` is queried once per untriggered element with the element's
    /// key; returning `None` (element gone) leaves that entry armed.
    pub fn on_scroll(
        &mut self,
        metrics: PageMetrics,
        now_ms: u64,
        mut geometry: impl FnMut(&K) -> Option<ViewportBox>,
        mut emit: impl FnMut(Effect<K>),
    ) -> bool {
        if !self.options.enabled {
            return false;
        }
        let mut ran = false;
        self.batch_update(|v| {
            v.set_metrics(metrics);
            if !v.throttle.try_acquire(now_ms) {
                rtrace!(now_ms, "scroll tick dropped (cooldown)");
                return;
            }
            v.dispatch(&mut geometry, &mut emit);
            v.notify();
            ran = true;
        });
        ran
    }

    /// Push-based trigger path for intersection-style notifications.
    ///
    /// Enter notifications fire the element's one-shot reveal without a
    /// geometry poll and without throttling; exits, repeats, and unknown
    /// keys are no-ops. Returns whether a reveal fired.
    pub fn on_intersection(
        &mut self,
        key: &K,
        is_intersecting: bool,
        emit: impl FnOnce(Effect<K>),
    ) -> bool {
        if !self.options.enabled {
            return false;
        }
        if !self.tracker.notify_intersection(key, is_intersecting) {
            return false;
        }
        let delay_ms = self
            .tracker
            .get(key)
            .map_or(0, Animatable::apply_delay_ms);
        emit(Effect::Reveal {
            key: key.clone(),
            delay_ms,
        });
        self.notify();
        true
    }

    fn dispatch(
        &mut self,
        geometry: &mut impl FnMut(&K) -> Option<ViewportBox>,
        emit: &mut impl FnMut(Effect<K>),
    ) {
        let metrics = self.metrics;
        rtrace!(
            scroll_offset = metrics.scroll_offset,
            viewport_height = metrics.viewport_height,
            "dispatch"
        );

        emit(Effect::NavbarSolid(navbar_solid(
            metrics.scroll_offset,
            self.options.navbar_offset,
        )));

        self.tracker
            .maybe_trigger_all(metrics.viewport_height, geometry, |entry| {
                emit(Effect::Reveal {
                    key: entry.key().clone(),
                    delay_ms: entry.apply_delay_ms(),
                });
            });

        for index in 0..self.options.parallax_count {
            emit(Effect::Parallax {
                index,
                y_px: parallax_y(metrics.scroll_offset, index),
            });
        }

        emit(Effect::Progress {
            percent: scroll_progress(metrics),
        });
    }
}

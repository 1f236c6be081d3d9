use crate::*;

use alloc::sync::Arc;
use alloc::vec::Vec;
use core::sync::atomic::{AtomicUsize, Ordering};

#[derive(Clone, Copy, Debug)]
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_u64(&mut self) -> u64 {
        // Deterministic, dependency-free PRNG for tests.
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0
    }

    fn gen_range_i64(&mut self, start: i64, end_exclusive: i64) -> i64 {
        debug_assert!(start < end_exclusive);
        let span = (end_exclusive - start) as u64;
        start + (self.next_u64() % span) as i64
    }
}

fn assert_close(a: f64, b: f64) {
    assert!((a - b).abs() < 1e-9, "{a} !~ {b}");
}

// --- visibility -----------------------------------------------------------

#[test]
fn visibility_examples() {
    // Entirely below the viewport.
    assert!(!is_visible(ViewportBox::new(500, 600), 400, 0));
    // Inside the viewport.
    assert!(is_visible(ViewportBox::new(100, 200), 400, 0));
    // Top edge exactly on the lower boundary: strict `<`, not visible.
    assert!(!is_visible(ViewportBox::new(400, 500), 400, 0));
    // Bottom edge exactly at the top boundary: strict `>`, not visible.
    assert!(!is_visible(ViewportBox::new(-100, 0), 400, 0));
    // Scrolled partly past the fold.
    assert!(is_visible(ViewportBox::new(-100, 1), 400, 0));
}

#[test]
fn visibility_lower_margin_shrinks_the_band() {
    let bbox = ViewportBox::new(360, 420);
    assert!(is_visible(bbox, 400, 0));
    assert!(!is_visible(bbox, 400, 40));
    // Margin boundary is strict too.
    assert!(!is_visible(ViewportBox::new(350, 420), 400, 50));
    assert!(is_visible(ViewportBox::new(349, 420), 400, 50));
}

#[test]
fn threshold_fraction_eligibility() {
    // 0.8 of a 1000px viewport: eligible strictly below 800.
    assert!(is_past_threshold(ViewportBox::new(799, 900), 1000, 0.8));
    assert!(!is_past_threshold(ViewportBox::new(800, 900), 1000, 0.8));
    // Already above the viewport still counts while the bottom is on screen.
    assert!(is_past_threshold(ViewportBox::new(-300, 10), 1000, 0.8));
    assert!(!is_past_threshold(ViewportBox::new(-300, 0), 1000, 0.8));
}

#[test]
fn threshold_one_matches_plain_visibility() {
    let mut rng = Lcg::new(7);
    for _ in 0..1000 {
        let top = rng.gen_range_i64(-2000, 2000);
        let bbox = ViewportBox::new(top, top + rng.gen_range_i64(0, 800));
        for vh in [0u32, 1, 399, 400, 1000] {
            assert_eq!(
                is_past_threshold(bbox, vh, 1.0),
                is_visible(bbox, vh, 0),
                "bbox={bbox:?} vh={vh}"
            );
        }
    }
}

// --- throttle -------------------------------------------------------------

#[test]
fn throttle_collapses_a_synchronous_burst() {
    let mut gate = Throttle::new(16);
    let mut runs = 0u32;
    for _ in 0..1000 {
        let _ = gate.run(0, || runs += 1);
    }
    assert_eq!(runs, 1);
}

#[test]
fn throttle_reopens_after_the_limit() {
    let mut gate = Throttle::new(16);
    let mut runs = 0u32;
    assert!(gate.run(0, || runs += 1).is_some());
    assert!(gate.run(10, || runs += 1).is_none()); // dropped, not queued
    assert!(gate.run(20, || runs += 1).is_some());
    assert_eq!(runs, 2);
}

#[test]
fn throttle_boundary_is_inclusive_at_the_deadline() {
    let mut gate = Throttle::new(16);
    assert!(gate.try_acquire(0));
    assert!(!gate.try_acquire(15));
    assert!(gate.try_acquire(16));
}

#[test]
fn throttle_tick_clearing_is_idempotent() {
    let mut gate = Throttle::new(16);
    assert!(gate.try_acquire(0));
    assert!(gate.in_cooldown(5));
    gate.tick(5);
    assert!(gate.in_cooldown(5));
    gate.tick(16);
    gate.tick(16);
    gate.tick(17);
    assert!(!gate.in_cooldown(16));
    assert!(gate.try_acquire(16));
}

#[test]
fn throttle_survives_a_panicking_body() {
    let gate = std::sync::Mutex::new(Throttle::new(16));
    let result = std::panic::catch_unwind(|| {
        let _ = gate.lock().unwrap().run(0, || panic!("handler failed"));
    });
    assert!(result.is_err());
    // The cooldown deadline was recorded before the body ran, so the gate
    // still clears on schedule.
    let mut gate = gate.into_inner().unwrap_or_else(|e| e.into_inner());
    assert!(gate.in_cooldown(10));
    assert!(gate.try_acquire(16));
}

// --- one-shot tracker -----------------------------------------------------

#[test]
fn tracker_stays_armed_while_not_visible() {
    let mut tracker = RevealTracker::new();
    tracker.register(Animatable::new(1u64));

    let below_fold = ViewportBox::new(900, 1000);
    for _ in 0..5 {
        assert!(!tracker.maybe_trigger(&1, 400, |_| Some(below_fold)));
    }
    assert!(!tracker.is_triggered(&1));
}

#[test]
fn tracker_fires_once_then_goes_quiet() {
    let mut tracker = RevealTracker::new();
    tracker.register(Animatable::new(1u64));

    let visible = ViewportBox::new(100, 200);
    assert!(tracker.maybe_trigger(&1, 400, |_| Some(visible)));
    assert!(tracker.is_triggered(&1));

    // Still visible on every later tick; the transition never re-fires, and
    // the geometry is not even consulted.
    for _ in 0..10 {
        assert!(!tracker.maybe_trigger(&1, 400, |_| -> Option<ViewportBox> {
            panic!("geometry queried for a triggered entry")
        }));
    }
}

#[test]
fn tracker_missing_geometry_degrades_to_noop() {
    let mut tracker = RevealTracker::new();
    tracker.register(Animatable::new(1u64));

    assert!(!tracker.maybe_trigger(&1, 400, |_| None));
    assert!(!tracker.is_triggered(&1));
    // The entry is still armed once the element reappears.
    assert!(tracker.maybe_trigger(&1, 400, |_| Some(ViewportBox::new(0, 50))));
}

#[test]
fn tracker_unknown_key_is_noop() {
    let mut tracker = RevealTracker::<u64>::new();
    assert!(!tracker.maybe_trigger(&42, 400, |_| Some(ViewportBox::new(0, 50))));
    assert!(!tracker.notify_intersection(&42, true));
}

#[test]
fn tracker_duplicate_registration_is_ignored() {
    let mut tracker = RevealTracker::new();
    assert!(tracker.register(Animatable::new(1u64).with_apply_delay_ms(200)));
    assert!(!tracker.register(Animatable::new(1u64)));
    assert_eq!(tracker.len(), 1);
    assert_eq!(tracker.get(&1).unwrap().apply_delay_ms(), 200);
}

#[test]
fn tracker_intersection_enter_fires_once() {
    let mut tracker = RevealTracker::new();
    tracker.register(Animatable::new(7u64));

    assert!(!tracker.notify_intersection(&7, false)); // exit first: no-op
    assert!(tracker.notify_intersection(&7, true));
    assert!(!tracker.notify_intersection(&7, true)); // repeat enter
    assert!(!tracker.notify_intersection(&7, false));
    assert!(tracker.is_triggered(&7));
}

#[test]
fn tracker_trigger_all_respects_per_entry_thresholds() {
    let mut tracker = RevealTracker::new();
    tracker.register(Animatable::new(1u64).with_threshold_fraction(0.8));
    tracker.register(Animatable::new(2u64)); // plain visibility
    tracker.register(Animatable::new(3u64).with_apply_delay_ms(200));

    // Viewport 1000: key 1 needs top < 800, keys 2/3 need top < 1000.
    let tops = [850i64, 850, 1200];
    let mut fired = Vec::new();
    tracker.maybe_trigger_all(
        1000,
        |k| {
            let top = tops[(*k - 1) as usize];
            Some(ViewportBox::new(top, top + 100))
        },
        |entry| fired.push(*entry.key()),
    );
    assert_eq!(fired, [2]);

    // Scroll everything 400px further up the page.
    let mut fired = Vec::new();
    tracker.maybe_trigger_all(
        1000,
        |k| {
            let top = tops[(*k - 1) as usize] - 400;
            Some(ViewportBox::new(top, top + 100))
        },
        |entry| fired.push((*entry.key(), entry.apply_delay_ms())),
    );
    assert_eq!(fired, [(1, 0), (3, 200)]);
}

// --- continuous effects ---------------------------------------------------

#[test]
fn navbar_swap_threshold_is_strict() {
    assert!(!navbar_solid(0, NAVBAR_SOLID_OFFSET));
    assert!(!navbar_solid(100, NAVBAR_SOLID_OFFSET));
    assert!(navbar_solid(101, NAVBAR_SOLID_OFFSET));
}

#[test]
fn parallax_speeds_increase_with_index() {
    for index in 0..10 {
        assert!(parallax_speed(index + 1) > parallax_speed(index));
    }
    assert_close(parallax_y(100, 0), -50.0);
    assert_close(parallax_y(100, 3), -80.0);
    assert_close(parallax_y(0, 5), 0.0);
}

#[test]
fn scroll_progress_examples() {
    let m = |offset| PageMetrics::new(offset, 1000, 2000);
    assert_eq!(scroll_progress(m(0)), 0.0);
    assert_eq!(scroll_progress(m(500)), 50.0);
    assert_eq!(scroll_progress(m(1000)), 100.0);
    // Overscroll clamps instead of overshooting.
    assert_eq!(scroll_progress(m(1500)), 100.0);
}

#[test]
fn scroll_progress_degenerate_document_reports_zero() {
    assert_eq!(scroll_progress(PageMetrics::new(0, 1000, 1000)), 0.0);
    assert_eq!(scroll_progress(PageMetrics::new(50, 1000, 800)), 0.0);
}

// --- page metrics ---------------------------------------------------------

#[test]
fn metrics_map_document_spans_to_viewport_boxes() {
    let m = PageMetrics::new(300, 1000, 5000);
    assert_eq!(m.viewport_box(300, 100), ViewportBox::new(0, 100));
    assert_eq!(m.viewport_box(0, 100), ViewportBox::new(-300, -200));
    assert_eq!(m.max_scroll_offset(), 4000);
    assert_eq!(PageMetrics::new(0, 1000, 500).max_scroll_offset(), 0);
}

// --- sections -------------------------------------------------------------

#[test]
fn current_section_is_first_in_upper_half() {
    // Viewport 1000: the band is [0, 500], inclusive.
    assert_eq!(current_section([-500i64, 100, 900], 1000), Some(1));
    assert_eq!(current_section([0i64, 600], 1000), Some(0));
    assert_eq!(current_section([500i64], 1000), Some(0));
    assert_eq!(current_section([501i64], 1000), None);
    assert_eq!(current_section([-1i64, 600], 1000), None);
    assert_eq!(current_section(core::iter::empty::<i64>(), 1000), None);
}

#[test]
fn nav_target_stops_at_the_ends() {
    assert_eq!(nav_target(1, 1, 3), Some(2));
    assert_eq!(nav_target(1, -1, 3), Some(0));
    assert_eq!(nav_target(2, 1, 3), None);
    assert_eq!(nav_target(0, -1, 3), None);
}

// --- engine ---------------------------------------------------------------

fn page_geometry(tops: &[i64]) -> impl FnMut(&u64) -> Option<ViewportBox> + '_ {
    |key| {
        let top = *tops.get(*key as usize)?;
        Some(ViewportBox::new(top, top + 100))
    }
}

#[test]
fn engine_dispatches_sub_effects_in_fixed_order() {
    let mut engine = Revealer::new(RevealerOptions::new().with_parallax_count(2));
    engine.register(Animatable::new(0u64));
    engine.register(Animatable::new(1u64).with_apply_delay_ms(200));

    let tops = [100i64, 2000];
    let mut effects = Vec::new();
    let ran = engine.on_scroll(
        PageMetrics::new(200, 1000, 4000),
        0,
        page_geometry(&tops),
        |e| effects.push(e),
    );
    assert!(ran);

    assert_eq!(effects.len(), 5);
    assert_eq!(effects[0], Effect::NavbarSolid(true));
    assert_eq!(
        effects[1],
        Effect::Reveal {
            key: 0,
            delay_ms: 0
        }
    );
    let Effect::Parallax { index: 0, y_px } = &effects[2] else {
        panic!("expected parallax 0, got {:?}", effects[2]);
    };
    assert_close(*y_px, -100.0);
    let Effect::Parallax { index: 1, y_px } = &effects[3] else {
        panic!("expected parallax 1, got {:?}", effects[3]);
    };
    assert_close(*y_px, -120.0);
    let Effect::Progress { percent } = &effects[4] else {
        panic!("expected progress, got {:?}", effects[4]);
    };
    assert!((percent - 200.0 / 3000.0 * 100.0).abs() < 1e-4);
}

#[test]
fn engine_drops_ticks_inside_the_cooldown_window() {
    let mut engine = Revealer::<u64>::new(RevealerOptions::new());

    let mut effects = Vec::new();
    assert!(engine.on_scroll(PageMetrics::new(0, 1000, 2000), 0, |_| None, |e| {
        effects.push(e)
    }));
    let first_tick = effects.len();

    // Within the 16ms window: dropped, but the metrics still land.
    let later = PageMetrics::new(500, 1000, 2000);
    assert!(!engine.on_scroll(later, 10, |_| None, |e| effects.push(e)));
    assert_eq!(effects.len(), first_tick);
    assert_eq!(engine.metrics(), later);

    // Past the window the gate reopens.
    assert!(engine.on_scroll(later, 20, |_| None, |e| effects.push(e)));
}

#[test]
fn engine_reveals_fire_at_most_once_across_ticks() {
    let mut engine = Revealer::new(RevealerOptions::new());
    engine.register(Animatable::new(0u64));

    let tops = [100i64];
    let mut reveals = 0usize;
    // The element stays visible for the whole scroll; every tick re-reports
    // "visible" but only the first transition fires.
    for tick in 0..50u64 {
        engine.on_scroll(
            PageMetrics::new(tick * 10, 1000, 4000),
            tick * 20,
            page_geometry(&tops),
            |e| {
                if matches!(e, Effect::Reveal { .. }) {
                    reveals += 1;
                }
            },
        );
    }
    assert_eq!(reveals, 1);
}

#[test]
fn engine_disabled_is_a_noop() {
    let mut engine = Revealer::new(RevealerOptions::new().with_enabled(false));
    engine.register(Animatable::new(0u64));

    let mut effects: Vec<Effect<u64>> = Vec::new();
    assert!(!engine.on_scroll(
        PageMetrics::new(0, 1000, 2000),
        0,
        |_| Some(ViewportBox::new(0, 100)),
        |e| effects.push(e),
    ));
    assert!(!engine.on_intersection(&0, true, |e| effects.push(e)));
    assert!(effects.is_empty());
    assert!(!engine.is_triggered(&0));
}

#[test]
fn engine_intersection_path_is_unthrottled() {
    let mut engine = Revealer::new(RevealerOptions::new());
    engine.register(Animatable::new(0u64).with_apply_delay_ms(200));
    engine.register(Animatable::new(1u64));

    // Exhaust the throttle with a scroll tick first.
    engine.on_scroll(PageMetrics::new(0, 1000, 2000), 0, |_| None, |_| {});

    let mut effects = Vec::new();
    assert!(engine.on_intersection(&0, true, |e| effects.push(e)));
    assert!(engine.on_intersection(&1, true, |e| effects.push(e)));
    assert!(!engine.on_intersection(&0, true, |e| effects.push(e)));
    assert_eq!(
        effects,
        [
            Effect::Reveal {
                key: 0,
                delay_ms: 200
            },
            Effect::Reveal {
                key: 1,
                delay_ms: 0
            },
        ]
    );
}

#[test]
fn engine_on_change_fires_once_per_scroll_event() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let mut engine = Revealer::<u64>::new(
        RevealerOptions::new().with_on_change(Some(move |_: &Revealer<u64>| {
            counter.fetch_add(1, Ordering::SeqCst);
        })),
    );

    engine.on_scroll(PageMetrics::new(0, 1000, 2000), 0, |_| None, |_| {});
    assert_eq!(calls.load(Ordering::SeqCst), 1);

    // A dropped tick with fresh metrics still notifies (state changed), but
    // only once.
    engine.on_scroll(PageMetrics::new(5, 1000, 2000), 5, |_| None, |_| {});
    assert_eq!(calls.load(Ordering::SeqCst), 2);

    // A dropped tick with identical metrics changes nothing.
    engine.on_scroll(PageMetrics::new(5, 1000, 2000), 6, |_| None, |_| {});
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[test]
fn engine_set_enabled_keeps_triggered_flags() {
    let mut engine = Revealer::new(RevealerOptions::new());
    engine.register(Animatable::new(0u64));
    engine.on_intersection(&0, true, |_| {});
    assert!(engine.is_triggered(&0));

    engine.set_enabled(false);
    assert_eq!(engine.metrics(), PageMetrics::default());
    engine.set_enabled(true);

    // Reveals are once per session; re-enabling does not re-arm.
    assert!(engine.is_triggered(&0));
    assert!(!engine.on_intersection(&0, true, |_| {}));
}

#[test]
fn engine_batch_update_coalesces_notifications() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let mut engine = Revealer::<u64>::new(
        RevealerOptions::new().with_on_change(Some(move |_: &Revealer<u64>| {
            counter.fetch_add(1, Ordering::SeqCst);
        })),
    );

    engine.batch_update(|v| {
        v.set_metrics(PageMetrics::new(1, 1000, 2000));
        v.set_metrics(PageMetrics::new(2, 1000, 2000));
        v.register(Animatable::new(0u64));
    });
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

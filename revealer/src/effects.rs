use crate::PageMetrics;

/// Scroll offset past which the navbar swaps to its solid background.
pub const NAVBAR_SOLID_OFFSET: u64 = 100;

/// Parallax speed of the first card.
pub const PARALLAX_BASE_SPEED: f64 = 0.5;

/// Per-index parallax speed increment. Later cards move faster; the
/// monotonically increasing speeds are the depth layering, not an accident.
pub const PARALLAX_SPEED_STEP: f64 = 0.1;

/// Binary navbar background state: solid once scrolled past `threshold`.
///
/// No hysteresis band; the swap point is identical in both directions.
pub fn navbar_solid(scroll_offset: u64, threshold: u64) -> bool {
    scroll_offset > threshold
}

pub fn parallax_speed(index: usize) -> f64 {
    PARALLAX_BASE_SPEED + index as f64 * PARALLAX_SPEED_STEP
}

/// Parallax translation for the card at `index`: `-(scroll_offset * speed)`.
pub fn parallax_y(scroll_offset: u64, index: usize) -> f64 {
    -(scroll_offset as f64 * parallax_speed(index))
}

/// Scroll-progress-bar width in percent, clamped to `0.0..=100.0`.
///
/// A document no taller than the viewport has no scrollable range and
/// reports `0.0`. Overscroll (offset past the maximum) clamps to `100.0`
/// rather than overshooting.
pub fn scroll_progress(metrics: PageMetrics) -> f32 {
    let track = metrics
        .document_height
        .saturating_sub(metrics.viewport_height as u64);
    if track == 0 {
        return 0.0;
    }
    let percent = metrics.scroll_offset as f64 / track as f64 * 100.0;
    percent.clamp(0.0, 100.0) as f32
}

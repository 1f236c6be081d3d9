use crate::ViewportBox;

/// Returns whether an element is visible enough to animate.
///
/// An element counts as visible when its top edge is above the viewport's
/// lower boundary (minus `lower_margin`) and its bottom edge is below the
/// viewport's top. Both comparisons are strict: a box whose top sits exactly
/// on the boundary (`top == viewport_height - lower_margin`) is not visible,
/// and neither is one whose bottom sits exactly at `0`. Strictness keeps
/// reveals from firing at exact pixel boundaries where a transition has not
/// actually crossed yet.
///
/// This is a pure function of the current geometry; re-evaluate it every tick
/// since scrolling moves the box.
pub fn is_visible(bbox: ViewportBox, viewport_height: u32, lower_margin: u32) -> bool {
    let limit = viewport_height as i64 - lower_margin as i64;
    bbox.top < limit && bbox.bottom > 0
}

/// Threshold-fraction variant of [`is_visible`].
///
/// The element becomes eligible once its top edge crosses
/// `viewport_height * threshold_fraction`: `0.8` reveals a section when it
/// reaches the lower fifth of the viewport, `1.0` matches plain visibility.
pub fn is_past_threshold(
    bbox: ViewportBox,
    viewport_height: u32,
    threshold_fraction: f32,
) -> bool {
    let limit = (viewport_height as f64 * threshold_fraction as f64) as i64;
    bbox.top < limit && bbox.bottom > 0
}

/// Finds the section the viewer is currently "in".
///
/// `tops` are viewport-relative top edges, in document order. The current
/// section is the first whose top sits within the upper half of the viewport
/// (inclusive on both ends). Between sections, when every top is negative or
/// far below, there is no current section and navigation does nothing.
pub fn current_section(
    tops: impl IntoIterator<Item = i64>,
    viewport_height: u32,
) -> Option<usize> {
    let half = viewport_height as i64 / 2;
    tops.into_iter()
        .position(|top| top >= 0 && top <= half)
}

/// Steps from `current` by `direction` (`+1` next, `-1` previous).
///
/// Returns `None` past either end of the section list.
pub fn nav_target(current: usize, direction: i32, count: usize) -> Option<usize> {
    let target = current as i64 + direction as i64;
    (0..count as i64)
        .contains(&target)
        .then_some(target as usize)
}

use super::constants::NAV_SCROLL_THRESHOLD;

/// Percentage of the scrollable document already passed, clamped to [0, 100].
/// A document that fits in the viewport reports 0.
#[inline]
pub fn scroll_progress(scroll_y: f64, scroll_height: f64, viewport_height: f64) -> f64 {
    let total = scroll_height - viewport_height;
    if !(total > 0.0) || !scroll_y.is_finite() {
        return 0.0;
    }
    (scroll_y / total * 100.0).clamp(0.0, 100.0)
}

#[inline]
pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > NAV_SCROLL_THRESHOLD
}

//! Locating the display that holds a window.
//!
//! Used once per session to preselect the display the user is currently
//! working on.

use super::display::Display;
use super::geometry::Rect;

/// Returns the index of the display that contains a window.
///
/// A display matches when the window's top-left corner lies inside the
/// display bounds (edges included), or when the top-left corner lies above or
/// to the left of the display and the bottom-right corner lies inside it.
///
/// Every display is checked and a later match overwrites an earlier one, so
/// when several displays match the last one in provider order wins. Returns
/// `0` when `displays` is empty or nothing matches.
#[must_use]
pub fn locate(displays: &[Display], window: &Rect) -> usize {
    let top_left = window.top_left();
    let bottom_right = window.bottom_right();

    // Last match wins, even over a better fit earlier in the list.
    let mut index = 0;
    for (i, display) in displays.iter().enumerate() {
        let bounds = &display.bounds;

        let starts_inside = bounds.contains(top_left);
        let starts_before = top_left.top < bounds.top || top_left.left < bounds.left;

        if starts_inside || (starts_before && bounds.contains(bottom_right)) {
            index = i;
        }
    }

    index
}

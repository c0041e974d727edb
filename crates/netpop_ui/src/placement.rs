//! Popup placement and clamping.
//!
//! The popup sits above its anchor, horizontally starting at the anchor's x.
//! When that box would leave the container (minus padding) it is pushed back
//! inside:
//!
//! ```text
//!   ┌──────────────── container ────────────────┐
//!   │ padding                                   │
//!   │   ┌───────┐                               │
//!   │   │ popup │ top = anchor.y - height       │
//!   │   └───────┘                               │
//!   │   * anchor                                │
//!   └───────────────────────────────────────────┘
//! ```
//!
//! Vertically the popup is pinned, never flipped below the anchor: a bottom
//! overflow pulls it up, and a popup taller than the container sticks to the
//! top padding. Horizontally, overflow is judged on half the popup's width
//! around `left`; both checks run independently, and the left check wins
//! when both fire.

use crate::direction::Direction;
use crate::layout::{Point, Rect, Size};

/// The result of placing a popup inside its container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Placement {
    /// Left offset of the popup, in container pixels.
    pub left: i32,
    /// Top offset of the popup, in container pixels.
    pub top: i32,
    /// The popup overflowed the bottom edge and was pulled up.
    pub clamped_bottom: bool,
    /// The popup did not fit above the top padding and was pinned to it.
    pub pinned_top: bool,
    /// The popup overflowed the right edge and was pulled left.
    pub clamped_right: bool,
    /// The popup overflowed the left edge and was pinned to the padding.
    pub clamped_left: bool,
}

impl Placement {
    /// Returns true if either horizontal clamp fired.
    #[inline]
    #[must_use]
    pub const fn horizontally_clamped(&self) -> bool {
        self.clamped_right || self.clamped_left
    }

    /// Returns true if either vertical clamp fired.
    #[inline]
    #[must_use]
    pub const fn vertically_clamped(&self) -> bool {
        self.clamped_bottom || self.pinned_top
    }

    /// Returns the popup box for a popup of the given size.
    #[must_use]
    pub const fn rect(&self, size: Size) -> Rect {
        Rect::from_pos_size(Point::new(self.left, self.top), size)
    }

    /// Decides which direction hint must be written after this placement.
    ///
    /// Returns `None` when the current hint stays as it is: an explicit
    /// `left`/`right` survives an unclamped show. A horizontal clamp always
    /// suppresses the hint, otherwise it falls back to [`Direction::Auto`].
    #[must_use]
    pub fn resolve_direction(&self, current: Option<Direction>) -> Option<Direction> {
        if self.horizontally_clamped() {
            Some(Direction::Suppressed)
        } else if current.is_some_and(Direction::is_explicit) {
            None
        } else {
            Some(Direction::Auto)
        }
    }
}

/// Computes where a popup of size `popup` goes for the given anchor.
///
/// `container` is the client size of the popup's parent and `padding` the
/// minimum gap kept to its edges. Arithmetic runs in `i64`, and the half-width
/// comparisons are doubled so odd widths are compared exactly.
#[must_use]
pub fn compute_placement(anchor: Point, popup: Size, container: Size, padding: i32) -> Placement {
    let (width, height) = (i64::from(popup.width), i64::from(popup.height));
    let (max_width, max_height) = (i64::from(container.width), i64::from(container.height));
    let padding = i64::from(padding);

    let mut top = i64::from(anchor.y) - height;
    let clamped_bottom = top + height + padding > max_height;
    if clamped_bottom {
        top = max_height - height - padding;
    }
    let pinned_top = top < padding;
    if pinned_top {
        top = padding;
    }

    // left + width / 2 + padding > max_width
    let mut left = i64::from(anchor.x);
    let clamped_right = 2 * (left + padding) + width > 2 * max_width;
    if clamped_right {
        left = max_width - width - padding;
    }
    // left - width / 2 < padding
    let clamped_left = 2 * left - width < 2 * padding;
    if clamped_left {
        left = padding;
    }

    Placement {
        left: narrow(left),
        top: narrow(top),
        clamped_bottom,
        pinned_top,
        clamped_right,
        clamped_left,
    }
}

/// Narrows back to pixel range. Final offsets always fit; saturate otherwise.
fn narrow(value: i64) -> i32 {
    i32::try_from(value).unwrap_or(if value < 0 { i32::MIN } else { i32::MAX })
}

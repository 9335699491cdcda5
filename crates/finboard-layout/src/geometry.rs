//! Stateless clamping rules for panel geometry.
//!
//! Sizes clamp to their minimums only; panels may grow without limit.
//! Positions keep at least `fixed_margin` pixels of the panel on the
//! canvas horizontally and never go above the canvas top.

use finboard_common::types::{Point, Size};

use crate::settings::LayoutSettings;

/// Clamp each dimension to its minimum. Non-finite or negative input is
/// treated as zero before clamping.
pub fn clamp_size(size: Size, min: Size) -> Size {
    let size = size.sanitized();
    let min = min.sanitized();
    Size {
        width: size.width.max(min.width),
        height: size.height.max(min.height),
    }
}

/// Horizontal bounds for a panel of the given width, as `(min_x, max_x)`.
pub fn horizontal_bounds(width: f64, settings: &LayoutSettings) -> (f64, f64) {
    (
        -width + settings.fixed_margin,
        settings.viewport_width - settings.fixed_margin,
    )
}

/// Clamp a candidate position for a panel of `size`.
///
/// When the viewport is too narrow for both horizontal bounds to hold,
/// the right-hand bound wins.
pub fn clamp_position(position: Point, size: Size, settings: &LayoutSettings) -> Point {
    let position = position.sanitized();
    let (min_x, max_x) = horizontal_bounds(size.width, settings);
    Point {
        x: position.x.max(min_x).min(max_x),
        y: position.y.max(0.0),
    }
}

/// Whether `position` already satisfies [`clamp_position`].
pub fn is_within_bounds(position: Point, size: Size, settings: &LayoutSettings) -> bool {
    clamp_position(position, size, settings) == position
}

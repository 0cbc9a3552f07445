/// Coordinates of the 3x3 neighborhood of a pixel with out-of-bounds
/// coordinates replaced by the nearest valid border coordinate
/// (replicate-border policy).
///
/// The window of pixel `(x, y)` covers the coordinates
/// `(xs[i], ys[j])` for all `i` and `j`. For interior pixels these are
/// the true neighbors of the pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ClampedWindow {
    pub xs: [u32; 3],
    pub ys: [u32; 3],
}

/// Clamps the 3x3 window around pixel `(x, y)` into the image bounds.
///
/// `(x, y)` itself must be inside of the image.
pub(crate) fn clamped_window(x: u32, y: u32, width: u32, height: u32) -> ClampedWindow {
    debug_assert!(x < width && y < height);
    ClampedWindow {
        xs: [x.saturating_sub(1), x, (x + 1).min(width - 1)],
        ys: [y.saturating_sub(1), y, (y + 1).min(height - 1)],
    }
}

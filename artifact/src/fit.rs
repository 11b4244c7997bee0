#[cfg(test)]
#[path = "fit_test.rs"]
mod fit_test;

use crate::consts::{FIT_DAMPING, MODAL_MIN_HEIGHT, MODAL_TARGET_WIDTH, VIRTUAL_HEIGHT, VIRTUAL_WIDTH};

/// Scale that fits the 1280-unit virtual canvas into the allocated width.
#[must_use]
pub fn thumbnail_scale(allocated_width: f64) -> f64 {
    allocated_width / VIRTUAL_WIDTH
}

/// Rendered height of the thumbnail for a given allocated width.
#[must_use]
pub fn thumbnail_height(allocated_width: f64) -> f64 {
    VIRTUAL_HEIGHT * thumbnail_scale(allocated_width)
}

/// Scale for the full/modal surface.
///
/// The content height is floored at [`MODAL_MIN_HEIGHT`] before fitting, and
/// the result is damped so the document never touches the viewport edges.
#[must_use]
pub fn modal_scale(viewport_width: f64, viewport_height: f64, content_height: f64) -> f64 {
    let content_height = content_height.max(MODAL_MIN_HEIGHT);
    (viewport_width / MODAL_TARGET_WIDTH).min(viewport_height / content_height) * FIT_DAMPING
}

//! Shared constants for the slide surfaces and the classifier.

/// Logical width of the slide's virtual canvas, in CSS pixels.
pub const VIRTUAL_WIDTH: f64 = 1280.0;

/// Logical height of the slide's virtual canvas, in CSS pixels.
pub const VIRTUAL_HEIGHT: f64 = 720.0;

/// Content-box width the modal surface forces on the document.
pub const MODAL_TARGET_WIDTH: f64 = 1600.0;

/// Floor for the measured content height in the modal fit computation.
pub const MODAL_MIN_HEIGHT: f64 = 720.0;

/// Damping applied to the modal scale so content never touches the edges.
pub const FIT_DAMPING: f64 = 0.85;

/// The fit routine re-runs on this interval to catch documents whose
/// height changes after async work; the sandboxed document emits no
/// resize notification of its own.
pub const FIT_POLL_MS: u32 = 500;

/// Marker embedded in assistant text that references a persisted artifact.
/// Followed by a lowercase hex identifier.
pub const MARKER_PREFIX: &str = "#SLIDE_ID:";

/// Caption used by pre-marker history records. No identifier follows.
pub const LEGACY_CAPTION: &str = "Generated slide:";

/// Title the generation service assigns to failed renders. A payload whose
/// only content is this title is not a renderable artifact.
pub const ERROR_TITLE: &str = "Unexpected Error";

/// Interval between simulated generation progress stages.
pub const PROGRESS_STAGE_MS: u32 = 3000;

//! Shared numeric constants for the canvas crate.
//!
//! These are the defaults behind [`crate::config::EditorConfig`].

// ── Interaction ─────────────────────────────────────────────────

/// Pitch of the snapping grid in pixels.
pub const GRID_PITCH_PX: f64 = 30.0;

/// Radius around the pointer within which the eraser removes route points.
pub const ERASE_RADIUS_PX: f64 = 15.0;

/// Pointer travel (either axis) after which a token press becomes a drag.
pub const DRAG_THRESHOLD_PX: f64 = 5.0;

/// Delay after a drag release before a token click is honoured again.
pub const DRAG_SETTLE_MS: u32 = 100;

/// Edge length of a player token.
pub const TOKEN_SIZE_PX: f64 = 60.0;

/// Gap between a token's bottom edge and the color palette.
pub const PICKER_GAP_PX: f64 = 10.0;

/// Maximum deviation from a cardinal direction for straightening, in degrees.
pub const STRAIGHTEN_TOLERANCE_DEG: f64 = 3.0;

// ── Field markings ──────────────────────────────────────────────

/// Vertical distance between horizontal field lines.
pub const FIELD_LINE_SPACING_PX: f64 = 180.5;

/// Vertical distance between hashmark rows.
pub const HASHMARK_SPACING_PX: f64 = 36.0;

/// Hashmarks closer than this to a field line are skipped.
pub const HASHMARK_CLEARANCE_PX: f64 = 10.0;

/// Hashmark tick width.
pub const HASHMARK_WIDTH_PX: f64 = 35.0;

/// Hashmark tick height.
pub const HASHMARK_HEIGHT_PX: f64 = 4.0;

/// Distance of the inner hashmark columns from the centerline, as a fraction of width.
pub const HASHMARK_INNER_FRACTION: f64 = 0.20;

/// Stroke width of drawn routes.
pub const ROUTE_STROKE_WIDTH_PX: f64 = 6.0;

// ── Canvas sizing ───────────────────────────────────────────────

/// Largest canvas width.
pub const MAX_CANVAS_WIDTH_PX: f64 = 1920.0;

/// Largest canvas height.
pub const MAX_CANVAS_HEIGHT_PX: f64 = 1080.0;

/// Horizontal viewport space reserved for page padding.
pub const VIEWPORT_PAD_X_PX: f64 = 40.0;

/// Vertical viewport space reserved for the controls bar.
pub const VIEWPORT_PAD_Y_PX: f64 = 200.0;

/// Canvas aspect ratio (width / height).
pub const CANVAS_ASPECT: f64 = 16.0 / 9.0;

//! Shared constants for the rafa crate.

// ── Naming ──────────────────────────────────────────────────────

/// Prefix of generated canvas variable names.
pub const CANVAS_NAME_PREFIX: &str = "_raphael_canvas_";

/// Prefix of generated element variable names (`rafa_<kind>_<uid>`).
pub const ELEMENT_NAME_PREFIX: &str = "rafa";

/// Prefix of the named function expressions used by repeating animations.
pub const LOOP_NAME_PREFIX: &str = "rafa_loop";

// ── Runtime ─────────────────────────────────────────────────────

/// Raphael release the generated code targets.
pub const DEFAULT_RAPHAEL_VERSION: &str = "1.3.1";

/// Exclusive upper bound of the random part of timestamp uids.
pub const TIMESTAMP_UID_RANGE: u32 = 10_000;

// ── Geometry ────────────────────────────────────────────────────

/// Cubic Bezier control distance for a quarter circle, relative to the radius.
pub const ROUNDED_CORNER_KAPPA: f64 = 0.5522;

/// Milliseconds per second, for Raphael's animation durations.
pub const MS_PER_SECOND: f64 = 1000.0;

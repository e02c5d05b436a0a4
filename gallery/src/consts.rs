//! Shared defaults for the gallery crate.

// ── Motion ──────────────────────────────────────────────────────

/// Scroll speed used when the host does not supply one, in pixels per second.
pub const DEFAULT_SCROLL_SPEED_PX_PER_SEC: f64 = 50.0;

// ── Sequence ────────────────────────────────────────────────────

/// Fewest copies of the base list that still leave a loop point.
pub const MIN_REPEAT: usize = 2;

/// Repeat factor used when the host does not supply one.
pub const DEFAULT_REPEAT: usize = 2;

// ── Timing ──────────────────────────────────────────────────────

/// Milliseconds per second; frame timestamps arrive in milliseconds.
pub const MS_PER_SEC: f64 = 1000.0;

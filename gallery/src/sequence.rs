//! Display sequence builder.
//!
//! The strip renders the base list several times back to back. When the
//! offset crosses one copy's width it is pulled back by exactly that width,
//! and because every copy is pixel-identical the jump is invisible.

#[cfg(test)]
#[path = "sequence_test.rs"]
mod sequence_test;

use crate::consts::MIN_REPEAT;

/// One rendered position in the display sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplaySlot {
    /// Position in the repeated sequence. Hover state is keyed by this.
    pub index: usize,
    /// Position of the underlying item in the base list.
    pub source: usize,
    /// Which repetition this slot belongs to, starting at 0.
    pub copy: usize,
}

/// Repeat the base list `repeat` times (at least [`MIN_REPEAT`]).
///
/// Returns an empty sequence when `base_len` is zero.
#[must_use]
pub fn build_display_sequence(base_len: usize, repeat: usize) -> Vec<DisplaySlot> {
    if base_len == 0 {
        return Vec::new();
    }
    let repeat = repeat.max(MIN_REPEAT);
    (0..repeat)
        .flat_map(|copy| (0..base_len).map(move |source| (copy, source)))
        .enumerate()
        .map(|(index, (copy, source))| DisplaySlot { index, source, copy })
        .collect()
}

/// Resolve the items for a display sequence.
#[must_use]
pub fn resolve<'a, T>(base: &'a [T], slots: &[DisplaySlot]) -> Vec<&'a T> {
    slots.iter().filter_map(|slot| base.get(slot.source)).collect()
}

/// Smallest repeat factor that keeps a viewport of `viewport_width` covered.
///
/// Just before a loop reset the strip has moved almost one full segment, so
/// the remaining `repeats - 1` copies must span the viewport on their own.
/// Unknown or degenerate widths fall back to [`MIN_REPEAT`].
#[must_use]
pub fn required_repeats(segment_width: f64, viewport_width: f64) -> usize {
    if !(segment_width.is_finite() && segment_width > 0.0) {
        return MIN_REPEAT;
    }
    if !(viewport_width.is_finite() && viewport_width > 0.0) {
        return MIN_REPEAT;
    }
    let covering = (viewport_width / segment_width).ceil();
    // Saturating cast; a covering count this large means the segment is tiny.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let covering = covering.min(f64::from(u16::MAX)) as usize;
    (covering + 1).max(MIN_REPEAT)
}

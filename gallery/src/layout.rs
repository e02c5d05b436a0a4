//! Segment width measurement.
//!
//! The loop point must come from rendered geometry rather than nominal card
//! sizes: responsive breakpoints, font metrics and image rounding all shift
//! the real width, and a wrong width shows up as a stutter at every reset.

#[cfg(test)]
#[path = "layout_test.rs"]
mod layout_test;

/// Horizontal extent of one rendered item, in CSS pixels.
///
/// Any shared origin works: only differences between boxes are used.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemBox {
    pub left: f64,
    pub width: f64,
}

impl ItemBox {
    #[must_use]
    pub fn new(left: f64, width: f64) -> Self {
        Self { left, width }
    }

    #[must_use]
    pub fn right(&self) -> f64 {
        self.left + self.width
    }
}

/// Width of one copy of the base list, including the gaps that follow each
/// item.
///
/// Uses the distance between displayed item 0 and displayed item `base_len`
/// when both are present. Otherwise sums the measured widths and gaps of the
/// first `base_len` boxes, reusing the last measured gap for the trailing one.
/// Returns `None` when the geometry is missing or degenerate.
#[must_use]
pub fn measure_segment_width(boxes: &[ItemBox], base_len: usize) -> Option<f64> {
    if base_len == 0 || boxes.len() < base_len {
        return None;
    }

    let width = match (boxes.first(), boxes.get(base_len)) {
        (Some(first), Some(next_copy)) => next_copy.left - first.left,
        _ => summed_width(&boxes[..base_len]),
    };

    (width.is_finite() && width > 0.0).then_some(width)
}

fn summed_width(copy: &[ItemBox]) -> f64 {
    let widths: f64 = copy.iter().map(|b| b.width).sum();
    let gaps: Vec<f64> = copy
        .windows(2)
        .map(|pair| (pair[1].left - pair[0].right()).max(0.0))
        .collect();
    let trailing = gaps.last().copied().unwrap_or(0.0);
    widths + gaps.iter().sum::<f64>() + trailing
}

/// Holds the most recent segment width measurement.
#[derive(Debug, Clone, Default)]
pub struct LayoutMeasurer {
    segment_width: Option<f64>,
}

impl LayoutMeasurer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Last valid measurement, or `None` before the first layout.
    #[must_use]
    pub fn segment_width(&self) -> Option<f64> {
        self.segment_width
    }

    /// Re-measure from fresh boxes. Returns `true` when the width changed.
    ///
    /// A failed measurement keeps the previous width so a transient empty
    /// layout (e.g. images still loading) does not stop the strip.
    pub fn remeasure(&mut self, boxes: &[ItemBox], base_len: usize) -> bool {
        let Some(width) = measure_segment_width(boxes, base_len) else {
            return false;
        };
        let changed = self.segment_width.is_none_or(|prev| (prev - width).abs() > f64::EPSILON);
        self.segment_width = Some(width);
        changed
    }

    /// Forget the measurement, e.g. after the item list changes.
    pub fn reset(&mut self) {
        self.segment_width = None;
    }
}

/// Number of rendered items the resize watch currently covers.
///
/// The display sequence can grow after a measurement, so the set of observed
/// cards has to follow the rendered count.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ObservedItems {
    count: Option<usize>,
}

impl ObservedItems {
    /// Whether `rendered` items differ from what is being observed.
    #[must_use]
    pub fn needs_retarget(&self, rendered: usize) -> bool {
        self.count != Some(rendered)
    }

    /// Record that all `rendered` items are now observed.
    pub fn mark(&mut self, rendered: usize) {
        self.count = Some(rendered);
    }

    /// Observe nothing; the next sync retargets unconditionally.
    pub fn forget(&mut self) {
        self.count = None;
    }
}

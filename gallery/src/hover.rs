//! Positional hover tracking.
//!
//! Repeated copies share the same underlying item, so hover is keyed by the
//! display index. Hovering one copy never lights up its duplicates.

#[cfg(test)]
#[path = "hover_test.rs"]
mod hover_test;

/// What a pointer event did to the hover state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoverChange {
    /// Hover moved to a new display index (from none or another index).
    Entered(usize),
    /// The hovered index was released and nothing is hovered now.
    Left(usize),
    /// The event did not change anything.
    Unchanged,
}

/// Tracks at most one hovered display index.
#[derive(Debug, Clone, Default)]
pub struct HoverController {
    active: Option<usize>,
    len: usize,
}

impl HoverController {
    /// `len` is the length of the display sequence.
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self { active: None, len }
    }

    #[must_use]
    pub fn active(&self) -> Option<usize> {
        self.active
    }

    #[must_use]
    pub fn is_hovering(&self) -> bool {
        self.active.is_some()
    }

    /// Whether the detail overlay should be shown on display index `index`.
    #[must_use]
    pub fn overlay_visible(&self, index: usize) -> bool {
        self.active == Some(index)
    }

    /// Pointer entered the item at `index`. Out-of-range indices are ignored.
    pub fn enter(&mut self, index: usize) -> HoverChange {
        if index >= self.len || self.active == Some(index) {
            return HoverChange::Unchanged;
        }
        self.active = Some(index);
        HoverChange::Entered(index)
    }

    /// Pointer left the item at `index`.
    ///
    /// Only the active index can be released; a late leave from a previous
    /// item arriving after the next enter keeps the new hover.
    pub fn leave(&mut self, index: usize) -> HoverChange {
        if self.active != Some(index) {
            return HoverChange::Unchanged;
        }
        self.active = None;
        HoverChange::Left(index)
    }

    /// Resize for a rebuilt display sequence, dropping a now-invalid hover.
    pub fn set_len(&mut self, len: usize) {
        self.len = len;
        if self.active.is_some_and(|i| i >= len) {
            self.active = None;
        }
    }

    pub fn clear(&mut self) {
        self.active = None;
    }
}

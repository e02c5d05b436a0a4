//! Testable gallery state machine.
//!
//! [`GalleryCore`] holds everything the animation needs that does not touch
//! the DOM, so the loop, the measurements and the hover rules can be driven
//! from native tests. [`crate::dom::Gallery`] feeds it real geometry and
//! timestamps in the browser.

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

use crate::driver::{AnimationDriver, Motion, TickOutcome};
use crate::hover::{HoverChange, HoverController};
use crate::item::{GalleryConfig, Item};
use crate::layout::{ItemBox, LayoutMeasurer};
use crate::sequence::{DisplaySlot, build_display_sequence, required_repeats};

/// What a layout pass changed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LayoutChange {
    /// Geometry matched the previous measurement, or could not be measured.
    Unchanged,
    /// The segment width is now the given value.
    Remeasured(f64),
    /// The viewport outgrew the strip; the display sequence now has `repeat`
    /// copies and must be re-rendered before the next measurement.
    Resequenced { repeat: usize },
}

/// Gallery state independent of any rendering surface.
#[derive(Debug, Clone)]
pub struct GalleryCore {
    items: Vec<Item>,
    config: GalleryConfig,
    repeat: usize,
    display: Vec<DisplaySlot>,
    layout: LayoutMeasurer,
    driver: AnimationDriver,
    hover: HoverController,
}

impl GalleryCore {
    #[must_use]
    pub fn new(items: Vec<Item>, config: GalleryConfig) -> Self {
        let display = build_display_sequence(items.len(), config.repeat);
        let hover = HoverController::new(display.len());
        Self {
            items,
            config,
            repeat: config.repeat,
            display,
            layout: LayoutMeasurer::new(),
            driver: AnimationDriver::new(config.scroll_speed),
            hover,
        }
    }

    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    #[must_use]
    pub fn config(&self) -> GalleryConfig {
        self.config
    }

    /// Copies of the base list currently in the display sequence.
    #[must_use]
    pub fn repeat(&self) -> usize {
        self.repeat
    }

    #[must_use]
    pub fn display(&self) -> &[DisplaySlot] {
        &self.display
    }

    /// An empty gallery renders nothing and never animates.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The item rendered at display position `index`.
    #[must_use]
    pub fn item_at(&self, index: usize) -> Option<&Item> {
        self.display.get(index).and_then(|slot| self.items.get(slot.source))
    }

    /// Replace the item list. Offset, timing, hover and measurements restart.
    pub fn set_items(&mut self, items: Vec<Item>) {
        self.items = items;
        self.repeat = self.config.repeat;
        self.display = build_display_sequence(self.items.len(), self.repeat);
        self.hover = HoverController::new(self.display.len());
        self.layout.reset();
        self.driver.reset();
        self.driver.resume();
    }

    // ── Layout ──────────────────────────────────────────────────

    #[must_use]
    pub fn segment_width(&self) -> Option<f64> {
        self.layout.segment_width()
    }

    /// Take a fresh measurement of the rendered display sequence.
    ///
    /// `boxes` are the rendered items in display order and `viewport_width`
    /// is the visible width of the strip.
    pub fn apply_layout(&mut self, boxes: &[ItemBox], viewport_width: f64) -> LayoutChange {
        if self.is_empty() {
            return LayoutChange::Unchanged;
        }
        let changed = self.layout.remeasure(boxes, self.items.len());
        let Some(segment) = self.layout.segment_width() else {
            return LayoutChange::Unchanged;
        };

        let needed = required_repeats(segment, viewport_width);
        if needed > self.repeat {
            self.repeat = needed;
            self.display = build_display_sequence(self.items.len(), needed);
            self.hover.set_len(self.display.len());
            self.sync_motion();
            return LayoutChange::Resequenced { repeat: needed };
        }

        if changed { LayoutChange::Remeasured(segment) } else { LayoutChange::Unchanged }
    }

    // ── Animation ───────────────────────────────────────────────

    #[must_use]
    pub fn motion(&self) -> Motion {
        self.driver.motion()
    }

    #[must_use]
    pub fn offset(&self) -> f64 {
        self.driver.offset()
    }

    /// Run one animation frame.
    ///
    /// `surface_ready` is `false` while the scroller element is not mounted;
    /// that frame only records its timestamp.
    pub fn tick(&mut self, timestamp_ms: f64, surface_ready: bool) -> TickOutcome {
        let segment = if surface_ready { self.layout.segment_width() } else { None };
        self.driver.tick(timestamp_ms, segment)
    }

    // ── Hover ───────────────────────────────────────────────────

    #[must_use]
    pub fn hovered(&self) -> Option<usize> {
        self.hover.active()
    }

    #[must_use]
    pub fn overlay_visible(&self, index: usize) -> bool {
        self.hover.overlay_visible(index)
    }

    pub fn pointer_enter(&mut self, index: usize) -> HoverChange {
        let change = self.hover.enter(index);
        self.sync_motion();
        change
    }

    pub fn pointer_leave(&mut self, index: usize) -> HoverChange {
        let change = self.hover.leave(index);
        self.sync_motion();
        change
    }

    fn sync_motion(&mut self) {
        if self.hover.is_hovering() {
            self.driver.pause();
        } else {
            self.driver.resume();
        }
    }
}

/// CSS transform for a strip translated left by `offset` pixels.
#[must_use]
pub fn translate_x(offset: f64) -> String {
    format!("translateX(-{offset}px)")
}

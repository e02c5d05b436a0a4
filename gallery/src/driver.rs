//! Per-frame scroll advance.
//!
//! The driver is a two-state machine. While [`Motion::Scrolling`] each tick
//! moves the offset by `speed * elapsed`; while [`Motion::Paused`] the offset
//! holds. The frame timestamp is refreshed on every tick in both states so
//! that resuming after a long hover does not jump by the paused duration.

#[cfg(test)]
#[path = "driver_test.rs"]
mod driver_test;

use crate::consts::MS_PER_SEC;

/// Whether the strip is currently moving.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Motion {
    #[default]
    Scrolling,
    Paused,
}

/// Mutable per-frame state shared between the tick handler and the render
/// step.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScrollState {
    /// Pixels the strip has been translated left. `0 <= offset < segment`.
    pub offset: f64,
    /// Timestamp of the previous tick in milliseconds.
    pub last_timestamp_ms: Option<f64>,
}

/// Result of one tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TickOutcome {
    /// No surface or no measured width yet; nothing to apply.
    Skipped,
    /// Offset to apply as the strip's translation.
    Applied { offset: f64, wrapped: bool },
}

/// Advances [`ScrollState`] once per animation frame.
#[derive(Debug, Clone)]
pub struct AnimationDriver {
    speed: f64,
    motion: Motion,
    state: ScrollState,
}

impl AnimationDriver {
    /// `speed` is in pixels per second.
    #[must_use]
    pub fn new(speed: f64) -> Self {
        Self { speed, motion: Motion::Scrolling, state: ScrollState::default() }
    }

    #[must_use]
    pub fn speed(&self) -> f64 {
        self.speed
    }

    #[must_use]
    pub fn motion(&self) -> Motion {
        self.motion
    }

    #[must_use]
    pub fn state(&self) -> ScrollState {
        self.state
    }

    #[must_use]
    pub fn offset(&self) -> f64 {
        self.state.offset
    }

    pub fn pause(&mut self) {
        self.motion = Motion::Paused;
    }

    pub fn resume(&mut self) {
        self.motion = Motion::Scrolling;
    }

    /// Seconds since the previous tick; the first tick and clock regressions
    /// count as zero.
    fn elapsed_secs(&mut self, timestamp_ms: f64) -> f64 {
        let last = self.state.last_timestamp_ms.replace(timestamp_ms).unwrap_or(timestamp_ms);
        ((timestamp_ms - last) / MS_PER_SEC).max(0.0)
    }

    /// Run one tick at `timestamp_ms`.
    ///
    /// `segment_width` is `None` until the host has a laid-out surface to
    /// measure; such ticks only record the timestamp.
    pub fn tick(&mut self, timestamp_ms: f64, segment_width: Option<f64>) -> TickOutcome {
        let elapsed = self.elapsed_secs(timestamp_ms);

        let Some(segment) = segment_width.filter(|w| w.is_finite() && *w > 0.0) else {
            return TickOutcome::Skipped;
        };

        if self.motion == Motion::Scrolling {
            self.state.offset += self.speed * elapsed;
        }

        let wrapped = self.wrap(segment);
        TickOutcome::Applied { offset: self.state.offset, wrapped }
    }

    /// Pull the offset back into `[0, segment)`.
    ///
    /// Also runs after a re-measure shrinks the segment below the current
    /// offset, which is why it applies in the paused state too.
    fn wrap(&mut self, segment: f64) -> bool {
        let offset = self.state.offset;
        if offset < segment && offset >= 0.0 {
            return false;
        }
        let mut next = offset - segment;
        if !(0.0..segment).contains(&next) {
            next = offset.rem_euclid(segment);
        }
        // rem_euclid can round up to exactly `segment` for values just below it.
        if next >= segment {
            next = 0.0;
        }
        self.state.offset = next;
        true
    }

    /// Clear the offset and timing, e.g. when the item list is replaced.
    pub fn reset(&mut self) {
        self.state = ScrollState::default();
    }
}

//! Display items and gallery configuration.

#[cfg(test)]
#[path = "item_test.rs"]
mod item_test;

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_REPEAT, DEFAULT_SCROLL_SPEED_PX_PER_SEC, MIN_REPEAT};

/// One entry in the gallery strip.
///
/// Items are supplied by the host and never mutated by the gallery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    pub image: String,
    pub description: String,
}

impl Item {
    #[must_use]
    pub fn new(name: impl Into<String>, image: impl Into<String>, description: impl Into<String>) -> Self {
        Self { name: name.into(), image: image.into(), description: description.into() }
    }
}

/// Errors produced while building a [`GalleryConfig`].
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GalleryError {
    /// Scroll speed was NaN or infinite.
    #[error("scroll speed must be finite, got {0}")]
    NonFiniteSpeed(f64),

    /// Scroll speed was below zero.
    #[error("scroll speed must not be negative, got {0}")]
    NegativeSpeed(f64),
}

/// Tunables for one gallery instance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GalleryConfig {
    /// Pixels per second.
    pub scroll_speed: f64,
    /// Copies of the base list in the display sequence. Always `>= 2`.
    pub repeat: usize,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self { scroll_speed: DEFAULT_SCROLL_SPEED_PX_PER_SEC, repeat: DEFAULT_REPEAT }
    }
}

impl GalleryConfig {
    /// Build a validated config.
    ///
    /// A repeat factor below [`MIN_REPEAT`] is raised rather than rejected.
    ///
    /// # Errors
    ///
    /// Returns [`GalleryError`] when `scroll_speed` is not finite or negative.
    pub fn new(scroll_speed: f64, repeat: usize) -> Result<Self, GalleryError> {
        if !scroll_speed.is_finite() {
            return Err(GalleryError::NonFiniteSpeed(scroll_speed));
        }
        if scroll_speed < 0.0 {
            return Err(GalleryError::NegativeSpeed(scroll_speed));
        }
        Ok(Self { scroll_speed, repeat: repeat.max(MIN_REPEAT) })
    }

    /// Config with the given speed and the default repeat factor.
    ///
    /// # Errors
    ///
    /// Same as [`GalleryConfig::new`].
    pub fn with_speed(scroll_speed: f64) -> Result<Self, GalleryError> {
        Self::new(scroll_speed, DEFAULT_REPEAT)
    }
}

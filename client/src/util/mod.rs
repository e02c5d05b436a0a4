//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Small pure helpers kept out of components so they can be tested without a
//! browser.

pub mod color;
pub mod nav;

//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render site chrome and content sections from props; only the
//! gallery keeps state beyond a hover flag.

pub mod button;
pub mod infinite_gallery;
pub mod location_card;
pub mod navbar;
pub mod photo_collage;
pub mod testimonial_card;

//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page lays out its sections and delegates rendering details to
//! `components`.

pub mod home;
pub mod locations;

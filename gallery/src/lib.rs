//! Infinite gallery animator for the signature drinks strip.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It owns the
//! scroll state of a horizontally looping item strip: building the repeated
//! display sequence, measuring the rendered segment width, advancing the
//! offset once per animation frame, and pausing while an item is hovered.
//! The Leptos host is responsible only for rendering the items and wiring
//! pointer events to the [`dom::Gallery`] bridge.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Testable [`engine::GalleryCore`] composing the pieces below |
//! | [`item`] | Display item and gallery configuration types |
//! | [`sequence`] | Repeated display sequence builder |
//! | [`layout`] | Segment width measurement from rendered boxes |
//! | [`driver`] | Per-frame offset advance and loop reset |
//! | [`hover`] | Positional hover / overlay tracking |
//! | [`clock`] | Frame scheduler trait and owned frame subscriptions |
//! | [`dom`] | Browser bridge: element measurement, transforms, rAF, resize watch |
//! | [`consts`] | Shared defaults (scroll speed, repeat factor) |

pub mod clock;
pub mod consts;
pub mod dom;
pub mod driver;
pub mod engine;
pub mod hover;
pub mod item;
pub mod layout;
pub mod sequence;

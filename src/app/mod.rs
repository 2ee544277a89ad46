//! Application module - the page-wide Showboard state and logic.
//!
//! This module is organized into several submodules:
//! - `state` - The Showboard struct definition and sub-structs
//! - `lifecycle` - Construction, the tick pump, and teardown
//! - `sections` - Per-section timing: autoplay, momentum chains, lingers
//! - `frames` - Per-frame view models handed to the rendering host
//! - `lightbox_handlers` - Opening, stepping, and closing the lightbox
//!
//! The pointer, touch, click, and hover handlers live in [`crate::input`];
//! they are `impl Showboard` blocks too, split the same way.

mod frames;
mod lifecycle;
mod lightbox_handlers;
mod sections;
mod state;

pub use frames::{HeroFrame, ProfileFrame, SectionFrame};
pub use state::{HeroState, SectionEvent, SectionState, Showboard};

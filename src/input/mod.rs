//! Pointer and touch input handling for the gallery sections.
//!
//! This module implements the interaction logic the galleries are driven by:
//! direct dragging with velocity tracking, release momentum, hover and touch
//! autoplay gating, and the click handling layered on top of drags.
//!
//! ## Architecture
//!
//! Drag tracking uses an explicit state machine (`DragState`) owned by each
//! section, so the numbers a release is judged by (distance, smoothed
//! velocity, click suppression) live in one place instead of scattered flags.
//!
//! ## Modules
//!
//! - `state` - Drag state machine and the numbers a release reports
//! - `pointer_down` - Press handling (cancels momentum, freezes transitions)
//! - `pointer_move` - Move handling (position and velocity tracking)
//! - `pointer_up` - Release handling (momentum planning, autoplay re-arm)
//! - `click` - Card, arrow, and dot clicks with post-drag suppression
//! - `hover` - Hover and touch transitions that gate autoplay

mod state;
mod pointer_down;
mod pointer_move;
mod pointer_up;
mod click;
mod hover;

pub use state::{DragEnd, DragState};

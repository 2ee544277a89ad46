//! Circular image galleries.
//!
//! Each member section owns one gallery: a ring of slides centered on a
//! current index, dragged directly by the pointer and stepped by autoplay,
//! nav buttons, and release momentum.
//!
//! ## Modules
//!
//! - `state` - circular index, transition duration, and slide offsets
//! - `momentum` - turning a released drag into a travel plan
//! - `frame` - the per-frame snapshot handed to the host for drawing

mod frame;
mod momentum;
mod state;

pub use frame::{GalleryFrame, SlideFrame, SlideRole};
pub use momentum::{plan_release, Direction, MomentumRun, ReleasePlan};
pub use state::GalleryState;

//! Interaction core for the Creatorz showcase site.
//!
//! This crate owns the state, derivation, and timing logic behind the
//! single-page site: the momentum-driven image galleries, the URL-backed
//! lightbox, the rotating hero line and profile cards, the pill navigation,
//! and the contact form. Rendering is left to a host that consumes the
//! per-frame view models and feeds pointer and visibility events back in.
//!
//! The whole crate is single-threaded and event-driven: every timed behavior
//! runs on a [`timer::TimerQueue`] pumped by [`Showboard::tick`], and all
//! timestamps are injected rather than read from the clock.

pub mod app;
pub mod catalog;
pub mod constants;
pub mod contact;
pub mod gallery;
pub mod input;
pub mod lightbox;
pub mod logging;
pub mod nav;
pub mod rotator;
pub mod timer;
pub mod types;

pub use app::Showboard;

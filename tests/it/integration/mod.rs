//! Integration tests for showboard.
//!
//! These tests drive complete workflows through the Showboard handlers:
//! drag-release-momentum runs, autoplay gating, and the lightbox's
//! URL-backed open/navigate/close loop.

mod autoplay_tests;

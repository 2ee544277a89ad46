//! Test helpers and builders for reducing boilerplate in tests.
//!
//! This module provides:
//! - `TestCatalogBuilder` - Builder pattern for small throwaway catalogs
//! - `board()` / `board_over()` - Showboard construction at a fixed instant
//! - `drag()` - scripted pointer gestures with explicit sample timing

use std::sync::Arc;
use std::time::{Duration, Instant};

use showboard::app::Showboard;
use showboard::catalog::{Catalog, CatalogData};
use showboard::types::{CreatorProfile, Member, NavLink};

// ============================================================================
// TestCatalogBuilder - Builder pattern for creating test catalogs
// ============================================================================

/// Builder for small catalogs with made-up members.
///
/// # Example
/// ```ignore
/// let catalog = TestCatalogBuilder::new()
///     .with_member("painters", 10, 2)
///     .with_member("sculptors", 1, 1)
///     .build();
/// ```
#[derive(Default)]
pub struct TestCatalogBuilder {
    members: Vec<Member>,
}

impl TestCatalogBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a member with `gallery_len` numbered images and `profile_len`
    /// numbered profiles.
    pub fn with_member(mut self, id: &str, gallery_len: usize, profile_len: usize) -> Self {
        self.members.push(Member {
            id: id.to_string(),
            section_title: format!("The {}", id),
            name: id.to_string(),
            bio: format!("Test member {}", id),
            profiles: (1..=profile_len)
                .map(|number| CreatorProfile {
                    contact: format!("Discord: @{}{}", id, number),
                    profile_image: format!("/images/profiles/{}{}.jpg", id, number),
                })
                .collect(),
            gallery_images: (1..=gallery_len)
                .map(|number| format!("/images/{}/{}.jpg", id, number))
                .collect(),
        });
        self
    }

    /// Build and validate the catalog. Nav links mirror the member list,
    /// with Home in front.
    pub fn build(self) -> Catalog {
        let mut nav_links = vec![NavLink::new("#home", "Home")];
        for member in &self.members {
            nav_links.push(NavLink::new(format!("#{}", member.id), member.id.clone()));
        }
        Catalog::from_data(CatalogData {
            members: self.members,
            nav_links,
            contact_links: Vec::new(),
            contact_email: "test@example.com".to_string(),
        })
        .expect("test catalog must validate")
    }
}

// ============================================================================
// Board construction
// ============================================================================

/// A Showboard over the builtin catalog, plus the instant it started at.
pub fn board() -> (Showboard, Instant) {
    let start = Instant::now();
    (Showboard::new(start), start)
}

/// A Showboard over a custom catalog.
pub fn board_over(catalog: Catalog) -> (Showboard, Instant) {
    let start = Instant::now();
    (Showboard::from_catalog(Arc::new(catalog), start), start)
}

/// A one-member board with a ten-image gallery, the workhorse fixture of
/// the gesture tests.
pub fn gallery_board() -> (Showboard, Instant) {
    board_over(TestCatalogBuilder::new().with_member("painters", 10, 3).build())
}

pub fn ms(value: u64) -> Duration {
    Duration::from_millis(value)
}

// ============================================================================
// Gesture scripting
// ============================================================================

/// Press at x = 0, feed each `(dx_px, gap_ms)` sample in order, and release.
/// Returns the release instant so tests can keep ticking from it.
pub fn drag(
    board: &mut Showboard,
    section: usize,
    start: Instant,
    samples: &[(f32, u64)],
) -> Instant {
    board.handle_pointer_down(section, 0.0, start);
    let mut x = 0.0;
    let mut now = start;
    for &(dx, gap_ms) in samples {
        x += dx;
        now += ms(gap_ms);
        board.handle_pointer_move(section, x, now);
    }
    board.handle_pointer_up(section, now);
    now
}

/// Two fast samples leftward; the smoothed release velocity lands just
/// above 2.5 px/ms, the four-step flick threshold.
pub const FLICK_FOUR: &[(f32, u64)] = &[(-48.0, 16), (-48.0, 16)];

/// Smoothed release velocity about 1.8 px/ms: a three-step flick.
pub const FLICK_THREE: &[(f32, u64)] = &[(-32.0, 16), (-32.0, 16)];

/// Smoothed release velocity about 0.9 px/ms: a two-step flick.
pub const FLICK_TWO: &[(f32, u64)] = &[(-16.0, 16), (-16.0, 16)];

/// Slow but long: 60 px dragged at about 0.1 px/ms, one step by distance.
pub const DRAG_ONE: &[(f32, u64)] = &[(-30.0, 300), (-30.0, 300)];

/// Short and slow: past the click slop but under every travel threshold.
pub const DRAG_SNAP: &[(f32, u64)] = &[(-20.0, 300)];

//! Per-frame view models - read-only snapshots the host draws from.
//!
//! Frames are composed on demand and owned by the caller; nothing in here
//! hands out references into live state, so the host can hold a frame
//! across its own layout pass while events keep arriving.

use std::time::Instant;

use crate::gallery::GalleryFrame;
use crate::rotator::TextPhase;
use crate::types::{CreatorProfile, Member};

use super::state::Showboard;

/// The hero banner's rotating line, as shown this frame.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeroFrame {
    /// Static lead-in before the animated word
    pub prefix: &'static str,
    /// The word currently on screen
    pub text: String,
    /// Where that word is in its slide animation
    pub phase: TextPhase,
}

/// A member's profile card, as shown this frame.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProfileFrame {
    pub profile: CreatorProfile,
    /// Zero-based position of the shown profile
    pub index: usize,
    /// How many profiles the card rotates through
    pub total: usize,
}

/// One member section, as shown this frame.
#[derive(Clone, Debug)]
pub struct SectionFrame {
    /// The member this section showcases
    pub member: Member,
    pub gallery: GalleryFrame,
    /// Absent when the member has no profiles at all
    pub profile: Option<ProfileFrame>,
}

impl Showboard {
    /// Snapshot the hero banner.
    pub fn hero_frame(&self) -> HeroFrame {
        HeroFrame {
            prefix: crate::constants::HERO_PREFIX,
            text: self
                .hero
                .rotator
                .current_text()
                .unwrap_or_default()
                .to_string(),
            phase: self.hero.rotator.phase(),
        }
    }

    /// Snapshot one member section: gallery slides plus the profile card.
    /// Returns `None` for section indices the catalog does not have.
    pub fn section_frame(&self, section: usize) -> Option<SectionFrame> {
        let state = self.sections.get(section)?;
        let member = self.catalog.members().get(state.member_index)?;

        let profile = member
            .profile(state.profiles.current())
            .map(|profile| ProfileFrame {
                profile: profile.clone(),
                index: state.profiles.current(),
                total: state.profiles.len(),
            });

        Some(SectionFrame {
            member: member.clone(),
            gallery: GalleryFrame::compose(&state.gallery, &state.drag),
            profile,
        })
    }

    /// Snapshot every section, in catalog order.
    pub fn section_frames(&self) -> Vec<SectionFrame> {
        (0..self.sections.len())
            .filter_map(|section| self.section_frame(section))
            .collect()
    }

    /// Whether the contact section's "message ready" notice is showing.
    pub fn contact_notice_visible(&self, now: Instant) -> bool {
        self.contact.notice_visible(now)
    }
}

//! Core types for the Creatorz catalog.
//!
//! This module defines the data structures the rest of the crate derives its
//! views from: members with their galleries and rotating profiles, and the
//! navigation link tree. The serde names follow the site's established JSON
//! shape, so external catalog files keep the camelCase keys.

use serde::{Deserialize, Serialize};

// ============================================================================
// Members
// ============================================================================

/// One contact identity shown on a member's rotating profile card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatorProfile {
    /// How to reach this creator (e.g. a Discord handle)
    pub contact: String,
    /// Site-relative path of the profile picture
    pub profile_image: String,
}

/// A showcased member: one section of the page, with a gallery and a
/// profile card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    /// Stable identifier; doubles as the section anchor and the lightbox
    /// category key
    pub id: String,
    /// Heading shown above the section
    pub section_title: String,
    /// Role name shown on the profile card
    pub name: String,
    /// Short description shown alongside the profile card
    pub bio: String,
    /// Identities the profile card rotates through
    pub profiles: Vec<CreatorProfile>,
    /// Site-relative paths of the gallery images, in display order
    pub gallery_images: Vec<String>,
}

impl Member {
    /// Number of images in this member's gallery.
    pub fn gallery_len(&self) -> usize {
        self.gallery_images.len()
    }

    /// Whether the profile card has anything to rotate through.
    pub fn has_multiple_profiles(&self) -> bool {
        self.profiles.len() > 1
    }

    /// The profile shown at `index`, if it exists.
    pub fn profile(&self, index: usize) -> Option<&CreatorProfile> {
        self.profiles.get(index)
    }
}

// ============================================================================
// Navigation
// ============================================================================

/// One entry of the navigation tree. A link either points at a section
/// directly or groups child links under a dropdown.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavLink {
    /// Anchor of the section this link scrolls to. For a parent link this
    /// defaults to its first child's anchor.
    pub href: String,
    /// Text shown on the pill
    pub label: String,
    /// Dropdown entries; empty for a plain link
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<NavLink>,
}

impl NavLink {
    /// Create a plain link with no dropdown.
    pub fn new(href: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            label: label.into(),
            children: Vec::new(),
        }
    }

    /// Create a parent link whose dropdown lists `children`. The parent's
    /// own href falls back to the first child's anchor.
    pub fn group(label: impl Into<String>, children: Vec<NavLink>) -> Self {
        let href = children
            .first()
            .map(|child| child.href.clone())
            .unwrap_or_default();
        Self {
            href,
            label: label.into(),
            children,
        }
    }

    /// Whether this link opens a dropdown instead of navigating directly.
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }
}

//! Application state - the Showboard struct definition and sub-structs.

use std::sync::Arc;
use std::time::Instant;

use crate::catalog::Catalog;
use crate::contact::ContactState;
use crate::gallery::{GalleryState, MomentumRun};
use crate::input::DragState;
use crate::nav::NavModel;
use crate::rotator::{ProfileRotator, TextRotator};
use crate::timer::{TimerHandle, TimerQueue};

// =============================================================================
// Sub-structs the page state is composed from
// =============================================================================

/// Timed work a section schedules for itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SectionEvent {
    /// Advance the gallery because it sat idle long enough
    Autoplay,
    /// Take the next step of a momentum run
    MomentumStep,
    /// Restore the standard transition once a momentum run settles
    RestoreTransition,
    /// A lifted touch stops counting as hover
    HoverLinger,
}

/// Everything one member section owns: its gallery, the drag being tracked
/// on it, its rotating profile card, and the timers driving all of it.
///
/// Sections are fully independent; dragging one never disturbs another.
pub struct SectionState {
    /// Position of this section's member in the catalog
    pub member_index: usize,
    /// Member id; doubles as the lightbox category key
    pub category: String,
    /// Circular gallery position and transition
    pub gallery: GalleryState,
    /// Drag state machine for this gallery
    pub drag: DragState,
    /// Rotating profile card
    pub profiles: ProfileRotator,
    /// Whether a mouse is over the gallery (or a touch recently was)
    pub hovered: bool,
    /// Clicks on the gallery are swallowed until this instant
    pub suppress_clicks_until: Option<Instant>,
    /// Timers feeding `SectionEvent`s back into this section
    pub(super) timers: TimerQueue<SectionEvent>,
    /// Steps still owed by the running momentum chain
    pub(super) momentum: Option<MomentumRun>,
    pub(super) autoplay_timer: Option<TimerHandle>,
    pub(super) momentum_timer: Option<TimerHandle>,
    pub(super) linger_timer: Option<TimerHandle>,
}

impl SectionState {
    /// Build the section for member `member_index`. Autoplay arms
    /// immediately; nothing is hovered yet.
    pub fn new(
        member_index: usize,
        category: String,
        gallery_len: usize,
        profile_len: usize,
        now: Instant,
    ) -> Self {
        let mut section = Self {
            member_index,
            category,
            gallery: GalleryState::new(gallery_len),
            drag: DragState::default(),
            profiles: ProfileRotator::new(profile_len, now),
            hovered: false,
            suppress_clicks_until: None,
            timers: TimerQueue::new(),
            momentum: None,
            autoplay_timer: None,
            momentum_timer: None,
            linger_timer: None,
        };
        section.arm_autoplay(now);
        section
    }
}

/// The hero banner's rotating line.
pub struct HeroState {
    /// The word cycle behind the animated part of the line
    pub rotator: TextRotator,
}

// =============================================================================
// The application
// =============================================================================

/// The interaction core of the whole page.
///
/// A host constructs one of these over a catalog, feeds it pointer, touch,
/// click, and visibility events as they arrive, calls
/// [`tick`](Showboard::tick) whenever time passes, and draws whatever the
/// frame accessors return. All timing is cooperative: nothing here spawns
/// threads or reads the clock behind the host's back.
pub struct Showboard {
    /// The validated catalog every view derives from
    pub catalog: Arc<Catalog>,
    /// Hero banner state
    pub hero: HeroState,
    /// One state per catalog member, in catalog order
    pub sections: Vec<SectionState>,
    /// Pill navigation state
    pub nav: NavModel,
    /// Contact form state
    pub contact: ContactState,
}

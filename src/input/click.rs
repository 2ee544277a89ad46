//! Click handling - cards, arrow buttons, and pagination dots.
//!
//! Card clicks are layered on top of the drag machinery, so a release that
//! actually dragged must not count as a click. Two guards cover the window:
//! the live drag's moved latch, and a short suppression timestamp set when
//! a real drag ends.

use std::time::Instant;

use crate::app::Showboard;
use crate::gallery::Direction;
use crate::lightbox::QueryPairs;

impl Showboard {
    /// Click on the card showing gallery image `slide` of a section.
    ///
    /// The centered card opens the lightbox on that image; the cards directly
    /// beside center step the gallery toward them. Clicks right after a drag,
    /// and clicks on farther cards, are swallowed.
    pub fn handle_card_click(
        &mut self,
        section: usize,
        slide: usize,
        now: Instant,
        query: &mut impl QueryPairs,
    ) {
        let Some(state) = self.sections.get_mut(section) else {
            return;
        };
        if state.drag.has_moved() || state.clicks_suppressed(now) {
            tracing::debug!("swallowing card click right after a drag");
            return;
        }

        match state.gallery.offset_of(slide) {
            0 => {
                let category = state.category.clone();
                self.open_lightbox(query, &category, slide);
            }
            1 => state.nav_step(Direction::Forward),
            -1 => state.nav_step(Direction::Backward),
            _ => {}
        }
    }

    /// Click on a section's forward arrow.
    pub fn handle_gallery_next(&mut self, section: usize) {
        if let Some(state) = self.sections.get_mut(section) {
            state.nav_step(Direction::Forward);
        }
    }

    /// Click on a section's back arrow.
    pub fn handle_gallery_prev(&mut self, section: usize) {
        if let Some(state) = self.sections.get_mut(section) {
            state.nav_step(Direction::Backward);
        }
    }

    /// Click on pagination dot `index` of a section.
    pub fn handle_dot_click(&mut self, section: usize, index: usize) {
        if let Some(state) = self.sections.get_mut(section) {
            state.nav_jump(index);
        }
    }
}

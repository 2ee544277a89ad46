//! Lightbox handlers - opening, stepping, and closing the overlay.
//!
//! The lightbox has no state of its own on the page; these handlers only
//! rewrite the injected query parameters, and the view accessor re-derives
//! what is open from them on every read.

use crate::lightbox::{self, LightboxView, QueryPairs};

use super::state::Showboard;

impl Showboard {
    /// The open lightbox as derived from the current query, or `None`
    /// while it is closed or the query is invalid.
    pub fn lightbox_view(&self, query: &impl QueryPairs) -> Option<LightboxView> {
        lightbox::resolve(&self.catalog, query)
    }

    /// Open the lightbox on image `index` of `category`'s gallery.
    pub fn open_lightbox(&mut self, query: &mut impl QueryPairs, category: &str, index: usize) {
        lightbox::open(query, category, index);
    }

    /// Step the open lightbox to the next image, wrapping at the end.
    pub fn lightbox_next(&mut self, query: &mut impl QueryPairs) {
        lightbox::next(&self.catalog, query);
    }

    /// Step the open lightbox to the previous image.
    pub fn lightbox_prev(&mut self, query: &mut impl QueryPairs) {
        lightbox::prev(&self.catalog, query);
    }

    /// Close the lightbox.
    pub fn close_lightbox(&mut self, query: &mut impl QueryPairs) {
        lightbox::close(query);
    }
}

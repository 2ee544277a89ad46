//! URL-backed lightbox state.
//!
//! The lightbox never stores which image it shows. Two query parameters are
//! the single source of truth, which makes every view shareable as a plain
//! link and lets the browser's Back button close it. The parameters come in
//! untrusted (anyone can edit a URL), so every read validates them against
//! the catalog and any inconsistency simply means "closed".
//!
//! History discipline: opening and closing push entries, stepping between
//! images replaces the current one. However long someone browses inside a
//! gallery, Back still closes the lightbox in a single step.

mod params;

pub use params::{HistoryMode, MemoryQuery, QueryPairs};

use crate::catalog::Catalog;

/// Query key naming the member whose gallery is open.
pub const PARAM_CATEGORY: &str = "category";

/// Query key carrying the zero-based image index.
pub const PARAM_IMAGE: &str = "image";

/// A validated lightbox view, derived from the query on every read.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LightboxView {
    /// Member id whose gallery is open
    pub category: String,
    /// Zero-based index of the shown image
    pub index: usize,
    /// Number of images in the open gallery
    pub total: usize,
    /// Site-relative path of the shown image
    pub image_src: String,
}

/// Derive the open lightbox from the current query.
///
/// Returns `None` (lightbox closed) unless both parameters are present,
/// the category names a catalog member, and the index parses as a plain
/// integer inside the gallery. Junk never panics and never half-opens.
pub fn resolve(catalog: &Catalog, query: &impl QueryPairs) -> Option<LightboxView> {
    let category = query.get(PARAM_CATEGORY)?;
    let raw_index = query.get(PARAM_IMAGE)?;

    let Some(member) = catalog.member(&category) else {
        tracing::debug!("lightbox query names unknown category {:?}", category);
        return None;
    };
    let Ok(index) = raw_index.parse::<usize>() else {
        tracing::debug!("lightbox query carries malformed index {:?}", raw_index);
        return None;
    };
    let image_src = member.gallery_images.get(index)?.clone();

    Some(LightboxView {
        category,
        index,
        total: member.gallery_images.len(),
        image_src,
    })
}

/// Open the lightbox on image `index` of `category`'s gallery. Pushes a
/// history entry so Back closes it again.
pub fn open(query: &mut impl QueryPairs, category: &str, index: usize) {
    query.update(
        &[
            (PARAM_CATEGORY, Some(category.to_string())),
            (PARAM_IMAGE, Some(index.to_string())),
        ],
        HistoryMode::Push,
    );
}

/// Step to the next image, wrapping at the gallery end. No-op while the
/// lightbox is closed or its query is invalid.
pub fn next(catalog: &Catalog, query: &mut impl QueryPairs) {
    step(catalog, query, 1);
}

/// Step to the previous image, wrapping at the gallery start.
pub fn prev(catalog: &Catalog, query: &mut impl QueryPairs) {
    step(catalog, query, -1);
}

fn step(catalog: &Catalog, query: &mut impl QueryPairs, delta: i64) {
    let Some(view) = resolve(catalog, query) else {
        return;
    };
    let index = (view.index as i64 + delta).rem_euclid(view.total as i64);
    query.update(
        &[(PARAM_IMAGE, Some(index.to_string()))],
        HistoryMode::Replace,
    );
}

/// Close the lightbox by clearing both parameters, leaving unrelated query
/// keys alone. Pushes a history entry.
pub fn close(query: &mut impl QueryPairs) {
    query.update(
        &[(PARAM_CATEGORY, None), (PARAM_IMAGE, None)],
        HistoryMode::Push,
    );
}

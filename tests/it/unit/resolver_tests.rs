//! Unit tests for the lightbox resolver: every string the query can carry
//! must map to either a fully valid view or a closed lightbox.

use showboard::catalog::Catalog;
use showboard::lightbox::{self, HistoryMode, MemoryQuery, QueryPairs};

fn query(category: &str, image: &str) -> MemoryQuery {
    MemoryQuery::with_pairs(&[("category", category), ("image", image)])
}

#[test]
fn valid_query_resolves_to_a_full_view() {
    let catalog = Catalog::builtin();
    let view = lightbox::resolve(&catalog, &query("artists", "2")).unwrap();

    assert_eq!(view.category, "artists");
    assert_eq!(view.index, 2);
    assert_eq!(view.total, 17);
    // The artists gallery skips some numbers; index 2 is the third image
    // that exists, not "/2.jpg".
    assert_eq!(view.image_src, "/images/artists/3.jpg");
}

#[test]
fn index_equal_to_the_gallery_length_is_closed() {
    let catalog = Catalog::builtin();
    assert_eq!(lightbox::resolve(&catalog, &query("artists", "17")), None);
}

#[test]
fn last_valid_index_is_open() {
    let catalog = Catalog::builtin();
    let view = lightbox::resolve(&catalog, &query("artists", "16")).unwrap();
    assert_eq!(view.index, 16);
}

#[test]
fn negative_index_is_closed() {
    let catalog = Catalog::builtin();
    assert_eq!(lightbox::resolve(&catalog, &query("artists", "-1")), None);
}

#[test]
fn unknown_category_is_closed() {
    let catalog = Catalog::builtin();
    assert_eq!(lightbox::resolve(&catalog, &query("unknown", "0")), None);
}

#[test]
fn junk_indices_are_closed() {
    let catalog = Catalog::builtin();
    for junk in ["abc", "", "1.5", "2e1", " 2", "2 ", "0x2", "٢"] {
        assert_eq!(
            lightbox::resolve(&catalog, &query("artists", junk)),
            None,
            "index {:?} should close the lightbox",
            junk
        );
    }
}

#[test]
fn missing_parameters_are_closed() {
    let catalog = Catalog::builtin();
    assert_eq!(lightbox::resolve(&catalog, &MemoryQuery::new()), None);
    assert_eq!(
        lightbox::resolve(&catalog, &MemoryQuery::with_pairs(&[("category", "artists")])),
        None
    );
    assert_eq!(
        lightbox::resolve(&catalog, &MemoryQuery::with_pairs(&[("image", "0")])),
        None
    );
}

#[test]
fn reopening_identical_parameters_resolves_identically() {
    let catalog = Catalog::builtin();
    let mut first = MemoryQuery::new();
    let mut second = MemoryQuery::new();
    lightbox::open(&mut first, "editors", 4);
    lightbox::open(&mut second, "editors", 4);

    assert_eq!(
        lightbox::resolve(&catalog, &first),
        lightbox::resolve(&catalog, &second)
    );
}

#[test]
fn next_wraps_at_the_gallery_end() {
    let catalog = Catalog::builtin();
    let mut query = query("artists", "16");
    lightbox::next(&catalog, &mut query);
    assert_eq!(lightbox::resolve(&catalog, &query).unwrap().index, 0);
}

#[test]
fn prev_wraps_at_the_gallery_start() {
    let catalog = Catalog::builtin();
    let mut query = query("artists", "0");
    lightbox::prev(&catalog, &mut query);
    assert_eq!(lightbox::resolve(&catalog, &query).unwrap().index, 16);
}

#[test]
fn stepping_a_closed_lightbox_changes_nothing() {
    let catalog = Catalog::builtin();
    let mut query = MemoryQuery::new();
    lightbox::next(&catalog, &mut query);
    lightbox::prev(&catalog, &mut query);
    assert_eq!(query.get("image"), None);
    assert_eq!(query.history_len(), 1);
}

#[test]
fn stepping_replaces_history_while_open_and_close_pushes() {
    let catalog = Catalog::builtin();
    let mut query = MemoryQuery::new();

    lightbox::open(&mut query, "artists", 0);
    assert_eq!(query.history_len(), 2);

    for _ in 0..5 {
        lightbox::next(&catalog, &mut query);
    }
    assert_eq!(query.history_len(), 2, "stepping must not grow history");
    assert_eq!(lightbox::resolve(&catalog, &query).unwrap().index, 5);

    lightbox::close(&mut query);
    assert_eq!(query.history_len(), 3);
    assert_eq!(lightbox::resolve(&catalog, &query), None);
}

#[test]
fn close_leaves_unrelated_query_keys_alone() {
    let mut query = MemoryQuery::with_pairs(&[("ref", "newsletter")]);
    lightbox::open(&mut query, "artists", 3);
    lightbox::close(&mut query);
    assert_eq!(query.get("ref").as_deref(), Some("newsletter"));
    assert_eq!(query.get("category"), None);
    assert_eq!(query.get("image"), None);
}

#[test]
fn back_after_close_restores_the_open_view() {
    let catalog = Catalog::builtin();
    let mut query = MemoryQuery::new();
    lightbox::open(&mut query, "artists", 3);
    lightbox::close(&mut query);

    query.back();
    assert_eq!(lightbox::resolve(&catalog, &query).unwrap().index, 3);
    query.back();
    assert_eq!(lightbox::resolve(&catalog, &query), None);
}

#[test]
fn replace_mode_update_rewrites_in_place() {
    let mut query = MemoryQuery::new();
    query.update(&[("image", Some("7".into()))], HistoryMode::Replace);
    assert_eq!(query.history_len(), 1);
    assert_eq!(query.get("image").as_deref(), Some("7"));
}

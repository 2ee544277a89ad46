//! Unit tests for the circular gallery index.

use showboard::gallery::GalleryState;

#[test]
fn advancing_full_circle_returns_to_the_start() {
    for len in 2..=12 {
        for start in 0..len {
            let mut gallery = GalleryState::new(len);
            gallery.jump(start);
            for _ in 0..len {
                gallery.advance();
            }
            assert_eq!(gallery.current(), start, "len {} start {}", len, start);
        }
    }
}

#[test]
fn retreating_full_circle_returns_to_the_start() {
    let mut gallery = GalleryState::new(9);
    gallery.jump(4);
    for _ in 0..9 {
        gallery.retreat();
    }
    assert_eq!(gallery.current(), 4);
}

#[test]
fn advance_then_retreat_is_identity() {
    for len in 2..=8 {
        for start in 0..len {
            let mut gallery = GalleryState::new(len);
            gallery.jump(start);
            gallery.advance();
            gallery.retreat();
            assert_eq!(gallery.current(), start);
        }
    }
}

#[test]
fn offsets_stay_inside_the_symmetric_range() {
    for len in 1..=12 {
        for start in 0..len {
            let mut gallery = GalleryState::new(len);
            gallery.jump(start);
            let half = (len / 2) as i32;
            for index in 0..len {
                let offset = gallery.offset_of(index);
                assert!(
                    -half <= offset && offset <= half,
                    "len {} current {} index {} gave offset {}",
                    len,
                    start,
                    index,
                    offset
                );
            }
        }
    }
}

#[test]
fn the_centered_slide_always_has_offset_zero() {
    for len in 1..=12 {
        for start in 0..len {
            let mut gallery = GalleryState::new(len);
            gallery.jump(start);
            assert_eq!(gallery.offset_of(start), 0);
        }
    }
}

#[test]
fn every_offset_names_a_distinct_slide() {
    let mut gallery = GalleryState::new(7);
    gallery.jump(3);
    let mut offsets: Vec<i32> = (0..7).map(|index| gallery.offset_of(index)).collect();
    offsets.sort_unstable();
    assert_eq!(offsets, vec![-3, -2, -1, 0, 1, 2, 3]);
}

#[test]
fn empty_gallery_never_divides_by_zero() {
    let mut gallery = GalleryState::new(0);
    gallery.advance();
    gallery.retreat();
    gallery.jump(0);
    assert_eq!(gallery.current(), 0);
    assert_eq!(gallery.offset_of(0), 0);
}

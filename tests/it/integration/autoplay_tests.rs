//! Autoplay, hover, and touch-linger workflows driven through Showboard.

use crate::helpers::{board_over, gallery_board, ms, TestCatalogBuilder};

#[test]
fn idle_galleries_advance_every_three_seconds() {
    let (mut board, start) = gallery_board();

    board.tick(start + ms(2999));
    assert_eq!(board.sections[0].gallery.current(), 0);

    board.tick(start + ms(3000));
    assert_eq!(board.sections[0].gallery.current(), 1);

    board.tick(start + ms(6000));
    assert_eq!(board.sections[0].gallery.current(), 2);
}

#[test]
fn hover_pauses_autoplay_and_leaving_rearms_it() {
    let (mut board, start) = gallery_board();

    board.handle_gallery_enter(0);
    board.tick(start + ms(3000));
    assert_eq!(board.sections[0].gallery.current(), 0);

    board.handle_gallery_leave(0, start + ms(4000));
    board.tick(start + ms(6999));
    assert_eq!(board.sections[0].gallery.current(), 0);
    board.tick(start + ms(7000));
    assert_eq!(board.sections[0].gallery.current(), 1);
}

#[test]
fn holding_a_drag_keeps_autoplay_quiet() {
    let (mut board, start) = gallery_board();

    board.handle_pointer_down(0, 0.0, start + ms(1000));
    board.tick(start + ms(3000));
    assert_eq!(board.sections[0].gallery.current(), 0);

    // A motionless release re-arms from the release instant.
    board.handle_pointer_up(0, start + ms(3500));
    board.tick(start + ms(6500));
    assert_eq!(board.sections[0].gallery.current(), 1);
}

#[test]
fn a_lifted_touch_lingers_before_autoplay_resumes() {
    let (mut board, start) = gallery_board();

    board.handle_touch_start(0, 0.0, start);
    board.handle_touch_end(0, start + ms(100));

    // Linger runs to +3100, then autoplay needs its own three seconds.
    board.tick(start + ms(3100));
    assert_eq!(board.sections[0].gallery.current(), 0);
    board.tick(start + ms(6099));
    assert_eq!(board.sections[0].gallery.current(), 0);
    board.tick(start + ms(6100));
    assert_eq!(board.sections[0].gallery.current(), 1);
}

#[test]
fn sections_play_independently() {
    let catalog = TestCatalogBuilder::new()
        .with_member("painters", 6, 1)
        .with_member("welders", 6, 1)
        .build();
    let (mut board, start) = board_over(catalog);

    board.handle_gallery_enter(0);
    board.tick(start + ms(3000));
    assert_eq!(board.sections[0].gallery.current(), 0, "hovered section holds");
    assert_eq!(board.sections[1].gallery.current(), 1, "the other plays on");
}

#[test]
fn single_image_sections_schedule_nothing() {
    let catalog = TestCatalogBuilder::new().with_member("solo", 1, 1).build();
    let (mut board, start) = board_over(catalog);

    assert!(board.sections[0].next_deadline().is_none());
    board.tick(start + ms(60_000));
    assert_eq!(board.sections[0].gallery.current(), 0);
}

#[test]
fn profile_cards_rotate_through_the_page_tick() {
    let (mut board, start) = gallery_board();
    assert_eq!(board.section_frame(0).unwrap().profile.unwrap().index, 0);

    board.tick(start + ms(4000));
    assert_eq!(board.section_frame(0).unwrap().profile.unwrap().index, 1);

    board.handle_profile_enter(0);
    board.tick(start + ms(8000));
    assert_eq!(board.section_frame(0).unwrap().profile.unwrap().index, 1);

    board.handle_profile_leave(0, start + ms(9000));
    board.tick(start + ms(13000));
    assert_eq!(board.section_frame(0).unwrap().profile.unwrap().index, 2);
}

#[test]
fn the_hero_line_animates_through_the_page_tick() {
    use showboard::rotator::TextPhase;

    let (mut board, start) = gallery_board();
    let frame = board.hero_frame();
    assert_eq!(frame.prefix, "United by creativity, we are");
    assert_eq!(frame.text, "Artists.");
    assert_eq!(frame.phase, TextPhase::In);

    board.tick(start + ms(2600));
    assert_eq!(board.hero_frame().phase, TextPhase::Out);

    board.tick(start + ms(3200));
    let frame = board.hero_frame();
    assert_eq!(frame.phase, TextPhase::Reset);
    assert_eq!(frame.text, "Developers.");
}

#[test]
fn next_deadline_reports_the_soonest_pending_work() {
    let (board, start) = gallery_board();
    // Hero cycle at +2600 beats autoplay (+3000) and profiles (+4000).
    assert_eq!(board.next_deadline(), Some(start + ms(2600)));

    let (mut board, _start) = gallery_board();
    board.teardown();
    assert_eq!(board.next_deadline(), None);
}

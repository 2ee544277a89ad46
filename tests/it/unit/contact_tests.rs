//! Unit tests for contact form submission.

use std::time::Instant;

use showboard::contact::{ContactForm, ContactState, FormError};

use crate::helpers::ms;

fn filled() -> ContactForm {
    ContactForm {
        name: "Ada".into(),
        email: "ada@example.com".into(),
        subject: "Commission".into(),
        message: "I have a banner in mind.".into(),
    }
}

#[test]
fn each_missing_field_is_its_own_error() {
    let cases: [(fn(&mut ContactForm), FormError); 4] = [
        (|form| form.name.clear(), FormError::NameRequired),
        (|form| form.email.clear(), FormError::EmailRequired),
        (|form| form.subject.clear(), FormError::SubjectRequired),
        (|form| form.message.clear(), FormError::MessageRequired),
    ];
    for (clear, expected) in cases {
        let mut form = filled();
        clear(&mut form);
        assert_eq!(form.validate(), Err(expected));
    }
}

#[test]
fn an_email_without_at_is_invalid() {
    let mut form = filled();
    form.email = "ada.example.com".into();
    assert_eq!(form.validate(), Err(FormError::EmailInvalid));
}

#[test]
fn mailto_url_is_byte_stable() {
    let url = filled().mailto_url("the.creatorz.team@gmail.com");
    insta::assert_snapshot!(url, @"mailto:the.creatorz.team@gmail.com?subject=Commission&body=Hi%2C%20my%20name%20is%20Ada%20%28ada%40example.com%29.%0A%0AI%20have%20a%20banner%20in%20mind.");
}

#[test]
fn successful_submission_shows_the_notice_for_five_seconds() {
    let start = Instant::now();
    let mut state = ContactState::default();
    state.form = filled();

    let url = state.submit("team@example.com", start).unwrap();
    assert!(url.starts_with("mailto:team@example.com?"));

    assert!(state.notice_visible(start + ms(4999)));
    assert!(!state.notice_visible(start + ms(5000)));
}

#[test]
fn failed_submission_shows_no_notice() {
    let start = Instant::now();
    let mut state = ContactState::default();
    assert_eq!(state.submit("team@example.com", start), Err(FormError::NameRequired));
    assert!(!state.notice_visible(start));
}

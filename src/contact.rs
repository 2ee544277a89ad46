//! Contact form validation and mailto composition.
//!
//! The site has no backend: a valid submission composes a `mailto:` URL for
//! the host to open, and a short-lived notice confirms it happened.

use std::time::Instant;

use thiserror::Error;

use crate::constants::SUBMIT_NOTICE;

/// Why a submission was refused.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("Name is required")]
    NameRequired,
    #[error("Email is required")]
    EmailRequired,
    #[error("Email address looks invalid")]
    EmailInvalid,
    #[error("Subject is required")]
    SubjectRequired,
    #[error("Message is required")]
    MessageRequired,
}

/// The four fields of the contact form, as typed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    /// Check every field, reporting the first problem in display order.
    /// Whitespace-only input does not count as filled in.
    pub fn validate(&self) -> Result<(), FormError> {
        if self.name.trim().is_empty() {
            return Err(FormError::NameRequired);
        }
        let email = self.email.trim();
        if email.is_empty() {
            return Err(FormError::EmailRequired);
        }
        if !email.contains('@') {
            return Err(FormError::EmailInvalid);
        }
        if self.subject.trim().is_empty() {
            return Err(FormError::SubjectRequired);
        }
        if self.message.trim().is_empty() {
            return Err(FormError::MessageRequired);
        }
        Ok(())
    }

    /// Compose the `mailto:` URL a submission opens. Subject and body are
    /// percent-encoded; the fields go in as typed.
    pub fn mailto_url(&self, recipient: &str) -> String {
        let body = format!(
            "Hi, my name is {} ({}).\n\n{}",
            self.name, self.email, self.message
        );
        format!(
            "mailto:{}?subject={}&body={}",
            recipient,
            urlencoding::encode(&self.subject),
            urlencoding::encode(&body)
        )
    }
}

/// The contact section: the form being typed plus the submission notice.
#[derive(Clone, Debug, Default)]
pub struct ContactState {
    pub form: ContactForm,
    submitted_at: Option<Instant>,
}

impl ContactState {
    /// Validate the form and compose its mailto URL. On success the
    /// submission notice starts its countdown; the fields stay as typed.
    pub fn submit(&mut self, recipient: &str, now: Instant) -> Result<String, FormError> {
        self.form.validate()?;
        self.submitted_at = Some(now);
        Ok(self.form.mailto_url(recipient))
    }

    /// Whether the "message ready" notice is still showing.
    pub fn notice_visible(&self, now: Instant) -> bool {
        self.submitted_at
            .is_some_and(|at| now < at + SUBMIT_NOTICE)
    }
}

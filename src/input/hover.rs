//! Hover and touch transitions that gate autoplay.
//!
//! Autoplay only runs while a gallery is neither hovered nor dragged. Mouse
//! enter and leave toggle the hover directly; touch maps onto the same flag,
//! except a lifted finger keeps the gallery "hovered" for a few seconds so
//! autoplay does not snatch the slide away mid-look.

use std::time::Instant;

use crate::app::Showboard;

impl Showboard {
    /// Mouse entered a section's gallery.
    pub fn handle_gallery_enter(&mut self, section: usize) {
        let Some(state) = self.sections.get_mut(section) else { return };
        state.hovered = true;
        state.cancel_autoplay();
        state.cancel_linger();
    }

    /// Mouse left a section's gallery. Ends any in-flight drag first, then
    /// lets autoplay resume.
    pub fn handle_gallery_leave(&mut self, section: usize, now: Instant) {
        self.handle_pointer_up(section, now);
        let Some(state) = self.sections.get_mut(section) else { return };
        state.hovered = false;
        state.cancel_linger();
        state.arm_autoplay(now);
    }

    /// Finger down on a section's gallery. Counts as hover for autoplay and
    /// starts the drag.
    pub fn handle_touch_start(&mut self, section: usize, x: f32, now: Instant) {
        if let Some(state) = self.sections.get_mut(section) {
            state.hovered = true;
            state.cancel_linger();
        }
        self.handle_pointer_down(section, x, now);
    }

    /// Finger lifted. Completes the release, then holds the hover for a
    /// linger period before autoplay may resume.
    pub fn handle_touch_end(&mut self, section: usize, now: Instant) {
        self.handle_pointer_up(section, now);
        if let Some(state) = self.sections.get_mut(section) {
            state.schedule_linger(now);
        }
    }

    /// Mouse entered a section's profile card; its rotation pauses.
    pub fn handle_profile_enter(&mut self, section: usize) {
        if let Some(state) = self.sections.get_mut(section) {
            state.profiles.pause();
        }
    }

    /// Mouse left a section's profile card; its rotation resumes afresh.
    pub fn handle_profile_leave(&mut self, section: usize, now: Instant) {
        if let Some(state) = self.sections.get_mut(section) {
            state.profiles.resume(now);
        }
    }
}

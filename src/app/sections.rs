//! Section timing - autoplay, momentum chains, and touch lingers.
//!
//! Every timed behavior of a section funnels through its own timer queue,
//! and every handle is cancelled the moment its behavior stops making
//! sense. Nothing fires late into state that moved on.

use std::time::Instant;

use crate::constants::{
    GALLERY_AUTOPLAY, MOMENTUM_SETTLE, MOMENTUM_STEP, TOUCH_LINGER, TRANSITION_MOMENTUM_MS,
    TRANSITION_STANDARD_MS,
};
use crate::gallery::{Direction, MomentumRun, ReleasePlan};

use super::{SectionEvent, SectionState};

impl SectionState {
    /// Fire this section's due timers, then the profile card's.
    pub fn tick(&mut self, now: Instant) {
        for event in self.timers.fire_due(now) {
            self.apply(event, now);
        }
        self.profiles.tick(now);
    }

    /// Arm the idle advance, replacing any pending one. Hovered, dragged,
    /// and single-image galleries stay unarmed.
    pub fn arm_autoplay(&mut self, now: Instant) {
        self.cancel_autoplay();
        if self.gallery.len() > 1 && !self.hovered && !self.drag.is_dragging() {
            self.autoplay_timer =
                Some(self.timers.schedule(now, GALLERY_AUTOPLAY, SectionEvent::Autoplay));
        }
    }

    pub fn cancel_autoplay(&mut self) {
        if let Some(handle) = self.autoplay_timer.take() {
            self.timers.cancel(handle);
        }
    }

    /// Start a momentum chain from a release plan. The first step lands
    /// immediately; the rest arrive through the timer.
    pub fn begin_momentum(&mut self, plan: ReleasePlan, now: Instant) {
        self.cancel_momentum();
        self.gallery.set_transition(TRANSITION_MOMENTUM_MS);
        self.step(plan.direction);
        if plan.steps > 1 {
            self.momentum = Some(MomentumRun {
                direction: plan.direction,
                remaining: plan.steps - 1,
            });
            self.momentum_timer =
                Some(self.timers.schedule(now, MOMENTUM_STEP, SectionEvent::MomentumStep));
        } else {
            self.momentum_timer = Some(self.timers.schedule(
                now,
                MOMENTUM_SETTLE,
                SectionEvent::RestoreTransition,
            ));
        }
    }

    /// Abandon the momentum chain: owed steps and the pending settle alike.
    /// The transition duration is left for the caller to set.
    pub fn cancel_momentum(&mut self) {
        self.momentum = None;
        if let Some(handle) = self.momentum_timer.take() {
            self.timers.cancel(handle);
        }
    }

    /// Keep the hover alive for the touch linger period, after which
    /// autoplay may resume.
    pub fn schedule_linger(&mut self, now: Instant) {
        self.cancel_linger();
        self.linger_timer =
            Some(self.timers.schedule(now, TOUCH_LINGER, SectionEvent::HoverLinger));
    }

    pub fn cancel_linger(&mut self) {
        if let Some(handle) = self.linger_timer.take() {
            self.timers.cancel(handle);
        }
    }

    /// Deliberate navigation: drop any momentum and step with the standard
    /// transition.
    pub fn nav_step(&mut self, direction: Direction) {
        self.cancel_momentum();
        self.gallery.set_transition(TRANSITION_STANDARD_MS);
        self.step(direction);
    }

    /// Deliberate navigation straight to a slide.
    pub fn nav_jump(&mut self, index: usize) {
        self.cancel_momentum();
        self.gallery.set_transition(TRANSITION_STANDARD_MS);
        self.gallery.jump(index);
    }

    /// The earliest instant any of this section's timers comes due.
    pub fn next_deadline(&self) -> Option<Instant> {
        let own = self.timers.next_deadline();
        let profiles = self.profiles.next_deadline();
        own.into_iter().chain(profiles).min()
    }

    /// Whether clicks on the gallery are being swallowed after a drag.
    pub fn clicks_suppressed(&self, now: Instant) -> bool {
        self.suppress_clicks_until
            .is_some_and(|until| now < until)
    }

    /// Cancel every pending timer this section owns.
    pub fn teardown(&mut self) {
        self.timers.clear();
        self.autoplay_timer = None;
        self.momentum_timer = None;
        self.linger_timer = None;
        self.momentum = None;
        self.profiles.teardown();
    }

    fn apply(&mut self, event: SectionEvent, now: Instant) {
        match event {
            SectionEvent::Autoplay => {
                self.autoplay_timer = None;
                self.gallery.advance();
                self.arm_autoplay(now);
            }
            SectionEvent::MomentumStep => {
                self.momentum_timer = None;
                self.momentum_step(now);
            }
            SectionEvent::RestoreTransition => {
                self.momentum_timer = None;
                self.gallery.set_transition(TRANSITION_STANDARD_MS);
            }
            SectionEvent::HoverLinger => {
                self.linger_timer = None;
                self.hovered = false;
                self.arm_autoplay(now);
            }
        }
    }

    fn momentum_step(&mut self, now: Instant) {
        let Some(mut run) = self.momentum else {
            return;
        };
        self.step(run.direction);
        run.remaining -= 1;
        if run.remaining > 0 {
            self.momentum = Some(run);
            self.momentum_timer =
                Some(self.timers.schedule(now, MOMENTUM_STEP, SectionEvent::MomentumStep));
        } else {
            self.momentum = None;
            self.momentum_timer = Some(self.timers.schedule(
                now,
                MOMENTUM_SETTLE,
                SectionEvent::RestoreTransition,
            ));
        }
    }

    fn step(&mut self, direction: Direction) {
        match direction {
            Direction::Forward => self.gallery.advance(),
            Direction::Backward => self.gallery.retreat(),
        }
    }
}

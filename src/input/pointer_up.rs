//! Release handling - plans where the freed gallery travels.
//!
//! A release turns the drag's final distance and velocity into a travel
//! plan: fast flicks step several slides through the momentum timer, long
//! slow drags step once, and short dawdles snap back. Real drags also start
//! the brief window during which clicks on the gallery stay swallowed.

use std::time::Instant;

use crate::app::Showboard;
use crate::constants::{CLICK_SUPPRESS, TRANSITION_STANDARD_MS};
use crate::gallery::plan_release;

impl Showboard {
    /// Pointer released over a section's gallery.
    pub fn handle_pointer_up(&mut self, section: usize, now: Instant) {
        let Some(state) = self.sections.get_mut(section) else { return };
        let Some(end) = state.drag.finish() else { return };

        if end.moved {
            state.suppress_clicks_until = Some(now + CLICK_SUPPRESS);
        }

        let plan = plan_release(end.distance, end.velocity);
        if plan.steps == 0 {
            // Nothing to travel: restore easing so the track snaps back
            // smoothly from wherever the pointer left it.
            state.gallery.set_transition(TRANSITION_STANDARD_MS);
        } else {
            state.begin_momentum(plan, now);
        }

        if !state.hovered {
            state.arm_autoplay(now);
        }
    }
}

//! Press handling - starts a drag and quiets everything that would fight it.
//!
//! A press takes manual control of the gallery: any running momentum chain
//! is cancelled, autoplay stops, and slide transitions drop to zero so the
//! track follows the pointer with no easing lag.

use std::time::Instant;

use crate::app::Showboard;

impl Showboard {
    /// Pointer pressed at horizontal position `x` over a section's gallery.
    pub fn handle_pointer_down(&mut self, section: usize, x: f32, now: Instant) {
        let Some(state) = self.sections.get_mut(section) else {
            tracing::debug!("pointer down on unknown section {}", section);
            return;
        };

        state.cancel_momentum();
        state.cancel_autoplay();
        state.suppress_clicks_until = None;
        state.gallery.set_transition(0);
        state.drag.begin(x, now);
    }
}

//! Move handling - feeds pointer samples into the active drag.
//!
//! Moves arrive at display rate while a drag is held, so this path stays
//! minimal: position bookkeeping and the velocity blend, nothing else.

use std::time::Instant;

use crate::app::Showboard;

impl Showboard {
    /// Pointer moved to horizontal position `x`. Ignored when no drag is
    /// in progress on that section.
    pub fn handle_pointer_move(&mut self, section: usize, x: f32, now: Instant) {
        if let Some(state) = self.sections.get_mut(section) {
            state.drag.track(x, now);
        }
    }
}

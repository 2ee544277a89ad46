//! Circular slide position for one gallery.

use crate::constants::TRANSITION_STANDARD_MS;

/// Position and transition state of one circular gallery.
///
/// Indices wrap in both directions, so there is no first or last slide. A
/// gallery with zero or one slides is inert: stepping keeps the current
/// index and every offset reads zero.
#[derive(Clone, Debug)]
pub struct GalleryState {
    len: usize,
    current: usize,
    transition_ms: u64,
}

impl GalleryState {
    pub fn new(len: usize) -> Self {
        Self {
            len,
            current: 0,
            transition_ms: TRANSITION_STANDARD_MS,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Index of the centered slide.
    pub fn current(&self) -> usize {
        self.current
    }

    /// Transition duration the host should animate slide moves with.
    pub fn transition_ms(&self) -> u64 {
        self.transition_ms
    }

    pub fn set_transition(&mut self, ms: u64) {
        self.transition_ms = ms;
    }

    /// Step forward one slide, wrapping past the end.
    pub fn advance(&mut self) {
        if self.len > 1 {
            self.current = (self.current + 1) % self.len;
        }
    }

    /// Step back one slide, wrapping past the start.
    pub fn retreat(&mut self) {
        if self.len > 1 {
            self.current = (self.current + self.len - 1) % self.len;
        }
    }

    /// Center `index` directly. Out-of-range targets are ignored.
    pub fn jump(&mut self, index: usize) {
        if index < self.len {
            self.current = index;
        } else {
            tracing::debug!("ignoring jump to slide {} of {}", index, self.len);
        }
    }

    /// Signed circular distance from the centered slide to `index`, taking
    /// the shorter way around the ring. An index exactly opposite keeps the
    /// sign of its raw difference.
    pub fn offset_of(&self, index: usize) -> i32 {
        if self.len <= 1 || index >= self.len {
            return 0;
        }
        let len = self.len as i32;
        let mut diff = index as i32 - self.current as i32;
        if diff > len / 2 {
            diff -= len;
        } else if diff < -(len / 2) {
            diff += len;
        }
        diff
    }
}

//! Drag state machine - tracks one pointer drag across a gallery.
//!
//! Each gallery section owns one `DragState`, so a drag on one gallery never
//! leaks into another. The machine keeps the numbers a release is judged by:
//! total displacement, a smoothed velocity, and whether the pointer ever
//! travelled far enough to stop counting as a click.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> Dragging    (pointer down on the gallery)
//! Dragging -> Idle    (pointer up - the final numbers feed release planning)
//! ```

use std::time::Instant;

use crate::constants::{DRAG_SLOP_PX, VELOCITY_SMOOTHING};

/// Everything a finished drag is judged by.
#[derive(Clone, Copy, Debug)]
pub struct DragEnd {
    /// Total signed displacement from the press point, in pixels
    pub distance: f32,
    /// Smoothed velocity at release, in px/ms
    pub velocity: f32,
    /// Whether the pointer ever left the click slop radius
    pub moved: bool,
}

/// Tracks one pointer drag from press to release.
#[derive(Clone, Debug)]
pub enum DragState {
    /// No pointer held down
    Idle,

    /// Pointer held down and possibly moving
    Dragging {
        /// Horizontal position where the pointer went down
        start_x: f32,
        /// Most recent pointer position
        current_x: f32,
        /// Position at the previous sample, for instantaneous velocity
        last_x: f32,
        /// Timestamp of the previous sample
        last_sample: Instant,
        /// Exponentially smoothed velocity in px/ms, negative leftward
        velocity: f32,
        /// Latches once the pointer leaves the click slop radius
        moved: bool,
    },
}

impl Default for DragState {
    fn default() -> Self {
        Self::Idle
    }
}

impl DragState {
    /// Returns true if no drag is in progress
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Returns true if the pointer is held down
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging { .. })
    }

    /// Returns true if the held pointer has left the click slop radius
    pub fn has_moved(&self) -> bool {
        matches!(self, Self::Dragging { moved: true, .. })
    }

    /// Live displacement from the press point, zero while idle
    pub fn offset_px(&self) -> f32 {
        match self {
            Self::Dragging {
                start_x, current_x, ..
            } => current_x - start_x,
            Self::Idle => 0.0,
        }
    }

    /// Current smoothed velocity in px/ms, zero while idle
    pub fn velocity(&self) -> f32 {
        match self {
            Self::Dragging { velocity, .. } => *velocity,
            Self::Idle => 0.0,
        }
    }

    /// Start tracking a drag at horizontal position `x`.
    pub fn begin(&mut self, x: f32, now: Instant) {
        *self = Self::Dragging {
            start_x: x,
            current_x: x,
            last_x: x,
            last_sample: now,
            velocity: 0.0,
            moved: false,
        };
    }

    /// Feed a pointer move into the drag. Does nothing while idle.
    ///
    /// Velocity blends the instantaneous speed of this sample with the
    /// previous estimate. Samples landing inside the same millisecond keep
    /// the old velocity but still update the tracked position, so a burst
    /// of events cannot divide by zero or spike the estimate.
    pub fn track(&mut self, x: f32, now: Instant) {
        let Self::Dragging {
            start_x,
            current_x,
            last_x,
            last_sample,
            velocity,
            moved,
        } = self
        else {
            return;
        };

        let elapsed_ms = now.saturating_duration_since(*last_sample).as_millis();
        if elapsed_ms > 0 {
            let instantaneous = (x - *last_x) / elapsed_ms as f32;
            *velocity =
                VELOCITY_SMOOTHING * instantaneous + (1.0 - VELOCITY_SMOOTHING) * *velocity;
        }

        *current_x = x;
        *last_x = x;
        *last_sample = now;

        if (x - *start_x).abs() > DRAG_SLOP_PX {
            *moved = true;
        }
    }

    /// End the drag and report its final numbers. Returns `None` when no
    /// drag was in progress.
    pub fn finish(&mut self) -> Option<DragEnd> {
        let Self::Dragging {
            start_x,
            current_x,
            velocity,
            moved,
            ..
        } = *self
        else {
            return None;
        };

        *self = Self::Idle;
        Some(DragEnd {
            distance: current_x - start_x,
            velocity,
            moved,
        })
    }
}

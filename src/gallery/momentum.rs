//! Turning a released drag into a travel plan.

use crate::constants::{
    DIRECTION_VELOCITY_MIN, FLICK_VELOCITY_FAST, FLICK_VELOCITY_MAX, FLICK_VELOCITY_MEDIUM,
    STEP_DISTANCE_PX,
};

/// Which way a release travels around the ring.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    /// Toward higher indices (the drag moved left)
    Forward,
    /// Toward lower indices (the drag moved right)
    Backward,
}

/// What a pointer release should do: travel `steps` slides in `direction`,
/// or snap back to the current slide when `steps` is zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReleasePlan {
    pub direction: Direction,
    pub steps: u32,
}

/// The portion of a release still outstanding while its steps are being
/// fed through the momentum timer.
#[derive(Clone, Copy, Debug)]
pub struct MomentumRun {
    pub direction: Direction,
    pub remaining: u32,
}

/// Decide where a released drag travels.
///
/// Velocity picks the direction when the release was fast enough to trust;
/// otherwise the sign of the dragged distance decides. Step count degrades
/// from flick speed down to a plain distance check, and a short slow drag
/// plans zero steps so the gallery snaps back where it was.
pub fn plan_release(distance: f32, velocity: f32) -> ReleasePlan {
    let direction = if velocity.abs() > DIRECTION_VELOCITY_MIN {
        if velocity < 0.0 {
            Direction::Forward
        } else {
            Direction::Backward
        }
    } else if distance < 0.0 {
        Direction::Forward
    } else {
        Direction::Backward
    };

    let speed = velocity.abs();
    let steps = if speed > FLICK_VELOCITY_MAX {
        4
    } else if speed > FLICK_VELOCITY_FAST {
        3
    } else if speed > FLICK_VELOCITY_MEDIUM {
        2
    } else if distance.abs() > STEP_DISTANCE_PX {
        1
    } else {
        0
    };

    ReleasePlan { direction, steps }
}

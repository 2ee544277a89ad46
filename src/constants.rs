//! Application-wide constants.
//!
//! Centralizes the interaction tuning values in one place. Most of these were
//! dialled in by hand against the live site, so the exact numbers matter.

use std::time::Duration;

// ============================================================================
// Gallery Dragging
// ============================================================================

/// Pointer travel in pixels below which a drag still counts as a click
pub const DRAG_SLOP_PX: f32 = 5.0;

/// Weight of the newest sample when smoothing drag velocity; the remainder
/// carries the previous estimate so single events cannot spike the release
pub const VELOCITY_SMOOTHING: f32 = 0.7;

/// How long clicks on a gallery stay ignored after a real drag ends
pub const CLICK_SUPPRESS: Duration = Duration::from_millis(100);

// ============================================================================
// Release Momentum
// ============================================================================

/// Minimum release speed (px/ms) for velocity to pick the travel direction;
/// below this the sign of the dragged distance picks it instead
pub const DIRECTION_VELOCITY_MIN: f32 = 0.2;

/// Release speed (px/ms) above which a flick travels four slides
pub const FLICK_VELOCITY_MAX: f32 = 2.5;

/// Release speed (px/ms) above which a flick travels three slides
pub const FLICK_VELOCITY_FAST: f32 = 1.5;

/// Release speed (px/ms) above which a flick travels two slides
pub const FLICK_VELOCITY_MEDIUM: f32 = 0.6;

/// Dragged distance in pixels past which a slow release still travels one
/// slide; anything shorter and slower snaps back
pub const STEP_DISTANCE_PX: f32 = 50.0;

/// Gap between the queued steps of a multi-slide momentum run
pub const MOMENTUM_STEP: Duration = Duration::from_millis(150);

/// Delay after the last momentum step before the standard transition returns
pub const MOMENTUM_SETTLE: Duration = Duration::from_millis(300);

// ============================================================================
// Slide Transitions
// ============================================================================

/// Transition duration in milliseconds while a momentum run is stepping
pub const TRANSITION_MOMENTUM_MS: u64 = 300;

/// Transition duration in milliseconds for settled navigation
pub const TRANSITION_STANDARD_MS: u64 = 500;

/// Furthest slide offset from center that is still laid out; slides beyond
/// this are dropped from the frame entirely
pub const VISIBLE_OFFSET_MAX: i32 = 2;

// ============================================================================
// Autoplay & Rotation
// ============================================================================

/// Idle delay between automatic gallery advances
pub const GALLERY_AUTOPLAY: Duration = Duration::from_millis(3000);

/// How long a touch keeps its gallery "hovered" after the finger lifts
pub const TOUCH_LINGER: Duration = Duration::from_millis(3000);

/// Delay between automatic profile-card advances
pub const PROFILE_ROTATE: Duration = Duration::from_millis(4000);

// ============================================================================
// Hero Text Rotator
// ============================================================================

/// How long each rotating word stays fully visible before animating out
pub const TEXT_DISPLAY: Duration = Duration::from_millis(2000);

/// Duration of the slide-out (and slide-in) animation for rotating text
pub const TEXT_ANIMATION: Duration = Duration::from_millis(600);

/// Gap between snapping the next word to its start position and letting it
/// animate in; long enough for the host to paint the reset state once
pub const TEXT_RESET_GAP: Duration = Duration::from_millis(20);

/// Static lead-in shown before the rotating word
pub const HERO_PREFIX: &str = "United by creativity, we are";

/// Words cycled through the hero line
pub const HERO_ROTATING_TEXTS: [&str; 5] =
    ["Artists.", "Developers.", "Editors.", "Creators.", "Dreamers."];

// ============================================================================
// Navigation
// ============================================================================

/// How long section-visibility reports are ignored after a nav click, so the
/// smooth scroll to the target cannot fight the clicked highlight
pub const NAV_SCROLL_SUPPRESS: Duration = Duration::from_millis(1000);

// ============================================================================
// Contact Form
// ============================================================================

/// Recipient address for composed mailto links
pub const CONTACT_RECIPIENT: &str = "the.creatorz.team@gmail.com";

/// How long the submitted notice stays up after composing a message
pub const SUBMIT_NOTICE: Duration = Duration::from_millis(5000);

//! Timed rotators.
//!
//! Two small machines share the cooperative timer model: the profile card
//! cycling through a member's contacts, and the hero line cycling through
//! its words with a three-phase slide animation.

use std::time::Instant;

use crate::constants::{PROFILE_ROTATE, TEXT_ANIMATION, TEXT_DISPLAY, TEXT_RESET_GAP};
use crate::timer::{TimerHandle, TimerQueue};

// ============================================================================
// Profile Cards
// ============================================================================

/// Cycles a member's profile card through its contacts.
///
/// The card advances on a countdown unless hovered; any step, manual or
/// automatic, restarts that countdown from scratch. A card with a single
/// profile never schedules anything.
#[derive(Debug)]
pub struct ProfileRotator {
    len: usize,
    current: usize,
    paused: bool,
    timers: TimerQueue<()>,
    pending: Option<TimerHandle>,
}

impl ProfileRotator {
    pub fn new(len: usize, now: Instant) -> Self {
        let mut rotator = Self {
            len,
            current: 0,
            paused: false,
            timers: TimerQueue::new(),
            pending: None,
        };
        rotator.arm(now);
        rotator
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Index of the profile currently shown.
    pub fn current(&self) -> usize {
        self.current
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Whether there is anything to rotate through.
    pub fn has_multiple(&self) -> bool {
        self.len > 1
    }

    /// Fire a due rotation, if any.
    pub fn tick(&mut self, now: Instant) {
        for () in self.timers.fire_due(now) {
            self.pending = None;
            self.step_forward();
            self.arm(now);
        }
    }

    /// Manual step to the next profile; restarts the countdown.
    pub fn advance(&mut self, now: Instant) {
        self.step_forward();
        self.arm(now);
    }

    /// Manual step to the previous profile; restarts the countdown.
    pub fn retreat(&mut self, now: Instant) {
        self.step_backward();
        self.arm(now);
    }

    /// Stop rotating while the card is hovered.
    pub fn pause(&mut self) {
        self.paused = true;
        self.cancel_pending();
    }

    /// Resume rotating with a fresh countdown.
    pub fn resume(&mut self, now: Instant) {
        self.paused = false;
        self.arm(now);
    }

    /// Drop any pending rotation for good.
    pub fn teardown(&mut self) {
        self.pending = None;
        self.timers.clear();
    }

    /// When the next automatic rotation comes due, if one is armed.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.timers.next_deadline()
    }

    fn arm(&mut self, now: Instant) {
        self.cancel_pending();
        if self.has_multiple() && !self.paused {
            self.pending = Some(self.timers.schedule(now, PROFILE_ROTATE, ()));
        }
    }

    fn cancel_pending(&mut self) {
        if let Some(handle) = self.pending.take() {
            self.timers.cancel(handle);
        }
    }

    fn step_forward(&mut self) {
        if self.has_multiple() {
            self.current = (self.current + 1) % self.len;
        }
    }

    fn step_backward(&mut self) {
        if self.has_multiple() {
            self.current = (self.current + self.len - 1) % self.len;
        }
    }
}

// ============================================================================
// Hero Line
// ============================================================================

/// Animation phase of the rotating hero word.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextPhase {
    /// Settled in place, fully visible
    In,
    /// Sliding out of view
    Out,
    /// Next word snapped to its start position, about to slide in
    Reset,
}

#[derive(Clone, Copy, Debug)]
enum TextEvent {
    /// Begin sliding the current word out
    CycleStart,
    /// Swap the next word in at its start position
    Advance,
    /// Let the swapped word slide into place
    Settle,
}

/// Cycles the hero line through its words.
///
/// Each cycle shows a word for the display period, slides it out, snaps the
/// next word to its start position, and slides that in. With one word or
/// none the rotator shows it forever and never schedules anything.
#[derive(Debug)]
pub struct TextRotator {
    texts: Vec<String>,
    current: usize,
    phase: TextPhase,
    timers: TimerQueue<TextEvent>,
}

impl TextRotator {
    pub fn new(texts: Vec<String>, now: Instant) -> Self {
        let mut rotator = Self {
            texts,
            current: 0,
            phase: TextPhase::In,
            timers: TimerQueue::new(),
        };
        rotator.schedule_cycle(now);
        rotator
    }

    /// The word currently on screen.
    pub fn current_text(&self) -> Option<&str> {
        self.texts.get(self.current).map(String::as_str)
    }

    pub fn phase(&self) -> TextPhase {
        self.phase
    }

    /// Fire any due phase changes, in order.
    pub fn tick(&mut self, now: Instant) {
        for event in self.timers.fire_due(now) {
            self.apply(event, now);
        }
    }

    /// Drop every pending phase change.
    pub fn teardown(&mut self) {
        self.timers.clear();
    }

    /// When the next phase change comes due, if any is pending.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.timers.next_deadline()
    }

    fn schedule_cycle(&mut self, now: Instant) {
        if self.texts.len() > 1 {
            self.timers
                .schedule(now, TEXT_DISPLAY + TEXT_ANIMATION, TextEvent::CycleStart);
        }
    }

    fn apply(&mut self, event: TextEvent, now: Instant) {
        match event {
            TextEvent::CycleStart => {
                self.phase = TextPhase::Out;
                self.timers.schedule(now, TEXT_ANIMATION, TextEvent::Advance);
                self.schedule_cycle(now);
            }
            TextEvent::Advance => {
                self.current = (self.current + 1) % self.texts.len();
                self.phase = TextPhase::Reset;
                self.timers.schedule(now, TEXT_RESET_GAP, TextEvent::Settle);
            }
            TextEvent::Settle => {
                self.phase = TextPhase::In;
            }
        }
    }
}

use std::time::Duration;

/// Delays of the three confetti pops, measured from entering the card screen.
pub const CELEBRATION_POPS: [Duration; 3] = [
    Duration::from_millis(800),
    Duration::from_millis(1600),
    Duration::from_millis(2400),
];

/// Time between the last pop and the celebration counting as finished.
pub const CELEBRATION_COMPLETE_DELAY: Duration = Duration::from_millis(1000);

/// Settle time between the celebration finishing and the next control appearing.
pub const NEXT_CONTROL_SETTLE: Duration = Duration::from_millis(1500);

/// Lifetime of a wrong-answer banner on the quiz.
pub const FEEDBACK_DISMISS: Duration = Duration::from_millis(3000);

/// Artificial "verifying" pause on the login form.
pub const LOGIN_VERIFY_DELAY: Duration = Duration::from_millis(800);

/// Delay before the music player tries to start playback after login.
pub const AUTOPLAY_DELAY: Duration = Duration::from_millis(1000);

/// How long the wish panel shows "copied" after copying to the clipboard.
pub const COPIED_RESET: Duration = Duration::from_millis(2000);

/// Identity of one scheduled timer.
///
/// `generation` is the session's screen generation at scheduling time, so a
/// token outlives neither the screen entry that created it nor a re-entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerToken {
    generation: u64,
    seq: u64,
}

impl TimerToken {
    #[must_use]
    pub(crate) fn new(generation: u64, seq: u64) -> Self {
        Self { generation, seq }
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[must_use]
    pub fn seq(&self) -> u64 {
        self.seq
    }
}

/// What happens when a timer fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerKind {
    /// The n-th confetti pop (1-based).
    CelebrationPop(u8),
    CelebrationComplete,
    RevealNextControl,
    /// Clear quiz feedback carrying this serial, if it is still the one shown.
    DismissFeedback(u64),
}

/// A timer kind paired with its delay, before a token is assigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerSpec {
    pub kind: TimerKind,
    pub delay: Duration,
}

impl TimerSpec {
    #[must_use]
    pub const fn new(kind: TimerKind, delay: Duration) -> Self {
        Self { kind, delay }
    }
}

/// A timer the driver must run and hand back to `Session::fire`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerRequest {
    pub token: TimerToken,
    pub kind: TimerKind,
    pub delay: Duration,
}

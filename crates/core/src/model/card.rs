use crate::time::{
    CELEBRATION_COMPLETE_DELAY, CELEBRATION_POPS, NEXT_CONTROL_SETTLE, TimerKind, TimerSpec,
};

/// Progress of the celebration on the card screen.
///
/// Driven purely by timers: three pops, a completion beat, then a settle delay
/// before the next control becomes available.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardProgress {
    pops: u8,
    celebration_finished: bool,
    next_visible: bool,
}

impl CardProgress {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Timers scheduled when the screen is entered.
    #[must_use]
    pub fn entry_timers() -> Vec<TimerSpec> {
        CELEBRATION_POPS
            .iter()
            .zip(1_u8..)
            .map(|(delay, n)| TimerSpec::new(TimerKind::CelebrationPop(n), *delay))
            .collect()
    }

    #[must_use]
    pub fn pops(&self) -> u8 {
        self.pops
    }

    #[must_use]
    pub fn celebration_finished(&self) -> bool {
        self.celebration_finished
    }

    #[must_use]
    pub fn next_visible(&self) -> bool {
        self.next_visible
    }

    #[must_use]
    pub fn is_satisfied(&self) -> bool {
        self.next_visible
    }

    /// Record pop `n`; the last pop schedules the completion beat.
    pub fn pop(&mut self, n: u8) -> Option<TimerSpec> {
        let total = u8::try_from(CELEBRATION_POPS.len()).unwrap_or(u8::MAX);
        if n == 0 || n > total || n <= self.pops {
            return None;
        }
        self.pops = n;
        (n == total).then(|| {
            TimerSpec::new(TimerKind::CelebrationComplete, CELEBRATION_COMPLETE_DELAY)
        })
    }

    pub fn complete(&mut self) -> Option<TimerSpec> {
        if self.celebration_finished {
            return None;
        }
        self.celebration_finished = true;
        Some(TimerSpec::new(TimerKind::RevealNextControl, NEXT_CONTROL_SETTLE))
    }

    pub fn reveal_next(&mut self) -> bool {
        if !self.celebration_finished || self.next_visible {
            return false;
        }
        self.next_visible = true;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_schedules_three_pops() {
        let timers = CardProgress::entry_timers();
        let kinds: Vec<_> = timers.iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![
                TimerKind::CelebrationPop(1),
                TimerKind::CelebrationPop(2),
                TimerKind::CelebrationPop(3),
            ]
        );
    }

    #[test]
    fn full_sequence_unlocks_next() {
        let mut card = CardProgress::new();
        assert_eq!(card.pop(1), None);
        assert_eq!(card.pop(2), None);
        let complete = card.pop(3).expect("last pop schedules completion");
        assert_eq!(complete.kind, TimerKind::CelebrationComplete);
        assert!(!card.is_satisfied());

        let settle = card.complete().expect("completion schedules settle");
        assert_eq!(settle.delay, NEXT_CONTROL_SETTLE);
        assert!(card.celebration_finished());
        assert!(!card.is_satisfied());

        assert!(card.reveal_next());
        assert!(card.is_satisfied());
    }

    #[test]
    fn reveal_before_completion_is_ignored() {
        let mut card = CardProgress::new();
        assert!(!card.reveal_next());
        assert!(!card.next_visible());
    }

    #[test]
    fn repeated_or_out_of_range_pops_are_ignored() {
        let mut card = CardProgress::new();
        card.pop(2);
        assert_eq!(card.pop(1), None);
        assert_eq!(card.pop(2), None);
        assert_eq!(card.pop(9), None);
        assert_eq!(card.pops(), 2);
    }
}

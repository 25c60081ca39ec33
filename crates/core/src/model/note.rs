/// Distance from the bottom of the poem pane that still counts as "read to the end".
pub const SCROLL_END_TOLERANCE: f64 = 50.0;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NotePhase {
    #[default]
    Letter,
    Poem,
}

/// Scroll position of the poem pane, as reported by the renderer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollMetrics {
    pub offset: f64,
    pub content_height: f64,
    pub viewport_height: f64,
}

impl ScrollMetrics {
    #[must_use]
    pub fn reached_end(&self) -> bool {
        self.offset + self.viewport_height >= self.content_height - SCROLL_END_TOLERANCE
    }
}

/// Progress through the letter and the poem.
///
/// Leaving the screen forward needs the poem phase and the "read every word"
/// acknowledgment switched on. The acknowledgment can only be toggled on the
/// back of the flipped card, which in turn needs the scroll. Once given it
/// outlives the pane, so a trip back to the letter keeps the gate open.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteProgress {
    phase: NotePhase,
    scrolled_to_end: bool,
    flipped: bool,
    acknowledged: bool,
}

impl NoteProgress {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn phase(&self) -> NotePhase {
        self.phase
    }

    #[must_use]
    pub fn scrolled_to_end(&self) -> bool {
        self.scrolled_to_end
    }

    #[must_use]
    pub fn can_flip(&self) -> bool {
        self.phase == NotePhase::Poem && self.scrolled_to_end && !self.flipped
    }

    #[must_use]
    pub fn flipped(&self) -> bool {
        self.flipped
    }

    #[must_use]
    pub fn acknowledged(&self) -> bool {
        self.acknowledged
    }

    #[must_use]
    pub fn is_satisfied(&self) -> bool {
        self.phase == NotePhase::Poem && self.acknowledged
    }

    pub fn show_poem(&mut self) -> bool {
        if self.phase == NotePhase::Poem {
            return false;
        }
        self.phase = NotePhase::Poem;
        true
    }

    /// Back to the letter. The poem pane is torn down, so its scroll and flip
    /// state start over; the acknowledgment is kept.
    pub fn show_letter(&mut self) -> bool {
        if self.phase == NotePhase::Letter {
            return false;
        }
        self.phase = NotePhase::Letter;
        self.scrolled_to_end = false;
        self.flipped = false;
        true
    }

    pub fn record_scroll(&mut self, metrics: ScrollMetrics) -> bool {
        if self.phase != NotePhase::Poem || self.scrolled_to_end || !metrics.reached_end() {
            return false;
        }
        self.scrolled_to_end = true;
        true
    }

    pub fn flip(&mut self) -> bool {
        if !self.can_flip() {
            return false;
        }
        self.flipped = true;
        true
    }

    pub fn unflip(&mut self) -> bool {
        if !self.flipped {
            return false;
        }
        self.flipped = false;
        true
    }

    pub fn toggle_acknowledged(&mut self) -> bool {
        if !self.flipped {
            return false;
        }
        self.acknowledged = !self.acknowledged;
        true
    }
}

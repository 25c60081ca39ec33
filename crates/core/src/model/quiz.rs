use std::collections::BTreeSet;

use crate::time::{FEEDBACK_DISMISS, TimerKind, TimerSpec};

//
// ─── QUESTIONS ─────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizOption {
    pub text: &'static str,
    pub is_correct: bool,
    pub wrong_message: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Question {
    pub id: u32,
    pub text: &'static str,
    pub image: Option<&'static str>,
    pub options: &'static [QuizOption],
    /// No option is correct; the question is passed by trying every option.
    pub is_trick: bool,
}

const fn right(text: &'static str) -> QuizOption {
    QuizOption {
        text,
        is_correct: true,
        wrong_message: None,
    }
}

const fn wrong(text: &'static str, message: &'static str) -> QuizOption {
    QuizOption {
        text,
        is_correct: false,
        wrong_message: Some(message),
    }
}

pub const QUESTIONS: [Question; 5] = [
    Question {
        id: 1,
        text: "Do you think the person in this picture is pretty?",
        image: Some(
            "https://ik.imagekit.io/fcuinpkmj/37959ebc-8adc-4a56-ab5e-f3c85d389e8a.JPG?updatedAt=1769870920412",
        ),
        options: &[right("Yes"), wrong("No", "Are you blind or what? Try again.")],
        is_trick: false,
    },
    Question {
        id: 2,
        text: "When was our first conversation held?",
        image: None,
        options: &[
            right("15 June 2025"),
            wrong(
                "16 June 2025",
                "IDK if you're just senile or you don't care. Sob.",
            ),
        ],
        is_trick: false,
    },
    Question {
        id: 3,
        text: "What makes you special?",
        image: None,
        options: &[
            wrong("Looks", "Is that all? Try harder!"),
            wrong("Personality", "Meh, nice try. What else?"),
        ],
        is_trick: true,
    },
    Question {
        id: 4,
        text: "Who has the better taste in music?",
        image: None,
        options: &[
            right("Me (The Sender)"),
            wrong("You", "In your dreams! We all know it's me."),
        ],
        is_trick: false,
    },
    Question {
        id: 5,
        text: "How much do I appreciate you?",
        image: None,
        options: &[
            right("To the moon & back"),
            wrong("A normal amount", "Wrong! It's way more than normal!"),
        ],
        is_trick: false,
    },
];

pub const CORRECT_MESSAGE: &str = "Correct! You know your stuff!";
pub const DEFAULT_WRONG_MESSAGE: &str = "Try again!";
pub const TRICK_WRONG_MESSAGE: &str = "Wrong!";
pub const SURPRISE_MESSAGE: &str = "Why aren't you even confused? Of course it's everything, dumbass! You already read the previous page, right? \u{2764}\u{fe0f}";
pub const COMPLETE_MESSAGE: &str = "Quiz Complete! You're the best!";

//
// ─── FEEDBACK ──────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackKind {
    Success,
    Error,
    Surprise,
}

/// A banner shown after an answer. `serial` distinguishes successive banners
/// so a dismiss timer only clears the one it was scheduled for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feedback {
    pub kind: FeedbackKind,
    pub message: &'static str,
    pub serial: u64,
}

//
// ─── PROGRESS ──────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuizProgress {
    question_index: usize,
    answered: bool,
    clicked_trick_options: BTreeSet<usize>,
    feedback: Option<Feedback>,
    feedback_serial: u64,
    completed: bool,
}

impl QuizProgress {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn question_index(&self) -> usize {
        self.question_index
    }

    #[must_use]
    pub fn question_count(&self) -> usize {
        QUESTIONS.len()
    }

    /// The question on screen; `None` once the quiz is complete.
    #[must_use]
    pub fn current_question(&self) -> Option<&'static Question> {
        let questions: &'static [Question] = &QUESTIONS;
        questions.get(self.question_index)
    }

    #[must_use]
    pub fn answered(&self) -> bool {
        self.answered
    }

    #[must_use]
    pub fn next_visible(&self) -> bool {
        self.answered && !self.completed
    }

    #[must_use]
    pub fn feedback(&self) -> Option<Feedback> {
        self.feedback
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.completed
    }

    #[must_use]
    pub fn is_satisfied(&self) -> bool {
        self.completed
    }

    #[must_use]
    pub fn is_last_question(&self) -> bool {
        self.question_index + 1 == QUESTIONS.len()
    }

    /// Select option `option` on the current question.
    ///
    /// Wrong answers show a transient banner and return the timer that
    /// dismisses it. On the trick question every option is wrong; once each
    /// distinct option has been tried the surprise is shown and the question
    /// counts as answered.
    pub fn answer(&mut self, option: usize) -> Option<TimerSpec> {
        if self.completed {
            return None;
        }
        let question = self.current_question()?;
        let choice = question.options.get(option)?;

        if question.is_trick {
            if self.answered {
                return None;
            }
            self.clicked_trick_options.insert(option);
            if self.clicked_trick_options.len() >= question.options.len() {
                self.answered = true;
                self.show(FeedbackKind::Surprise, SURPRISE_MESSAGE);
                return None;
            }
            let message = choice.wrong_message.unwrap_or(TRICK_WRONG_MESSAGE);
            return Some(self.show_error(message));
        }

        if choice.is_correct {
            self.answered = true;
            self.show(FeedbackKind::Success, CORRECT_MESSAGE);
            None
        } else {
            let message = choice.wrong_message.unwrap_or(DEFAULT_WRONG_MESSAGE);
            Some(self.show_error(message))
        }
    }

    /// Clear an error banner if `serial` is still the one on screen.
    pub fn dismiss_feedback(&mut self, serial: u64) -> bool {
        match self.feedback {
            Some(feedback) if feedback.serial == serial && feedback.kind == FeedbackKind::Error => {
                self.feedback = None;
                true
            }
            _ => false,
        }
    }

    pub fn dismiss_surprise(&mut self) -> bool {
        match self.feedback {
            Some(feedback) if feedback.kind == FeedbackKind::Surprise => {
                self.feedback = None;
                true
            }
            _ => false,
        }
    }

    /// Move past an answered question; past the last one the quiz completes.
    pub fn next_question(&mut self) -> bool {
        if !self.next_visible() {
            return false;
        }
        self.feedback = None;
        self.answered = false;
        self.clicked_trick_options.clear();
        self.question_index += 1;
        if self.question_index >= QUESTIONS.len() {
            self.completed = true;
            self.show(FeedbackKind::Success, COMPLETE_MESSAGE);
        }
        true
    }

    fn show(&mut self, kind: FeedbackKind, message: &'static str) -> u64 {
        self.feedback_serial += 1;
        self.feedback = Some(Feedback {
            kind,
            message,
            serial: self.feedback_serial,
        });
        self.feedback_serial
    }

    fn show_error(&mut self, message: &'static str) -> TimerSpec {
        let serial = self.show(FeedbackKind::Error, message);
        TimerSpec::new(TimerKind::DismissFeedback(serial), FEEDBACK_DISMISS)
    }
}

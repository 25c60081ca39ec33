use crate::model::appreciation::AppreciationProgress;
use crate::model::card::CardProgress;
use crate::model::credentials::{AuthError, CredentialGate};
use crate::model::gallery::{ClosingState, GalleryState};
use crate::model::note::{NoteProgress, ScrollMetrics};
use crate::model::quiz::QuizProgress;
use crate::model::screen::Screen;
use crate::time::{TimerKind, TimerRequest, TimerSpec, TimerToken};

pub const DEFAULT_CAPTION: &str = "Happy Birthday!";

/// The current screen together with its completion tracker.
///
/// Each variant's tracker is built fresh on entry and dropped on exit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreenState {
    Login,
    Card(CardProgress),
    Note(NoteProgress),
    Appreciation(AppreciationProgress),
    Quiz(QuizProgress),
    Gallery(GalleryState),
    Closing(ClosingState),
}

impl ScreenState {
    fn enter(screen: Screen) -> (Self, Vec<TimerSpec>) {
        match screen {
            Screen::Login => (Self::Login, Vec::new()),
            Screen::Card => (Self::Card(CardProgress::new()), CardProgress::entry_timers()),
            Screen::Note => (Self::Note(NoteProgress::new()), Vec::new()),
            Screen::Appreciation => (Self::Appreciation(AppreciationProgress::new()), Vec::new()),
            Screen::Quiz => (Self::Quiz(QuizProgress::new()), Vec::new()),
            Screen::Gallery => (Self::Gallery(GalleryState::new()), Vec::new()),
            Screen::Closing => (Self::Closing(ClosingState::new()), Vec::new()),
        }
    }

    #[must_use]
    pub fn screen(&self) -> Screen {
        match self {
            Self::Login => Screen::Login,
            Self::Card(_) => Screen::Card,
            Self::Note(_) => Screen::Note,
            Self::Appreciation(_) => Screen::Appreciation,
            Self::Quiz(_) => Screen::Quiz,
            Self::Gallery(_) => Screen::Gallery,
            Self::Closing(_) => Screen::Closing,
        }
    }

    /// Forward-gate predicate of the current screen.
    ///
    /// `Login` is left only through the credential gate and `Closing` has no
    /// successor, so both report `false`.
    #[must_use]
    pub fn forward_unlocked(&self) -> bool {
        match self {
            Self::Login | Self::Closing(_) => false,
            Self::Card(card) => card.is_satisfied(),
            Self::Note(note) => note.is_satisfied(),
            Self::Appreciation(list) => list.is_satisfied(),
            Self::Quiz(quiz) => quiz.is_satisfied(),
            Self::Gallery(_) => true,
        }
    }
}

/// A user action inside the current screen.
///
/// Actions aimed at a screen that is not current are ignored.
#[derive(Debug, Clone, PartialEq)]
pub enum ScreenAction {
    EditCaption(String),
    ShowPoem,
    ShowLetter,
    PoemScrolled(ScrollMetrics),
    FlipPoem,
    UnflipPoem,
    ToggleReadEveryWord,
    ToggleAppreciation(String),
    RevealAppreciation,
    AnswerQuiz(usize),
    NextQuestion,
    DismissSurprise,
    HoverPhoto(Option<usize>),
    RevealEnd,
}

/// One viewing of the card: authentication plus the linear screen machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    state: ScreenState,
    authenticated: bool,
    caption: String,
    generation: u64,
    timer_seq: u64,
    scheduled: Vec<TimerRequest>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: ScreenState::Login,
            authenticated: false,
            caption: DEFAULT_CAPTION.to_string(),
            generation: 0,
            timer_seq: 0,
            scheduled: Vec::new(),
        }
    }

    #[must_use]
    pub fn current_screen(&self) -> Screen {
        self.state.screen()
    }

    #[must_use]
    pub fn state(&self) -> &ScreenState {
        &self.state
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    #[must_use]
    pub fn caption(&self) -> &str {
        &self.caption
    }

    /// Incremented on every screen entry.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[must_use]
    pub fn can_advance(&self) -> bool {
        self.authenticated && self.state.forward_unlocked()
    }

    #[must_use]
    pub fn can_retreat(&self) -> bool {
        self.current_screen().predecessor().is_some()
    }

    /// Check credentials and, on success, unlock the card at `Card`.
    ///
    /// Every call is judged on the pair given. A matching pair on an already
    /// authenticated session succeeds without moving it.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidCredentials` on a mismatch; the session is
    /// left untouched.
    pub fn submit(&mut self, email: &str, password: &str) -> Result<(), AuthError> {
        CredentialGate.check(email, password)?;
        if self.authenticated {
            return Ok(());
        }
        self.authenticated = true;
        self.enter(Screen::Card);
        Ok(())
    }

    /// Move to the next screen if the current one's gate is open.
    pub fn advance(&mut self) -> Option<Screen> {
        if !self.can_advance() {
            return None;
        }
        let next = self.current_screen().successor()?;
        self.enter(next);
        Some(next)
    }

    /// Move to the previous screen. Never returns to `Login`.
    pub fn retreat(&mut self) -> Option<Screen> {
        let prev = self.current_screen().predecessor()?;
        self.enter(prev);
        Some(prev)
    }

    /// Apply an in-screen action. Returns whether anything changed.
    pub fn apply(&mut self, action: ScreenAction) -> bool {
        let mut follow_up = None;
        let changed = match (&mut self.state, action) {
            (ScreenState::Card(_), ScreenAction::EditCaption(text)) => {
                self.caption = text;
                true
            }
            (ScreenState::Note(note), ScreenAction::ShowPoem) => note.show_poem(),
            (ScreenState::Note(note), ScreenAction::ShowLetter) => note.show_letter(),
            (ScreenState::Note(note), ScreenAction::PoemScrolled(metrics)) => {
                note.record_scroll(metrics)
            }
            (ScreenState::Note(note), ScreenAction::FlipPoem) => note.flip(),
            (ScreenState::Note(note), ScreenAction::UnflipPoem) => note.unflip(),
            (ScreenState::Note(note), ScreenAction::ToggleReadEveryWord) => {
                note.toggle_acknowledged()
            }
            (ScreenState::Appreciation(list), ScreenAction::ToggleAppreciation(id)) => {
                list.toggle(&id)
            }
            (ScreenState::Appreciation(list), ScreenAction::RevealAppreciation) => list.reveal(),
            (ScreenState::Quiz(quiz), ScreenAction::AnswerQuiz(option)) => {
                let before = quiz.clone();
                follow_up = quiz.answer(option);
                *quiz != before
            }
            (ScreenState::Quiz(quiz), ScreenAction::NextQuestion) => quiz.next_question(),
            (ScreenState::Quiz(quiz), ScreenAction::DismissSurprise) => quiz.dismiss_surprise(),
            (ScreenState::Gallery(gallery), ScreenAction::HoverPhoto(photo)) => {
                gallery.hover(photo)
            }
            (ScreenState::Closing(closing), ScreenAction::RevealEnd) => closing.reveal_end(),
            _ => false,
        };
        if let Some(spec) = follow_up {
            self.schedule(spec);
        }
        changed
    }

    /// Deliver a fired timer. Timers from an earlier screen entry are ignored.
    pub fn fire(&mut self, timer: &TimerRequest) -> bool {
        if timer.token.generation() != self.generation {
            return false;
        }
        let mut follow_up = None;
        let changed = match (&mut self.state, timer.kind) {
            (ScreenState::Card(card), TimerKind::CelebrationPop(n)) => {
                let before = card.pops();
                follow_up = card.pop(n);
                card.pops() != before
            }
            (ScreenState::Card(card), TimerKind::CelebrationComplete) => {
                follow_up = card.complete();
                follow_up.is_some()
            }
            (ScreenState::Card(card), TimerKind::RevealNextControl) => card.reveal_next(),
            (ScreenState::Quiz(quiz), TimerKind::DismissFeedback(serial)) => {
                quiz.dismiss_feedback(serial)
            }
            _ => false,
        };
        if let Some(spec) = follow_up {
            self.schedule(spec);
        }
        changed
    }

    /// Take the timers scheduled since the last call. The driver runs them and
    /// hands each back to `fire`.
    pub fn drain_timers(&mut self) -> Vec<TimerRequest> {
        std::mem::take(&mut self.scheduled)
    }

    fn enter(&mut self, screen: Screen) {
        let (state, timers) = ScreenState::enter(screen);
        self.generation += 1;
        self.state = state;
        self.scheduled.clear();
        for spec in timers {
            self.schedule(spec);
        }
    }

    fn schedule(&mut self, spec: TimerSpec) {
        self.timer_seq += 1;
        self.scheduled.push(TimerRequest {
            token: TimerToken::new(self.generation, self.timer_seq),
            kind: spec.kind,
            delay: spec.delay,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::appreciation::APPRECIATION_ITEMS;
    use crate::model::quiz::{FeedbackKind, QUESTIONS, SURPRISE_MESSAGE};

    fn logged_in() -> Session {
        let mut session = Session::new();
        session.submit("rafif.faisal@pwc.com", "010202Feb").unwrap();
        session
    }

    fn run_all_timers(session: &mut Session) {
        loop {
            let timers = session.drain_timers();
            if timers.is_empty() {
                break;
            }
            for timer in &timers {
                session.fire(timer);
            }
        }
    }

    fn finish_card(session: &mut Session) {
        run_all_timers(session);
        assert!(session.can_advance());
    }

    fn finish_note(session: &mut Session) {
        session.apply(ScreenAction::ShowPoem);
        session.apply(ScreenAction::PoemScrolled(ScrollMetrics {
            offset: 1000.0,
            content_height: 1500.0,
            viewport_height: 500.0,
        }));
        session.apply(ScreenAction::FlipPoem);
        session.apply(ScreenAction::ToggleReadEveryWord);
    }

    fn finish_appreciation(session: &mut Session) {
        for item in &APPRECIATION_ITEMS {
            session.apply(ScreenAction::ToggleAppreciation(item.id.to_string()));
        }
        session.apply(ScreenAction::RevealAppreciation);
    }

    fn finish_quiz(session: &mut Session) {
        for question in &QUESTIONS {
            if question.is_trick {
                for idx in 0..question.options.len() {
                    session.apply(ScreenAction::AnswerQuiz(idx));
                }
            } else {
                let correct = question.options.iter().position(|o| o.is_correct).unwrap();
                session.apply(ScreenAction::AnswerQuiz(correct));
            }
            assert!(session.apply(ScreenAction::NextQuestion));
        }
    }

    fn walk_to(screen: Screen) -> Session {
        let mut session = logged_in();
        while session.current_screen() != screen {
            match session.current_screen() {
                Screen::Card => finish_card(&mut session),
                Screen::Note => finish_note(&mut session),
                Screen::Appreciation => finish_appreciation(&mut session),
                Screen::Quiz => finish_quiz(&mut session),
                Screen::Gallery | Screen::Login | Screen::Closing => {}
            }
            session.advance().expect("gate should be open");
        }
        session
    }

    #[test]
    fn starts_locked_at_login() {
        let session = Session::new();
        assert_eq!(session.current_screen(), Screen::Login);
        assert!(!session.is_authenticated());
        assert!(!session.can_advance());
        assert_eq!(session.caption(), DEFAULT_CAPTION);
    }

    #[test]
    fn valid_login_unlocks_card() {
        let session = logged_in();
        assert!(session.is_authenticated());
        assert_eq!(session.current_screen(), Screen::Card);
    }

    #[test]
    fn invalid_login_stays_at_login() {
        let mut session = Session::new();
        assert_eq!(
            session.submit("x@y.com", "wrong"),
            Err(AuthError::InvalidCredentials)
        );
        assert!(!session.is_authenticated());
        assert_eq!(session.current_screen(), Screen::Login);
        assert!(session.drain_timers().is_empty());
    }

    #[test]
    fn advance_on_login_is_a_no_op() {
        let mut session = Session::new();
        assert_eq!(session.advance(), None);
        assert_eq!(session.retreat(), None);
        assert_eq!(session.current_screen(), Screen::Login);
    }

    #[test]
    fn card_gate_opens_only_after_timers() {
        let mut session = logged_in();
        assert_eq!(session.advance(), None);
        let timers = session.drain_timers();
        assert_eq!(timers.len(), 3);
        for timer in &timers {
            session.fire(timer);
        }
        assert!(!session.can_advance(), "completion beat still pending");
        let complete = session.drain_timers();
        assert_eq!(complete.len(), 1);
        session.fire(&complete[0]);
        assert!(!session.can_advance(), "settle delay still pending");
        let settle = session.drain_timers();
        session.fire(&settle[0]);
        assert!(session.can_advance());
        assert_eq!(session.advance(), Some(Screen::Note));
    }

    #[test]
    fn timers_from_another_generation_do_nothing() {
        let mut session = logged_in();
        let first_entry = session.drain_timers();
        for timer in &first_entry {
            assert!(session.fire(timer));
        }
        run_all_timers(&mut session);
        session.advance();
        session.retreat();
        assert_eq!(session.current_screen(), Screen::Card);
        for timer in &first_entry {
            assert!(!session.fire(timer));
        }
        if let ScreenState::Card(card) = session.state() {
            assert_eq!(card.pops(), 0);
        } else {
            panic!("expected card screen");
        }
    }

    #[test]
    fn retreat_floors_at_card() {
        let mut session = walk_to(Screen::Closing);
        let mut visited = vec![session.current_screen()];
        while let Some(prev) = session.retreat() {
            visited.push(prev);
        }
        assert_eq!(
            visited,
            vec![
                Screen::Closing,
                Screen::Gallery,
                Screen::Quiz,
                Screen::Appreciation,
                Screen::Note,
                Screen::Card,
            ]
        );
        assert_eq!(session.current_screen(), Screen::Card);
        assert!(session.is_authenticated());
    }

    #[test]
    fn forward_closure_reaches_closing_and_stops() {
        let mut session = walk_to(Screen::Closing);
        assert!(!session.can_advance());
        assert_eq!(session.advance(), None);
        assert!(session.current_screen().is_terminal());
    }

    #[test]
    fn note_gate_follows_acknowledgment() {
        let mut session = walk_to(Screen::Note);
        assert!(!session.can_advance());
        finish_note(&mut session);
        assert!(session.can_advance());
        session.apply(ScreenAction::ToggleReadEveryWord);
        assert_eq!(session.advance(), None);
    }

    #[test]
    fn appreciation_gate_needs_reveal() {
        let mut session = walk_to(Screen::Appreciation);
        assert!(!session.apply(ScreenAction::RevealAppreciation));
        for item in &APPRECIATION_ITEMS[..5] {
            session.apply(ScreenAction::ToggleAppreciation(item.id.to_string()));
        }
        assert!(!session.apply(ScreenAction::RevealAppreciation));
        session.apply(ScreenAction::ToggleAppreciation("cheeks".into()));
        assert!(!session.can_advance());
        assert!(session.apply(ScreenAction::RevealAppreciation));
        assert!(session.can_advance());
    }

    #[test]
    fn quiz_wrong_answer_schedules_dismissal() {
        let mut session = walk_to(Screen::Quiz);
        assert!(session.drain_timers().is_empty());
        session.apply(ScreenAction::AnswerQuiz(1));
        let timers = session.drain_timers();
        assert_eq!(timers.len(), 1);
        assert!(session.fire(&timers[0]));
        if let ScreenState::Quiz(quiz) = session.state() {
            assert!(quiz.feedback().is_none());
        } else {
            panic!("expected quiz screen");
        }
    }

    #[test]
    fn quiz_trick_scenario_through_session() {
        let mut session = walk_to(Screen::Quiz);
        for _ in 0..2 {
            session.apply(ScreenAction::AnswerQuiz(0));
            session.apply(ScreenAction::NextQuestion);
        }
        session.apply(ScreenAction::AnswerQuiz(0));
        session.apply(ScreenAction::AnswerQuiz(1));
        let ScreenState::Quiz(quiz) = session.state() else {
            panic!("expected quiz screen");
        };
        let feedback = quiz.feedback().unwrap();
        assert_eq!(feedback.kind, FeedbackKind::Surprise);
        assert_eq!(feedback.message, SURPRISE_MESSAGE);
        assert!(!session.can_advance());
    }

    #[test]
    fn revisiting_quiz_starts_over() {
        let mut session = walk_to(Screen::Quiz);
        session.apply(ScreenAction::AnswerQuiz(0));
        session.apply(ScreenAction::NextQuestion);
        session.retreat();
        finish_appreciation(&mut session);
        session.advance();
        let ScreenState::Quiz(quiz) = session.state() else {
            panic!("expected quiz screen");
        };
        assert_eq!(quiz.question_index(), 0);
    }

    #[test]
    fn gallery_is_always_open() {
        let session = walk_to(Screen::Gallery);
        assert!(session.can_advance());
    }

    #[test]
    fn actions_for_other_screens_are_ignored() {
        let mut session = logged_in();
        assert!(!session.apply(ScreenAction::AnswerQuiz(0)));
        assert!(!session.apply(ScreenAction::RevealEnd));
        assert!(!session.apply(ScreenAction::ShowPoem));
    }

    #[test]
    fn caption_survives_screen_changes() {
        let mut session = logged_in();
        assert!(session.apply(ScreenAction::EditCaption("For you".into())));
        finish_card(&mut session);
        session.advance();
        session.retreat();
        assert_eq!(session.caption(), "For you");
    }

    #[test]
    fn generation_increments_per_entry() {
        let mut session = logged_in();
        let first = session.generation();
        finish_card(&mut session);
        session.advance();
        assert_eq!(session.generation(), first + 1);
        session.retreat();
        assert_eq!(session.generation(), first + 2);
    }

    #[test]
    fn wrong_submit_after_login_is_rejected_in_place() {
        let mut session = walk_to(Screen::Note);
        let generation = session.generation();
        assert_eq!(
            session.submit("x@y.com", "wrong"),
            Err(AuthError::InvalidCredentials)
        );
        assert!(session.is_authenticated());
        assert_eq!(session.current_screen(), Screen::Note);
        assert_eq!(session.generation(), generation);
    }

    #[test]
    fn matching_submit_after_login_does_not_move() {
        let mut session = walk_to(Screen::Note);
        let generation = session.generation();
        assert_eq!(session.submit("rafif.faisal@pwc.com", "010202Feb"), Ok(()));
        assert_eq!(session.current_screen(), Screen::Note);
        assert_eq!(session.generation(), generation);
    }

    #[test]
    fn note_gate_survives_a_trip_back_to_the_letter() {
        let mut session = walk_to(Screen::Note);
        finish_note(&mut session);
        assert!(session.can_advance());
        assert!(session.apply(ScreenAction::ShowLetter));
        assert!(!session.can_advance());
        assert!(session.apply(ScreenAction::ShowPoem));
        assert!(session.can_advance());
        assert_eq!(session.advance(), Some(Screen::Appreciation));
    }
}

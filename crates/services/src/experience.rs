use keepsake_core::{AuthError, Screen, ScreenAction, Session, TimerRequest};
use tokio::sync::mpsc;

use crate::timers::ScreenTimers;

/// A `Session` wired to live timers.
///
/// Every operation forwards to the session and then starts whatever timers
/// it scheduled. Leaving a screen cancels the timers of the screen left.
/// The receiver returned by `new` yields fired timers; feed each one back
/// through `fire`.
#[derive(Debug)]
pub struct Experience {
    session: Session,
    timers: ScreenTimers,
}

impl Experience {
    #[must_use]
    pub fn new() -> (Self, mpsc::UnboundedReceiver<TimerRequest>) {
        let (timers, receiver) = ScreenTimers::channel();
        (
            Self {
                session: Session::new(),
                timers,
            },
            receiver,
        )
    }

    /// Wrap an existing session, starting any timers it already scheduled.
    #[must_use]
    pub fn with_session(session: Session) -> (Self, mpsc::UnboundedReceiver<TimerRequest>) {
        let (timers, receiver) = ScreenTimers::channel();
        let mut experience = Self { session, timers };
        experience.start_scheduled();
        (experience, receiver)
    }

    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    #[must_use]
    pub fn screen(&self) -> Screen {
        self.session.current_screen()
    }

    #[must_use]
    pub fn outstanding_timers(&self) -> usize {
        self.timers.outstanding()
    }

    /// Submit login credentials.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidCredentials` when the pair does not match.
    pub fn submit(&mut self, email: &str, password: &str) -> Result<(), AuthError> {
        let before = self.session.current_screen();
        if let Err(err) = self.session.submit(email, password) {
            tracing::warn!("login rejected");
            return Err(err);
        }
        if self.session.current_screen() != before {
            tracing::info!(screen = ?self.session.current_screen(), "unlocked");
            self.screen_changed();
        }
        Ok(())
    }

    pub fn advance(&mut self) -> Option<Screen> {
        let next = self.session.advance()?;
        tracing::info!(screen = ?next, "advanced");
        self.screen_changed();
        Some(next)
    }

    pub fn retreat(&mut self) -> Option<Screen> {
        let prev = self.session.retreat()?;
        tracing::info!(screen = ?prev, "went back");
        self.screen_changed();
        Some(prev)
    }

    pub fn apply(&mut self, action: ScreenAction) -> bool {
        let changed = self.session.apply(action);
        self.start_scheduled();
        changed
    }

    pub fn fire(&mut self, timer: &TimerRequest) -> bool {
        let changed = self.session.fire(timer);
        if !changed {
            tracing::debug!(kind = ?timer.kind, "timer had no effect");
        }
        self.start_scheduled();
        changed
    }

    fn screen_changed(&mut self) {
        self.timers.cancel_all();
        self.start_scheduled();
    }

    fn start_scheduled(&mut self) {
        for request in self.session.drain_timers() {
            self.timers.schedule(request);
        }
    }
}

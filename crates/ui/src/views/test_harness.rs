use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;
use std::time::Duration;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use keepsake_core::model::appreciation::APPRECIATION_ITEMS;
use keepsake_core::model::note::ScrollMetrics;
use keepsake_core::model::quiz::QUESTIONS;
use keepsake_core::{Screen, ScreenAction, Session};
use services::{Experience, WishGenerator};

use super::{MusicPlayer, ScreenHost, ViewTestHandles};
use crate::context::{UiApp, build_app_context};

pub const TEST_EMAIL: &str = "rafif.faisal@pwc.com";
pub const TEST_PASSWORD: &str = "010202Feb";

pub struct TestApp;

impl UiApp for TestApp {
    fn wish_generator(&self) -> WishGenerator {
        WishGenerator::disabled()
    }

    fn start_muted(&self) -> bool {
        true
    }
}

//
// ─── SESSION BUILDERS ──────────────────────────────────────────────────────────
//

pub fn run_all_timers(session: &mut Session) {
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

/// Satisfy the current screen's gate through its own actions.
pub fn finish_current(session: &mut Session) {
    match session.current_screen() {
        Screen::Card => run_all_timers(session),
        Screen::Note => {
            session.apply(ScreenAction::ShowPoem);
            session.apply(ScreenAction::PoemScrolled(ScrollMetrics {
                offset: 1000.0,
                content_height: 1500.0,
                viewport_height: 500.0,
            }));
            session.apply(ScreenAction::FlipPoem);
            session.apply(ScreenAction::ToggleReadEveryWord);
        }
        Screen::Appreciation => {
            for item in APPRECIATION_ITEMS {
                session.apply(ScreenAction::ToggleAppreciation(item.id.to_string()));
            }
            session.apply(ScreenAction::RevealAppreciation);
        }
        Screen::Quiz => {
            for question in &QUESTIONS {
                if question.is_trick {
                    for idx in 0..question.options.len() {
                        session.apply(ScreenAction::AnswerQuiz(idx));
                    }
                } else {
                    let correct = question
                        .options
                        .iter()
                        .position(|o| o.is_correct)
                        .expect("every plain question has a right answer");
                    session.apply(ScreenAction::AnswerQuiz(correct));
                }
                session.apply(ScreenAction::NextQuestion);
            }
        }
        Screen::Login | Screen::Gallery | Screen::Closing => {}
    }
    // Leftover feedback timers belong to the screen being left.
    session.drain_timers();
}

/// A session parked on `screen`, with every earlier screen completed.
///
/// The card's celebration timers are left pending when `screen` is the card.
pub fn session_at(screen: Screen) -> Session {
    let mut session = Session::new();
    if screen == Screen::Login {
        return session;
    }
    session
        .submit(TEST_EMAIL, TEST_PASSWORD)
        .expect("test credentials are accepted");
    while session.current_screen() != screen {
        finish_current(&mut session);
        session.advance().expect("gate opens once the screen is done");
    }
    session
}

//
// ─── HARNESS ───────────────────────────────────────────────────────────────────
//

#[derive(Clone, Default)]
pub struct HarnessHandles {
    experience: Rc<RefCell<Option<Signal<Experience>>>>,
    views: ViewTestHandles,
}

impl HarnessHandles {
    pub fn experience(&self) -> Signal<Experience> {
        self.experience
            .borrow()
            .as_ref()
            .copied()
            .expect("experience registered")
    }
}

#[derive(Props, Clone)]
struct HarnessProps {
    session: Session,
    handles: HarnessHandles,
}

impl PartialEq for HarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ScreenHarness(props: HarnessProps) -> Element {
    use_context_provider(|| {
        let app: Arc<dyn UiApp> = Arc::new(TestApp);
        build_app_context(&app)
    });
    let experience = use_hook(|| {
        // Fired timers are never fed back; tests drive the session directly.
        let (experience, _timers) = Experience::with_session(props.session.clone());
        Signal::new(experience)
    });
    use_context_provider(|| experience);
    use_context_provider(|| props.handles.views.clone());
    use_hook(|| {
        *props.handles.experience.borrow_mut() = Some(experience);
    });

    rsx! {
        ScreenHost {}
        MusicPlayer {}
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    handles: HarnessHandles,
}

impl ViewHarness {
    pub fn at(screen: Screen) -> Self {
        Self::with_session(session_at(screen))
    }

    pub fn with_session(session: Session) -> Self {
        let handles = HarnessHandles::default();
        let mut dom = VirtualDom::new_with_props(
            ScreenHarness,
            HarnessProps {
                session,
                handles: handles.clone(),
            },
        );
        dom.rebuild_in_place();
        drive_dom(&mut dom);
        Self { dom, handles }
    }

    pub fn experience(&self) -> Signal<Experience> {
        self.handles.experience()
    }

    pub fn screen(&self) -> Screen {
        let experience = self.experience();
        self.dom.in_runtime(|| experience.peek().screen())
    }

    /// Apply `action` inside the dom's runtime and re-render.
    pub fn apply(&mut self, action: ScreenAction) -> bool {
        let mut experience = self.experience();
        let changed = self
            .dom
            .in_runtime(|| experience.write().apply(action));
        self.drive();
        changed
    }

    pub fn advance(&mut self) -> Option<Screen> {
        let mut experience = self.experience();
        let next = self.dom.in_runtime(|| experience.write().advance());
        self.drive();
        next
    }

    /// Fill the login form and submit it as the button would.
    pub fn submit_login(&mut self, email: &str, password: &str) {
        let (submit, mut email_field, mut password_field) = self.handles.views.login();
        self.dom.in_runtime(|| {
            email_field.set(email.to_string());
            password_field.set(password.to_string());
            submit.call(());
        });
        self.drive();
    }

    pub fn open_wish_panel(&mut self) {
        let mut open = self.handles.views.wish_open();
        self.dom.in_runtime(|| open.set(true));
        self.drive();
    }

    pub fn generate_wish(&mut self, name: &str) {
        let (generate, mut draft) = self.handles.views.wish();
        self.dom.in_runtime(|| {
            draft.write().name = name.to_string();
            generate.call(());
        });
        self.drive();
    }

    pub fn drive(&mut self) {
        drive_dom(&mut self.dom);
    }

    /// Let spawned view tasks run, then re-render.
    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(Duration::from_secs(2), self.dom.wait_for_work()).await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    pub fn html(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

mod appreciation;
mod background;
mod card;
mod closing;
mod gallery;
mod host;
mod login;
mod music;
mod nav;
mod note;
mod quiz;
mod scripts;
mod wish;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

use dioxus::prelude::*;
use keepsake_core::ScreenState;
use services::Experience;

#[cfg(test)]
use keepsake_core::model::WishDraft;
#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

pub use appreciation::AppreciationView;
pub use background::Background;
pub use card::CardView;
pub use closing::ClosingView;
pub use gallery::GalleryView;
pub use host::ScreenHost;
pub use login::LoginView;
pub use music::MusicPlayer;
pub use nav::ScreenNav;
pub use note::NoteView;
pub use quiz::QuizView;
pub use wish::WishPanel;

/// The experience provided by `App`.
pub(crate) fn use_experience() -> Signal<Experience> {
    use_context::<Signal<Experience>>()
}

/// Project the current screen's tracker out of the experience.
///
/// Returns `None` when the session is on a different screen, which happens
/// for one render while the host swaps views.
pub(crate) fn screen_state<T>(
    experience: Signal<Experience>,
    pick: impl FnOnce(&ScreenState) -> Option<T>,
) -> Option<T> {
    pick(experience.read().session().state())
}

/// Hooks into view-local state, registered by views found in context.
#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct ViewTestHandles {
    login: Rc<RefCell<Option<(Callback<()>, Signal<String>, Signal<String>)>>>,
    wish_open: Rc<RefCell<Option<Signal<bool>>>>,
    wish: Rc<RefCell<Option<(Callback<()>, Signal<WishDraft>)>>>,
}

#[cfg(test)]
impl ViewTestHandles {
    pub(crate) fn register_login(
        &self,
        submit: Callback<()>,
        email: Signal<String>,
        password: Signal<String>,
    ) {
        *self.login.borrow_mut() = Some((submit, email, password));
    }

    pub(crate) fn register_wish_toggle(&self, open: Signal<bool>) {
        *self.wish_open.borrow_mut() = Some(open);
    }

    pub(crate) fn register_wish(&self, generate: Callback<()>, draft: Signal<WishDraft>) {
        *self.wish.borrow_mut() = Some((generate, draft));
    }

    pub(crate) fn login(&self) -> (Callback<()>, Signal<String>, Signal<String>) {
        (*self.login.borrow()).expect("login view registered")
    }

    pub(crate) fn wish_open(&self) -> Signal<bool> {
        (*self.wish_open.borrow()).expect("closing view registered")
    }

    pub(crate) fn wish(&self) -> (Callback<()>, Signal<WishDraft>) {
        (*self.wish.borrow()).expect("wish panel registered")
    }
}

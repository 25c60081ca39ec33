use dioxus::prelude::*;
use keepsake_core::Screen;

use super::{
    AppreciationView, CardView, ClosingView, GalleryView, LoginView, NoteView, QuizView,
    use_experience,
};

/// Renders the view for the current screen, labelled with its title.
#[component]
pub fn ScreenHost() -> Element {
    let experience = use_experience();
    let screen = use_memo(move || experience.read().screen());
    let current = screen();

    rsx! {
        main { class: "screen", aria_label: current.title(),
            match current {
                Screen::Login => rsx! { LoginView {} },
                Screen::Card => rsx! { CardView {} },
                Screen::Note => rsx! { NoteView {} },
                Screen::Appreciation => rsx! { AppreciationView {} },
                Screen::Quiz => rsx! { QuizView {} },
                Screen::Gallery => rsx! { GalleryView {} },
                Screen::Closing => rsx! { ClosingView {} },
            }
        }
    }
}

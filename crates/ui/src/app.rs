use dioxus::prelude::*;
use keepsake_core::Screen;
use services::Experience;

use crate::views::{Background, MusicPlayer, ScreenHost};

#[component]
pub fn App() -> Element {
    let experience = use_hook(|| {
        let (experience, mut timers) = Experience::new();
        let mut experience = Signal::new(experience);
        // Runs for the lifetime of the root scope.
        spawn(async move {
            while let Some(timer) = timers.recv().await {
                experience.write().fire(&timer);
            }
        });
        experience
    });
    use_context_provider(|| experience);

    let screen = use_memo(move || experience.read().screen());
    let dark = matches!(screen(), Screen::Gallery | Screen::Closing);

    rsx! {
        document::Stylesheet { href: asset!("/assets/style.css") }
        document::Title { "Happy Birthday" }

        div { class: if dark { "app-root dark" } else { "app-root" },
            ErrorBoundary {
                handle_error: |errors: ErrorContext| rsx! {
                    div { class: "fatal",
                        h1 { "Something went wrong" }
                        pre { "{errors:?}" }
                    }
                },
                if !dark {
                    Background {}
                }
                ScreenHost {}
                MusicPlayer {}
            }
        }
    }
}

use dioxus::prelude::*;
use keepsake_core::model::appreciation::APPRECIATION_ITEMS;
use keepsake_core::{ScreenAction, ScreenState};

use super::{ScreenNav, screen_state, use_experience};

#[component]
pub fn AppreciationView() -> Element {
    let mut experience = use_experience();
    let Some(progress) = screen_state(experience, |state| match state {
        ScreenState::Appreciation(progress) => Some(progress.clone()),
        _ => None,
    }) else {
        return rsx! {};
    };
    let viewed = progress.viewed_count();
    let total = APPRECIATION_ITEMS.len();

    rsx! {
        div { class: "appreciation-page",
            header {
                h2 { class: "handwriting", "What I Adore" }
                p { class: "muted", "Tap to reveal" }
                p { class: "progress-count", "{viewed} / {total}" }
            }
            ul { class: "adore-list",
                for item in APPRECIATION_ITEMS {
                    li { key: "{item.id}",
                        button {
                            id: "adore-{item.id}",
                            class: if progress.expanded() == Some(item.id) { "adore-item open" } else { "adore-item" },
                            onclick: move |_| {
                                experience.write().apply(ScreenAction::ToggleAppreciation(item.id.to_string()));
                            },
                            span { "{item.label}" }
                            if progress.is_viewed(item.id) {
                                span { class: "viewed", "\u{2665}" }
                            } else {
                                span { class: "unviewed" }
                            }
                        }
                        if progress.expanded() == Some(item.id) {
                            p { class: "adore-description", "{item.description}" }
                        }
                    }
                }
            }
            if progress.all_viewed() {
                if progress.revealed() {
                    div { class: "adore-final",
                        span { class: "big-heart", "\u{2764}" }
                        h3 { class: "handwriting", "Everything." }
                        p { "I love everything about you." }
                    }
                } else {
                    button {
                        id: "one-last-thing",
                        class: "one-last-thing",
                        onclick: move |_| {
                            experience.write().apply(ScreenAction::RevealAppreciation);
                        },
                        "One Last Thing... \u{2728}"
                    }
                }
            }
            ScreenNav { next_label: "Next: Pop Quiz" }
        }
    }
}

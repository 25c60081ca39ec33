use dioxus::prelude::*;
use keepsake_core::model::content::CLOSING;
use keepsake_core::{ScreenAction, ScreenState};
use rand::Rng;

#[cfg(test)]
use super::ViewTestHandles;
use super::{ScreenNav, WishPanel, screen_state, use_experience};

const STAR_COUNT: usize = 100;

fn star_styles() -> Vec<String> {
    let mut rng = rand::rng();
    (0..STAR_COUNT)
        .map(|_| {
            let size: f64 = rng.random_range(1.0..3.0);
            format!(
                "top: {:.1}%; left: {:.1}%; width: {size:.1}px; height: {size:.1}px; animation-delay: {:.2}s; opacity: {:.2};",
                rng.random_range(0.0..100.0_f64),
                rng.random_range(0.0..100.0_f64),
                rng.random_range(0.0..3.0_f64),
                rng.random_range(0.3..1.0_f64),
            )
        })
        .collect()
}

#[component]
pub fn ClosingView() -> Element {
    let mut experience = use_experience();
    let stars = use_hook(star_styles);
    let mut wish_open = use_signal(|| false);
    #[cfg(test)]
    use_hook(|| {
        if let Some(handles) = try_consume_context::<ViewTestHandles>() {
            handles.register_wish_toggle(wish_open);
        }
    });
    let Some(closing) = screen_state(experience, |state| match state {
        ScreenState::Closing(closing) => Some(closing.clone()),
        _ => None,
    }) else {
        return rsx! {};
    };

    rsx! {
        div { class: "closing-page",
            div { class: "starfield", aria_hidden: "true",
                for (idx, style) in stars.iter().enumerate() {
                    span { key: "{idx}", class: "star", style: "{style}" }
                }
            }
            div { class: "closing-copy",
                h2 { class: "handwriting", "{CLOSING.heading}" }
                p { class: "kicker", "{CLOSING.kicker}" }
                for (idx, section) in CLOSING.sections.iter().enumerate() {
                    section { key: "{idx}", class: "closing-section",
                        for (line_idx, line) in section.iter().enumerate() {
                            p { key: "{line_idx}", "{line}" }
                        }
                    }
                }
                div { class: "closing-ending",
                    if closing.end_revealed() {
                        div { class: "forever",
                            span { class: "infinity", "\u{221e}" }
                            p { "{CLOSING.ending}" }
                        }
                    } else {
                        button {
                            id: "reveal-end",
                            class: "end-button",
                            onclick: move |_| {
                                experience.write().apply(ScreenAction::RevealEnd);
                            },
                            "{CLOSING.reveal_label}"
                        }
                    }
                }
                if wish_open() {
                    WishPanel { on_close: move |()| wish_open.set(false) }
                } else {
                    button {
                        id: "open-wish",
                        class: "wish-button",
                        onclick: move |_| wish_open.set(true),
                        "Write a birthday wish \u{2728}"
                    }
                }
            }
            ScreenNav { next_label: "" }
        }
    }
}

use dioxus::document::eval;
use dioxus::prelude::*;
use keepsake_core::model::content::{LETTER, POEM};
use keepsake_core::model::note::{NotePhase, NoteProgress, ScrollMetrics};
use keepsake_core::{ScreenAction, ScreenState};

use super::scripts::{POEM_SCROLL_ID, scroll_metrics_script};
use super::{screen_state, use_experience};

#[component]
pub fn NoteView() -> Element {
    let mut experience = use_experience();
    let Some(progress) = screen_state(experience, |state| match state {
        ScreenState::Note(progress) => Some(progress.clone()),
        _ => None,
    }) else {
        return rsx! {};
    };
    let can_advance = experience.read().session().can_advance();
    let phase = progress.phase();

    // Back leaves the poem first; forward opens the poem first.
    let on_prev = move |_: MouseEvent| {
        let mut experience = experience.write();
        if phase == NotePhase::Poem {
            experience.apply(ScreenAction::ShowLetter);
        } else {
            experience.retreat();
        }
    };
    let on_next = move |_: MouseEvent| {
        let mut experience = experience.write();
        if phase == NotePhase::Letter {
            experience.apply(ScreenAction::ShowPoem);
        } else {
            experience.advance();
        }
    };

    rsx! {
        div { class: "note-page",
            match phase {
                NotePhase::Letter => rsx! { LetterPane {} },
                NotePhase::Poem => rsx! { PoemCard { progress } },
            }
            nav { class: "screen-nav",
                button { id: "nav-prev", class: "nav-prev", onclick: on_prev, "Back" }
                if phase == NotePhase::Letter || can_advance {
                    button { id: "nav-next", class: "nav-next", onclick: on_next,
                        if phase == NotePhase::Letter { "Read the poem" } else { "Next: Things I Love" }
                    }
                }
            }
        }
    }
}

#[component]
fn LetterPane() -> Element {
    rsx! {
        article { class: "letter",
            h1 { class: "letter-heading", "{LETTER.heading}" }
            for (idx, paragraph) in LETTER.paragraphs.iter().enumerate() {
                p { key: "{idx}", "{paragraph}" }
            }
            blockquote { class: "letter-quote", "{LETTER.quote}" }
            div { class: "letter-sign-off",
                for (idx, line) in LETTER.sign_off.iter().enumerate() {
                    p { key: "{idx}", "{line}" }
                }
            }
        }
    }
}

#[component]
fn PoemCard(progress: NoteProgress) -> Element {
    let mut experience = use_experience();

    let on_scroll = move |_: ScrollEvent| {
        spawn(async move {
            let mut metrics = eval(&scroll_metrics_script(POEM_SCROLL_ID));
            if let Ok(Some([offset, content_height, viewport_height])) =
                metrics.recv::<Option<[f64; 3]>>().await
            {
                experience.write().apply(ScreenAction::PoemScrolled(ScrollMetrics {
                    offset,
                    content_height,
                    viewport_height,
                }));
            }
        });
    };

    rsx! {
        div { class: if progress.flipped() { "flip-card flipped" } else { "flip-card" },
            div { class: "flip-face flip-front",
                div { id: POEM_SCROLL_ID, class: "poem-scroll", onscroll: on_scroll,
                    h2 { class: "poem-title", "{POEM.title}" }
                    for (idx, stanza) in POEM.stanzas.iter().enumerate() {
                        p { key: "{idx}", class: "stanza",
                            for (line_idx, line) in stanza.iter().enumerate() {
                                span { key: "{line_idx}", class: "stanza-line", "{line}" }
                            }
                        }
                    }
                }
                if progress.can_flip() && !progress.flipped() {
                    button {
                        class: "wax-seal",
                        onclick: move |_| {
                            experience.write().apply(ScreenAction::FlipPoem);
                        },
                        "Open"
                    }
                } else if !progress.scrolled_to_end() {
                    p { class: "scroll-hint", "Scroll to the end \u{2193}" }
                }
            }
            div { class: "flip-face flip-back",
                h2 { "Final thoughts... \u{1f90d}" }
                for (idx, paragraph) in POEM.back_message.iter().enumerate() {
                    p { key: "{idx}", class: "back-message", "{paragraph}" }
                }
                if progress.flipped() {
                    button {
                        id: "read-every-word",
                        class: if progress.acknowledged() { "acknowledge checked" } else { "acknowledge" },
                        onclick: move |_| {
                            experience.write().apply(ScreenAction::ToggleReadEveryWord);
                        },
                        span { class: "check", if progress.acknowledged() { "\u{2713}" } }
                        "{POEM.acknowledgment}"
                    }
                    button {
                        class: "link-button",
                        onclick: move |_| {
                            experience.write().apply(ScreenAction::UnflipPoem);
                        },
                        "Back to Poem"
                    }
                }
            }
        }
    }
}

use dioxus::prelude::*;
use keepsake_core::model::quiz::{FeedbackKind, QuizProgress};
use keepsake_core::{ScreenAction, ScreenState};

use super::{ScreenNav, screen_state, use_experience};

const SURPRISE_EMOJI: [&str; 7] = [
    "\u{1f92c}",
    "\u{1f624}",
    "\u{1f496}",
    "\u{2728}",
    "\u{1f921}",
    "\u{1f923}",
    "\u{2764}\u{fe0f}",
];

fn surprise_rain() -> Vec<(String, &'static str)> {
    (0..30_usize)
        .map(|idx| {
            let style = format!("left: {}%; animation-delay: {}ms;", idx * 37 % 100, idx % 5 * 100);
            (style, SURPRISE_EMOJI[idx % SURPRISE_EMOJI.len()])
        })
        .collect()
}

#[component]
pub fn QuizView() -> Element {
    let Some(progress) = screen_state(use_experience(), |state| match state {
        ScreenState::Quiz(progress) => Some(progress.clone()),
        _ => None,
    }) else {
        return rsx! {};
    };
    let feedback = progress.feedback();

    rsx! {
        div { class: "quiz-page",
            if let Some(feedback) = feedback.filter(|f| f.kind != FeedbackKind::Surprise) {
                div {
                    class: if feedback.kind == FeedbackKind::Error { "toast error" } else { "toast success" },
                    role: "status",
                    span { class: "toast-icon",
                        if feedback.kind == FeedbackKind::Error { "\u{2715}" } else { "\u{2713}" }
                    }
                    span { "{feedback.message}" }
                }
            }
            if let Some(feedback) = feedback.filter(|f| f.kind == FeedbackKind::Surprise) {
                SurpriseOverlay { message: feedback.message }
            }
            QuestionCard { progress }
            ScreenNav { next_label: "Next: Gallery" }
        }
    }
}

#[component]
fn QuestionCard(progress: QuizProgress) -> Element {
    let mut experience = use_experience();
    let Some(question) = progress.current_question() else {
        return rsx! {
            div { class: "quiz-card complete",
                span { class: "trophy", "\u{1f3c6}" }
                h2 { "Quiz Complete! You're the best!" }
            }
        };
    };
    let position = progress.question_index() + 1;
    let total = progress.question_count();

    rsx! {
        div { key: "{question.id}", class: "quiz-card",
            div { class: "quiz-badge", "Question {position} / {total}" }
            if let Some(image) = question.image {
                img { class: "quiz-image", src: image, alt: "Quiz Context" }
            }
            h2 { class: "quiz-question", "{question.text}" }
            div { class: "quiz-options",
                for (idx, option) in question.options.iter().enumerate() {
                    button {
                        key: "{idx}",
                        id: "quiz-option-{idx}",
                        class: "quiz-option",
                        onclick: move |_| {
                            experience.write().apply(ScreenAction::AnswerQuiz(idx));
                        },
                        span { "{option.text}" }
                        span { class: "quiz-radio" }
                    }
                }
            }
            if progress.next_visible() {
                button {
                    id: "quiz-next",
                    class: "quiz-next",
                    onclick: move |_| {
                        experience.write().apply(ScreenAction::NextQuestion);
                    },
                    if progress.is_last_question() { "Finish Quiz" } else { "Next Question" }
                }
            }
        }
    }
}

#[component]
fn SurpriseOverlay(message: &'static str) -> Element {
    let mut experience = use_experience();
    let rain = use_hook(surprise_rain);

    rsx! {
        div { class: "surprise-overlay",
            div { class: "surprise-rain", aria_hidden: "true",
                for (idx, (style, emoji)) in rain.iter().enumerate() {
                    span { key: "{idx}", class: "surprise-drop", style: "{style}", "{emoji}" }
                }
            }
            div { class: "surprise-card",
                span { class: "trophy", "\u{1f3c6}" }
                h2 { "{message}" }
                button {
                    id: "surprise-dismiss",
                    onclick: move |_| {
                        experience.write().apply(ScreenAction::DismissSurprise);
                    },
                    "Okay, I get it! \u{1f602}"
                }
            }
        }
    }
}

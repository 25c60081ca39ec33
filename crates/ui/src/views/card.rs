use dioxus::prelude::*;
use keepsake_core::model::content::POLAROID_IMAGE;
use keepsake_core::{ScreenAction, ScreenState};
use rand::Rng;

use super::{ScreenNav, screen_state, use_experience};

const CONFETTI_PER_POP: usize = 24;
const CONFETTI_COLORS: [&str; 5] = ["#f472b6", "#a78bfa", "#facc15", "#34d399", "#60a5fa"];
const FIREWORK_BURSTS: usize = 6;

#[derive(Clone, Copy, Debug, PartialEq)]
struct Particle {
    dx: f64,
    dy: f64,
    rotate: f64,
    color: &'static str,
}

impl Particle {
    fn style(&self) -> String {
        format!(
            "--dx: {:.0}px; --dy: {:.0}px; --rot: {:.0}deg; background: {};",
            self.dx, self.dy, self.rotate, self.color
        )
    }
}

fn burst(count: usize, left_side: bool) -> Vec<Particle> {
    let mut rng = rand::rng();
    (0..count)
        .map(|_| {
            let angle: f64 = if left_side {
                rng.random_range(-105.0..-45.0)
            } else {
                rng.random_range(-135.0..-75.0)
            };
            let velocity: f64 = rng.random_range(250.0..600.0);
            let radians = angle.to_radians();
            Particle {
                dx: radians.cos() * velocity,
                dy: radians.sin() * velocity,
                rotate: rng.random_range(0.0..720.0),
                color: CONFETTI_COLORS[rng.random_range(0..CONFETTI_COLORS.len())],
            }
        })
        .collect()
}

#[component]
pub fn CardView() -> Element {
    let mut experience = use_experience();
    let Some(progress) = screen_state(experience, |state| match state {
        ScreenState::Card(progress) => Some(progress.clone()),
        _ => None,
    }) else {
        return rsx! {};
    };
    let caption = experience.read().session().caption().to_string();
    let finished = progress.celebration_finished();

    rsx! {
        div { class: "card-page",
            if finished {
                Fireworks {}
            }
            Trumpets { pops: progress.pops() }
            div { class: "card-heading",
                if finished {
                    SurpriseBanner {}
                } else {
                    h1 { class: "celebrate", "Let's Celebrate!" }
                }
            }
            div { class: "polaroid",
                div { class: "polaroid-tape" }
                span { class: "polaroid-hat", "\u{1f973}" }
                img { src: POLAROID_IMAGE, alt: "Birthday Memory" }
                input {
                    class: "polaroid-caption",
                    r#type: "text",
                    placeholder: "Happy Birthday!",
                    value: "{caption}",
                    oninput: move |evt| {
                        experience.write().apply(ScreenAction::EditCaption(evt.value()));
                    },
                }
            }
            ScreenNav { next_label: "Next: Open Message" }
        }
    }
}

/// Two trumpets that each fire one confetti burst per pop.
#[component]
fn Trumpets(pops: u8) -> Element {
    let bursts = use_hook(|| {
        (0..3)
            .map(|_| (burst(CONFETTI_PER_POP, true), burst(CONFETTI_PER_POP, false)))
            .collect::<Vec<_>>()
    });

    rsx! {
        div { class: "trumpets",
            span { class: "trumpet trumpet-left", "\u{1f3ba}" }
            span { class: "trumpet trumpet-right", "\u{1f3ba}" }
            for (pop, (left, right)) in bursts.iter().take(usize::from(pops)).enumerate() {
                div { key: "{pop}", class: "confetti-burst",
                    for (idx, particle) in left.iter().chain(right.iter()).enumerate() {
                        span {
                            key: "{idx}",
                            class: if idx < left.len() { "confetti from-left" } else { "confetti from-right" },
                            style: particle.style(),
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn SurpriseBanner() -> Element {
    rsx! {
        div { class: "ribbon",
            span { class: "ribbon-tail left" }
            h2 { class: "ribbon-body", "Surprise I love you baby" }
            span { class: "ribbon-tail right" }
        }
    }
}

#[component]
fn Fireworks() -> Element {
    let bursts = use_hook(|| {
        let mut rng = rand::rng();
        (0..FIREWORK_BURSTS)
            .map(|_| {
                format!(
                    "left: {:.0}%; top: {:.0}%; animation-delay: {:.2}s; color: {};",
                    rng.random_range(10.0..90.0_f64),
                    rng.random_range(10.0..50.0_f64),
                    rng.random_range(0.0..2.0_f64),
                    CONFETTI_COLORS[rng.random_range(0..CONFETTI_COLORS.len())],
                )
            })
            .collect::<Vec<_>>()
    });

    rsx! {
        div { class: "fireworks", aria_hidden: "true",
            for (idx, style) in bursts.iter().enumerate() {
                span { key: "{idx}", class: "firework", style: "{style}" }
            }
        }
    }
}

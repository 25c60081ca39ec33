use dioxus::prelude::*;
use rand::Rng;

const FLOATERS: usize = 14;

#[derive(Clone, Copy, Debug, PartialEq)]
struct Floater {
    left: f64,
    size: f64,
    delay: f64,
    duration: f64,
}

impl Floater {
    fn style(&self) -> String {
        format!(
            "left: {:.1}%; font-size: {:.0}px; animation-delay: {:.1}s; animation-duration: {:.1}s;",
            self.left, self.size, self.delay, self.duration
        )
    }
}

fn scatter(count: usize) -> Vec<Floater> {
    let mut rng = rand::rng();
    (0..count)
        .map(|_| Floater {
            left: rng.random_range(0.0..100.0),
            size: rng.random_range(14.0..34.0),
            delay: rng.random_range(0.0..8.0),
            duration: rng.random_range(10.0..18.0),
        })
        .collect()
}

/// Pastel backdrop with drifting hearts for the lighter screens.
#[component]
pub fn Background() -> Element {
    let floaters = use_hook(|| scatter(FLOATERS));

    rsx! {
        div { class: "background", aria_hidden: "true",
            div { class: "blob blob-a" }
            div { class: "blob blob-b" }
            for (idx, floater) in floaters.iter().enumerate() {
                span {
                    key: "{idx}",
                    class: "floater",
                    style: floater.style(),
                    "\u{2764}"
                }
            }
        }
    }
}

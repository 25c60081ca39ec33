use dioxus::prelude::*;

use super::use_experience;

/// Back and forward controls shared by every screen past the card.
///
/// The forward control only exists while the screen's gate is open.
#[component]
pub fn ScreenNav(next_label: &'static str) -> Element {
    let mut experience = use_experience();
    let (can_retreat, can_advance) = {
        let experience = experience.read();
        let session = experience.session();
        (session.can_retreat(), session.can_advance())
    };

    rsx! {
        nav { class: "screen-nav",
            if can_retreat {
                button {
                    id: "nav-prev",
                    class: "nav-prev",
                    onclick: move |_| {
                        experience.write().retreat();
                    },
                    "Back"
                }
            }
            if can_advance {
                button {
                    id: "nav-next",
                    class: "nav-next",
                    onclick: move |_| {
                        experience.write().advance();
                    },
                    "{next_label}"
                }
            }
        }
    }
}

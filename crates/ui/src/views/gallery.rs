use dioxus::prelude::*;
use keepsake_core::model::content::{GALLERY_KEYWORDS, Photo, gallery_rows};
use keepsake_core::{ScreenAction, ScreenState};

use super::{ScreenNav, screen_state, use_experience};

/// Each row repeats its photos so the marquee never runs dry.
const MARQUEE_REPEATS: usize = 2;
const KEYWORD_REPEATS: usize = 4;

#[component]
pub fn GalleryView() -> Element {
    let rows = use_hook(gallery_rows);
    let Some(gallery) = screen_state(use_experience(), |state| match state {
        ScreenState::Gallery(gallery) => Some(gallery.clone()),
        _ => None,
    }) else {
        return rsx! {};
    };

    rsx! {
        div { class: "gallery-page",
            if let Some(caption) = gallery.hovered_caption() {
                div { class: "gallery-caption",
                    p { "\u{201c}{caption}\u{201d}" }
                }
            }
            div { class: "keyword-scroller", aria_hidden: "true",
                div { class: "keyword-track",
                    for (idx, word) in GALLERY_KEYWORDS.into_iter().cycle().take(GALLERY_KEYWORDS.len() * KEYWORD_REPEATS).enumerate() {
                        span { key: "{idx}", class: "keyword", "{word}" }
                    }
                }
            }
            div { class: "gallery-rows",
                for (row_idx, row) in rows.iter().enumerate() {
                    MarqueeRow { key: "{row_idx}", reverse: row_idx % 2 == 1, photos: row.clone() }
                }
            }
            ScreenNav { next_label: "Next: One More Thing" }
        }
    }
}

#[component]
fn MarqueeRow(reverse: bool, photos: Vec<(usize, &'static Photo)>) -> Element {
    let mut experience = use_experience();
    let len = photos.len();

    rsx! {
        div { class: "marquee",
            div { class: if reverse { "marquee-track reverse" } else { "marquee-track" },
                for (slot, (photo_idx, photo)) in photos.iter().copied().cycle().take(len * MARQUEE_REPEATS).enumerate() {
                    div {
                        key: "{photo.id}-{slot}",
                        class: "marquee-photo",
                        onmouseenter: move |_| {
                            experience.write().apply(ScreenAction::HoverPhoto(Some(photo_idx)));
                        },
                        onmouseleave: move |_| {
                            experience.write().apply(ScreenAction::HoverPhoto(None));
                        },
                        img { src: photo.src, alt: "Memory" }
                    }
                }
            }
        }
    }
}

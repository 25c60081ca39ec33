use dioxus::document::eval;
use dioxus::prelude::*;
use keepsake_core::model::{Relationship, WishDraft, WishTone};
use keepsake_core::time::COPIED_RESET;

use super::scripts::copy_to_clipboard_script;
#[cfg(test)]
use super::ViewTestHandles;
use crate::context::AppContext;

/// Form that asks the text generator for a birthday wish.
///
/// Closing the panel drops any in-flight request along with the scope, so a
/// late response never lands anywhere.
#[component]
pub fn WishPanel(on_close: EventHandler<()>) -> Element {
    let ctx = use_context::<AppContext>();
    let generator = ctx.wish_generator();
    let mut draft = use_signal(WishDraft::new);
    let mut error = use_signal(|| None::<String>);

    let (name, relationship, tone, hobbies) = {
        let draft = draft.read();
        (
            draft.name.clone(),
            draft.relationship,
            draft.tone,
            draft.hobbies.clone(),
        )
    };
    let pending = draft.read().is_pending();
    let can_generate = draft.read().can_generate();
    let copied = draft.read().copied();
    let generated = draft.read().generated().map(str::to_string);

    let generate = use_callback(move |()| {
        let begun = draft.write().begin();
        match begun {
            Ok((ticket, request)) => {
                error.set(None);
                let generator = generator.clone();
                spawn(async move {
                    let wish = generator.generate(&request).await;
                    draft.write().complete(ticket, wish);
                });
            }
            Err(err) => error.set(Some(err.to_string())),
        }
    });

    #[cfg(test)]
    use_hook(|| {
        if let Some(handles) = try_consume_context::<ViewTestHandles>() {
            handles.register_wish(generate, draft);
        }
    });

    let on_copy = move |_: MouseEvent| {
        let Some(text) = draft.read().generated().map(str::to_string) else {
            return;
        };
        let _ = eval(&copy_to_clipboard_script(&text));
        draft.write().mark_copied();
        spawn(async move {
            tokio::time::sleep(COPIED_RESET).await;
            draft.write().clear_copied();
        });
    };

    rsx! {
        div { class: "wish-panel",
            div { class: "wish-header",
                button { class: "icon-button", onclick: move |_| on_close.call(()), "\u{2190}" }
                h2 { "AI Wish Writer" }
            }
            label { r#for: "wish-name", "Who is it for?" }
            input {
                id: "wish-name",
                r#type: "text",
                placeholder: "Name (e.g. Alex)",
                value: "{name}",
                oninput: move |evt| draft.write().name = evt.value(),
            }
            div { class: "wish-grid",
                div {
                    label { r#for: "wish-relationship", "Relationship" }
                    select {
                        id: "wish-relationship",
                        value: "{relationship}",
                        onchange: move |evt| {
                            if let Ok(value) = evt.value().parse::<Relationship>() {
                                draft.write().relationship = value;
                            }
                        },
                        for choice in Relationship::ALL {
                            option { key: "{choice}", value: "{choice}", selected: choice == relationship, "{choice}" }
                        }
                    }
                }
                div {
                    label { r#for: "wish-tone", "Tone" }
                    select {
                        id: "wish-tone",
                        value: "{tone}",
                        onchange: move |evt| {
                            if let Ok(value) = evt.value().parse::<WishTone>() {
                                draft.write().tone = value;
                            }
                        },
                        for choice in WishTone::ALL {
                            option { key: "{choice}", value: "{choice}", selected: choice == tone, "{choice}" }
                        }
                    }
                }
            }
            label { r#for: "wish-hobbies", "Hobbies / Interests (optional)" }
            input {
                id: "wish-hobbies",
                r#type: "text",
                placeholder: "e.g. Hiking, Coding, Cats",
                value: "{hobbies}",
                oninput: move |evt| draft.write().hobbies = evt.value(),
            }
            if let Some(message) = error() {
                p { class: "wish-error", role: "alert", "{message}" }
            }
            button {
                id: "wish-generate",
                class: "wish-generate",
                disabled: !can_generate,
                onclick: move |_| generate.call(()),
                if pending {
                    span { class: "spinner" }
                    "Writing..."
                } else {
                    "Generate Wish \u{2728}"
                }
            }
            if let Some(text) = generated {
                div { class: "wish-result",
                    p { "{text}" }
                    button { id: "wish-copy", class: "link-button", onclick: on_copy,
                        if copied { "Copied!" } else { "Copy" }
                    }
                }
            }
        }
    }
}

use dioxus::prelude::*;
use keepsake_core::time::LOGIN_VERIFY_DELAY;

use super::use_experience;
#[cfg(test)]
use super::ViewTestHandles;

#[component]
pub fn LoginView() -> Element {
    let mut experience = use_experience();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    let mut verifying = use_signal(|| false);

    let attempt = use_callback(move |()| {
        if verifying() {
            return;
        }
        verifying.set(true);
        error.set(None);
        spawn(async move {
            tokio::time::sleep(LOGIN_VERIFY_DELAY).await;
            let result = {
                let email = email.read();
                let password = password.read();
                experience.write().submit(&email, &password)
            };
            // On success the view is replaced; fields are kept on failure.
            if let Err(err) = result {
                error.set(Some(err.to_string()));
                verifying.set(false);
            }
        });
    });

    #[cfg(test)]
    use_hook(|| {
        if let Some(handles) = try_consume_context::<ViewTestHandles>() {
            handles.register_login(attempt, email, password);
        }
    });

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        attempt.call(());
    };

    rsx! {
        div { class: "login-page",
            div { class: "login-card",
                div { class: "login-lock", "\u{1f512}" }
                h2 { "Welcome Back" }
                p { class: "muted", "Please verify your identity to view this card." }
                form { class: "login-form", onsubmit: on_submit,
                    label { r#for: "login-email", "Email Address" }
                    input {
                        id: "login-email",
                        r#type: "email",
                        placeholder: "name@example.com",
                        required: true,
                        value: "{email}",
                        oninput: move |evt| email.set(evt.value()),
                    }
                    label { r#for: "login-password", "Password" }
                    input {
                        id: "login-password",
                        r#type: "password",
                        placeholder: "\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}",
                        required: true,
                        value: "{password}",
                        oninput: move |evt| password.set(evt.value()),
                    }
                    if let Some(message) = error() {
                        div { class: "login-error", role: "alert", "{message}" }
                    }
                    button {
                        r#type: "submit",
                        class: "login-submit",
                        disabled: verifying(),
                        if verifying() {
                            span { class: "spinner" }
                        } else {
                            "Access Card"
                        }
                    }
                }
            }
        }
    }
}

use crate::components::layout::AuthLayout;
use crate::services::context::{AuthState, is_valid_username};
use dioxus::{events::KeyboardEvent, prelude::*};
use dioxus_router::use_navigator;
use std::time::Duration;
use tokio::time::sleep;

#[component]
pub fn LoginPage() -> Element {
    let nav = use_navigator();
    let mut auth = use_context::<AuthState>();
    let mut username = use_signal(String::new);
    let mut admin_login = use_signal(|| false);
    let mut error = use_signal(|| None::<String>);
    let mut hide_ui = use_signal(|| false);

    let mut submit = move || match auth.login(&username(), admin_login()) {
        Ok(()) => {
            error.set(None);
            hide_ui.set(true);
            spawn(async move {
                sleep(Duration::from_millis(400)).await;
                nav.push("/notes");
            });
        }
        Err(message) => error.set(Some(message)),
    };

    // Function to handle keypress events
    let on_keypress = move |e: KeyboardEvent| {
        if e.key() == Key::Enter {
            submit();
        }
    };

    rsx! {
        AuthLayout {
            main {
                class: if hide_ui() { "login-card fade-out" } else { "login-card" },
                h1 {
                    class: "welcome-text",
                    "Welcome to Note Vault"
                }
                input {
                    class: "login-input",
                    r#type: "text",
                    value: "{username()}",
                    maxlength: "16",
                    oninput: move |e| username.set(e.value()),
                    onkeypress: on_keypress,
                    placeholder: "Username",
                    autofocus: true
                }
                button {
                    class: if admin_login() { "role-toggle active" } else { "role-toggle" },
                    onclick: move |_| admin_login.toggle(),
                    if admin_login() {
                        "Signing in as administrator"
                    } else {
                        "Sign in as administrator"
                    }
                }
                button {
                    class: "login-button",
                    disabled: !is_valid_username(&username()),
                    onclick: move |_| submit(),
                    "Sign in"
                }
                if let Some(message) = error() {
                    div { class: "error-message", "{message}" }
                } else {
                    div {
                        class: "error-message-placeholder",
                        style: "height: 1.5em;"
                    }
                }
            }
        }
    }
}

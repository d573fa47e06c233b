use crate::components::layout::AuthLayout;
use crate::services::context::AuthState;
use dioxus::prelude::*;
use dioxus_router::use_navigator;

#[component]
pub fn AccessDeniedPage() -> Element {
    let nav = use_navigator();
    let mut auth = use_context::<AuthState>();

    rsx! {
        AuthLayout {
            main { class: "denied-card",
                h1 { class: "denied-title", "Access denied" }
                p {
                    class: "denied-text",
                    "This area is limited to administrators. You are signed in as {auth.get_username()}."
                }
                div { class: "denied-actions",
                    button {
                        class: "login-button",
                        onclick: move |_| { nav.push("/notes"); },
                        "Back to notes"
                    }
                    button {
                        class: "link-button",
                        onclick: move |_| {
                            auth.logout();
                            nav.push("/login");
                        },
                        "Switch account"
                    }
                }
            }
        }
    }
}

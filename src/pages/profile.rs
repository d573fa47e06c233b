use crate::services::context::AuthState;
use dioxus::prelude::*;

#[component]
pub fn ProfilePage() -> Element {
    let auth = use_context::<AuthState>();
    let role = if *auth.is_admin.read() {
        "Administrator"
    } else {
        "Member"
    };

    rsx! {
        div { class: "page",
            h2 { class: "page-title", "Profile" }
            div { class: "profile-card",
                div { class: "profile-row",
                    span { class: "profile-label", "Username" }
                    span { class: "profile-value", "{auth.get_username()}" }
                }
                div { class: "profile-row",
                    span { class: "profile-label", "Role" }
                    span { class: "profile-value", "{role}" }
                }
            }
        }
    }
}

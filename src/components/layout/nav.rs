use crate::app::main::Route;
use crate::services::context::AuthState;
use dioxus::prelude::*;
use dioxus_router::{navigator, use_route};

#[component]
pub fn Navigation() -> Element {
    let nav = navigator();
    let route = use_route::<Route>();
    let mut auth = use_context::<AuthState>();

    let active_tab = match route {
        Route::Notes {} => "Notes",
        Route::Profile {} => "Profile",
        Route::Admin {} => "Admin",
        Route::Login {} | Route::AccessDenied {} => "",
    };

    rsx! {
        nav { class: "navigation",
            div { class: "brand",
                h1 { class: "app-name", "Note Vault" }
                span { class: "signed-in-as", "{auth.get_username()}" }
            }

            ul { class: "nav-items",
                li {
                    class: if active_tab == "Notes" { "nav-item active" } else { "nav-item" },
                    onclick: move |_| { nav.push("/notes"); },
                    span { class: "nav-text", "Notes" }
                }
                li {
                    class: if active_tab == "Profile" { "nav-item active" } else { "nav-item" },
                    onclick: move |_| { nav.push("/profile"); },
                    span { class: "nav-text", "Profile" }
                }
                li {
                    class: if active_tab == "Admin" { "nav-item active" } else { "nav-item" },
                    onclick: move |_| { nav.push("/admin"); },
                    span { class: "nav-text", "Admin" }
                }
            }

            button {
                class: "logout-button",
                onclick: move |_| {
                    auth.logout();
                    nav.push("/login");
                },
                "Log out"
            }
        }
    }
}

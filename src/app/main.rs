//! Application routing system.

use crate::components::guard::ProtectedRoute;
use crate::components::layout::Layout;
use crate::pages::access_denied::AccessDeniedPage;
use crate::pages::admin::AdminPage;
use crate::pages::login::LoginPage;
use crate::pages::notes::NotesPage;
use crate::pages::profile::ProfilePage;

use dioxus::prelude::*;
use dioxus_router::Routable;

#[component]
pub fn Login() -> Element {
    rsx! { LoginPage {} }
}

#[component]
pub fn AccessDenied() -> Element {
    rsx! { AccessDeniedPage {} }
}

#[component]
pub fn Notes() -> Element {
    rsx! {
        ProtectedRoute {
            NotesPage {}
        }
    }
}

#[component]
pub fn Profile() -> Element {
    rsx! {
        ProtectedRoute {
            ProfilePage {}
        }
    }
}

#[component]
pub fn Admin() -> Element {
    rsx! {
        ProtectedRoute {
            admin_page: true,
            AdminPage {}
        }
    }
}

/// Main routing enum for the application.
#[derive(Clone, Routable, Debug, PartialEq, Eq)]
pub enum Route {
    /// Login page route.
    #[route("/login")]
    Login {},
    /// Shown when an authenticated user lacks the admin role.
    #[route("/access-denied")]
    AccessDenied {},
    /// Main layout wrapper with the notes page as default.
    #[layout(Layout)]
    #[redirect("/", || Route::Notes {})]
    #[route("/notes")]
    Notes {},
    /// Current account overview.
    #[route("/profile")]
    Profile {},
    /// Admin console, requires the admin role.
    #[route("/admin")]
    Admin {},
}

mod app;
mod components;
mod pages;
mod services;

use crate::app::main::Route;
use crate::services::context::AuthState;
use dioxus::LaunchBuilder;
use dioxus::prelude::*;
use dioxus_desktop::{Config, LogicalSize, WindowBuilder};
use dioxus_router::Router;
use tracing_subscriber::EnvFilter;

fn main() {
    // Logging setup
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new("info"))
        .init();

    let size = LogicalSize::new(1120.0, 760.0);

    let config = Config::default()
        .with_window(
            WindowBuilder::new()
                .with_title("Note Vault")
                .with_inner_size(size)
                .with_min_inner_size(size)
                .with_resizable(false),
        )
        .with_menu(None);

    LaunchBuilder::new().with_cfg(config).launch(AppRoot);
}

/// Application root: provides the shared auth context, then mounts the router.
#[component]
fn AppRoot() -> Element {
    let token = use_signal(|| None::<String>);
    let is_admin = use_signal(|| false);
    let current_user = use_signal(|| None::<String>);
    provide_context(AuthState {
        token,
        is_admin,
        current_user,
    });

    rsx! { Router::<Route> {} }
}

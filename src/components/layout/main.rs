use crate::app::main::Route;
use crate::components::layout::Navigation;
use dioxus::prelude::*;
use dioxus_router::components::Outlet;

const STYLES: &str = include_str!("../../../assets/styles/main.css");

#[component]
pub fn Layout() -> Element {
    let mut show_ui = use_signal(|| false);

    use_effect(move || {
        spawn(async move {
            tokio::time::sleep(std::time::Duration::from_millis(100)).await;
            show_ui.set(true);
        });
    });

    rsx! {
        style {
            dangerous_inner_html: STYLES
        }

        div {
            class: if show_ui() { "app-shell fade-in" } else { "app-shell fade-out" },
            Navigation {}
            main {
                class: "page-content",
                Outlet::<Route> {}
            }
        }
    }
}

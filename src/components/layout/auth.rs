use dioxus::prelude::*;

const STYLES: &str = include_str!("../../../assets/styles/main.css");

/// Minimal centered shell for the login and access-denied pages.
#[component]
pub fn AuthLayout(children: Element) -> Element {
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
            class: if show_ui() { "auth-container fade-in" } else { "auth-container fade-out" },
            {children}
        }
    }
}

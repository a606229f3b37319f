use dioxus::prelude::*;

use crate::OnlineIndicator;

/// Non-interactive banner shown above every routed view.
#[component]
pub fn TopBar(#[props(default = "Roster".to_string())] title: String) -> Element {
    rsx! {
        header {
            class: "topbar",
            span { class: "topbar__title", "{title}" }
            OnlineIndicator {}
        }
    }
}

use dioxus::prelude::*;

use ui::TopBar;

use crate::Route;

/// Chrome shared by every view: the top bar above the routed content.
#[component]
pub fn Shell() -> Element {
    rsx! {
        TopBar { title: "Roster" }
        main {
            class: "page",
            Outlet::<Route> {}
        }
    }
}

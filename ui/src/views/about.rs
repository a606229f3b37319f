use dioxus::prelude::*;

/// Static about page.
#[component]
pub fn About() -> Element {
    rsx! {
        section {
            class: "about",
            h2 { "About" }
            div {
                class: "paper",
                p { "Roster is a small registration front end for the users service." }
                p {
                    "Add a user from the home page and the list refreshes on its own. "
                    "Accounts live in the service; nothing is stored in the browser."
                }
            }
        }
    }
}

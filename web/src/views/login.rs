use dioxus::prelude::*;

use ui::views::UserForm;
use ui::{dispatch, use_api, use_app_state, AppEvent};

/// Login view. It binds the same shared form fields and submit flow as the
/// other form views; typing here shows up on them too.
#[component]
pub fn Login() -> Element {
    let api = use_api();
    let state = use_app_state();

    let edit_api = api.clone();
    let submit_api = api.clone();

    rsx! {
        section {
            class: "page__section",
            h2 { "Login" }
            div {
                class: "paper",
                UserForm {
                    form: state().form,
                    on_edit: move |edit| dispatch(&edit_api, state, AppEvent::FieldEdited(edit)),
                    on_submit: move |_| dispatch(&submit_api, state, AppEvent::FormSubmitted),
                }
            }
        }
    }
}

use dioxus::prelude::*;

use ui::views::{UserForm, UserList};
use ui::{dispatch, use_api, use_app_state, AppEvent};

/// Landing view: the registration form above the full user list.
#[component]
pub fn Home() -> Element {
    let api = use_api();
    let state = use_app_state();

    let edit_api = api.clone();
    let submit_api = api.clone();

    rsx! {
        section {
            class: "page__section",
            h2 { "Create User" }
            div {
                class: "paper",
                UserForm {
                    form: state().form,
                    on_edit: move |edit| dispatch(&edit_api, state, AppEvent::FieldEdited(edit)),
                    on_submit: move |_| dispatch(&submit_api, state, AppEvent::FormSubmitted),
                }
            }
        }

        section {
            class: "page__section",
            h2 { "All Users" }
            UserList { users: state().users }
        }
    }
}

use dioxus::prelude::*;

use ui::views::UserForm;
use ui::{dispatch, use_api, use_app_state, AppEvent};

/// Signup view. Same shared form fields and submit flow as the home view,
/// under its own path.
#[component]
pub fn Signup() -> Element {
    let api = use_api();
    let state = use_app_state();

    let edit_api = api.clone();
    let submit_api = api.clone();

    rsx! {
        section {
            class: "page__section",
            h2 { "Signup" }
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

#[cfg(test)]
mod tests {
    use super::*;
    use api::UsersApi;
    use ui::AppState;

    #[component]
    fn Fixture(state: AppState) -> Element {
        use_context_provider(|| UsersApi::new("http://localhost:0"));
        use_context_provider(move || Signal::new(state));
        rsx! {
            Signup {}
        }
    }

    #[test]
    fn test_renders_heading_and_the_shared_form_values() {
        let mut state = AppState::default();
        state.form.username = "alice".to_string();

        let mut dom = VirtualDom::new_with_props(Fixture, FixtureProps { state });
        dom.rebuild_in_place();
        let html = dioxus_ssr::render(&dom);

        assert!(html.contains("Signup"));
        assert!(html.contains(r#"value="alice""#));
    }
}

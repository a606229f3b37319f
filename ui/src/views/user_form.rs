use dioxus::prelude::*;

use crate::components::{Button, ButtonVariant, Input, Label};
use crate::state::{FieldEdit, FormField, FormState};

/// Controlled registration form.
///
/// Displayed values are exactly the given [`FormState`]; every keystroke
/// goes up through `on_edit` and submission through `on_submit`. The form
/// itself holds no state and applies no validation.
#[component]
pub fn UserForm(
    form: FormState,
    on_edit: EventHandler<FieldEdit>,
    on_submit: EventHandler<()>,
) -> Element {
    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        on_submit.call(());
    };

    rsx! {
        form {
            class: "user-form",
            onsubmit: handle_submit,

            div {
                class: "user-form__field",
                Label { html_for: "username", "Username" }
                Input {
                    id: "username",
                    name: "username",
                    r#type: "text",
                    placeholder: "Enter a username",
                    value: form.username.clone(),
                    oninput: move |evt: FormEvent| on_edit.call(FieldEdit {
                        field: FormField::Username,
                        value: evt.value(),
                    }),
                }
            }

            div {
                class: "user-form__field",
                Label { html_for: "email", "Email" }
                Input {
                    id: "email",
                    name: "email",
                    r#type: "email",
                    placeholder: "Enter an email address",
                    value: form.email.clone(),
                    oninput: move |evt: FormEvent| on_edit.call(FieldEdit {
                        field: FormField::Email,
                        value: evt.value(),
                    }),
                }
            }

            div {
                class: "user-form__field",
                Label { html_for: "password", "Password" }
                Input {
                    id: "password",
                    name: "password",
                    r#type: "password",
                    placeholder: "Enter a password",
                    value: form.password.clone(),
                    oninput: move |evt: FormEvent| on_edit.call(FieldEdit {
                        field: FormField::Password,
                        value: evt.value(),
                    }),
                }
            }

            Button {
                variant: ButtonVariant::Primary,
                r#type: "submit",
                "Submit"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[component]
    fn Fixture() -> Element {
        let form = FormState {
            username: "alice".to_string(),
            email: "a@x.com".to_string(),
            password: "hunter2".to_string(),
        };
        rsx! {
            UserForm {
                form,
                on_edit: move |_| {},
                on_submit: move |_| {},
            }
        }
    }

    #[test]
    fn test_inputs_display_the_given_field_values() {
        let mut dom = VirtualDom::new(Fixture);
        dom.rebuild_in_place();
        let html = dioxus_ssr::render(&dom);

        assert!(html.contains(r#"value="alice""#));
        assert!(html.contains(r#"value="a@x.com""#));
        assert!(html.contains(r#"value="hunter2""#));
        assert!(html.contains(r#"type="password""#));
        assert!(html.contains(r#"type="submit""#));
    }
}

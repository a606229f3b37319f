use dioxus::prelude::*;

/// Themed text input.
///
/// The rendered value is always the `value` prop, never browser-local
/// state; every keystroke surfaces through `oninput`.
#[component]
pub fn Input(
    #[props(default = "".to_string())] id: String,
    #[props(default = "".to_string())] class: String,
    #[props(default = "text".to_string())] r#type: String,
    #[props(default = "".to_string())] name: String,
    #[props(default = "".to_string())] placeholder: String,
    #[props(default = "".to_string())] value: String,
    oninput: EventHandler<FormEvent>,
) -> Element {
    rsx! {
        input {
            id: id,
            class: "input {class}",
            r#type: r#type,
            name: name,
            placeholder: placeholder,
            value: value,
            oninput: move |evt| oninput.call(evt),
        }
    }
}

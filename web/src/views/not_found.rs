use dioxus::prelude::*;

/// Catch-all for paths no route matches. Renders nothing; the miss goes to
/// the operator log only.
#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    tracing::warn!("No view mounted for /{}", segments.join("/"));
    rsx! {}
}

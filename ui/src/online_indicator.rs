//! Connectivity dot for the top bar.

use dioxus::prelude::*;

use crate::state::use_app_state;

/// A small dot showing whether the users service answered the last probe.
///
/// - **Online**: green dot ("Connected")
/// - **Offline**: gray dot ("Offline")
#[component]
pub fn OnlineIndicator() -> Element {
    let state = use_app_state();

    if state().online {
        rsx! {
            span {
                class: "online-indicator online-indicator--online",
                title: "Connected",
            }
        }
    } else {
        rsx! {
            span {
                class: "online-indicator online-indicator--offline",
                title: "Offline",
            }
        }
    }
}

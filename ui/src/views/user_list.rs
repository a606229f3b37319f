use dioxus::prelude::*;

use api::User;

/// One row per user, in the order given. No paging, filtering, or sorting;
/// an empty collection renders the table shell with an empty body.
#[component]
pub fn UserList(users: Vec<User>) -> Element {
    rsx! {
        table {
            class: "user-table",
            thead {
                tr {
                    th { "Username" }
                    th { "Email" }
                }
            }
            tbody {
                for user in &users {
                    tr {
                        key: "{user.username}",
                        td { "{user.username}" }
                        td { "{user.email}" }
                    }
                }
            }
        }
    }
}

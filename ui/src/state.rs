//! Application state container.
//!
//! One [`Signal<AppState>`] owns everything the views render: the user
//! collection, the registration form, and the connectivity flag. Views never
//! touch it directly; they emit an [`AppEvent`] and [`AppState::apply`] is
//! the only mutation path. When an event implies a side effect, `apply`
//! hands back a [`Command`] and [`dispatch`] runs it, feeding the outcome
//! in as a further event.
//!
//! Overlapping fetch and create flows are not sequenced; whichever response
//! lands last wins the state.

use api::{NewUser, User, UsersApi};
use dioxus::prelude::*;

/// In-progress registration input bound to the controlled form fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// The form fields a view can edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Username,
    Email,
    Password,
}

/// One controlled-input keystroke: which field, and its new value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldEdit {
    pub field: FormField,
    pub value: String,
}

/// Everything the app renders from.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppState {
    /// The user collection as last fetched, in service order.
    pub users: Vec<User>,
    pub form: FormState,
    /// Whether the service answered the last connectivity probe.
    pub online: bool,
}

/// Events emitted by views and by completed commands.
#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    /// A controlled input reported a new value.
    FieldEdited(FieldEdit),
    /// A form asked to submit the current field values.
    FormSubmitted,
    /// A fetch came back with the full collection.
    UsersLoaded(Vec<User>),
    /// A fetch failed; already logged, state stays as it was.
    LoadFailed,
    /// The service accepted a registration.
    UserCreated,
    /// The service rejected a registration; already logged.
    CreateFailed,
    /// Outcome of the periodic ping probe.
    ConnectivityChecked(bool),
}

/// Side effects the reducer asks the driver to run.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    FetchUsers,
    CreateUser(NewUser),
}

impl AppState {
    /// Apply one event. Pure apart from the command it may hand back for
    /// the driver.
    pub fn apply(&mut self, event: AppEvent) -> Option<Command> {
        match event {
            AppEvent::FieldEdited(edit) => {
                match edit.field {
                    FormField::Username => self.form.username = edit.value,
                    FormField::Email => self.form.email = edit.value,
                    FormField::Password => self.form.password = edit.value,
                }
                None
            }
            AppEvent::FormSubmitted => Some(Command::CreateUser(NewUser {
                username: self.form.username.clone(),
                email: self.form.email.clone(),
                password: self.form.password.clone(),
            })),
            AppEvent::UsersLoaded(users) => {
                self.users = users;
                None
            }
            AppEvent::UserCreated => {
                // Only username and email reset here; the password box keeps
                // its last value.
                self.form.username.clear();
                self.form.email.clear();
                Some(Command::FetchUsers)
            }
            AppEvent::LoadFailed | AppEvent::CreateFailed => None,
            AppEvent::ConnectivityChecked(online) => {
                self.online = online;
                None
            }
        }
    }
}

/// Get the app state signal from context.
pub fn use_app_state() -> Signal<AppState> {
    use_context::<Signal<AppState>>()
}

/// Get the shared users service client from context.
pub fn use_api() -> UsersApi {
    use_context::<UsersApi>()
}

/// Run one event through the reducer and spawn whatever command it yields.
/// Command outcomes come back through here as further events; failures go
/// to the operator log and nothing else.
pub fn dispatch(api: &UsersApi, mut state: Signal<AppState>, event: AppEvent) {
    let command = state.write().apply(event);
    if let Some(command) = command {
        let api = api.clone();
        spawn(async move {
            run_command(api, state, command).await;
        });
    }
}

async fn run_command(api: UsersApi, state: Signal<AppState>, command: Command) {
    match command {
        Command::FetchUsers => match api.fetch_users().await {
            Ok(users) => dispatch(&api, state, AppEvent::UsersLoaded(users)),
            Err(e) => {
                tracing::error!("Failed to fetch users: {e}");
                dispatch(&api, state, AppEvent::LoadFailed);
            }
        },
        Command::CreateUser(new_user) => match api.create_user(&new_user).await {
            Ok(()) => dispatch(&api, state, AppEvent::UserCreated),
            Err(e) => {
                tracing::error!("Failed to create user: {e}");
                dispatch(&api, state, AppEvent::CreateFailed);
            }
        },
    }
}

/// Provider component that owns the state signal and the API client.
/// Wrap the router with it; everything below reaches both via context.
#[component]
pub fn StateProvider(children: Element) -> Element {
    let api = use_context_provider(UsersApi::from_env);
    let state = use_context_provider(|| Signal::new(AppState::default()));

    // Load the user list on mount
    let load_api = api.clone();
    let _ = use_resource(move || {
        let api = load_api.clone();
        async move {
            run_command(api, state, Command::FetchUsers).await;
        }
    });

    // Periodic connectivity check (every 30s)
    let probe_api = api.clone();
    use_effect(move || {
        let api = probe_api.clone();
        spawn(async move {
            loop {
                #[cfg(target_arch = "wasm32")]
                gloo_timers::future::sleep(std::time::Duration::from_secs(30)).await;
                #[cfg(not(target_arch = "wasm32"))]
                tokio::time::sleep(std::time::Duration::from_secs(30)).await;

                let online = api.ping().await.is_ok();
                if state.peek().online != online {
                    dispatch(&api, state, AppEvent::ConnectivityChecked(online));
                }
            }
        });
    });

    rsx! {
        {children}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edit(field: FormField, value: &str) -> AppEvent {
        AppEvent::FieldEdited(FieldEdit {
            field,
            value: value.to_string(),
        })
    }

    fn user(username: &str, email: &str) -> User {
        User {
            username: username.to_string(),
            email: email.to_string(),
        }
    }

    #[test]
    fn test_users_loaded_replaces_collection_in_order() {
        let mut state = AppState::default();
        state.users = vec![user("old", "old@x.com")];

        let loaded = vec![user("zoe", "z@x.com"), user("ann", "a@x.com")];
        let command = state.apply(AppEvent::UsersLoaded(loaded.clone()));

        assert_eq!(state.users, loaded);
        assert_eq!(command, None);
    }

    #[test]
    fn test_field_edit_changes_only_the_named_field() {
        let mut state = AppState::default();
        state.apply(edit(FormField::Username, "alice"));
        state.apply(edit(FormField::Email, "a@x.com"));

        state.apply(edit(FormField::Password, "hunter2"));

        assert_eq!(state.form.username, "alice");
        assert_eq!(state.form.email, "a@x.com");
        assert_eq!(state.form.password, "hunter2");

        // Last write per field wins.
        state.apply(edit(FormField::Username, "alicia"));
        assert_eq!(state.form.username, "alicia");
        assert_eq!(state.form.email, "a@x.com");
    }

    #[test]
    fn test_submit_carries_the_current_trio_and_leaves_state_alone() {
        let mut state = AppState::default();
        state.apply(edit(FormField::Username, "alice"));
        state.apply(edit(FormField::Email, "a@x.com"));
        state.apply(edit(FormField::Password, "hunter2"));
        let before = state.clone();

        let command = state.apply(AppEvent::FormSubmitted);

        assert_eq!(state, before);
        assert_eq!(
            command,
            Some(Command::CreateUser(NewUser {
                username: "alice".to_string(),
                email: "a@x.com".to_string(),
                password: "hunter2".to_string(),
            }))
        );
    }

    #[test]
    fn test_user_created_clears_username_and_email_but_not_password() {
        let mut state = AppState::default();
        state.apply(edit(FormField::Username, "alice"));
        state.apply(edit(FormField::Email, "a@x.com"));
        state.apply(edit(FormField::Password, "hunter2"));

        let command = state.apply(AppEvent::UserCreated);

        assert_eq!(state.form.username, "");
        assert_eq!(state.form.email, "");
        // The password box survives a successful create.
        assert_eq!(state.form.password, "hunter2");
        // And exactly one reload is requested.
        assert_eq!(command, Some(Command::FetchUsers));
    }

    #[test]
    fn test_failed_create_changes_nothing_and_yields_no_command() {
        let mut state = AppState::default();
        state.apply(edit(FormField::Username, "alice"));
        state.apply(edit(FormField::Email, "a@x.com"));
        state.apply(edit(FormField::Password, "hunter2"));
        let before = state.clone();

        let command = state.apply(AppEvent::CreateFailed);

        assert_eq!(state, before);
        assert_eq!(command, None);
    }

    #[test]
    fn test_failed_load_keeps_the_prior_collection() {
        let mut state = AppState::default();
        state.apply(AppEvent::UsersLoaded(vec![user("bob", "b@x.com")]));

        let command = state.apply(AppEvent::LoadFailed);

        assert_eq!(state.users, vec![user("bob", "b@x.com")]);
        assert_eq!(command, None);
    }

    #[test]
    fn test_connectivity_check_toggles_online_and_nothing_else() {
        let mut state = AppState::default();
        state.apply(edit(FormField::Username, "alice"));
        state.apply(AppEvent::UsersLoaded(vec![user("bob", "b@x.com")]));
        assert!(!state.online);

        let command = state.apply(AppEvent::ConnectivityChecked(true));

        assert!(state.online);
        assert_eq!(command, None);
        assert_eq!(state.form.username, "alice");
        assert_eq!(state.users.len(), 1);

        state.apply(AppEvent::ConnectivityChecked(false));
        assert!(!state.online);
    }
}

//! This crate contains the shared UI for the workspace: themed components,
//! pure views, and the application state container.

pub mod components;

pub mod state;
pub use state::{
    dispatch, use_api, use_app_state, AppEvent, AppState, Command, FieldEdit, FormField,
    FormState, StateProvider,
};

pub mod views;

mod topbar;
pub use topbar::TopBar;

mod online_indicator;
pub use online_indicator::OnlineIndicator;

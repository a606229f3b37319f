//! Wire models for the users service.
//!
//! The service wraps every payload in a `{status, data}` envelope. The
//! envelope types here match that shape one level deep and are unwrapped by
//! the client before results reach callers; application code only ever sees
//! [`User`] and [`NewUser`].

use serde::{Deserialize, Serialize};

/// A registered user as the service reports it.
///
/// Extra fields the service may attach (id, active flag, timestamps) are
/// ignored on deserialize.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub username: String,
    pub email: String,
}

/// Payload for registering a user. The password is write-only: it goes out
/// with the registration and never comes back in a [`User`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Envelope for `GET /users`: `{"status": "...", "data": {"users": [...]}}`.
#[derive(Debug, Clone, Deserialize)]
pub struct UsersEnvelope {
    #[serde(default)]
    pub status: String,
    pub data: UsersData,
}

/// Inner object of the list envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct UsersData {
    pub users: Vec<User>,
}

/// Envelope for `GET /users/{id}`: the user fields sit directly under `data`.
#[derive(Debug, Clone, Deserialize)]
pub struct UserEnvelope {
    #[serde(default)]
    pub status: String,
    pub data: User,
}

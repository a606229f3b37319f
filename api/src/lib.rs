//! REST client for the users service.
//!
//! [`UsersApi`] wraps a [`reqwest::Client`] around the service base URL and
//! exposes one method per endpoint:
//!
//! - `fetch_users`: `GET /users`, the full collection in wire order
//! - `create_user`: `POST /users` with a [`NewUser`] payload
//! - `fetch_user`: `GET /users/{id}`, a single record
//! - `ping`: `GET /users/ping`, the connectivity probe
//!
//! The client compiles for both native targets and wasm32; on wasm the
//! requests go through the browser's fetch machinery. There are no retries
//! and no timeout beyond the transport defaults.

mod error;
pub use error::ApiError;

mod models;
pub use models::{NewUser, User, UserEnvelope, UsersData, UsersEnvelope};

/// Base URL used when `USERS_SERVICE_URL` was not set at build time.
pub const DEFAULT_BASE_URL: &str = "http://localhost:5001";

/// Client for the users service REST API.
#[derive(Debug, Clone)]
pub struct UsersApi {
    base_url: String,
    http: reqwest::Client,
}

impl UsersApi {
    /// Client against the given base URL (scheme and host, no trailing path).
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
        }
    }

    /// Client against the service URL baked in at build time via the
    /// `USERS_SERVICE_URL` environment variable, falling back to
    /// [`DEFAULT_BASE_URL`]. Compile-time lookup keeps this usable on wasm,
    /// where there is no process environment to read.
    pub fn from_env() -> Self {
        Self::new(option_env!("USERS_SERVICE_URL").unwrap_or(DEFAULT_BASE_URL))
    }

    /// The base URL this client talks to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch every registered user, in the order the service lists them.
    pub async fn fetch_users(&self) -> Result<Vec<User>, ApiError> {
        let resp = self
            .http
            .get(format!("{}/users", self.base_url))
            .send()
            .await?;
        let envelope: UsersEnvelope = check_status(resp)?.json().await?;
        Ok(envelope.data.users)
    }

    /// Register a user. A 2xx answer is success; the response body is not
    /// interpreted further.
    pub async fn create_user(&self, new_user: &NewUser) -> Result<(), ApiError> {
        let resp = self
            .http
            .post(format!("{}/users", self.base_url))
            .json(new_user)
            .send()
            .await?;
        check_status(resp)?;
        Ok(())
    }

    /// Fetch a single user by id.
    pub async fn fetch_user(&self, id: u64) -> Result<User, ApiError> {
        let resp = self
            .http
            .get(format!("{}/users/{id}", self.base_url))
            .send()
            .await?;
        let envelope: UserEnvelope = check_status(resp)?.json().await?;
        Ok(envelope.data)
    }

    /// Probe the service. Ok means it answered 2xx on its ping route.
    pub async fn ping(&self) -> Result<(), ApiError> {
        let resp = self
            .http
            .get(format!("{}/users/ping", self.base_url))
            .send()
            .await?;
        check_status(resp)?;
        Ok(())
    }
}

fn check_status(resp: reqwest::Response) -> Result<reqwest::Response, ApiError> {
    let status = resp.status();
    if status.is_success() {
        Ok(resp)
    } else {
        Err(ApiError::Server {
            status: status.as_u16(),
        })
    }
}

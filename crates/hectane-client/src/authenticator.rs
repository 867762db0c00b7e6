use std::future::Future;

use serde_json::Value;
use tracing::debug;

use hectane_types::LoginRequest;

use crate::ajax::{Ajax, to_payload};
use crate::config::ClientConfig;
use crate::error::{Error, Result};

/// Lifecycle hooks driven by [`crate::session::Session`].
///
/// None of the methods keep state of their own; whatever they resolve with is
/// stored by the session.
pub trait Authenticator {
    /// Exchange credentials for a session payload.
    fn authenticate(&self, credentials: &LoginRequest)
    -> impl Future<Output = Result<Value>> + Send;

    /// End the session on the backend.
    fn invalidate(&self) -> impl Future<Output = Result<Value>> + Send;

    /// Try to resume a session from previously stored data.
    fn restore(&self, stored: Option<&Value>) -> impl Future<Output = Result<Value>> + Send;
}

/// Cookie-session authenticator against `/api/auth/login` and `/api/auth/logout`.
#[derive(Debug, Clone)]
pub struct SessionAuthenticator {
    ajax: Ajax,
    login_path: String,
    logout_path: String,
}

impl SessionAuthenticator {
    pub fn new(ajax: Ajax, config: &ClientConfig) -> Self {
        Self {
            ajax,
            login_path: config.login_path.clone(),
            logout_path: config.logout_path.clone(),
        }
    }
}

impl Authenticator for SessionAuthenticator {
    async fn authenticate(&self, credentials: &LoginRequest) -> Result<Value> {
        debug!(username = %credentials.username, "logging in");
        let payload = to_payload(credentials)?;
        self.ajax.request(&self.login_path, Some(payload)).await
    }

    async fn invalidate(&self) -> Result<Value> {
        self.ajax.post_empty(&self.logout_path).await
    }

    /// Always rejects: there is no "remember me", a fresh login is required.
    async fn restore(&self, _stored: Option<&Value>) -> Result<Value> {
        Err(Error::RestoreUnsupported)
    }
}

use serde_json::Value;
use tracing::{info, warn};

use hectane_types::{LoginRequest, User};

use crate::authenticator::Authenticator;
use crate::error::Result;

/// Session state held by the client.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionData {
    pub authenticated: bool,
    /// Whatever the authenticator resolved with; `null` when logged out.
    pub data: Value,
}

/// Owns the session value and applies the authenticator's results to it.
pub struct Session<A> {
    authenticator: A,
    state: SessionData,
}

impl<A: Authenticator> Session<A> {
    pub fn new(authenticator: A) -> Self {
        Self {
            authenticator,
            state: SessionData::default(),
        }
    }

    pub fn authenticator(&self) -> &A {
        &self.authenticator
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.authenticated
    }

    pub fn data(&self) -> &SessionData {
        &self.state
    }

    /// The logged in user, read from `data.user` or from the payload itself.
    pub fn current_user(&self) -> Option<User> {
        if !self.state.authenticated {
            return None;
        }
        let blob = &self.state.data;
        blob.get("user")
            .and_then(|u| serde_json::from_value(u.clone()).ok())
            .or_else(|| serde_json::from_value(blob.clone()).ok())
    }

    /// On success the session becomes authenticated with the returned payload.
    /// On failure the session is left as it was.
    pub async fn authenticate(&mut self, username: &str, password: &str) -> Result<()> {
        let credentials = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };
        let data = self.authenticator.authenticate(&credentials).await?;
        info!(%username, "session authenticated");
        self.state = SessionData {
            authenticated: true,
            data,
        };
        Ok(())
    }

    /// On success the session is cleared. A rejected logout keeps the session.
    pub async fn invalidate(&mut self) -> Result<()> {
        self.authenticator.invalidate().await?;
        info!("session invalidated");
        self.state = SessionData::default();
        Ok(())
    }

    /// Ask the authenticator to resume the current data. A failed restore
    /// destroys the session.
    pub async fn restore(&mut self) -> Result<()> {
        let stored = self.state.authenticated.then_some(&self.state.data);
        match self.authenticator.restore(stored).await {
            Ok(data) => {
                self.state = SessionData {
                    authenticated: true,
                    data,
                };
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "session restore failed");
                self.state = SessionData::default();
                Err(e)
            }
        }
    }
}

use tracing::warn;

use hectane_client::{Authenticator, Session};
use hectane_types::User;

use super::Route;

/// Global header: shows who is logged in and offers logout.
#[derive(Debug, Clone, Default)]
pub struct Header {
    error_message: Option<String>,
}

impl Header {
    pub fn user<A: Authenticator>(&self, session: &Session<A>) -> Option<User> {
        session.current_user()
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    /// End the session. If the backend refuses, the user stays where they are.
    pub async fn logout<A: Authenticator>(&mut self, session: &mut Session<A>) -> Route {
        match session.invalidate().await {
            Ok(()) => {
                self.error_message = None;
                Route::Login
            }
            Err(e) => {
                warn!(error = %e, "logout failed");
                self.error_message = Some(e.message());
                Route::for_session(session)
            }
        }
    }
}

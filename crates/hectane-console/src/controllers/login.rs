use tracing::warn;

use hectane_client::{Authenticator, Session};

use super::Route;
use crate::dialog::{DialogState, InvalidTransition, Submission};
use crate::form::{Form, LoginForm};

/// The login screen. Its form is always shown, so it starts open.
#[derive(Debug, Clone)]
pub struct LoginController {
    state: DialogState,
    pub form: LoginForm,
}

impl Default for LoginController {
    fn default() -> Self {
        Self {
            state: DialogState::Open,
            form: LoginForm::default(),
        }
    }
}

impl LoginController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn loading(&self) -> bool {
        self.state.loading()
    }

    pub fn error_message(&self) -> Option<&str> {
        self.state.error_message()
    }

    /// Authenticate with the form's credentials. Success leads to the index
    /// view; a rejection keeps the login view up with the backend's text.
    pub async fn login<A: Authenticator>(
        &mut self,
        session: &mut Session<A>,
    ) -> Result<Route, InvalidTransition> {
        let submission = Submission::begin(&mut self.state)?;
        let credentials = self.form.draft();

        match session
            .authenticate(&credentials.username, &credentials.password)
            .await
        {
            Ok(()) => {
                submission.resolve();
                self.state.open()?;
                self.form.password.clear();
                Ok(Route::Index)
            }
            Err(e) => {
                warn!(username = %credentials.username, error = %e, "login failed");
                submission.reject(e.message());
                Ok(Route::Login)
            }
        }
    }
}

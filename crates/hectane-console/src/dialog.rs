//! Finite-state model of a modal dialog that runs one request on confirm.
//!
//! ```text
//!            open                submit              resolve
//!  Closed ─────────▶ Open ─────────────▶ Pending ─────────────▶ Closed
//!    ▲                ▲ │                  │
//!    │     close      │ │ close            │ reject(msg)
//!    └────────────────┼─┘                  ▼
//!                     └──── open ────── Error(msg) ── submit ──▶ Pending
//! ```
//!
//! A dialog cannot be opened or closed while its request is pending. If the
//! request future is dropped before it settles, the dialog is rejected with
//! [`CANCELLED`].

use std::fmt;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DialogState {
    #[default]
    Closed,
    Open,
    Pending,
    /// The last request failed; the dialog stays up showing the message.
    Error(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("cannot {action} a dialog that is {state}")]
pub struct InvalidTransition {
    pub action: &'static str,
    pub state: &'static str,
}

impl DialogState {
    pub fn name(&self) -> &'static str {
        match self {
            DialogState::Closed => "closed",
            DialogState::Open => "open",
            DialogState::Pending => "pending",
            DialogState::Error(_) => "showing an error",
        }
    }

    pub fn is_visible(&self) -> bool {
        !matches!(self, DialogState::Closed)
    }

    /// True while the request is in flight.
    pub fn loading(&self) -> bool {
        matches!(self, DialogState::Pending)
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            DialogState::Error(msg) => Some(msg.as_str()),
            _ => None,
        }
    }

    /// Show the dialog with no error message.
    pub fn open(&mut self) -> Result<(), InvalidTransition> {
        self.guard_idle("open")?;
        *self = DialogState::Open;
        Ok(())
    }

    pub fn close(&mut self) -> Result<(), InvalidTransition> {
        self.guard_idle("close")?;
        *self = DialogState::Closed;
        Ok(())
    }

    /// Confirm was pressed: the request is about to be sent.
    pub fn submit(&mut self) -> Result<(), InvalidTransition> {
        match self {
            DialogState::Open | DialogState::Error(_) => {
                *self = DialogState::Pending;
                Ok(())
            }
            _ => Err(self.invalid("submit")),
        }
    }

    /// The request succeeded; the dialog closes.
    pub fn resolve(&mut self) -> Result<(), InvalidTransition> {
        self.guard_pending("resolve")?;
        *self = DialogState::Closed;
        Ok(())
    }

    /// The request failed with `message`.
    pub fn reject(&mut self, message: impl Into<String>) -> Result<(), InvalidTransition> {
        self.guard_pending("reject")?;
        *self = DialogState::Error(message.into());
        Ok(())
    }

    fn guard_idle(&self, action: &'static str) -> Result<(), InvalidTransition> {
        if self.loading() {
            return Err(self.invalid(action));
        }
        Ok(())
    }

    fn guard_pending(&self, action: &'static str) -> Result<(), InvalidTransition> {
        if !self.loading() {
            return Err(self.invalid(action));
        }
        Ok(())
    }

    fn invalid(&self, action: &'static str) -> InvalidTransition {
        InvalidTransition {
            action,
            state: self.name(),
        }
    }
}

impl fmt::Display for DialogState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DialogState::Error(msg) => write!(f, "error: {msg}"),
            other => f.write_str(other.name()),
        }
    }
}

/// Error shown when a pending request was abandoned before it settled.
pub const CANCELLED: &str = "request cancelled";

/// Holds a dialog in `Pending` for one request. Dropping it unsettled
/// rejects the dialog with [`CANCELLED`].
pub(crate) struct Submission<'a> {
    state: &'a mut DialogState,
}

impl<'a> Submission<'a> {
    pub(crate) fn begin(state: &'a mut DialogState) -> Result<Self, InvalidTransition> {
        state.submit()?;
        Ok(Self { state })
    }

    pub(crate) fn resolve(self) {
        *self.state = DialogState::Closed;
    }

    pub(crate) fn reject(self, message: impl Into<String>) {
        *self.state = DialogState::Error(message.into());
    }
}

impl Drop for Submission<'_> {
    fn drop(&mut self) {
        if self.state.loading() {
            *self.state = DialogState::Error(CANCELLED.into());
        }
    }
}

/// How a confirmed dialog settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Settled {
    Succeeded,
    Failed,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn happy_path() {
        let mut state = DialogState::default();
        assert!(!state.is_visible());

        state.open().unwrap();
        assert!(state.is_visible());
        assert!(!state.loading());

        state.submit().unwrap();
        assert!(state.loading());

        state.resolve().unwrap();
        assert_eq!(state, DialogState::Closed);
        assert!(!state.loading());
    }

    #[test]
    fn failure_keeps_dialog_up_and_allows_retry() {
        let mut state = DialogState::Open;
        state.submit().unwrap();
        state.reject("name already exists").unwrap();

        assert!(state.is_visible());
        assert!(!state.loading());
        assert_eq!(state.error_message(), Some("name already exists"));

        state.submit().unwrap();
        assert!(state.error_message().is_none());
        state.resolve().unwrap();
    }

    #[test]
    fn reopening_clears_the_error() {
        let mut state = DialogState::Error("boom".into());
        state.open().unwrap();
        assert_eq!(state, DialogState::Open);
    }

    #[test]
    fn pending_dialog_cannot_be_dismissed() {
        let mut state = DialogState::Pending;
        assert_eq!(
            state.close(),
            Err(InvalidTransition {
                action: "close",
                state: "pending"
            })
        );
        assert!(state.open().is_err());
        assert!(state.submit().is_err());
        assert!(state.loading());
    }

    #[test]
    fn settling_requires_a_pending_request() {
        assert!(DialogState::Open.resolve().is_err());
        assert!(DialogState::Closed.reject("x").is_err());
        assert!(DialogState::Closed.submit().is_err());
    }

    #[test]
    fn abandoned_submission_is_rejected() {
        let mut state = DialogState::Open;
        let submission = Submission::begin(&mut state).unwrap();
        drop(submission);
        assert_eq!(state.error_message(), Some(CANCELLED));
        state.close().unwrap();

        let mut state = DialogState::Open;
        Submission::begin(&mut state).unwrap().resolve();
        assert_eq!(state, DialogState::Closed);
    }

    #[test]
    fn invalid_transition_message() {
        let err = DialogState::Closed.submit().unwrap_err();
        assert_eq!(err.to_string(), "cannot submit a dialog that is closed");
    }
}

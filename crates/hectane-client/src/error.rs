use reqwest::StatusCode;

pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can go wrong talking to the Hectane API.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The backend answered with a non-2xx status. `body` is the raw response text.
    #[error("request failed ({status}): {body}")]
    Rejected { status: StatusCode, body: String },

    /// The request never produced a response (connect, TLS, timeout, ...).
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// A 2xx response whose body is not the JSON we expected.
    #[error("malformed response body: {source}")]
    Decode {
        #[source]
        source: serde_json::Error,
        body: String,
    },

    #[error("could not encode request body: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("invalid url {url:?}: {reason}")]
    InvalidUrl { url: String, reason: String },

    /// Sessions are never resumed from stored data.
    #[error("session cannot be restored")]
    RestoreUnsupported,

    #[error("invalid configuration for {key}: {reason}")]
    Config { key: &'static str, reason: String },
}

impl Error {
    /// Text to show the user next to the control that triggered the request.
    ///
    /// For a rejected request this is the literal response body.
    pub fn message(&self) -> String {
        match self {
            Error::Rejected { body, .. } => body.clone(),
            other => other.to_string(),
        }
    }

    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Error::Rejected { status, .. } => Some(*status),
            Error::Transport(e) => e.status(),
            _ => None,
        }
    }
}

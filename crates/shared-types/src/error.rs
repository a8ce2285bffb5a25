use std::fmt;

/// A form failed local validation. No request was issued.
///
/// `Display` yields the exact message shown under the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    MissingFields,
    BranchRequired,
    DescriptionTooLong,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::MissingFields => write!(f, "All fields are required"),
            ValidationError::BranchRequired => {
                write!(f, "Please select a branch for non-admin users")
            }
            ValidationError::DescriptionTooLong => {
                write!(f, "Description must be {MAX_DESCRIPTION_WORDS} words or less")
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Upper bound on description length, in whitespace-separated words.
pub const MAX_DESCRIPTION_WORDS: usize = 10;

/// A request to the remote API did not succeed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestError {
    /// The backend answered with a non-ok status. `message` is the body's
    /// `error` field when one was present.
    Server { status: u16, message: Option<String> },
    /// The request could not be completed at all.
    Transport(String),
}

impl RequestError {
    pub fn server(status: u16, message: Option<String>) -> Self {
        RequestError::Server { status, message }
    }

    pub fn transport(reason: impl Into<String>) -> Self {
        RequestError::Transport(reason.into())
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, RequestError::Transport(_))
    }

    /// Server-supplied message, or `fallback` when the backend gave none.
    ///
    /// Transport failures always read "Network error".
    pub fn message_or(&self, fallback: &str) -> String {
        match self {
            RequestError::Server {
                message: Some(msg), ..
            } if !msg.is_empty() => msg.clone(),
            RequestError::Server { .. } => fallback.to_string(),
            RequestError::Transport(_) => NETWORK_ERROR.to_string(),
        }
    }
}

impl fmt::Display for RequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestError::Server {
                status,
                message: Some(msg),
            } => write!(f, "server error ({status}): {msg}"),
            RequestError::Server {
                status,
                message: None,
            } => write!(f, "server error ({status})"),
            RequestError::Transport(reason) => write!(f, "transport error: {reason}"),
        }
    }
}

impl std::error::Error for RequestError {}

/// Message shown whenever a request could not complete.
pub const NETWORK_ERROR: &str = "Network error";

use shared_types::{Destination, RequestError, ValidationError};

/// What a form submission resolved to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Leave the page.
    Navigate(Destination),
    /// Stay on the page and show this message.
    Error(String),
}

impl SubmitOutcome {
    pub fn invalid(err: ValidationError) -> Self {
        tracing::debug!(error = %err, "Form rejected before submit");
        SubmitOutcome::Error(err.to_string())
    }

    /// Map a failed request to the message the form shows.
    pub fn failed(err: &RequestError, fallback: &str) -> Self {
        tracing::warn!(error = %err, "Request failed");
        SubmitOutcome::Error(err.message_or(fallback))
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            SubmitOutcome::Error(msg) => Some(msg),
            SubmitOutcome::Navigate(_) => None,
        }
    }
}

/// Submission phase of a page's form.
///
/// A successful submission navigates away, so there is no terminal success
/// phase to hold.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FormPhase {
    #[default]
    Idle,
    Submitting,
    Failed(String),
}

impl FormPhase {
    pub fn is_submitting(&self) -> bool {
        matches!(self, FormPhase::Submitting)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            FormPhase::Failed(msg) => Some(msg),
            _ => None,
        }
    }

    /// Phase after an outcome that keeps the user on the page.
    pub fn after(outcome: &SubmitOutcome) -> Self {
        match outcome {
            SubmitOutcome::Error(msg) => FormPhase::Failed(msg.clone()),
            SubmitOutcome::Navigate(_) => FormPhase::Idle,
        }
    }
}

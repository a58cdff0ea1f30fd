use thiserror::Error;

/// User input insufficient to attempt an operation. Raised before any network call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please select a file first.")]
    NoFileSelected,
    #[error("Please enter a search query.")]
    EmptyQuery,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WorkflowError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// The service answered with a non-success status.
    #[error("backend returned status {status}")]
    Backend { status: u16, detail: Option<String> },
    /// The call could not complete, or the response was malformed.
    #[error("{reason}")]
    Transport { reason: String },
}

impl WorkflowError {
    pub fn backend(status: u16, detail: Option<String>) -> Self {
        Self::Backend { status, detail }
    }

    pub fn transport(reason: impl Into<String>) -> Self {
        Self::Transport {
            reason: reason.into(),
        }
    }

    /// Status text for upload and search: the service detail when present, else `fallback`.
    pub(crate) fn status_message(&self, fallback: &str) -> String {
        match self {
            Self::Validation(err) => err.to_string(),
            Self::Backend {
                detail: Some(detail),
                ..
            } if !detail.is_empty() => detail.clone(),
            Self::Backend { .. } | Self::Transport { .. } => fallback.to_string(),
        }
    }

    /// Underlying reason embedded in generation failures.
    pub(crate) fn reason(&self) -> String {
        match self {
            Self::Validation(err) => err.to_string(),
            Self::Backend {
                detail: Some(detail),
                ..
            } if !detail.is_empty() => detail.clone(),
            Self::Backend { status, .. } => format!("API call failed with status: {status}"),
            Self::Transport { reason } => reason.clone(),
        }
    }
}

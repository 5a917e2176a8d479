use thiserror::Error;

#[derive(Error, Debug)]
pub enum LogoshareError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Backend rejected request ({status}): {message}")]
    Backend { status: u16, message: String },

    #[error("Authentication error: {0}")]
    Auth(String),

    #[error("Sign in required to {0}")]
    LoginRequired(String),

    #[error("A submission is already in progress")]
    Busy,

    /// Storage failure surfaced to the user without its details.
    #[error("Failed to add logo. Please try again.")]
    SubmissionFailed(#[source] Box<LogoshareError>),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl LogoshareError {
    /// True for failures that came from talking to storage rather than from
    /// user input.
    pub fn is_persistence_failure(&self) -> bool {
        matches!(
            self,
            Self::Connection(_) | Self::Backend { .. } | Self::Io(_) | Self::Serialization(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_persistence_failure_classification() {
        assert!(LogoshareError::Connection("timeout".into()).is_persistence_failure());
        assert!(LogoshareError::Backend {
            status: 409,
            message: "duplicate".into()
        }
        .is_persistence_failure());
        assert!(!LogoshareError::Validation("bad hex".into()).is_persistence_failure());
        assert!(!LogoshareError::LoginRequired("add a logo".into()).is_persistence_failure());
    }

    #[test]
    fn test_display_messages() {
        let err = LogoshareError::LoginRequired("share a logo".into());
        assert_eq!(err.to_string(), "Sign in required to share a logo");

        let err = LogoshareError::Backend {
            status: 400,
            message: "invalid input".into(),
        };
        assert_eq!(
            err.to_string(),
            "Backend rejected request (400): invalid input"
        );

        let err = LogoshareError::SubmissionFailed(Box::new(err));
        assert_eq!(err.to_string(), "Failed to add logo. Please try again.");
    }
}

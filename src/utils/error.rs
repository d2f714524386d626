use thiserror::Error;

#[derive(Error, Debug)]
pub enum FinderError {
    #[error("Invalid input: {reason}")]
    InvalidInput { reason: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Output,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// The caller supplied something unusable; fixing the input fixes the run.
    High,
    /// The environment failed underneath us.
    Critical,
}

impl ErrorSeverity {
    pub fn exit_code(self) -> i32 {
        match self {
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

impl FinderError {
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        FinderError::InvalidInput {
            reason: reason.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            FinderError::InvalidInput { .. } => ErrorCategory::Input,
            FinderError::IoError(_) | FinderError::SerializationError(_) => ErrorCategory::Output,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            FinderError::InvalidInput { .. } => ErrorSeverity::High,
            FinderError::IoError(_) | FinderError::SerializationError(_) => {
                ErrorSeverity::Critical
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            FinderError::InvalidInput { reason } => {
                format!("The input text could not be used: {}", reason)
            }
            FinderError::IoError(e) => format!("Reading input or writing results failed: {}", e),
            FinderError::SerializationError(e) => {
                format!("Results could not be encoded as JSON: {}", e)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            FinderError::InvalidInput { .. } => {
                "Pass the text as an argument, or pipe valid UTF-8 into --stdin"
            }
            FinderError::IoError(_) => "Check that stdin and stdout are open and writable",
            FinderError::SerializationError(_) => "Retry with --format text",
        }
    }
}

pub type Result<T> = std::result::Result<T, FinderError>;

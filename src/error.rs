//! Error taxonomy shared by every command.
//!
//! Handlers return `anyhow::Result`; anything that needs a specific exit
//! code is raised as a [`CliError`] and recovered in `main` by downcasting.

use thiserror::Error;

/// Exit code for local usage, confirmation and file errors.
pub const EXIT_USAGE: i32 = 1;
/// Exit code for failures reported by the remote API.
pub const EXIT_API: i32 = 2;

#[derive(Debug, Error)]
pub enum CliError {
    /// Bad arity, missing or exclusive flags, malformed values.
    #[error("Incorrect Usage: {0}")]
    Usage(String),

    /// An identifier argument that is not a positive integer.
    #[error("Invalid input for '{0}'. It must be a positive integer.")]
    InvalidId(String),

    /// The remote call failed; the cause is appended verbatim.
    #[error("{action}\n{cause}")]
    Api { action: String, cause: String },

    /// A remote failure without an underlying cause (e.g. ambiguous lookup).
    #[error("{0}")]
    Remote(String),

    /// Template or user-data file could not be read or written.
    #[error("{action}\n{cause}")]
    LocalIo { action: String, cause: String },

    /// Input that is well formed but cannot be satisfied, e.g. an unknown datacenter.
    #[error("{0}")]
    Invalid(String),

    #[error("{0}")]
    InvalidConfirmation(String),

    #[error("{0}")]
    Config(String),
}

impl CliError {
    pub fn usage(message: impl Into<String>) -> Self {
        Self::Usage(message.into())
    }

    pub fn missing_input(flags: &str) -> Self {
        Self::Usage(format!("'{}' is required", flags))
    }

    pub fn exclusive_flags(first: &str, second: &str) -> Self {
        Self::Usage(format!("'{}', '{}' are exclusive", first, second))
    }

    pub fn invalid_id(field: &str) -> Self {
        Self::InvalidId(field.to_string())
    }

    pub fn invalid_output_format() -> Self {
        Self::Usage("Invalid output format, only JSON is supported now.".to_string())
    }

    pub fn api(action: impl Into<String>, cause: impl std::fmt::Display) -> Self {
        Self::Api {
            action: action.into(),
            cause: cause.to_string(),
        }
    }

    pub fn local_io(action: impl Into<String>, cause: impl std::fmt::Display) -> Self {
        Self::LocalIo {
            action: action.into(),
            cause: cause.to_string(),
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Api { .. } | CliError::Remote(_) => EXIT_API,
            _ => EXIT_USAGE,
        }
    }
}

/// Exit code for an arbitrary handler error.
pub fn exit_code_for(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<CliError>()
        .map(CliError::exit_code)
        .unwrap_or(EXIT_USAGE)
}

/// Error returned by the manager layer. The message is the remote text, untouched.
#[derive(Debug, Clone, Error, PartialEq)]
#[error("{message}")]
pub struct ApiError {
    pub message: String,
    pub code: Option<String>,
}

impl ApiError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: None,
        }
    }

    pub fn with_code(message: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: Some(code.into()),
        }
    }

    /// True when the remote side reported that the object does not exist.
    pub fn is_not_found(&self) -> bool {
        self.code.as_deref() == Some("SoftLayer_Exception_ObjectNotFound")
            || self.message.contains("SoftLayer_Exception_ObjectNotFound")
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::new(err.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::new(format!("Failed to decode API response: {}", err))
    }
}

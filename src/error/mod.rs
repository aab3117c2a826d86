//! Error handling for the prediction pipeline.

pub mod util;

/// Specialized error type for the prediction pipeline
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Model or encoder artifacts are missing, unreadable or inconsistent
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A required request field was absent (or `null`)
    #[error("Missing field: {0}")]
    MissingField(String),

    /// A request value is outside the categories seen at training time
    #[error("Invalid value '{value}' for column '{column}'")]
    UnknownCategory {
        /// Internal model column name
        column: String,
        /// Normalized value that failed the lookup
        value: String,
    },

    /// The request body could not be interpreted
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// The classifier produced an unusable result
    #[error("Model error: {0}")]
    Model(String),

    /// Error decoding JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Coarse classification used at the request boundary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Unrecoverable deployment problem
    Configuration,
    /// Request omitted a required field
    MissingField,
    /// Request supplied an untrained category
    UnknownCategory,
    /// Anything else raised while handling a request
    Unexpected,
}

impl Error {
    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    /// Create an unknown-category error
    pub fn unknown_category(column: impl Into<String>, value: impl Into<String>) -> Self {
        Self::UnknownCategory {
            column: column.into(),
            value: value.into(),
        }
    }

    /// Classify this error for the request boundary
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Configuration(_) => ErrorKind::Configuration,
            Self::MissingField(_) => ErrorKind::MissingField,
            Self::UnknownCategory { .. } => ErrorKind::UnknownCategory,
            Self::InvalidRequest(_) | Self::Model(_) | Self::Json(_) => ErrorKind::Unexpected,
        }
    }

    /// Wrap any error raised while loading artifacts as a configuration error
    #[must_use]
    pub fn into_configuration(self, context: &str) -> Self {
        match self {
            Self::Configuration(_) => self,
            other => Self::Configuration(format!("{context}: {other}")),
        }
    }
}

/// Result type for pipeline operations
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_offending_input() {
        assert_eq!(
            Error::MissingField("irritability".to_string()).to_string(),
            "Missing field: irritability"
        );
        assert_eq!(
            Error::unknown_category("Gender", "Other").to_string(),
            "Invalid value 'Other' for column 'Gender'"
        );
    }

    #[test]
    fn test_kinds() {
        assert_eq!(
            Error::configuration("gone").kind(),
            ErrorKind::Configuration
        );
        assert_eq!(
            Error::MissingField("gender".into()).kind(),
            ErrorKind::MissingField
        );
        assert_eq!(
            Error::unknown_category("Gender", "x").kind(),
            ErrorKind::UnknownCategory
        );
        assert_eq!(Error::Model("nan".into()).kind(), ErrorKind::Unexpected);
        assert_eq!(
            Error::InvalidRequest("not an object".into()).kind(),
            ErrorKind::Unexpected
        );
    }

    #[test]
    fn test_into_configuration_keeps_existing_message() {
        let err = Error::configuration("bad file").into_configuration("loading model");
        assert_eq!(err.to_string(), "Configuration error: bad file");

        let err = Error::Model("width".into()).into_configuration("loading model");
        assert_eq!(
            err.to_string(),
            "Configuration error: loading model: Model error: width"
        );
    }
}

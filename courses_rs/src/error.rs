//! Error taxonomy for the courses pipeline.
//!
//! Callers see exactly two failure kinds: configuration is missing (nothing was
//! attempted) or retrieval failed. [`RetrievalError`] keeps the cause for logs,
//! but the page does not distinguish between its variants.

use std::fmt;

use thiserror::Error;

/// Which of the two web-service calls an error belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Courses,
    OverviewFiles,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Courses => write!(f, "courses"),
            Stage::OverviewFiles => write!(f, "course files"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("missing configuration: {}", .settings.join(", "))]
    Missing { settings: Vec<&'static str> },
}

/// The request never produced an HTTP response.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("transport error: {message}")]
pub struct TransportError {
    pub message: String,
}

impl TransportError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum RetrievalError {
    #[error("invalid Moodle URL {url}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("failed to fetch {stage}: {source}")]
    Transport {
        stage: Stage,
        #[source]
        source: TransportError,
    },

    #[error("failed to fetch {stage}: HTTP {status}")]
    Status { stage: Stage, status: u16 },

    #[error("failed to fetch {stage}: {errorcode} ({message})")]
    Service {
        stage: Stage,
        errorcode: String,
        message: String,
    },

    #[error("failed to decode {stage} response: {source}")]
    Decode {
        stage: Stage,
        #[source]
        source: serde_json::Error,
    },
}

impl RetrievalError {
    /// The call that failed, if the failure happened at a call.
    pub fn stage(&self) -> Option<Stage> {
        match self {
            RetrievalError::InvalidUrl { .. } => None,
            RetrievalError::Transport { stage, .. }
            | RetrievalError::Status { stage, .. }
            | RetrievalError::Service { stage, .. }
            | RetrievalError::Decode { stage, .. } => Some(*stage),
        }
    }
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error(transparent)]
    ConfigurationMissing(#[from] ConfigError),

    #[error(transparent)]
    Retrieval(#[from] RetrievalError),
}

impl FetchError {
    pub fn is_configuration_missing(&self) -> bool {
        matches!(self, FetchError::ConfigurationMissing(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_config_lists_settings() {
        let err = ConfigError::Missing {
            settings: vec!["MOODLE_URL", "MOODLE_TOKEN"],
        };
        assert_eq!(err.to_string(), "missing configuration: MOODLE_URL, MOODLE_TOKEN");
    }

    #[test]
    fn retrieval_messages_name_the_stage() {
        let err = RetrievalError::Status {
            stage: Stage::Courses,
            status: 500,
        };
        assert_eq!(err.to_string(), "failed to fetch courses: HTTP 500");
        assert_eq!(err.stage(), Some(Stage::Courses));

        let err = RetrievalError::Service {
            stage: Stage::OverviewFiles,
            errorcode: "invalidtoken".into(),
            message: "Invalid token - token not found".into(),
        };
        assert_eq!(
            err.to_string(),
            "failed to fetch course files: invalidtoken (Invalid token - token not found)"
        );
    }

    #[test]
    fn fetch_error_keeps_kind() {
        let err: FetchError = ConfigError::Missing { settings: vec!["MOODLE_URL"] }.into();
        assert!(err.is_configuration_missing());

        let err: FetchError = RetrievalError::Status {
            stage: Stage::OverviewFiles,
            status: 503,
        }
        .into();
        assert!(!err.is_configuration_missing());
    }
}

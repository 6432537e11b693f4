use reqwest::StatusCode;
use thiserror::Error;

use crate::validation::ViolationSet;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("lead failed validation: {0}")]
pub struct ValidationError(pub ViolationSet);

impl ValidationError {
    pub fn violations(&self) -> &ViolationSet {
        &self.0
    }
}

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("lead service returned {status} for {url}")]
    Status {
        url: String,
        status: StatusCode,
        field_errors: Vec<String>,
        first_field_error: Option<String>,
    },
    #[error("malformed response from {url}: {reason}")]
    MalformedResponse { url: String, reason: String },
}

impl TransportError {
    /// The server's first structured field error, when the response carried one.
    pub fn first_field_error(&self) -> Option<&str> {
        match self {
            TransportError::Status {
                first_field_error, ..
            } => first_field_error.as_deref(),
            _ => None,
        }
    }

    pub fn field_errors(&self) -> &[String] {
        match self {
            TransportError::Status { field_errors, .. } => field_errors,
            _ => &[],
        }
    }

    pub fn status(&self) -> Option<StatusCode> {
        match self {
            TransportError::Status { status, .. } => Some(*status),
            TransportError::Request { source, .. } => source.status(),
            TransportError::MalformedResponse { .. } => None,
        }
    }
}

use crate::model::error::{self, ErrorSource};
use http::StatusCode;
use thiserror::Error;

/// Failure classes a caller can discriminate without matching on message
/// text. Each maps to the HTTP status a client-facing diagnostic would use.
#[derive(Error, Debug)]
pub enum ClientError {
    /// The document is well-formed JSON but violates a structural rule, or a
    /// request was constructed against the CRUD contract. `pointer` locates
    /// the offending member when the failure sits inside a document.
    #[error("{detail}")]
    Specification { detail: String, pointer: Option<String> },
    /// The `Content-Type` header does not carry the expected media type.
    #[error("expected Content-Type '{expected}', got {found:?}")]
    NotAcceptable { expected: String, found: Option<String> },
    /// The base URL handed to the request builder could not be parsed.
    #[error("invalid base URL: {0}")]
    InvalidUrl(#[source] url::ParseError),
    /// Anything below the document layer: undecodable JSON, body stream I/O,
    /// request assembly.
    #[error("internal client error: {0}")]
    Internal(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl ClientError {
    /// Contract violation with no location inside a document.
    pub fn specification(detail: impl Into<String>) -> Self {
        ClientError::Specification { detail: detail.into(), pointer: None }
    }

    /// Structural violation at a known spot in the document.
    pub fn input(detail: impl Into<String>, pointer: impl Into<String>) -> Self {
        ClientError::Specification { detail: detail.into(), pointer: Some(pointer.into()) }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ClientError::Specification { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            ClientError::NotAcceptable { .. } => StatusCode::NOT_ACCEPTABLE,
            ClientError::InvalidUrl(_) => StatusCode::BAD_REQUEST,
            ClientError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn pointer(&self) -> Option<&str> {
        match self {
            ClientError::Specification { pointer, .. } => pointer.as_deref(),
            _ => None,
        }
    }

    fn title(&self) -> &'static str {
        match self {
            ClientError::Specification { .. } => "Specification Error",
            ClientError::NotAcceptable { .. } => "Not Acceptable",
            ClientError::InvalidUrl(_) => "Invalid URL",
            ClientError::Internal(_) => "Internal Error",
        }
    }

    /// Wire-format error object, ready to embed in a diagnostic document.
    pub fn object(&self) -> error::Error {
        error::Error {
            status: Some(self.status().as_u16().to_string()),
            title: Some(self.title().to_string()),
            detail: Some(self.to_string()),
            source: self
                .pointer()
                .map(|p| ErrorSource { pointer: Some(p.to_string()), parameter: None }),
            ..Default::default()
        }
    }
}

impl From<url::ParseError> for ClientError {
    fn from(err: url::ParseError) -> Self { ClientError::InvalidUrl(err) }
}

from_external_error!(serde_json::Error, std::io::Error, http::Error);

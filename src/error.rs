//! Error types for the Signer SDK.
//!
//! Every SDK operation returns [`Result<T>`]. Errors fall into three tiers:
//! local precondition failures raised before any request is sent, transport
//! failures from the HTTP layer, and business-rule failures reported by the
//! Signer service in a non-success response.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for Signer operations.
pub type Result<T> = std::result::Result<T, SignerError>;

/// Errors that can occur when using the Signer SDK.
#[derive(Error, Debug)]
pub enum SignerError {
    /// API error from the Signer service (400, 404, 422, 5xx, ...).
    #[error("API error ({status_code}): [{code}] {message}")]
    Api {
        /// Machine-readable error code from the response body.
        code: ErrorCode,
        /// Human-readable error message.
        message: String,
        /// HTTP status code.
        status_code: u16,
    },

    /// HTTP request error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API key is missing or invalid.
    #[error("Unauthorized: API key not provided or invalid")]
    Unauthorized {
        /// Error code from the response body, when one was sent.
        code: Option<ErrorCode>,
        message: Option<String>,
    },

    /// The API key is valid but lacks permission for the operation.
    #[error("Forbidden: insufficient permissions for this operation")]
    Forbidden {
        /// Error code from the response body, when one was sent.
        code: Option<ErrorCode>,
        message: Option<String>,
    },

    /// A local file passed to an upload does not exist.
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// Local I/O error while reading or writing document content.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Response body could not be decoded.
    #[error("Decode error: {0}")]
    Decode(String),

    /// Request body or query could not be encoded.
    #[error("Encode error: {0}")]
    Encode(String),

    /// Response decoded but did not contain what the operation needs.
    #[error("Unexpected response: {0}")]
    UnexpectedResponse(String),

    /// Missing or invalid client configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The transport has already been released.
    #[error("Client is closed")]
    Closed,
}

impl SignerError {
    /// Returns true if this is an authentication or authorization error.
    pub fn is_auth_error(&self) -> bool {
        matches!(
            self,
            SignerError::Unauthorized { .. }
                | SignerError::Forbidden { .. }
                | SignerError::Api {
                    status_code: 401 | 403,
                    ..
                }
        )
    }

    /// Returns true if the service reported a missing resource.
    pub fn is_not_found(&self) -> bool {
        match self {
            SignerError::Api {
                code, status_code, ..
            } => *status_code == 404 || code.is_not_found(),
            _ => false,
        }
    }

    /// Returns the HTTP status code if available.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            SignerError::Api { status_code, .. } => Some(*status_code),
            SignerError::Unauthorized { .. } => Some(401),
            SignerError::Forbidden { .. } => Some(403),
            SignerError::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Returns the service error code, if this error came from the API.
    pub fn error_code(&self) -> Option<&ErrorCode> {
        match self {
            SignerError::Api { code, .. } => Some(code),
            SignerError::Unauthorized { code, .. } | SignerError::Forbidden { code, .. } => {
                code.as_ref()
            }
            _ => None,
        }
    }
}

/// Error codes returned in a 422 response body.
///
/// The service documents the named codes below as the main ones; the list is
/// not exhaustive, so anything else is kept verbatim in [`ErrorCode::Other`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorCode {
    CertificateNotFound,
    DocumentNotFound,
    FolderNotFound,
    CpfMismatch,
    CpfNotExpected,
    InvalidFlowAction,
    DocumentInvalidKey,
    Other(String),
}

impl ErrorCode {
    /// The wire representation of this code.
    pub fn as_str(&self) -> &str {
        match self {
            ErrorCode::CertificateNotFound => "CertificateNotFound",
            ErrorCode::DocumentNotFound => "DocumentNotFound",
            ErrorCode::FolderNotFound => "FolderNotFound",
            ErrorCode::CpfMismatch => "CpfMismatch",
            ErrorCode::CpfNotExpected => "CpfNotExpected",
            ErrorCode::InvalidFlowAction => "InvalidFlowAction",
            ErrorCode::DocumentInvalidKey => "DocumentInvalidKey",
            ErrorCode::Other(code) => code,
        }
    }

    fn is_not_found(&self) -> bool {
        match self {
            ErrorCode::CertificateNotFound
            | ErrorCode::DocumentNotFound
            | ErrorCode::FolderNotFound => true,
            ErrorCode::Other(code) => code.ends_with("NotFound"),
            _ => false,
        }
    }
}

impl From<&str> for ErrorCode {
    fn from(code: &str) -> Self {
        match code {
            "CertificateNotFound" => ErrorCode::CertificateNotFound,
            "DocumentNotFound" => ErrorCode::DocumentNotFound,
            "FolderNotFound" => ErrorCode::FolderNotFound,
            "CpfMismatch" => ErrorCode::CpfMismatch,
            "CpfNotExpected" => ErrorCode::CpfNotExpected,
            "InvalidFlowAction" => ErrorCode::InvalidFlowAction,
            "DocumentInvalidKey" => ErrorCode::DocumentInvalidKey,
            other => ErrorCode::Other(other.to_string()),
        }
    }
}

impl From<String> for ErrorCode {
    fn from(code: String) -> Self {
        ErrorCode::from(code.as_str())
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

//! Error taxonomy shared by the adapter and the controllers.
//!
//! - [`HttpError`] covers everything that left the client: a transport
//!   failure (`status == None`), a non-2xx response, or a 2xx response whose
//!   body did not decode.
//! - [`ValidationError`] covers local precondition failures that never reach
//!   the network.
//!
//! Controllers turn both into their own `error`/`failed` state, so the view
//! layer only ever renders a message string.

use thiserror::Error;

pub const NETWORK_ERROR: &str = "network error";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// No response reached the client.
    Transport,
    /// The server answered with a non-2xx status.
    Server,
    /// The server answered 2xx but the body was not the expected shape.
    Decode,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct HttpError {
    pub status: Option<u16>,
    pub message: String,
}

impl HttpError {
    pub fn transport() -> Self {
        Self {
            status: None,
            message: NETWORK_ERROR.to_string(),
        }
    }

    pub fn server(status: u16, message: impl Into<String>) -> Self {
        Self {
            status: Some(status),
            message: message.into(),
        }
    }

    /// A success status whose body could not be read as the expected type.
    pub fn decode(status: u16, message: impl Into<String>) -> Self {
        Self {
            status: Some(status),
            message: message.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self.status {
            None => ErrorKind::Transport,
            Some(200..=299) => ErrorKind::Decode,
            Some(_) => ErrorKind::Server,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Search query is empty")]
    EmptyQuery,

    #[error("Please select a file")]
    MissingFile,

    #[error("An upload is already in progress")]
    SubmitInProgress,

    #[error("Could not read {0}")]
    UnreadableFile(String),
}

/// Failure of an operation that can be rejected locally or remotely.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ControllerError {
    #[error(transparent)]
    Http(#[from] HttpError),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transport_errors_have_no_status() {
        let err = HttpError::transport();
        assert_eq!(err.kind(), ErrorKind::Transport);
        assert_eq!(err.to_string(), "network error");
    }

    #[test]
    fn server_errors_keep_status_and_message() {
        let err = HttpError::server(413, "file too large");
        assert_eq!(err.kind(), ErrorKind::Server);
        assert_eq!(err.status, Some(413));
        assert_eq!(err.to_string(), "file too large");
    }

    #[test]
    fn success_status_with_bad_body_is_a_decode_error() {
        let err = HttpError::decode(200, "Failed to fetch images");
        assert_eq!(err.kind(), ErrorKind::Decode);
        assert_eq!(err.status, Some(200));
        assert_eq!(err.to_string(), "Failed to fetch images");
    }

    #[test]
    fn controller_error_displays_inner_message() {
        let err: ControllerError = ValidationError::MissingFile.into();
        assert_eq!(err.to_string(), "Please select a file");

        let err: ControllerError = HttpError::server(500, "boom").into();
        assert_eq!(err.to_string(), "boom");
    }
}

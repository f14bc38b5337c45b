//! Error taxonomy for the stablecoin API
//!
//! The set of failures a client can observe is closed: four kinds, each with
//! exactly one HTTP status and one message. Call sites never improvise either.

use thiserror::Error;

/// Message shared by every "bad input" failure, including the realtime-rate
/// family's unsupported index.
pub const INVALID_AMOUNT_MESSAGE: &str = "Invalid request data: depositAmount must be positive";
pub const INDEX_NOT_FOUND_MESSAGE: &str = "Stablecoin with the specified index not found";
pub const INVALID_TYPE_MESSAGE: &str = "Invalid request type";
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// Every failure the API can report
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    #[error("Invalid request data: depositAmount must be positive")]
    InvalidAmount,

    #[error("Stablecoin with the specified index not found")]
    UnsupportedIndex,

    #[error("Invalid request type")]
    UnsupportedOperation,

    #[error("Internal server error")]
    InternalError,
}

impl ErrorKind {
    /// HTTP status code for this kind
    pub fn status_code(&self) -> u16 {
        match self {
            ErrorKind::InvalidAmount => 400,
            ErrorKind::UnsupportedIndex => 404,
            ErrorKind::UnsupportedOperation => 404,
            ErrorKind::InternalError => 500,
        }
    }

    /// Fixed client-facing message for this kind
    pub fn message(&self) -> &'static str {
        match self {
            ErrorKind::InvalidAmount => INVALID_AMOUNT_MESSAGE,
            ErrorKind::UnsupportedIndex => INDEX_NOT_FOUND_MESSAGE,
            ErrorKind::UnsupportedOperation => INVALID_TYPE_MESSAGE,
            ErrorKind::InternalError => INTERNAL_ERROR_MESSAGE,
        }
    }

    /// True for failures caused by the caller rather than the service
    pub fn is_client_error(&self) -> bool {
        self.status_code() < 500
    }
}

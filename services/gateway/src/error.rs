use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use stablecoin_types::envelope::Envelope;
use stablecoin_types::errors::ErrorKind;
use thiserror::Error;

/// Central error type for the gateway
///
/// Every variant collapses to one [`ErrorKind`], which alone decides the
/// status code and the message clients see.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Rejected(#[from] ErrorKind),

    /// Body, path or query could not be parsed into the typed request.
    #[error("Malformed request: {0}")]
    Malformed(String),

    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ApiError::Rejected(kind) => *kind,
            ApiError::Malformed(_) => ErrorKind::InvalidAmount,
            ApiError::Internal(_) => ErrorKind::InternalError,
        }
    }
}

fn envelope_response<T: serde::Serialize>(result: Result<T, ErrorKind>) -> Response {
    let (code, envelope) = Envelope::from_result(result);
    let status = StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, Json(envelope)).into_response()
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let kind = self.kind();

        if kind.is_client_error() {
            match &self {
                ApiError::Malformed(detail) => tracing::warn!(%detail, "malformed request"),
                _ => tracing::warn!(?kind, "request rejected"),
            }
        } else {
            tracing::error!(error = ?self, "request failed");
        }

        envelope_response::<()>(Err(kind))
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Malformed(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::Malformed(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::Malformed(rejection.body_text())
    }
}

/// Successful handler output, rendered as `{"success": true, "data": ...}`
#[derive(Debug)]
pub struct ApiResponse<T>(pub T);

impl<T: serde::Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        envelope_response(Ok(self.0))
    }
}

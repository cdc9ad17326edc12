use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use yescard_core::{CodecError, GuardError};

/// Terminal errors of the provider's endpoints.
#[derive(Debug, Error)]
pub enum OidcError {
    /// The redirect target failed the allow-list check. No code was issued.
    #[error(transparent)]
    Redirect(#[from] GuardError),

    /// `/token` was handed a code it cannot read (strict mode only).
    #[error("invalid grant: {0}")]
    InvalidGrant(CodecError),

    /// `/userinfo` was handed a token it cannot read (strict mode only).
    #[error("invalid token: {0}")]
    InvalidToken(CodecError),
}

impl IntoResponse for OidcError {
    fn into_response(self) -> Response {
        match &self {
            OidcError::Redirect(_) => {
                tracing::warn!(error = %self, "Rejected redirect target");
                (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()).into_response()
            }
            OidcError::InvalidGrant(reason) => {
                tracing::warn!(error = %self, "Rejected authorization code");
                (
                    StatusCode::BAD_REQUEST,
                    Json(serde_json::json!({
                        "error": "invalid_grant",
                        "error_description": reason.to_string(),
                    })),
                )
                    .into_response()
            }
            OidcError::InvalidToken(reason) => {
                tracing::warn!(error = %self, "Rejected access token");
                (
                    StatusCode::UNAUTHORIZED,
                    [(header::WWW_AUTHENTICATE, r#"Bearer error="invalid_token""#)],
                    Json(serde_json::json!({
                        "error": "invalid_token",
                        "error_description": reason.to_string(),
                    })),
                )
                    .into_response()
            }
        }
    }
}

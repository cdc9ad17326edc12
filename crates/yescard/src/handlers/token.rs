use axum::{
    extract::{rejection::FormRejection, State},
    http::header,
    response::{IntoResponse, Response},
    Form, Json,
};
use serde::Deserialize;
use yescard_core::{Decoded, TokenResponse};

use crate::{error::OidcError, state::AppState};

/// Token request. Only `code` matters; client credentials are accepted
/// without checking.
#[derive(Debug, Default, Deserialize)]
pub struct TokenForm {
    code: Option<String>,
    #[serde(default)]
    scope: String,
    grant_type: Option<String>,
    client_id: Option<String>,
}

/// POST /token - Exchange an authorization code for an access token.
#[axum::debug_handler]
pub async fn token(
    State(state): State<AppState>,
    form: Result<Form<TokenForm>, FormRejection>,
) -> Result<Response, OidcError> {
    let form = form.map(|Form(form)| form).unwrap_or_default();

    tracing::debug!(
        grant_type = ?form.grant_type,
        client_id = ?form.client_id,
        scope = %form.scope,
        "Token request"
    );

    let decoded = state
        .codec
        .decode_code(form.code.as_deref())
        .map_err(OidcError::InvalidGrant)?;

    if let Decoded::Fallback { reason, identity } = &decoded {
        tracing::warn!(%reason, %identity, "Unreadable code, issuing token for default identity");
    }

    let identity = decoded.into_identity();
    let response = TokenResponse::issue(&state.codec, &identity);

    tracing::info!(%identity, "Issued access token");

    Ok(([(header::CACHE_CONTROL, "no-store")], Json(response)).into_response())
}

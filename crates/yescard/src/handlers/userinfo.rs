use axum::{extract::State, Json};
use yescard_core::{Decoded, UserInfoRecord};

use crate::{error::OidcError, extractors::BearerToken, state::AppState};

/// GET /userinfo - Resolve a bearer token back to its user.
#[axum::debug_handler]
pub async fn userinfo(
    State(state): State<AppState>,
    BearerToken(token): BearerToken,
) -> Result<Json<UserInfoRecord>, OidcError> {
    let decoded = state
        .codec
        .decode_token(token.as_deref())
        .map_err(OidcError::InvalidToken)?;

    if let Decoded::Fallback { reason, identity } = &decoded {
        tracing::warn!(%reason, %identity, "Unreadable token, serving default identity");
    }

    let identity = decoded.into_identity();

    Ok(Json(UserInfoRecord::for_identity(&identity)))
}

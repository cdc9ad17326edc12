use axum::{extract::State, Json};
use yescard_core::{DiscoveryDocument, JsonWebKeySet};

use crate::state::AppState;

/// GET /.well-known/openid-configuration
pub async fn openid_configuration(State(state): State<AppState>) -> Json<DiscoveryDocument> {
    Json(DiscoveryDocument::for_issuer(&state.config.issuer))
}

/// GET /jwks.json
pub async fn jwks() -> Json<JsonWebKeySet> {
    Json(JsonWebKeySet::dummy())
}

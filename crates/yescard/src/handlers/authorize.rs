use axum::{
    extract::{Query, State},
    response::Html,
};
use serde::Deserialize;

use crate::{error::OidcError, handlers::guarded_redirect_uri, state::AppState, templates};

#[derive(Debug, Default, Deserialize)]
pub struct AuthorizeQuery {
    redirect_uri: Option<String>,
    #[serde(default)]
    state: String,
    #[serde(default)]
    scope: String,
}

/// GET /authorize - Render the login form.
///
/// Fails with 500 when `redirect_uri` is not on the allow-list.
#[axum::debug_handler]
pub async fn authorize(
    State(state): State<AppState>,
    Query(params): Query<AuthorizeQuery>,
) -> Result<Html<String>, OidcError> {
    let redirect_uri = guarded_redirect_uri(&state, params.redirect_uri.as_deref())?;

    tracing::debug!(%redirect_uri, scope = %params.scope, "Rendering login form");

    Ok(Html(templates::login_page(
        state.codec.default_identity().as_str(),
        &redirect_uri,
        &params.state,
        &params.scope,
    )))
}

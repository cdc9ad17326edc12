use std::time::Duration;

use axum::{
    http::StatusCode,
    routing::{get, post},
    Router,
};
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};
use yescard_core::discovery::{
    AUTHORIZE_PATH, CALLBACK_PATH, DISCOVERY_PATH, JWKS_PATH, LOGIN_PATH, TOKEN_PATH,
    USERINFO_PATH,
};

use crate::{
    handlers::{
        authorize::authorize,
        callback::callback,
        discovery::{jwks, openid_configuration},
        health::livez,
        login::login,
        token::token,
        userinfo::userinfo,
    },
    state::AppState,
};

/// Create the application router with all routes and middleware.
pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route(DISCOVERY_PATH, get(openid_configuration))
        .route(JWKS_PATH, get(jwks))
        .route(AUTHORIZE_PATH, get(authorize))
        .route(LOGIN_PATH, post(login))
        .route(TOKEN_PATH, post(token))
        .route(USERINFO_PATH, get(userinfo))
        .route(CALLBACK_PATH, get(callback))
        .route("/livez", get(livez))
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(10),
        ))
        .with_state(state)
}

use axum::extract::Query;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CallbackQuery {
    #[serde(default)]
    code: String,
    #[serde(default)]
    state: String,
}

/// GET /callback - Stand-in client callback for manual runs.
pub async fn callback(Query(params): Query<CallbackQuery>) -> String {
    format!(
        "Logged in with code: {} (state: {})",
        params.code, params.state
    )
}

pub mod authorize;
pub mod callback;
pub mod discovery;
pub mod health;
pub mod login;
pub mod token;
pub mod userinfo;

use crate::{error::OidcError, state::AppState};

/// Resolves the redirect target of an authorization request and runs it
/// through the allow-list. Absent or blank targets mean this provider's own
/// `/callback`.
pub(crate) fn guarded_redirect_uri(
    state: &AppState,
    redirect_uri: Option<&str>,
) -> Result<String, OidcError> {
    let redirect_uri = match redirect_uri {
        Some(uri) if !uri.trim().is_empty() => uri.to_string(),
        _ => state.config.callback_url(),
    };

    state.guard.check(&redirect_uri)?;

    Ok(redirect_uri)
}

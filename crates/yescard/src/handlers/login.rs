use axum::{
    extract::{rejection::FormRejection, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Form,
};
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use serde::Deserialize;
use yescard_core::AuthorizationCode;

use crate::{error::OidcError, handlers::guarded_redirect_uri, state::AppState};

#[derive(Debug, Default, Deserialize)]
pub struct LoginForm {
    redirect_uri: Option<String>,
    #[serde(default)]
    state: String,
    #[serde(default)]
    scope: String,
    email: Option<String>,
}

/// POST /login - Mint a code for the submitted identity and send the browser
/// back to the client.
///
/// The allow-list is checked again here because nothing stops a client from
/// posting to `/login` without going through `/authorize`.
#[axum::debug_handler]
pub async fn login(
    State(state): State<AppState>,
    form: Result<Form<LoginForm>, FormRejection>,
) -> Result<Response, OidcError> {
    let form = form.map(|Form(form)| form).unwrap_or_default();

    let redirect_uri = guarded_redirect_uri(&state, form.redirect_uri.as_deref())?;
    let identity = state.codec.identity_or_default(form.email.as_deref());
    let code = state.codec.encode_code(&identity);

    tracing::info!(%identity, %redirect_uri, scope = %form.scope, "Issued authorization code");

    let location = callback_location(&redirect_uri, &code, &form.state);

    Ok((StatusCode::FOUND, [(header::LOCATION, location)]).into_response())
}

/// Characters that would end or corrupt a query parameter value. Everything
/// else legal in a query, `@` included, goes through as is.
const QUERY_VALUE: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'&')
    .add(b'+')
    .add(b'<')
    .add(b'=')
    .add(b'>')
    .add(b'`');

/// Appends `code` and `state` to the client's redirect target, ahead of any
/// fragment.
fn callback_location(redirect_uri: &str, code: &AuthorizationCode, state: &str) -> String {
    let (target, fragment) = match redirect_uri.split_once('#') {
        Some((target, fragment)) => (target, Some(fragment)),
        None => (redirect_uri, None),
    };
    let separator = if target.contains('?') { '&' } else { '?' };

    let mut location = format!(
        "{target}{separator}code={}&state={}",
        utf8_percent_encode(code.as_str(), QUERY_VALUE),
        utf8_percent_encode(state, QUERY_VALUE),
    );
    if let Some(fragment) = fragment {
        location.push('#');
        location.push_str(fragment);
    }

    location
}

#[cfg(test)]
mod tests {
    use super::*;
    use yescard_core::{DecodePolicy, Identity, IdentityCodec};

    fn code(email: &str) -> AuthorizationCode {
        IdentityCodec::new(Identity::new("admin@scratchorg.com"), DecodePolicy::Lenient)
            .encode_code(&Identity::new(email))
    }

    #[test]
    fn test_callback_location_appends_query() {
        assert_eq!(
            callback_location("https://x.test/cb", &code("qa@example.com"), "abc"),
            "https://x.test/cb?code=dummy-code-qa@example.com&state=abc"
        );
    }

    #[test]
    fn test_callback_location_extends_existing_query() {
        assert_eq!(
            callback_location("https://x.test/cb?app=1", &code("qa"), ""),
            "https://x.test/cb?app=1&code=dummy-code-qa&state="
        );
    }

    #[test]
    fn test_callback_location_encodes_state() {
        let location = callback_location("https://x.test/cb", &code("qa"), "a b&c#d+e");
        assert!(location.ends_with("&state=a%20b%26c%23d%2Be"));
    }

    #[test]
    fn test_callback_location_encodes_query_breaking_identity() {
        let location = callback_location("https://x.test/cb", &code("a+b&c@x.io"), "");
        assert_eq!(
            location,
            "https://x.test/cb?code=dummy-code-a%2Bb%26c@x.io&state="
        );
    }

    #[test]
    fn test_callback_location_keeps_fragment_last() {
        assert_eq!(
            callback_location("https://x.test/cb#app", &code("qa"), "abc"),
            "https://x.test/cb?code=dummy-code-qa&state=abc#app"
        );
        assert_eq!(
            callback_location("https://x.test/cb?v=2#app", &code("qa"), "abc"),
            "https://x.test/cb?v=2&code=dummy-code-qa&state=abc#app"
        );
    }
}

//! Discovery document and key set.
//!
//! Both payloads are static. Endpoint paths live here so the router and the
//! advertised URLs are built from the same constants.

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use serde::{Deserialize, Serialize};

use crate::userinfo::CLAIMS;

pub const DISCOVERY_PATH: &str = "/.well-known/openid-configuration";
pub const JWKS_PATH: &str = "/jwks.json";
pub const AUTHORIZE_PATH: &str = "/authorize";
pub const LOGIN_PATH: &str = "/login";
pub const TOKEN_PATH: &str = "/token";
pub const USERINFO_PATH: &str = "/userinfo";
pub const CALLBACK_PATH: &str = "/callback";

const KEY_ID: &str = "yescard-key";
const KEY_MATERIAL: &[u8] = b"dummy-secret-key";

/// Joins an issuer base URL and an endpoint path without doubling slashes.
pub fn endpoint_url(issuer: &str, path: &str) -> String {
    format!("{}{}", issuer.trim_end_matches('/'), path)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscoveryDocument {
    pub issuer: String,
    pub authorization_endpoint: String,
    pub token_endpoint: String,
    pub userinfo_endpoint: String,
    pub jwks_uri: String,
    pub scopes_supported: Vec<String>,
    pub response_types_supported: Vec<String>,
    pub grant_types_supported: Vec<String>,
    pub subject_types_supported: Vec<String>,
    pub id_token_signing_alg_values_supported: Vec<String>,
    pub token_endpoint_auth_methods_supported: Vec<String>,
    pub claims_supported: Vec<String>,
}

impl DiscoveryDocument {
    pub fn for_issuer(issuer: &str) -> Self {
        let issuer = issuer.trim_end_matches('/');

        Self {
            issuer: issuer.to_string(),
            authorization_endpoint: endpoint_url(issuer, AUTHORIZE_PATH),
            token_endpoint: endpoint_url(issuer, TOKEN_PATH),
            userinfo_endpoint: endpoint_url(issuer, USERINFO_PATH),
            jwks_uri: endpoint_url(issuer, JWKS_PATH),
            scopes_supported: strings(&["openid", "email", "profile"]),
            response_types_supported: strings(&["code", "token", "id_token"]),
            grant_types_supported: strings(&["authorization_code"]),
            subject_types_supported: strings(&["public"]),
            id_token_signing_alg_values_supported: strings(&["none"]),
            token_endpoint_auth_methods_supported: strings(&[
                "none",
                "client_secret_post",
                "client_secret_basic",
            ]),
            claims_supported: strings(CLAIMS),
        }
    }
}

/// One entry of a JSON Web Key Set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JsonWebKey {
    pub kty: String,
    pub kid: String,
    #[serde(rename = "use")]
    pub key_use: String,
    pub alg: String,
    pub k: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JsonWebKeySet {
    pub keys: Vec<JsonWebKey>,
}

impl JsonWebKeySet {
    /// A single symmetric key that nothing is ever signed with.
    pub fn dummy() -> Self {
        Self {
            keys: vec![JsonWebKey {
                kty: "oct".to_string(),
                kid: KEY_ID.to_string(),
                key_use: "sig".to_string(),
                alg: "HS256".to_string(),
                k: URL_SAFE_NO_PAD.encode(KEY_MATERIAL),
            }],
        }
    }
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_derive_from_issuer() {
        let doc = DiscoveryDocument::for_issuer("http://localhost:5000");
        assert_eq!(doc.issuer, "http://localhost:5000");
        assert_eq!(doc.authorization_endpoint, "http://localhost:5000/authorize");
        assert_eq!(doc.token_endpoint, "http://localhost:5000/token");
        assert_eq!(doc.userinfo_endpoint, "http://localhost:5000/userinfo");
        assert_eq!(doc.jwks_uri, "http://localhost:5000/jwks.json");
    }

    #[test]
    fn trailing_slash_is_ignored() {
        let doc = DiscoveryDocument::for_issuer("https://idp.test/");
        assert_eq!(doc.issuer, "https://idp.test");
        assert_eq!(doc.token_endpoint, "https://idp.test/token");
    }

    #[test]
    fn advertises_unsigned_tokens() {
        let doc = DiscoveryDocument::for_issuer("http://localhost:5000");
        assert_eq!(doc.id_token_signing_alg_values_supported, vec!["none"]);
        assert_eq!(doc.response_types_supported, vec!["code", "token", "id_token"]);
        assert_eq!(doc.subject_types_supported, vec!["public"]);
        assert!(doc.claims_supported.contains(&"email".to_string()));
    }

    #[test]
    fn dummy_key_is_base64url() {
        let jwks = JsonWebKeySet::dummy();
        assert_eq!(jwks.keys.len(), 1);

        let key = &jwks.keys[0];
        assert_eq!(key.kty, "oct");
        assert_eq!(URL_SAFE_NO_PAD.decode(&key.k).unwrap(), KEY_MATERIAL);

        let json = serde_json::to_value(&jwks).unwrap();
        assert_eq!(json["keys"][0]["use"], "sig");
        assert_eq!(json["keys"][0]["kid"], "yescard-key");
    }
}

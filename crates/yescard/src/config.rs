use url::Url;
use yescard_core::{discovery, DecodePolicy};

pub const DEFAULT_ISSUER: &str = "http://localhost:5000";
pub const DEFAULT_IDENTITY: &str = "admin@scratchorg.com";
pub const DEFAULT_REDIRECT_ALLOW: &str = "scratch.my.salesforce.com";

/// Provider configuration, fixed at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Issuer base URL without a trailing slash.
    pub issuer: String,
    /// Identity used when none is submitted or a code/token cannot be read.
    pub default_identity: String,
    /// Substring every accepted `redirect_uri` must contain.
    pub redirect_allow: String,
    pub policy: DecodePolicy,
}

impl Config {
    pub fn new(
        issuer: &Url,
        default_identity: impl Into<String>,
        redirect_allow: impl Into<String>,
        policy: DecodePolicy,
    ) -> Self {
        Self {
            issuer: issuer.as_str().trim_end_matches('/').to_string(),
            default_identity: default_identity.into(),
            redirect_allow: redirect_allow.into(),
            policy,
        }
    }

    /// Absolute URL of one of this provider's endpoints.
    pub fn endpoint(&self, path: &str) -> String {
        discovery::endpoint_url(&self.issuer, path)
    }

    /// Redirect target used when `/authorize` is called without one.
    pub fn callback_url(&self) -> String {
        self.endpoint(discovery::CALLBACK_PATH)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            issuer: DEFAULT_ISSUER.to_string(),
            default_identity: DEFAULT_IDENTITY.to_string(),
            redirect_allow: DEFAULT_REDIRECT_ALLOW.to_string(),
            policy: DecodePolicy::Lenient,
        }
    }
}

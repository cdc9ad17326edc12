//! Identity codec.
//!
//! Authorization codes and access tokens are not random: each one is a fixed
//! prefix followed by the verbatim identity it was minted for. Decoding strips
//! the prefix again. Anything that does not carry the expected prefix is a
//! *fallback*, and the [`DecodePolicy`] decides whether a fallback substitutes
//! the default identity or is reported as an error.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Prefix of every authorization code.
pub const CODE_PREFIX: &str = "dummy-code-";

/// Prefix of every access token.
pub const TOKEN_PREFIX: &str = "dummy-access-token-for-";

/// Email-like subject of the whole flow. Not validated.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Identity(String);

impl Identity {
    pub fn new(email: impl Into<String>) -> Self {
        Self(email.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Identity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Code handed to the client's redirect target by `/login`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AuthorizationCode(String);

impl AuthorizationCode {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for AuthorizationCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Bearer credential issued by `/token`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccessToken(String);

impl AccessToken {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for AccessToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Why a presented code or token did not yield an identity.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    #[error("authorization code is missing")]
    MissingCode,

    #[error("authorization code {0:?} was not issued by this provider")]
    MalformedCode(String),

    #[error("access token is missing")]
    MissingToken,

    #[error("access token was not issued by this provider")]
    MalformedToken,
}

/// What happens when a code or token cannot be decoded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DecodePolicy {
    /// Substitute the default identity.
    #[default]
    Lenient,
    /// Reject with a [`CodecError`].
    Strict,
}

/// Outcome of a successful decode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decoded {
    /// The presented value carried this identity.
    Recovered(Identity),
    /// The presented value was unusable and the default identity stands in.
    Fallback { identity: Identity, reason: CodecError },
}

impl Decoded {
    pub fn into_identity(self) -> Identity {
        match self {
            Self::Recovered(identity) | Self::Fallback { identity, .. } => identity,
        }
    }
}

#[derive(Clone, Copy)]
enum Artifact {
    Code,
    Token,
}

impl Artifact {
    fn prefix(self) -> &'static str {
        match self {
            Self::Code => CODE_PREFIX,
            Self::Token => TOKEN_PREFIX,
        }
    }

    fn missing(self) -> CodecError {
        match self {
            Self::Code => CodecError::MissingCode,
            Self::Token => CodecError::MissingToken,
        }
    }

    fn malformed(self, value: &str) -> CodecError {
        match self {
            Self::Code => CodecError::MalformedCode(value.to_string()),
            Self::Token => CodecError::MalformedToken,
        }
    }
}

/// Mints and reads back authorization codes and access tokens.
///
/// All defaulting of identities happens here so handlers never pick a
/// default themselves.
#[derive(Debug, Clone)]
pub struct IdentityCodec {
    default_identity: Identity,
    policy: DecodePolicy,
}

impl IdentityCodec {
    pub fn new(default_identity: Identity, policy: DecodePolicy) -> Self {
        Self {
            default_identity,
            policy,
        }
    }

    pub fn default_identity(&self) -> &Identity {
        &self.default_identity
    }

    /// Identity submitted through the login form, verbatim, or the default
    /// when blank.
    pub fn identity_or_default(&self, submitted: Option<&str>) -> Identity {
        match submitted {
            Some(email) if !email.trim().is_empty() => Identity::new(email),
            _ => self.default_identity.clone(),
        }
    }

    pub fn encode_code(&self, identity: &Identity) -> AuthorizationCode {
        AuthorizationCode(format!("{CODE_PREFIX}{identity}"))
    }

    pub fn decode_code(&self, code: Option<&str>) -> Result<Decoded, CodecError> {
        self.decode(Artifact::Code, code)
    }

    pub fn encode_token(&self, identity: &Identity) -> AccessToken {
        AccessToken(format!("{TOKEN_PREFIX}{identity}"))
    }

    pub fn decode_token(&self, token: Option<&str>) -> Result<Decoded, CodecError> {
        self.decode(Artifact::Token, token)
    }

    fn decode(&self, artifact: Artifact, value: Option<&str>) -> Result<Decoded, CodecError> {
        let reason = match value {
            None => artifact.missing(),
            Some(v) if v.trim().is_empty() => artifact.missing(),
            Some(v) => match v.strip_prefix(artifact.prefix()) {
                Some(email) if !email.is_empty() => {
                    return Ok(Decoded::Recovered(Identity::new(email)));
                }
                _ => artifact.malformed(v),
            },
        };

        match self.policy {
            DecodePolicy::Lenient => Ok(Decoded::Fallback {
                identity: self.default_identity.clone(),
                reason,
            }),
            DecodePolicy::Strict => Err(reason),
        }
    }
}

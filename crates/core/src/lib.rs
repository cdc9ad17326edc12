//! Pure protocol logic for the yescard mock OIDC provider.
//!
//! Nothing in this crate performs I/O. The HTTP shell lives in the `yescard`
//! binary crate and calls into these modules:
//! - [`codec`]: identity <-> authorization code <-> access token
//! - [`redirect`]: allow-list guard for client redirect targets
//! - [`userinfo`] and [`token`]: response payloads derived from an identity
//! - [`discovery`]: static discovery document, JWKS and endpoint paths

pub mod codec;
pub mod discovery;
pub mod redirect;
pub mod token;
pub mod userinfo;

pub use codec::{
    AccessToken, AuthorizationCode, CodecError, DecodePolicy, Decoded, Identity, IdentityCodec,
};
pub use discovery::{DiscoveryDocument, JsonWebKey, JsonWebKeySet};
pub use redirect::{GuardError, RedirectGuard};
pub use token::TokenResponse;
pub use userinfo::UserInfoRecord;

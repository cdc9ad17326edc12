use serde::{Deserialize, Serialize};

use crate::{
    codec::{AccessToken, Identity, IdentityCodec},
    userinfo::UserInfoRecord,
};

pub const TOKEN_TYPE: &str = "Bearer";

/// Advertised lifetime in seconds. Never enforced.
pub const EXPIRES_IN: u64 = 3600;

/// Placeholder handed out where a signed JWT would normally go.
pub const ID_TOKEN: &str = "dummy-id-token";

/// Body of a successful `/token` response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: AccessToken,
    pub token_type: String,
    pub expires_in: u64,
    pub id_token: String,
    pub userinfo: UserInfoRecord,
}

impl TokenResponse {
    pub fn issue(codec: &IdentityCodec, identity: &Identity) -> Self {
        Self {
            access_token: codec.encode_token(identity),
            token_type: TOKEN_TYPE.to_string(),
            expires_in: EXPIRES_IN,
            id_token: ID_TOKEN.to_string(),
            userinfo: UserInfoRecord::for_identity(identity),
        }
    }
}

//! Shared application state.
//!
//! Everything in here is immutable after startup, so handlers only ever read
//! from it and concurrent requests need no coordination.

use std::sync::Arc;

use yescard_core::{GuardError, Identity, IdentityCodec, RedirectGuard};

use crate::config::Config;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub codec: Arc<IdentityCodec>,
    pub guard: Arc<RedirectGuard>,
}

impl AppState {
    /// Builds the codec and redirect guard from the configuration.
    ///
    /// # Errors
    ///
    /// Fails when the redirect allow token is empty.
    pub fn new(config: Config) -> Result<Self, GuardError> {
        let codec = IdentityCodec::new(Identity::new(&config.default_identity), config.policy);
        let guard = RedirectGuard::new(&config.redirect_allow, config.callback_url())?;

        Ok(Self {
            config: Arc::new(config),
            codec: Arc::new(codec),
            guard: Arc::new(guard),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guard_allows_own_callback() {
        let state = AppState::new(Config::default()).unwrap();
        assert!(state.guard.is_allowed("http://localhost:5000/callback"));
    }

    #[test]
    fn test_empty_allow_token_fails() {
        let config = Config {
            redirect_allow: String::new(),
            ..Config::default()
        };
        assert!(AppState::new(config).is_err());
    }
}

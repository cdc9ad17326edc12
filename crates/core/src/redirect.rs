use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuardError {
    #[error("redirect allow-list token must not be empty")]
    EmptyAllowToken,

    #[error("redirect_uri {uri:?} is not allowed: it must contain {allow_token:?}")]
    NotAllowed { uri: String, allow_token: String },
}

/// Allow-list check for client supplied `redirect_uri` values.
///
/// A target is allowed when it contains the configured allow token (usually a
/// host suffix such as `scratch.my.salesforce.com`) or when it points at this
/// provider's own `/callback` sink.
///
/// # Examples
///
/// ```
/// use yescard_core::RedirectGuard;
///
/// let guard = RedirectGuard::new(
///     "scratch.my.salesforce.com",
///     "http://localhost:5000/callback",
/// )
/// .unwrap();
///
/// assert!(guard.is_allowed("https://foo.scratch.my.salesforce.com/cb"));
/// assert!(guard.is_allowed("http://localhost:5000/callback"));
/// assert!(!guard.is_allowed("https://evil.example.com"));
/// ```
#[derive(Debug, Clone)]
pub struct RedirectGuard {
    allow_token: String,
    own_callback: String,
}

impl RedirectGuard {
    /// # Errors
    ///
    /// Returns [`GuardError::EmptyAllowToken`] for an empty token, which would
    /// otherwise match every target.
    pub fn new(
        allow_token: impl Into<String>,
        own_callback: impl Into<String>,
    ) -> Result<Self, GuardError> {
        let allow_token = allow_token.into();
        if allow_token.is_empty() {
            return Err(GuardError::EmptyAllowToken);
        }

        Ok(Self {
            allow_token,
            own_callback: own_callback.into(),
        })
    }

    pub fn is_allowed(&self, uri: &str) -> bool {
        uri.contains(&self.allow_token) || self.is_own_callback(uri)
    }

    pub fn check(&self, uri: &str) -> Result<(), GuardError> {
        if self.is_allowed(uri) {
            Ok(())
        } else {
            Err(GuardError::NotAllowed {
                uri: uri.to_string(),
                allow_token: self.allow_token.clone(),
            })
        }
    }

    // Only the exact callback path, optionally followed by a query string.
    fn is_own_callback(&self, uri: &str) -> bool {
        match uri.strip_prefix(&self.own_callback) {
            Some(rest) => rest.is_empty() || rest.starts_with('?'),
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn guard() -> RedirectGuard {
        RedirectGuard::new("scratch.my.salesforce.com", "http://localhost:5000/callback").unwrap()
    }

    #[test]
    fn accepts_scratch_org_callback() {
        assert!(guard().is_allowed("https://foo.scratch.my.salesforce.com/cb"));
    }

    #[test]
    fn accepts_own_callback() {
        assert!(guard().is_allowed("http://localhost:5000/callback"));
        assert!(guard().is_allowed("http://localhost:5000/callback?x=1"));
    }

    #[test]
    fn rejects_own_callback_lookalike() {
        assert!(!guard().is_allowed("http://localhost:5000/callbackevil"));
    }

    #[test]
    fn rejects_foreign_host() {
        assert!(!guard().is_allowed("https://evil.example.com"));
    }

    #[test]
    fn rejects_empty_uri() {
        assert!(!guard().is_allowed(""));
    }

    #[test]
    fn check_reports_target_and_token() {
        let err = guard().check("https://evil.example.com").unwrap_err();
        assert_eq!(
            err,
            GuardError::NotAllowed {
                uri: "https://evil.example.com".to_string(),
                allow_token: "scratch.my.salesforce.com".to_string(),
            }
        );
        assert!(err.to_string().contains("https://evil.example.com"));
    }

    #[test]
    fn empty_allow_token_is_rejected() {
        assert_eq!(
            RedirectGuard::new("", "http://localhost:5000/callback").unwrap_err(),
            GuardError::EmptyAllowToken
        );
    }
}

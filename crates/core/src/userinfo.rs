use serde::{Deserialize, Serialize};

use crate::codec::Identity;

pub const SUBJECT: &str = "123456";
pub const NAME: &str = "Yes Card User";
pub const FIRST_NAME: &str = "Yes";
pub const LAST_NAME: &str = "Card";
pub const ACCOUNT: &str = "scratch-org";
pub const SERVICES: &[&str] = &["salesforce"];
pub const RIGHTS: &[&str] = &["admin", "tester"];

/// JSON field names of [`UserInfoRecord`], advertised as `claims_supported`.
pub const CLAIMS: &[&str] = &[
    "sub",
    "name",
    "firstName",
    "lastName",
    "email",
    "account",
    "services",
    "rights",
];

/// User-info payload. Only `email` varies between users.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInfoRecord {
    pub sub: String,
    pub name: String,
    #[serde(rename = "firstName")]
    pub first_name: String,
    #[serde(rename = "lastName")]
    pub last_name: String,
    pub email: String,
    pub account: String,
    pub services: Vec<String>,
    pub rights: Vec<String>,
}

impl UserInfoRecord {
    pub fn for_identity(identity: &Identity) -> Self {
        Self {
            sub: SUBJECT.to_string(),
            name: NAME.to_string(),
            first_name: FIRST_NAME.to_string(),
            last_name: LAST_NAME.to_string(),
            email: identity.as_str().to_string(),
            account: ACCOUNT.to_string(),
            services: SERVICES.iter().map(|s| s.to_string()).collect(),
            rights: RIGHTS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_comes_from_identity() {
        let record = UserInfoRecord::for_identity(&Identity::new("qa@example.com"));
        assert_eq!(record.email, "qa@example.com");
        assert_eq!(record.sub, SUBJECT);
        assert_eq!(record.rights, vec!["admin", "tester"]);
    }

    #[test]
    fn serializes_with_claim_names() {
        let record = UserInfoRecord::for_identity(&Identity::new("qa@example.com"));
        let json = serde_json::to_value(&record).unwrap();
        let object = json.as_object().unwrap();

        assert_eq!(object.len(), CLAIMS.len());
        for claim in CLAIMS {
            assert!(object.contains_key(*claim), "missing claim {claim}");
        }
        assert_eq!(json["firstName"], "Yes");
        assert_eq!(json["lastName"], "Card");
    }
}

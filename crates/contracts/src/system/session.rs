use serde::{Deserialize, Serialize};

/// Account role as stored in the `flb_user` record.
///
/// Unknown strings deserialize to [`AccountType::Unknown`] instead of failing
/// the whole session parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountType {
    Farmer,
    Worker,
    Realtor,
    Moderator,
    Admin,
    SuperAdmin,
    #[serde(other)]
    #[default]
    Unknown,
}

impl AccountType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountType::Farmer => "farmer",
            AccountType::Worker => "worker",
            AccountType::Realtor => "realtor",
            AccountType::Moderator => "moderator",
            AccountType::Admin => "admin",
            AccountType::SuperAdmin => "super_admin",
            AccountType::Unknown => "unknown",
        }
    }
}

/// User record persisted by the login flow under the `flb_user` storage key.
///
/// The server owns this shape; every field defaults so a partial or legacy
/// record still yields a usable session.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionUser {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub account_type: AccountType,
    #[serde(default)]
    pub profile_picture: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub verified: bool,
}

impl SessionUser {
    /// A session user is present when the record carries a real id.
    pub fn is_present(&self) -> bool {
        self.id != 0
    }
}

/// Parse the raw `flb_user` storage value.
///
/// Fails open: absent, empty, or malformed JSON all yield the default (empty)
/// user rather than an error, matching how every page treated the record.
pub fn parse_session_user(raw: Option<&str>) -> SessionUser {
    raw.and_then(|s| serde_json::from_str(s).ok())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_absent_yields_default() {
        let user = parse_session_user(None);
        assert_eq!(user.id, 0);
        assert!(!user.is_present());
    }

    #[test]
    fn test_parse_malformed_yields_default() {
        for raw in ["", "not json", "{\"id\":", "[1,2,3"] {
            let user = parse_session_user(Some(raw));
            assert_eq!(user.id, 0, "input {:?} must fail open", raw);
        }
    }

    #[test]
    fn test_parse_full_record() {
        let raw = r#"{"id":7,"full_name":"Ada Obi","email":"ada@example.com","account_type":"farmer","verified":true}"#;
        let user = parse_session_user(Some(raw));
        assert_eq!(user.id, 7);
        assert_eq!(user.account_type, AccountType::Farmer);
        assert!(user.is_present());
    }

    #[test]
    fn test_unknown_account_type_does_not_poison_parse() {
        let raw = r#"{"id":3,"account_type":"alien"}"#;
        let user = parse_session_user(Some(raw));
        assert_eq!(user.id, 3);
        assert_eq!(user.account_type, AccountType::Unknown);
    }
}

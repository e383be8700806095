//! Session identity: the current user and the init-data payload the host hands the page.
//!
//! The authentication `hash` is a static placeholder. Nothing here validates it, and callers
//! must not treat it as proof of anything.

use serde::{Deserialize, Serialize};

use crate::BridgeError;

/// User the Mini App session belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebAppUser {
    /// Platform user identifier.
    pub id: i64,
    /// First name.
    pub first_name: String,
    /// Last name, when set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    /// Username without the leading `@`, when set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    /// IETF language tag of the user's client.
    pub language_code: String,
    /// Premium subscriber flag; omitted from the wire form when false.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub is_premium: bool,
}

impl Default for WebAppUser {
    fn default() -> Self {
        Self {
            id: 123_456_789,
            first_name: "Test".to_string(),
            last_name: Some("User".to_string()),
            username: Some("testuser".to_string()),
            language_code: "en".to_string(),
            is_premium: false,
        }
    }
}

impl WebAppUser {
    /// Full name followed by `(@username)` when a username is set.
    pub fn display_name(&self) -> String {
        let full_name = std::iter::once(self.first_name.as_str())
            .chain(self.last_name.as_deref())
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ");
        match &self.username {
            Some(username) => format!("{full_name} (@{username})"),
            None => full_name,
        }
    }
}

/// Decoded init data (`initDataUnsafe`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebAppInitData {
    /// Opaque query identifier.
    pub query_id: String,
    /// Session user.
    pub user: WebAppUser,
    /// Issue time in unix seconds.
    pub auth_date: u64,
    /// Placeholder authentication marker.
    pub hash: String,
}

/// Wire shape of the raw init-data query string; `user` is the JSON-encoded user.
#[derive(Serialize, Deserialize)]
struct RawInitData {
    query_id: String,
    user: String,
    auth_date: u64,
    hash: String,
}

impl WebAppInitData {
    /// Serializes to the raw `initData` form:
    /// `query_id=…&user=<url-encoded JSON>&auth_date=…&hash=…`.
    ///
    /// # Errors
    ///
    /// Returns [`BridgeError::InitDataEncode`] if the user cannot be encoded.
    pub fn to_query_string(&self) -> Result<String, BridgeError> {
        let user =
            serde_json::to_string(&self.user).map_err(|e| BridgeError::InitDataEncode(e.to_string()))?;
        serde_urlencoded::to_string(RawInitData {
            query_id: self.query_id.clone(),
            user,
            auth_date: self.auth_date,
            hash: self.hash.clone(),
        })
        .map_err(|e| BridgeError::InitDataEncode(e.to_string()))
    }

    /// Decodes a raw `initData` query string.
    ///
    /// # Errors
    ///
    /// Returns [`BridgeError::InitDataDecode`] when a field is missing or malformed, or the
    /// user blob is not valid JSON.
    pub fn parse(raw: &str) -> Result<Self, BridgeError> {
        let raw: RawInitData =
            serde_urlencoded::from_str(raw).map_err(|e| BridgeError::InitDataDecode(e.to_string()))?;
        let user = serde_json::from_str(&raw.user)
            .map_err(|e| BridgeError::InitDataDecode(format!("user: {e}")))?;
        Ok(Self {
            query_id: raw.query_id,
            user,
            auth_date: raw.auth_date,
            hash: raw.hash,
        })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const STOCK_INIT_DATA: &str = "query_id=AAHdF6IAAAAA13dpfO4iT-hs&user=%7B%22id%22%3A123456789%2C%22first_name%22%3A%22Test%22%2C%22last_name%22%3A%22User%22%2C%22username%22%3A%22testuser%22%2C%22language_code%22%3A%22en%22%7D&auth_date=1698154157&hash=d8201a81fabdab577914f65f9f35a4a38c5261cc80a7f0490972e47c5dcd1934";

    fn stock() -> WebAppInitData {
        WebAppInitData {
            query_id: "AAHdF6IAAAAA13dpfO4iT-hs".to_string(),
            user: WebAppUser::default(),
            auth_date: 1_698_154_157,
            hash: "d8201a81fabdab577914f65f9f35a4a38c5261cc80a7f0490972e47c5dcd1934".to_string(),
        }
    }

    #[test]
    fn encodes_to_the_stock_query_string() {
        assert_eq!(stock().to_query_string().expect("encode"), STOCK_INIT_DATA);
    }

    #[test]
    fn parses_the_stock_query_string() {
        assert_eq!(WebAppInitData::parse(STOCK_INIT_DATA).expect("parse"), stock());
    }

    #[test]
    fn parse_rejects_missing_fields_and_bad_user_json() {
        assert!(matches!(
            WebAppInitData::parse("query_id=x&auth_date=1&hash=h"),
            Err(BridgeError::InitDataDecode(_))
        ));
        assert!(matches!(
            WebAppInitData::parse("query_id=x&user=%7Bnope&auth_date=1&hash=h"),
            Err(BridgeError::InitDataDecode(_))
        ));
    }

    #[test]
    fn premium_flag_is_emitted_only_when_set() {
        let mut data = stock();
        data.user.is_premium = true;
        let raw = data.to_query_string().expect("encode");
        assert!(raw.contains("%22is_premium%22%3Atrue"));
        assert_eq!(WebAppInitData::parse(&raw).expect("parse"), data);
    }

    #[test]
    fn display_name_combines_name_and_username() {
        assert_eq!(WebAppUser::default().display_name(), "Test User (@testuser)");
        let bare = WebAppUser {
            last_name: None,
            username: None,
            ..WebAppUser::default()
        };
        assert_eq!(bare.display_name(), "Test");
    }
}

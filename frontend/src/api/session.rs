use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use chrono::Utc;

use super::types::{LoginResponse, UserResponse};
use crate::utils::storage::{self, StorageError};

pub const TOKEN_KEY: &str = "auth_token";
pub const USER_KEY: &str = "current_user";

pub fn persist_session(response: &LoginResponse) -> Result<(), StorageError> {
    storage::set_item(TOKEN_KEY, &response.token)?;
    cache_user(&response.user)
}

pub fn cache_user(user: &UserResponse) -> Result<(), StorageError> {
    match serde_json::to_string(user) {
        Ok(raw) => storage::set_item(USER_KEY, &raw),
        Err(err) => {
            log::warn!("Failed to serialize current user: {}", err);
            Ok(())
        }
    }
}

pub fn clear_session() {
    for key in [TOKEN_KEY, USER_KEY] {
        if let Err(err) = storage::remove_item(key) {
            log::warn!("Failed to clear {}: {}", key, err);
        }
    }
}

/// The stored bearer token, or `None` when absent or past its `exp` claim.
pub fn stored_token() -> Option<String> {
    let token = storage::get_item(TOKEN_KEY).ok().flatten()?;
    if token.trim().is_empty() || token_expired(&token, Utc::now().timestamp()) {
        clear_session();
        return None;
    }
    Some(token)
}

pub fn stored_user() -> Option<UserResponse> {
    let raw = storage::get_item(USER_KEY).ok().flatten()?;
    serde_json::from_str(&raw).ok()
}

pub fn has_session() -> bool {
    stored_token().is_some()
}

fn token_exp(token: &str) -> Option<i64> {
    let mut parts = token.split('.');
    let (_header, claims, _signature) = (parts.next()?, parts.next()?, parts.next()?);
    let bytes = URL_SAFE_NO_PAD.decode(claims.trim_end_matches('=')).ok()?;
    let claims: serde_json::Value = serde_json::from_slice(&bytes).ok()?;
    claims.get("exp")?.as_i64()
}

/// Opaque tokens never expire client-side; the API decides.
pub fn token_expired(token: &str, now_ts: i64) -> bool {
    token_exp(token).map(|exp| exp <= now_ts).unwrap_or(false)
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;

    fn login_response(token: &str) -> LoginResponse {
        LoginResponse {
            token: token.into(),
            user: UserResponse {
                id: "u1".into(),
                username: "alice".into(),
                full_name: "Alice Example".into(),
                role: "employee".into(),
                email: None,
            },
        }
    }

    #[test]
    fn persist_and_clear_session() {
        persist_session(&login_response("token-1")).unwrap();
        assert_eq!(stored_token().as_deref(), Some("token-1"));
        assert_eq!(stored_user().map(|u| u.username), Some("alice".to_string()));
        assert!(has_session());

        clear_session();
        assert!(stored_token().is_none());
        assert!(stored_user().is_none());
        assert!(!has_session());
    }

    #[test]
    fn expired_token_is_discarded() {
        let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"none"}"#);
        let claims = URL_SAFE_NO_PAD.encode(br#"{"exp":1}"#);
        persist_session(&login_response(&format!("{}.{}.sig", header, claims))).unwrap();

        assert!(stored_token().is_none());
        assert!(stored_user().is_none());
    }
}

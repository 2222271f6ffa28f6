use crate::api::ApiError;
use crate::state::auth::AuthState;
use crate::utils::navigation::HOME_PATH;
use leptos::*;

pub const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid username or password.";
pub const SERVER_ERROR_MESSAGE: &str = "Server error, please try again later.";

#[derive(Clone, Copy)]
pub struct LoginFormState {
    pub username: RwSignal<String>,
    pub password: RwSignal<String>,
}

impl Default for LoginFormState {
    fn default() -> Self {
        Self {
            username: create_rw_signal(String::new()),
            password: create_rw_signal(String::new()),
        }
    }
}

impl LoginFormState {
    pub fn is_filled(&self) -> bool {
        is_filled(&self.username.get(), &self.password.get())
    }
}

pub fn is_filled(username: &str, password: &str) -> bool {
    !username.trim().is_empty() && !password.is_empty()
}

pub fn validate_credentials(username: &str, password: &str) -> Result<(), String> {
    if username.trim().is_empty() {
        return Err("Please enter your username".into());
    }
    if password.is_empty() {
        return Err("Please enter your password".into());
    }
    Ok(())
}

/// Maps a failed sign-in onto the two messages the login screen shows.
pub fn login_error_message(error: &ApiError) -> &'static str {
    if error.is_unauthorized() {
        INVALID_CREDENTIALS_MESSAGE
    } else {
        SERVER_ERROR_MESSAGE
    }
}

/// Where to send a visitor who opens the login view while already signed in.
/// Once a sign-in has been attempted here, the login result owns navigation.
pub fn signed_in_visitor_redirect(
    state: &AuthState,
    login_attempted: bool,
) -> Option<&'static str> {
    (state.is_authenticated && !state.loading && !login_attempted).then_some(HOME_PATH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credentials_need_username_and_password() {
        assert!(validate_credentials("  ", "secret").is_err());
        assert!(validate_credentials("an", "").is_err());
        assert!(validate_credentials(" an ", "secret").is_ok());
        assert!(!is_filled("an", ""));
        assert!(is_filled("an", "secret"));
    }

    #[test]
    fn errors_map_to_login_messages() {
        assert_eq!(
            login_error_message(&ApiError::unauthorized("bad")),
            INVALID_CREDENTIALS_MESSAGE
        );
        let invalid = ApiError {
            error: "nope".into(),
            code: "INVALID_CREDENTIALS".into(),
            details: None,
        };
        assert_eq!(login_error_message(&invalid), INVALID_CREDENTIALS_MESSAGE);
        assert_eq!(
            login_error_message(&ApiError::request_failed("offline")),
            SERVER_ERROR_MESSAGE
        );
        assert_eq!(
            login_error_message(&ApiError::unknown("Request failed with status 500")),
            SERVER_ERROR_MESSAGE
        );
    }

    #[test]
    fn signed_in_visitor_goes_to_the_list() {
        let signed_in = AuthState {
            is_authenticated: true,
            ..AuthState::default()
        };
        assert_eq!(signed_in_visitor_redirect(&signed_in, false), Some(HOME_PATH));
        assert_eq!(signed_in_visitor_redirect(&AuthState::default(), false), None);
        let verifying = AuthState {
            loading: true,
            ..signed_in.clone()
        };
        assert_eq!(signed_in_visitor_redirect(&verifying, false), None);
    }

    #[test]
    fn completed_login_keeps_its_own_redirect() {
        let signed_in = AuthState {
            is_authenticated: true,
            ..AuthState::default()
        };
        assert_eq!(signed_in_visitor_redirect(&signed_in, true), None);
    }
}

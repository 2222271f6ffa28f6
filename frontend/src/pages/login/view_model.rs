use super::utils::{self, LoginFormState};
use crate::api::{ApiError, LoginRequest};
use crate::state::auth;
use crate::utils::navigation::{self, safe_redirect_target};
use leptos::*;

#[derive(Clone, Copy)]
pub struct LoginViewModel {
    pub form: LoginFormState,
    pub error: RwSignal<Option<String>>,
    pub redirect: StoredValue<String>,
    pub login_action: Action<LoginRequest, Result<(), ApiError>>,
}

fn apply_login_result(
    result: Option<Result<(), ApiError>>,
    form: LoginFormState,
    error: RwSignal<Option<String>>,
    redirect: &str,
) {
    match result {
        Some(Ok(())) => {
            error.set(None);
            form.password.set(String::new());
            navigation::redirect_to(redirect);
        }
        Some(Err(err)) => {
            log::warn!("Sign-in failed: {} ({})", err, err.code);
            error.set(Some(utils::login_error_message(&err).to_string()));
        }
        None => {}
    }
}

impl LoginViewModel {
    pub fn pending(&self) -> Signal<bool> {
        self.login_action.pending().into()
    }

    pub fn can_submit(&self) -> Signal<bool> {
        let form = self.form;
        let pending = self.login_action.pending();
        Signal::derive(move || form.is_filled() && !pending.get())
    }

    /// True from the first dispatch on, tracked.
    pub fn login_attempted(&self) -> bool {
        self.login_action.pending().get() || self.login_action.value().with(Option::is_some)
    }

    pub fn submit(&self) {
        if self.login_action.pending().get_untracked() {
            return;
        }
        let username = self.form.username.get_untracked();
        let password = self.form.password.get_untracked();
        if let Err(msg) = utils::validate_credentials(&username, &password) {
            self.error.set(Some(msg));
            return;
        }
        self.error.set(None);
        self.login_action.dispatch(LoginRequest {
            username: username.trim().to_string(),
            password,
        });
    }
}

/// `redirect` is the raw `?redirect=` query value, if any.
pub fn use_login_view_model(redirect: Option<String>) -> LoginViewModel {
    let form = LoginFormState::default();
    let error = create_rw_signal(None::<String>);
    let redirect = store_value(safe_redirect_target(redirect.as_deref()));
    let login_action = auth::use_login_action();

    create_effect(move |_| {
        let result = login_action.value().get();
        redirect.with_value(|target| apply_login_result(result, form, error, target));
    });

    LoginViewModel {
        form,
        error,
        redirect,
        login_action,
    }
}

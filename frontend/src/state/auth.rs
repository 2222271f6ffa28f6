use crate::{
    api::{session, ApiClient, ApiError, LoginRequest, UserResponse},
    pages::login::repository::LoginRepository,
};
use leptos::*;
use std::rc::Rc;

pub type AuthContext = (ReadSignal<AuthState>, WriteSignal<AuthState>);

#[derive(Debug, Clone, Default)]
pub struct AuthState {
    pub user: Option<UserResponse>,
    pub is_authenticated: bool,
    pub loading: bool,
}

impl AuthState {
    /// Seeds from the stored session. A token without a cached user stays loading until verified.
    pub fn from_session() -> Self {
        match session::stored_token() {
            Some(_) => {
                let user = session::stored_user();
                Self {
                    is_authenticated: user.is_some(),
                    loading: user.is_none(),
                    user,
                }
            }
            None => Self::default(),
        }
    }

    pub fn display_name(&self) -> String {
        self.user
            .as_ref()
            .map(|user| user.full_name.clone())
            .unwrap_or_default()
    }
}

fn repository() -> LoginRepository {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    LoginRepository::new_with_client(Rc::new(api))
}

fn create_auth_context() -> AuthContext {
    let (auth_state, set_auth_state) = create_signal(AuthState::from_session());

    if session::has_session() {
        let repo = repository();
        spawn_local(async move {
            refresh_current_user(&repo, set_auth_state).await;
        });
    }

    (auth_state, set_auth_state)
}

#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let ctx = create_auth_context();
    provide_context::<AuthContext>(ctx);
    view! { <>{children()}</> }
}

pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().unwrap_or_else(|| create_signal(AuthState::default()))
}

pub async fn refresh_current_user(repo: &LoginRepository, set_auth_state: WriteSignal<AuthState>) {
    match repo.current_user().await {
        Ok(user) => set_auth_state.update(|state| {
            state.user = Some(user);
            state.is_authenticated = true;
            state.loading = false;
        }),
        Err(err) => {
            log::warn!("Session check failed: {}", err);
            set_auth_state.update(|state| {
                state.user = None;
                state.is_authenticated = false;
                state.loading = false;
            });
        }
    }
}

pub async fn login_request(
    request: LoginRequest,
    repo: &LoginRepository,
    set_auth_state: WriteSignal<AuthState>,
) -> Result<(), ApiError> {
    set_auth_state.update(|state| state.loading = true);

    match repo.login(request).await {
        Ok(response) => {
            log::info!("Signed in as {}", response.user.username);
            set_auth_state.update(|state| {
                state.user = Some(response.user);
                state.is_authenticated = true;
                state.loading = false;
            });
            Ok(())
        }
        Err(error) => {
            set_auth_state.update(|state| state.loading = false);
            Err(error)
        }
    }
}

pub async fn logout(
    repo: &LoginRepository,
    set_auth_state: WriteSignal<AuthState>,
) -> Result<(), ApiError> {
    let result = repo.logout().await;

    set_auth_state.update(|state| {
        state.user = None;
        state.is_authenticated = false;
        state.loading = false;
    });

    result
}

pub fn use_login_action() -> Action<LoginRequest, Result<(), ApiError>> {
    let (_auth, set_auth) = use_auth();
    let repo = repository();

    create_action(move |request: &LoginRequest| {
        let payload = request.clone();
        let repo = repo.clone();
        async move { login_request(payload, &repo, set_auth).await }
    })
}

pub fn use_logout_action() -> Action<(), Result<(), ApiError>> {
    let (_auth, set_auth) = use_auth();
    let repo = repository();

    create_action(move |_: &()| {
        let repo = repo.clone();
        async move { logout(&repo, set_auth).await }
    })
}

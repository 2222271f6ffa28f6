use crate::{
    components::layout::LoadingSpinner,
    state::auth::{use_auth, AuthState},
    utils::navigation::{self, login_url_for},
};
use leptos::*;

#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let (auth, _) = use_auth();
    let is_authenticated = create_memo(move |_| auth.get().is_authenticated);
    let is_loading = create_memo(move |_| auth.get().loading);
    create_effect(move |_| {
        let target = auth.with(|state| guard_redirect(state, &navigation::current_path()));
        if let Some(target) = target {
            log::info!("No session, redirecting to {}", target);
            navigation::redirect_to(&target);
        }
    });
    view! {
        <Show
            when=move || should_render_children(is_authenticated.get(), is_loading.get())
            fallback=move || {
                if is_loading.get() {
                    view! { <LoadingSpinner /> }.into_view()
                } else {
                    ().into_view()
                }
            }
        >
            {children()}
        </Show>
    }
}

fn should_render_children(is_authenticated: bool, is_loading: bool) -> bool {
    is_authenticated && !is_loading
}

/// Login URL for a visitor without a session, `None` while loading or signed in.
fn guard_redirect(state: &AuthState, path: &str) -> Option<String> {
    if state.loading || state.is_authenticated {
        None
    } else {
        Some(login_url_for(path))
    }
}

#[cfg(test)]
mod tests {
    use super::{guard_redirect, should_render_children};
    use crate::state::auth::AuthState;

    #[test]
    fn guard_blocks_until_authenticated() {
        assert!(!should_render_children(false, true));
        assert!(!should_render_children(false, false));
        assert!(!should_render_children(true, true));
        assert!(should_render_children(true, false));
    }

    #[test]
    fn guest_is_sent_to_login_with_origin() {
        let guest = AuthState::default();
        assert_eq!(
            guard_redirect(&guest, "/leave-requests/received").as_deref(),
            Some("/login?redirect=%2Fleave%2Drequests%2Freceived")
        );
    }

    #[test]
    fn no_redirect_while_loading_or_signed_in() {
        let loading = AuthState {
            loading: true,
            ..AuthState::default()
        };
        assert_eq!(guard_redirect(&loading, "/leave-requests"), None);

        let signed_in = AuthState {
            is_authenticated: true,
            ..AuthState::default()
        };
        assert_eq!(guard_redirect(&signed_in, "/leave-requests"), None);
    }
}

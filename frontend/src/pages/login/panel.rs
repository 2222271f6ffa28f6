use crate::{
    pages::login::{
        components::form::LoginForm, utils::signed_in_visitor_redirect,
        view_model::use_login_view_model,
    },
    state::auth::use_auth,
    utils::navigation,
};
use leptos::{ev::SubmitEvent, *};
use leptos_router::use_query_map;

#[component]
pub fn LoginPanel() -> impl IntoView {
    let query = use_query_map();
    let redirect = query.with_untracked(|params| params.get("redirect").cloned());
    let vm = use_login_view_model(redirect);
    let (auth, _) = use_auth();

    create_effect(move |_| {
        let attempted = vm.login_attempted();
        if let Some(target) = auth.with(|state| signed_in_visitor_redirect(state, attempted)) {
            navigation::redirect_to(target);
        }
    });

    let on_submit = Callback::new(move |ev: SubmitEvent| {
        ev.prevent_default();
        vm.submit();
    });

    view! {
        <LoginForm
            username=vm.form.username
            password=vm.form.password
            error=vm.error.into()
            pending=vm.pending()
            can_submit=vm.can_submit()
            on_submit=on_submit
        />
    }
}

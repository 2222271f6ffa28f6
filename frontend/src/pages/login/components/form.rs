use crate::pages::login::components::messages::LoginErrorMessage;
use leptos::{ev::SubmitEvent, *};

const INPUT_CLASS: &str = "mt-1 block w-full rounded-md border border-border bg-surface-elevated px-3 py-2 text-sm text-fg placeholder-fg-muted focus:outline-none focus:ring-2 focus:ring-action-primary-focus";

#[component]
pub fn LoginForm(
    username: RwSignal<String>,
    password: RwSignal<String>,
    error: Signal<Option<String>>,
    pending: Signal<bool>,
    can_submit: Signal<bool>,
    on_submit: Callback<SubmitEvent>,
) -> impl IntoView {
    view! {
        <div class="min-h-screen flex items-center justify-center bg-surface py-12 px-4 sm:px-6 lg:px-8">
            <div class="max-w-md w-full space-y-8 bg-surface-elevated shadow rounded-lg p-8">
                <div class="text-center">
                    <div class="text-3xl font-bold text-action-primary-bg">"TMS"</div>
                    <h2 class="mt-4 text-2xl font-extrabold text-fg">"Welcome Back"</h2>
                    <p class="mt-2 text-sm text-fg-muted">"Please sign in to your account"</p>
                </div>
                <form class="space-y-6" on:submit=move |ev| on_submit.call(ev)>
                    <div>
                        <label for="username" class="block text-sm font-medium text-fg">"Username"</label>
                        <input
                            id="username"
                            name="username"
                            type="text"
                            autocomplete="username"
                            class=INPUT_CLASS
                            placeholder="Enter your username"
                            prop:value=move || username.get()
                            on:input=move |ev| username.set(event_target_value(&ev))
                        />
                    </div>
                    <div>
                        <label for="password" class="block text-sm font-medium text-fg">"Password"</label>
                        <input
                            id="password"
                            name="password"
                            type="password"
                            autocomplete="current-password"
                            class=INPUT_CLASS
                            placeholder="Enter your password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </div>

                    <LoginErrorMessage error=error />

                    <button
                        type="submit"
                        disabled=move || !can_submit.get()
                        class="w-full flex justify-center py-2 px-4 rounded-md text-sm font-medium bg-action-primary-bg text-action-primary-text hover:bg-action-primary-bg-hover disabled:opacity-50"
                    >
                        {move || if pending.get() { "Signing in..." } else { "Sign In" }}
                    </button>
                    <p class="text-center text-xs text-fg-muted">"Need help? Contact your administrator"</p>
                </form>
            </div>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    fn render(pending: bool, error: Option<&'static str>) -> String {
        render_to_string(move || {
            view! {
                <LoginForm
                    username=create_rw_signal(String::new())
                    password=create_rw_signal(String::new())
                    error=Signal::derive(move || error.map(str::to_string))
                    pending=Signal::derive(move || pending)
                    can_submit=Signal::derive(|| false)
                    on_submit=Callback::new(|_| {})
                />
            }
        })
    }

    #[test]
    fn login_form_renders_copy() {
        let html = render(false, None);
        assert!(html.contains("Welcome Back"));
        assert!(html.contains("Please sign in to your account"));
        assert!(html.contains("Sign In"));
        assert!(html.contains("Need help? Contact your administrator"));
    }

    #[test]
    fn login_form_shows_pending_and_error() {
        let html = render(true, Some("Invalid username or password."));
        assert!(html.contains("Signing in..."));
        assert!(html.contains("Invalid username or password."));
    }
}

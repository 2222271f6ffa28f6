use leptos::*;

pub const SEARCH_PLACEHOLDER: &str = "Search by Type, Reason, Approver...";

#[component]
pub fn SearchBar(value: Signal<String>, on_input: Callback<String>) -> impl IntoView {
    view! {
        <div class="relative w-full md:w-80">
            <input
                type="search"
                class="w-full rounded-md border border-border bg-surface-elevated px-3 py-2 text-sm text-fg placeholder-fg-muted focus:outline-none focus:ring-2 focus:ring-action-primary-focus"
                placeholder=SEARCH_PLACEHOLDER
                aria-label="Search leave requests"
                prop:value=move || value.get()
                on:input=move |ev| on_input.call(event_target_value(&ev))
            />
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn search_bar_renders_placeholder() {
        let html = render_to_string(move || {
            let value = create_rw_signal("annual".to_string());
            view! { <SearchBar value=value.into() on_input=Callback::new(|_| {}) /> }
        });
        assert!(html.contains(SEARCH_PLACEHOLDER));
        assert!(html.contains("type=\"search\""));
    }
}

use leptos::*;

#[component]
pub fn Pagination(
    page: Signal<usize>,
    total_pages: Signal<usize>,
    on_prev: Callback<()>,
    on_next: Callback<()>,
) -> impl IntoView {
    let button_class = "inline-flex items-center rounded-md border border-border px-3 py-1.5 text-sm font-medium text-fg hover:bg-action-ghost-bg-hover disabled:opacity-50 disabled:cursor-not-allowed";
    view! {
        <nav class="flex items-center justify-end gap-3 px-6 py-3 border-t border-border" aria-label="Pagination">
            <button
                type="button"
                class=button_class
                disabled=move || page.get() <= 1
                on:click=move |_| on_prev.call(())
            >
                "Prev"
            </button>
            <span class="text-sm text-fg-muted">
                {move || format!("Page {} / {}", page.get(), total_pages.get())}
            </span>
            <button
                type="button"
                class=button_class
                disabled=move || page.get() >= total_pages.get()
                on:click=move |_| on_next.call(())
            >
                "Next"
            </button>
        </nav>
    }
}

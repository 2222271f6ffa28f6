use crate::{
    components::{
        confirm_dialog::ConfirmDialog,
        error::InlineErrorMessage,
        layout::{ErrorMessage, Layout, LoadingSpinner, SuccessMessage},
    },
    pages::leave_requests::{
        components::{pagination::Pagination, search_bar::SearchBar, table::LeaveRequestsTable},
        types::ListScope,
        view_model::use_leave_requests_view_model,
    },
};
use leptos::*;

#[component]
pub fn LeaveRequestsPanel(scope: ListScope) -> impl IntoView {
    let vm = use_leave_requests_view_model(scope);

    let search = Signal::derive(move || vm.query.get().search);
    let page = Signal::derive(move || vm.current_page.get());
    let page_number = Signal::derive(move || vm.current_page.with(|p| p.page));
    let total_pages = Signal::derive(move || vm.current_page.with(|p| p.total_pages));
    let shows_controls = move || vm.current_page.with(|p| p.shows_controls());
    let busy = Signal::derive(move || {
        vm.cancel_action.pending().get() || vm.decision_action.pending().get()
    });
    let load_error = vm.load_error();
    let is_loading = vm.is_loading();
    let success = move || vm.message.get().success;
    let error = move || vm.message.get().error;

    let on_search = Callback::new(move |term: String| vm.set_search(term));
    let on_prev = Callback::new(move |_| vm.prev_page());
    let on_next = Callback::new(move |_| vm.next_page());
    let on_cancel = Callback::new(move |request| vm.request_cancel(request));
    let on_decide = Callback::new(move |(id, decision)| vm.decide(id, decision));

    let cancel_open = Signal::derive(move || vm.pending_cancel.with(|p| p.is_some()));
    let cancel_message = Signal::derive(move || {
        vm.pending_cancel
            .get()
            .map(|request| {
                format!(
                    "Cancel the leave request from {} to {}?",
                    request.start_date, request.end_date
                )
            })
            .unwrap_or_default()
    });

    view! {
        <Layout>
            <div class="space-y-4">
                <div class="flex flex-col gap-3 md:flex-row md:items-end md:justify-between">
                    <div>
                        <h1 class="text-2xl font-bold text-fg">{scope.title()}</h1>
                        <p class="text-sm text-fg-muted">{scope.subtitle()}</p>
                    </div>
                    <SearchBar value=search on_input=on_search />
                </div>

                {move || success().map(|msg| view! { <SuccessMessage message=msg /> })}
                {move || error().map(|msg| view! { <ErrorMessage message=msg /> })}
                <InlineErrorMessage error=load_error />

                <div class="bg-surface-elevated shadow rounded-lg overflow-hidden">
                    <Show
                        when=move || !is_loading.get()
                        fallback=|| view! { <LoadingSpinner /> }
                    >
                        <LeaveRequestsTable
                            scope=scope
                            page=page
                            busy=busy
                            on_cancel=on_cancel
                            on_decide=on_decide
                        />
                        <Show when=shows_controls>
                            <Pagination
                                page=page_number
                                total_pages=total_pages
                                on_prev=on_prev
                                on_next=on_next
                            />
                        </Show>
                    </Show>
                </div>
            </div>
            <ConfirmDialog
                is_open=cancel_open
                title="Cancel leave request"
                message=cancel_message
                on_confirm=Callback::new(move |_| vm.confirm_cancel())
                on_cancel=Callback::new(move |_| vm.dismiss_cancel())
                confirm_label="Yes, cancel it"
                cancel_label="Keep it"
                destructive=true
            />
        </Layout>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::ApiClient;
    use crate::test_support::helpers::{employee, provide_auth};
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn panel_renders_title_and_search() {
        let html = render_to_string(move || {
            provide_context(ApiClient::new_with_base_url("http://localhost:1/api"));
            provide_auth(Some(employee()));
            view! { <LeaveRequestsPanel scope=ListScope::Received /> }
        });
        assert!(html.contains("Received Leave Requests"));
        assert!(html.contains("Search by Type, Reason, Approver..."));
        assert!(html.contains("My Request"));
    }
}

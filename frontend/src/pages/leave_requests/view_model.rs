use crate::api::{ApiClient, ApiError, LeaveRequestResponse};
use crate::config;
use crate::pages::leave_requests::{
    repository::LeaveRequestsRepository,
    types::{Decision, DecisionInput, ListScope},
    utils::{filter_requests, paginate, ListQuery, MessageState, PageSlice},
};
use leptos::*;

#[derive(Clone, Copy)]
pub struct LeaveRequestsViewModel {
    pub scope: ListScope,
    pub page_size: usize,
    pub query: RwSignal<ListQuery>,
    pub message: RwSignal<MessageState>,
    pub reload: RwSignal<u32>,
    pub pending_cancel: RwSignal<Option<LeaveRequestResponse>>,
    pub requests_resource: Resource<u32, Result<Vec<LeaveRequestResponse>, ApiError>>,
    pub filtered: Memo<Vec<LeaveRequestResponse>>,
    pub current_page: Memo<PageSlice<LeaveRequestResponse>>,
    pub cancel_action: Action<String, Result<(), ApiError>>,
    pub decision_action: Action<DecisionInput, Result<Decision, ApiError>>,
}

fn bump(reload: RwSignal<u32>) {
    reload.update(|value| *value = value.wrapping_add(1));
}

fn apply_optional_cancel_action_result(
    result: Option<Result<(), ApiError>>,
    message: RwSignal<MessageState>,
    reload: RwSignal<u32>,
) {
    if let Some(result) = result {
        match result {
            Ok(_) => {
                message.update(|msg| msg.set_success("Leave request cancelled."));
                bump(reload);
            }
            Err(err) => message.update(|msg| msg.set_error(err)),
        }
    }
}

fn apply_optional_decision_result(
    result: Option<Result<Decision, ApiError>>,
    message: RwSignal<MessageState>,
    reload: RwSignal<u32>,
) {
    if let Some(result) = result {
        match result {
            Ok(decision) => {
                message.update(|msg| msg.set_success(decision.success_message()));
                bump(reload);
            }
            Err(err) => message.update(|msg| msg.set_error(err)),
        }
    }
}

impl LeaveRequestsViewModel {
    pub fn new(scope: ListScope) -> Self {
        let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
        let repository = LeaveRequestsRepository::new(api);
        let page_size = config::page_size();

        let query = create_rw_signal(ListQuery::default());
        let message = create_rw_signal(MessageState::default());
        let reload = create_rw_signal(0u32);
        let pending_cancel = create_rw_signal(None::<LeaveRequestResponse>);

        let list_repo = repository.clone();
        let requests_resource = create_resource(
            move || reload.get(),
            move |_| {
                let repo = list_repo.clone();
                async move { repo.list(scope).await }
            },
        );

        let filtered = create_memo(move |_| {
            let items = match requests_resource.get() {
                Some(Ok(items)) => items,
                _ => Vec::new(),
            };
            query.with(|q| filter_requests(&items, &q.search))
        });
        // A reload keeps the page; `paginate` clamps it if the list shrank.
        let current_page =
            create_memo(move |_| filtered.with(|items| paginate(items, query.get().page, page_size)));

        let cancel_repo = repository.clone();
        let cancel_action = create_action(move |id: &String| {
            let repo = cancel_repo.clone();
            let id = id.clone();
            async move { repo.cancel(&id).await }
        });

        let decision_repo = repository;
        let decision_action = create_action(move |input: &DecisionInput| {
            let repo = decision_repo.clone();
            let input = input.clone();
            async move { repo.decide(input).await }
        });

        create_effect(move |_| {
            apply_optional_cancel_action_result(cancel_action.value().get(), message, reload);
        });
        create_effect(move |_| {
            apply_optional_decision_result(decision_action.value().get(), message, reload);
        });

        Self {
            scope,
            page_size,
            query,
            message,
            reload,
            pending_cancel,
            requests_resource,
            filtered,
            current_page,
            cancel_action,
            decision_action,
        }
    }

    pub fn load_error(&self) -> Signal<Option<ApiError>> {
        let resource = self.requests_resource;
        Signal::derive(move || match resource.get() {
            Some(Err(err)) => Some(err),
            _ => None,
        })
    }

    pub fn is_loading(&self) -> Signal<bool> {
        self.requests_resource.loading().into()
    }

    pub fn set_search(&self, term: String) {
        self.query.update(|q| q.set_search(term));
    }

    pub fn next_page(&self) {
        let total = self.current_page.with_untracked(|page| page.total_pages);
        self.query.update(|q| q.next_page(total));
    }

    pub fn prev_page(&self) {
        let total = self.current_page.with_untracked(|page| page.total_pages);
        self.query.update(|q| q.prev_page(total));
    }

    pub fn request_cancel(&self, request: LeaveRequestResponse) {
        self.message.update(|msg| msg.clear());
        self.pending_cancel.set(Some(request));
    }

    pub fn confirm_cancel(&self) {
        if let Some(request) = self.pending_cancel.get_untracked() {
            self.pending_cancel.set(None);
            self.cancel_action.dispatch(request.id);
        }
    }

    pub fn dismiss_cancel(&self) {
        self.pending_cancel.set(None);
    }

    pub fn decide(&self, id: String, decision: Decision) {
        self.message.update(|msg| msg.clear());
        self.decision_action.dispatch(DecisionInput {
            id,
            decision,
            comment: None,
        });
    }
}

pub fn use_leave_requests_view_model(scope: ListScope) -> LeaveRequestsViewModel {
    match use_context::<LeaveRequestsViewModel>() {
        Some(vm) if vm.scope == scope => vm,
        _ => {
            let vm = LeaveRequestsViewModel::new(scope);
            provide_context(vm);
            vm
        }
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::leave_request;
    use crate::test_support::ssr::{with_local_runtime_async, with_runtime};
    use httpmock::prelude::*;

    fn sample(count: usize) -> Vec<LeaveRequestResponse> {
        (0..count)
            .map(|idx| {
                let (kind, approver) = if idx % 2 == 0 {
                    ("ANNUAL", "Binh Tran")
                } else {
                    ("SICK", "Chi Le")
                };
                leave_request(&format!("lr-{}", idx), kind, "VACATION", approver)
            })
            .collect()
    }

    async fn wait_until(mut condition: impl FnMut() -> bool) -> bool {
        for _ in 0..100 {
            if condition() {
                return true;
            }
            tokio::time::sleep(std::time::Duration::from_millis(10)).await;
        }
        false
    }

    #[test]
    fn view_model_filters_and_paginates_loaded_requests() {
        with_runtime(|| {
            provide_context(ApiClient::new_with_base_url("http://localhost:1/api"));
            leptos_reactive::suppress_resource_load(true);
            let vm = LeaveRequestsViewModel::new(ListScope::Mine);
            vm.requests_resource.set(Ok(sample(12)));

            let page = vm.current_page.get();
            assert_eq!(vm.page_size, 5);
            assert_eq!(page.total_pages, 3);
            assert_eq!(page.items.len(), 5);

            vm.next_page();
            vm.next_page();
            assert_eq!(vm.current_page.get().page, 3);
            assert_eq!(vm.current_page.get().items.len(), 2);

            vm.set_search("chi".into());
            assert_eq!(vm.query.get().page, 1);
            assert_eq!(vm.filtered.get().len(), 6);
            assert_eq!(vm.current_page.get().total_pages, 2);

            vm.prev_page();
            assert_eq!(vm.query.get().page, 1);
            leptos_reactive::suppress_resource_load(false);
        });
    }

    #[test]
    fn load_error_is_exposed() {
        with_runtime(|| {
            provide_context(ApiClient::new_with_base_url("http://localhost:1/api"));
            leptos_reactive::suppress_resource_load(true);
            let vm = LeaveRequestsViewModel::new(ListScope::Received);
            vm.requests_resource
                .set(Err(ApiError::request_failed("offline")));
            assert_eq!(vm.load_error().get().map(|e| e.code), Some("REQUEST_FAILED".into()));
            assert!(vm.filtered.get().is_empty());
            leptos_reactive::suppress_resource_load(false);
        });
    }

    #[test]
    fn cancel_selection_is_cleared_on_dismiss() {
        with_runtime(|| {
            leptos_reactive::suppress_resource_load(true);
            let vm = LeaveRequestsViewModel::new(ListScope::Mine);
            vm.request_cancel(leave_request("lr-1", "ANNUAL", "VACATION", "Binh Tran"));
            assert_eq!(vm.pending_cancel.get().map(|r| r.id), Some("lr-1".into()));
            vm.dismiss_cancel();
            assert!(vm.pending_cancel.get().is_none());
            leptos_reactive::suppress_resource_load(false);
        });
    }

    #[test]
    fn action_results_update_message_and_reload() {
        with_runtime(|| {
            let message = create_rw_signal(MessageState::default());
            let reload = create_rw_signal(0u32);

            apply_optional_cancel_action_result(None, message, reload);
            assert_eq!(reload.get(), 0);

            apply_optional_cancel_action_result(Some(Ok(())), message, reload);
            assert_eq!(message.get().success.as_deref(), Some("Leave request cancelled."));
            assert_eq!(reload.get(), 1);

            apply_optional_decision_result(Some(Ok(Decision::Approve)), message, reload);
            assert_eq!(message.get().success.as_deref(), Some("Leave request approved."));
            assert_eq!(reload.get(), 2);

            apply_optional_decision_result(
                Some(Err(ApiError::unknown("Already decided"))),
                message,
                reload,
            );
            assert_eq!(message.get().error.as_deref(), Some("Already decided"));
            assert!(message.get().success.is_none());
            assert_eq!(reload.get(), 2);
        });
    }

    #[test]
    fn view_model_actions_reach_the_api() {
        with_local_runtime_async(|| async {
            let runtime = leptos::create_runtime();
            crate::api::session::clear_session();
            let server = MockServer::start_async().await;
            server
                .mock_async(|when, then| {
                    when.method(GET).path("/api/leave-requests/received");
                    then.status(200).json_body(serde_json::json!([]));
                })
                .await;
            server
                .mock_async(|when, then| {
                    when.method(PUT).path("/api/leave-requests/lr-1/approve");
                    then.status(200).json_body(serde_json::json!({}));
                })
                .await;
            server
                .mock_async(|when, then| {
                    when.method(DELETE).path("/api/leave-requests/lr-2");
                    then.status(204);
                })
                .await;
            provide_context(ApiClient::new_with_base_url(&server.url("/api")));
            let vm = LeaveRequestsViewModel::new(ListScope::Received);

            vm.decide("lr-1".into(), Decision::Approve);
            assert!(
                wait_until(|| vm.decision_action.value().get().is_some()).await,
                "decision action should complete"
            );
            assert!(matches!(
                vm.decision_action.value().get(),
                Some(Ok(Decision::Approve))
            ));

            vm.request_cancel(leave_request("lr-2", "ANNUAL", "VACATION", "Binh Tran"));
            vm.confirm_cancel();
            assert!(vm.pending_cancel.get().is_none());
            assert!(
                wait_until(|| vm.cancel_action.value().get().is_some()).await,
                "cancel action should complete"
            );
            assert!(matches!(vm.cancel_action.value().get(), Some(Ok(()))));
            runtime.dispose();
        });
    }
}

use crate::api::LeaveRequestResponse;
use crate::options::{is_pending, leave_type_label, reason_label, status_badge_class, status_label};
use crate::pages::leave_requests::{
    types::{Decision, ListScope},
    utils::{format_duration, PageSlice},
};
use crate::utils::time::format_date_range;
use leptos::*;

pub const EMPTY_TEXT: &str = "No leave requests found";

const TH_CLASS: &str =
    "px-6 py-3 text-left text-xs font-medium text-fg-muted uppercase tracking-wider";
const TD_CLASS: &str = "px-6 py-4 whitespace-nowrap text-sm text-fg";

#[component]
pub fn LeaveRequestsTable(
    scope: ListScope,
    page: Signal<PageSlice<LeaveRequestResponse>>,
    busy: Signal<bool>,
    on_cancel: Callback<LeaveRequestResponse>,
    on_decide: Callback<(String, Decision)>,
) -> impl IntoView {
    let show_requester = scope == ListScope::Received;
    let column_count = if show_requester { 10 } else { 9 };

    let rows = move || {
        let slice = page.get();
        if slice.items.is_empty() {
            return view! {
                <tr>
                    <td class="px-6 py-8 text-center text-sm text-fg-muted" colspan=column_count>
                        {EMPTY_TEXT}
                    </td>
                </tr>
            }
            .into_view();
        }
        slice
            .items
            .iter()
            .enumerate()
            .map(|(offset, request)| {
                let number = slice.row_number(offset);
                let request = request.clone();
                let pending = is_pending(&request.status);
                let requester_cell = show_requester.then(|| {
                    let requester = request.requester.clone().unwrap_or_else(|| "-".into());
                    view! { <td class=TD_CLASS>{requester}</td> }
                });
                let actions = row_actions(scope, pending, request.clone(), busy, on_cancel, on_decide);
                view! {
                    <tr class="hover:bg-action-ghost-bg-hover">
                        <td class=TD_CLASS>{number}</td>
                        {requester_cell}
                        <td class=TD_CLASS>{leave_type_label(&request.request_type)}</td>
                        <td class=TD_CLASS>{format_date_range(request.start_date, request.end_date)}</td>
                        <td class=TD_CLASS>{format_duration(request.total_days)}</td>
                        <td class="px-6 py-4 text-sm text-fg">{reason_label(&request.reason)}</td>
                        <td class=TD_CLASS>{non_empty(&request.approver)}</td>
                        <td class=TD_CLASS>
                            <span class=format!(
                                "inline-flex items-center px-2.5 py-0.5 rounded-full text-xs font-medium {}",
                                status_badge_class(&request.status)
                            )>
                                {status_label(&request.status)}
                            </span>
                        </td>
                        <td class=TD_CLASS>{actions}</td>
                    </tr>
                }
            })
            .collect_view()
    };

    view! {
        <div class="overflow-x-auto">
            <table class="min-w-full divide-y divide-border">
                <thead class="bg-surface-muted">
                    <tr>
                        <th class=TH_CLASS>"No"</th>
                        {show_requester.then(|| view! { <th class=TH_CLASS>"Requester"</th> })}
                        <th class=TH_CLASS>"Request Type"</th>
                        <th class=TH_CLASS>"Time Request"</th>
                        <th class=TH_CLASS>"Duration"</th>
                        <th class=TH_CLASS>"Reason"</th>
                        <th class=TH_CLASS>"Approver"</th>
                        <th class=TH_CLASS>"Status"</th>
                        <th class=TH_CLASS>"Actions"</th>
                    </tr>
                </thead>
                <tbody class="bg-surface-elevated divide-y divide-border">{rows}</tbody>
            </table>
        </div>
    }
}

fn non_empty(value: &str) -> String {
    if value.trim().is_empty() {
        "-".to_string()
    } else {
        value.to_string()
    }
}

fn row_actions(
    scope: ListScope,
    pending: bool,
    request: LeaveRequestResponse,
    busy: Signal<bool>,
    on_cancel: Callback<LeaveRequestResponse>,
    on_decide: Callback<(String, Decision)>,
) -> View {
    if !pending {
        return view! { <span class="text-fg-muted">"-"</span> }.into_view();
    }
    let id = request.id.clone();
    match scope {
        ListScope::Mine => {
            let edit_href = format!("/leave-requests/{}/edit", id);
            let request = store_value(request);
            view! {
                <div class="flex gap-3">
                    <a href=edit_href class="text-action-primary-bg hover:underline">"Edit"</a>
                    <button
                        type="button"
                        class="text-action-danger-bg hover:underline disabled:opacity-50"
                        disabled=move || busy.get()
                        on:click=move |_| on_cancel.call(request.get_value())
                    >
                        "Cancel"
                    </button>
                </div>
            }
            .into_view()
        }
        ListScope::Received => {
            let approve_id = id.clone();
            let reject_id = id;
            view! {
                <div class="flex gap-3">
                    <button
                        type="button"
                        class="text-status-success-text hover:underline disabled:opacity-50"
                        disabled=move || busy.get()
                        on:click=move |_| on_decide.call((approve_id.clone(), Decision::Approve))
                    >
                        "Approve"
                    </button>
                    <button
                        type="button"
                        class="text-action-danger-bg hover:underline disabled:opacity-50"
                        disabled=move || busy.get()
                        on:click=move |_| on_decide.call((reject_id.clone(), Decision::Reject))
                    >
                        "Reject"
                    </button>
                </div>
            }
            .into_view()
        }
    }
}

use crate::api::LeaveBalanceResponse;
use leptos::*;

pub const BALANCE_COLUMNS: &[&str] = &[
    "Request Name",
    "Unit",
    "Maximum Allowed",
    "Approved Quotas",
    "Remaining Quotas",
    "Pending Quotas",
];

/// Whole numbers without a fraction, everything else with one decimal.
pub fn format_quota(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        format!("{:.1}", value)
    }
}

#[component]
pub fn RemainingLeave(
    balance: Signal<Option<LeaveBalanceResponse>>,
    on_details: Callback<()>,
) -> impl IntoView {
    let remaining = move || {
        balance
            .get()
            .map(|b| format_quota(b.remaining_days))
            .unwrap_or_else(|| "-".into())
    };
    view! {
        <div class="flex items-center justify-between rounded-md bg-surface-muted px-4 py-3">
            <div class="text-sm text-fg">
                "Remaining leave days: "
                <span class="font-semibold">{remaining}</span>
            </div>
            <button
                type="button"
                class="text-sm text-action-primary-bg hover:underline"
                on:click=move |_| on_details.call(())
            >
                "View details"
            </button>
        </div>
    }
}

#[component]
pub fn LeaveBalanceModal(
    open: Signal<bool>,
    balance: Signal<Option<LeaveBalanceResponse>>,
    on_close: Callback<()>,
) -> impl IntoView {
    let rows = move || {
        let entitlements = balance.get().map(|b| b.entitlements).unwrap_or_default();
        if entitlements.is_empty() {
            return view! {
                <tr>
                    <td class="px-4 py-6 text-center text-sm text-fg-muted" colspan=BALANCE_COLUMNS.len()>
                        "No leave balance available"
                    </td>
                </tr>
            }
            .into_view();
        }
        entitlements
            .into_iter()
            .map(|item| {
                view! {
                    <tr>
                        <td class="px-4 py-2 text-sm text-fg">{item.name}</td>
                        <td class="px-4 py-2 text-sm text-fg">{item.unit}</td>
                        <td class="px-4 py-2 text-sm text-fg">{format_quota(item.max_allowed)}</td>
                        <td class="px-4 py-2 text-sm text-fg">{format_quota(item.approved)}</td>
                        <td class="px-4 py-2 text-sm text-fg">{format_quota(item.remaining)}</td>
                        <td class="px-4 py-2 text-sm text-fg">{format_quota(item.pending)}</td>
                    </tr>
                }
            })
            .collect_view()
    };

    view! {
        <Show when=move || open.get()>
            <div class="fixed inset-0 z-[70] flex items-center justify-center p-4">
                <button
                    type="button"
                    aria-label="Close"
                    class="absolute inset-0 bg-overlay-backdrop"
                    on:click=move |_| on_close.call(())
                ></button>
                <div
                    class="relative z-[71] w-full max-w-3xl rounded-lg bg-surface-elevated shadow-xl border border-border p-6 space-y-4"
                    role="dialog"
                    aria-modal="true"
                >
                    <div class="flex items-start justify-between">
                        <h2 class="text-lg font-semibold text-fg">"Leave Balance"</h2>
                        <button
                            type="button"
                            aria-label="Close"
                            class="text-fg-muted hover:text-fg"
                            on:click=move |_| on_close.call(())
                        >
                            {"✕"}
                        </button>
                    </div>
                    <div class="overflow-x-auto">
                        <table class="min-w-full divide-y divide-border">
                            <thead class="bg-surface-muted">
                                <tr>
                                    {BALANCE_COLUMNS
                                        .iter()
                                        .map(|title| view! {
                                            <th class="px-4 py-2 text-left text-xs font-medium text-fg-muted uppercase">{*title}</th>
                                        })
                                        .collect_view()}
                                </tr>
                            </thead>
                            <tbody class="divide-y divide-border">{rows}</tbody>
                        </table>
                    </div>
                </div>
            </div>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quotas_drop_trailing_zero() {
        assert_eq!(format_quota(12.0), "12");
        assert_eq!(format_quota(2.5), "2.5");
        assert_eq!(format_quota(0.0), "0");
    }
}

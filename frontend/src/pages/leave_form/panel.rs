use crate::{
    components::{
        common::{Button, ButtonVariant},
        error::InlineErrorMessage,
        layout::{ErrorMessage, Layout, SuccessMessage},
    },
    options::{LEAVE_REASONS, LEAVE_TYPES, PARTIAL_DAY_OPTIONS},
    pages::leave_form::{
        components::{
            balance_modal::{LeaveBalanceModal, RemainingLeave},
            fields::{static_options, DateField, SelectField, TextField},
        },
        utils::FormField,
        view_model::{use_leave_form_view_model, FormMode},
    },
    pages::leave_requests::utils::format_duration,
    utils::navigation::HOME_PATH,
};
use leptos::{ev::SubmitEvent, *};

#[component]
pub fn LeaveFormPanel(mode: FormMode) -> impl IntoView {
    let title = mode.title();
    let submit_label = mode.submit_label();
    let vm = use_leave_form_view_model(mode);
    let form = vm.form;

    let setter = move |field: FormField| Callback::new(move |value: String| form.set_field(field, value));
    let user_options = vm.user_options();
    let balance = vm.balance();
    let saving = vm.is_saving();
    let lookup_error = vm.lookup_error();
    let total_days = form.total_days();
    let success = move || vm.message.get().success;
    let error = move || vm.message.get().error;

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        vm.submit();
    };

    view! {
        <Layout>
            <div class="max-w-3xl space-y-4">
                <div>
                    <h1 class="text-2xl font-bold text-fg">{title}</h1>
                    <p class="text-sm text-fg-muted">"Fields marked with * are required."</p>
                </div>

                {move || success().map(|msg| view! { <SuccessMessage message=msg /> })}
                {move || error().map(|msg| view! { <ErrorMessage message=msg /> })}
                <InlineErrorMessage error=lookup_error />

                <RemainingLeave balance=balance on_details=Callback::new(move |_| vm.open_balance()) />

                <form class="bg-surface-elevated shadow rounded-lg p-6 space-y-4" on:submit=on_submit novalidate=true>
                    <div class="grid grid-cols-1 gap-4 md:grid-cols-2">
                        <SelectField
                            id="request_type"
                            label="Request Type"
                            required=true
                            options=Signal::derive(|| static_options(LEAVE_TYPES))
                            placeholder="Select request type"
                            value=form.value(FormField::RequestType)
                            error=form.error(FormField::RequestType)
                            on_change=setter(FormField::RequestType)
                        />
                        <SelectField
                            id="reason"
                            label="Reason"
                            required=true
                            options=Signal::derive(|| static_options(LEAVE_REASONS))
                            placeholder="Select reason"
                            value=form.value(FormField::Reason)
                            error=form.error(FormField::Reason)
                            on_change=setter(FormField::Reason)
                        />
                    </div>
                    <TextField
                        id="detail_reason"
                        label="Detail Reason"
                        multiline=true
                        placeholder="Describe your leave"
                        value=form.value(FormField::DetailReason)
                        on_input=setter(FormField::DetailReason)
                    />
                    <div class="grid grid-cols-1 gap-4 md:grid-cols-3">
                        <DateField
                            id="start_date"
                            label="Start Date"
                            required=true
                            value=form.value(FormField::StartDate)
                            error=form.error(FormField::StartDate)
                            on_input=setter(FormField::StartDate)
                        />
                        <DateField
                            id="end_date"
                            label="End Date"
                            required=true
                            value=form.value(FormField::EndDate)
                            error=form.error(FormField::EndDate)
                            on_input=setter(FormField::EndDate)
                        />
                        <SelectField
                            id="partial_day"
                            label="Partial Day"
                            options=Signal::derive(|| static_options(PARTIAL_DAY_OPTIONS))
                            value=form.value(FormField::PartialDay)
                            on_change=setter(FormField::PartialDay)
                        />
                    </div>
                    <p class="text-sm text-fg">
                        "Total: "
                        <span class="font-semibold">{move || format_duration(total_days.get())}</span>
                    </p>
                    <div class="grid grid-cols-1 gap-4 md:grid-cols-2">
                        <SelectField
                            id="approver"
                            label="Approver"
                            required=true
                            options=user_options
                            placeholder="Select approver"
                            value=form.value(FormField::Approver)
                            error=form.error(FormField::Approver)
                            on_change=setter(FormField::Approver)
                        />
                        <SelectField
                            id="supervisor"
                            label="Supervisor"
                            options=user_options
                            placeholder="Select supervisor"
                            value=form.value(FormField::Supervisor)
                            on_change=setter(FormField::Supervisor)
                        />
                    </div>
                    <div class="grid grid-cols-1 gap-4 md:grid-cols-2">
                        <TextField
                            id="inform_to"
                            label="Inform To"
                            placeholder="Email or name"
                            value=form.value(FormField::InformTo)
                            on_input=setter(FormField::InformTo)
                        />
                        <DateField
                            id="expected_approve"
                            label="Expected Approval Date"
                            value=form.value(FormField::ExpectedApprove)
                            error=form.error(FormField::ExpectedApprove)
                            on_input=setter(FormField::ExpectedApprove)
                        />
                    </div>
                    <div class="flex justify-end gap-3">
                        <a
                            href=HOME_PATH
                            class="inline-flex items-center justify-center rounded-md px-4 py-2 text-sm font-semibold bg-surface-muted text-fg border border-border"
                        >
                            "Back"
                        </a>
                        <Button variant=ButtonVariant::Primary loading=saving>
                            {move || if saving.get() { "Saving..." } else { submit_label }}
                        </Button>
                    </div>
                </form>
            </div>
            <LeaveBalanceModal
                open=vm.show_balance.into()
                balance=balance
                on_close=Callback::new(move |_| vm.close_balance())
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
    fn create_form_renders_required_fields() {
        let html = render_to_string(move || {
            provide_context(ApiClient::new_with_base_url("http://localhost:1/api"));
            provide_auth(Some(employee()));
            view! { <LeaveFormPanel mode=FormMode::Create /> }
        });
        assert!(html.contains("Create Leave Request"));
        for label in ["Request Type", "Reason", "Start Date", "End Date", "Approver"] {
            assert!(html.contains(label), "missing {}", label);
        }
        assert!(html.contains("Annual Leave"));
        assert!(html.contains("Full Day"));
        assert!(html.contains("Submit Request"));
        assert!(html.contains("0 days"));
    }

    #[test]
    fn edit_form_uses_save_label() {
        let html = render_to_string(move || {
            provide_context(ApiClient::new_with_base_url("http://localhost:1/api"));
            provide_auth(Some(employee()));
            view! { <LeaveFormPanel mode=FormMode::Edit("lr-1".into()) /> }
        });
        assert!(html.contains("Edit Leave Request"));
        assert!(html.contains("Save Changes"));
    }
}

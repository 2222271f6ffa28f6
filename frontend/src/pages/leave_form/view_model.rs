use crate::api::{
    ApiClient, ApiError, LeaveBalanceResponse, LeaveRequestPayload, LeaveRequestResponse,
    UserResponse,
};
use crate::pages::leave_form::{repository::LeaveFormRepository, utils::LeaveFormState};
use crate::pages::leave_requests::utils::MessageState;
use crate::state::auth::use_auth;
use crate::utils::{navigation, time::today_in_app_tz};
use leptos::*;

pub const CREATED_MESSAGE: &str = "Leave request submitted successfully.";
pub const UPDATED_MESSAGE: &str = "Leave request updated successfully.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(String),
}

impl FormMode {
    pub fn edit_id(&self) -> Option<&str> {
        match self {
            FormMode::Create => None,
            FormMode::Edit(id) => Some(id),
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            FormMode::Create => "Create Leave Request",
            FormMode::Edit(_) => "Edit Leave Request",
        }
    }

    pub fn submit_label(&self) -> &'static str {
        match self {
            FormMode::Create => "Submit Request",
            FormMode::Edit(_) => "Save Changes",
        }
    }
}

#[derive(Clone, Copy)]
pub struct LeaveFormViewModel {
    pub mode: StoredValue<FormMode>,
    pub form: LeaveFormState,
    pub message: RwSignal<MessageState>,
    pub show_balance: RwSignal<bool>,
    pub users_resource: Resource<(), Result<Vec<UserResponse>, ApiError>>,
    pub balance_resource: Resource<Option<String>, Result<Option<LeaveBalanceResponse>, ApiError>>,
    pub existing_resource: Resource<Option<String>, Result<Option<LeaveRequestResponse>, ApiError>>,
    pub save_action: Action<LeaveRequestPayload, Result<LeaveRequestResponse, ApiError>>,
}

fn apply_optional_save_result(
    result: Option<Result<LeaveRequestResponse, ApiError>>,
    mode: &FormMode,
    form: LeaveFormState,
    message: RwSignal<MessageState>,
) {
    match result {
        Some(Ok(saved)) => match mode {
            FormMode::Create => {
                log::info!("Created leave request {}", saved.id);
                form.reset();
                message.update(|msg| msg.set_success(CREATED_MESSAGE));
            }
            FormMode::Edit(_) => {
                message.update(|msg| msg.set_success(UPDATED_MESSAGE));
                navigation::redirect_to(navigation::HOME_PATH);
            }
        },
        Some(Err(err)) => {
            log::warn!("Saving leave request failed: {}", err);
            message.update(|msg| msg.set_error(err));
        }
        None => {}
    }
}

fn apply_loaded_request(
    result: Option<Result<Option<LeaveRequestResponse>, ApiError>>,
    form: LeaveFormState,
    message: RwSignal<MessageState>,
) {
    match result {
        Some(Ok(Some(request))) => form.load_from_response(&request),
        Some(Err(err)) => message.update(|msg| msg.set_error(err)),
        _ => {}
    }
}

/// Approver and supervisor choices as `(id, "Full Name - Role")`.
pub fn user_options(users: &[UserResponse]) -> Vec<(String, String)> {
    users
        .iter()
        .map(|user| (user.id.clone(), user.display_label()))
        .collect()
}

impl LeaveFormViewModel {
    pub fn new(mode: FormMode) -> Self {
        let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
        let repository = LeaveFormRepository::new(api);
        let (auth, _) = use_auth();

        let form = LeaveFormState::default();
        let message = create_rw_signal(MessageState::default());
        let show_balance = create_rw_signal(false);
        let edit_id = mode.edit_id().map(str::to_string);
        let mode = store_value(mode);

        let users_repo = repository.clone();
        let users_resource = create_resource(
            || (),
            move |_| {
                let repo = users_repo.clone();
                async move { repo.users().await }
            },
        );

        let balance_repo = repository.clone();
        let balance_resource = create_resource(
            move || auth.with(|state| state.user.as_ref().map(|user| user.id.clone())),
            move |user_id: Option<String>| {
                let repo = balance_repo.clone();
                async move {
                    match user_id {
                        Some(id) => repo.balance(&id).await.map(Some),
                        None => Ok(None),
                    }
                }
            },
        );

        let load_repo = repository.clone();
        let existing_resource = create_resource(
            move || edit_id.clone(),
            move |id: Option<String>| {
                let repo = load_repo.clone();
                async move {
                    match id {
                        Some(id) => repo.load(&id).await.map(Some),
                        None => Ok(None),
                    }
                }
            },
        );

        let save_repo = repository;
        let save_action = create_action(move |payload: &LeaveRequestPayload| {
            let repo = save_repo.clone();
            let payload = payload.clone();
            let id = mode.with_value(|m| m.edit_id().map(str::to_string));
            async move { repo.save(id.as_deref(), &payload).await }
        });

        create_effect(move |_| {
            apply_loaded_request(existing_resource.get(), form, message);
        });
        create_effect(move |_| {
            let result = save_action.value().get();
            mode.with_value(|m| apply_optional_save_result(result, m, form, message));
        });

        Self {
            mode,
            form,
            message,
            show_balance,
            users_resource,
            balance_resource,
            existing_resource,
            save_action,
        }
    }

    pub fn user_options(&self) -> Signal<Vec<(String, String)>> {
        let resource = self.users_resource;
        Signal::derive(move || match resource.get() {
            Some(Ok(users)) => user_options(&users),
            _ => Vec::new(),
        })
    }

    pub fn balance(&self) -> Signal<Option<LeaveBalanceResponse>> {
        let resource = self.balance_resource;
        Signal::derive(move || match resource.get() {
            Some(Ok(balance)) => balance,
            _ => None,
        })
    }

    /// First failure among the supporting lookups. The form stays usable either way.
    pub fn lookup_error(&self) -> Signal<Option<ApiError>> {
        let users = self.users_resource;
        let balance = self.balance_resource;
        Signal::derive(move || {
            let users_err = match users.get() {
                Some(Err(err)) => Some(err),
                _ => None,
            };
            users_err.or_else(|| match balance.get() {
                Some(Err(err)) => Some(err),
                _ => None,
            })
        })
    }

    pub fn is_saving(&self) -> Signal<bool> {
        self.save_action.pending().into()
    }

    pub fn submit(&self) -> bool {
        if self.save_action.pending().get_untracked() {
            return false;
        }
        self.message.update(|msg| msg.clear());
        let action = self.save_action;
        self.form
            .submit_with(today_in_app_tz(), move |payload| action.dispatch(payload))
    }

    pub fn open_balance(&self) {
        self.show_balance.set(true);
    }

    pub fn close_balance(&self) {
        self.show_balance.set(false);
    }
}

pub fn use_leave_form_view_model(mode: FormMode) -> LeaveFormViewModel {
    LeaveFormViewModel::new(mode)
}

#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub mod helpers {
    use crate::api::{LeaveRequestResponse, UserResponse};
    use crate::state::auth::AuthState;
    use chrono::NaiveDate;
    use leptos::*;

    pub fn employee() -> UserResponse {
        UserResponse {
            id: "u-employee".into(),
            username: "an.nguyen".into(),
            full_name: "An Nguyen".into(),
            role: "Developer".into(),
            email: Some("an@example.com".into()),
        }
    }

    pub fn approver() -> UserResponse {
        UserResponse {
            id: "u-approver".into(),
            username: "binh.tran".into(),
            full_name: "Binh Tran".into(),
            role: "Manager".into(),
            email: None,
        }
    }

    pub fn provide_auth(
        user: Option<UserResponse>,
    ) -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
        let (auth, set_auth) = create_signal(AuthState {
            is_authenticated: user.is_some(),
            user,
            loading: false,
        });
        provide_context((auth, set_auth));
        (auth, set_auth)
    }

    pub fn leave_request(
        id: &str,
        request_type: &str,
        reason: &str,
        approver: &str,
    ) -> LeaveRequestResponse {
        LeaveRequestResponse {
            id: id.into(),
            request_type: request_type.into(),
            reason: reason.into(),
            detail_reason: None,
            start_date: NaiveDate::from_ymd_opt(2025, 1, 10).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2025, 1, 12).unwrap(),
            partial_day: "FULL_DAY".into(),
            total_days: 3,
            approver_id: Some("u-approver".into()),
            approver: approver.into(),
            supervisor_id: None,
            inform_to: None,
            expected_approve: None,
            status: "PENDING".into(),
            request_date: NaiveDate::from_ymd_opt(2025, 1, 2),
            requester: Some("An Nguyen".into()),
        }
    }
}

use crate::api::{
    ApiClient, ApiError, LeaveBalanceResponse, LeaveRequestPayload, LeaveRequestResponse,
    UserResponse,
};
use std::rc::Rc;

#[derive(Clone)]
pub struct LeaveFormRepository {
    client: Rc<ApiClient>,
}

impl LeaveFormRepository {
    pub fn new(api: ApiClient) -> Self {
        Self {
            client: Rc::new(api),
        }
    }

    pub async fn users(&self) -> Result<Vec<UserResponse>, ApiError> {
        self.client.list_users().await
    }

    pub async fn balance(&self, user_id: &str) -> Result<LeaveBalanceResponse, ApiError> {
        self.client.get_leave_balance(user_id).await
    }

    pub async fn load(&self, id: &str) -> Result<LeaveRequestResponse, ApiError> {
        self.client.get_leave_request(id).await
    }

    /// Creates when `id` is `None`, updates otherwise.
    pub async fn save(
        &self,
        id: Option<&str>,
        payload: &LeaveRequestPayload,
    ) -> Result<LeaveRequestResponse, ApiError> {
        match id {
            Some(id) => self.client.update_leave_request(id, payload).await,
            None => self.client.create_leave_request(payload).await,
        }
    }
}

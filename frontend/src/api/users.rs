use super::{
    client::ApiClient,
    types::{ApiError, LeaveBalanceResponse, UserResponse},
};

impl ApiClient {
    pub async fn list_users(&self) -> Result<Vec<UserResponse>, ApiError> {
        let url = self.url("/users").await;
        let response = self.send_authorized(self.http_client().get(url)).await?;
        self.map_json_response(response).await
    }

    pub async fn get_leave_balance(&self, user_id: &str) -> Result<LeaveBalanceResponse, ApiError> {
        let url = self.url(&format!("/users/{}/leave-balance", user_id)).await;
        let response = self.send_authorized(self.http_client().get(url)).await?;
        self.map_json_response(response).await
    }
}

use super::{
    client::ApiClient,
    types::{ApiError, DecisionRequest, LeaveRequestPayload, LeaveRequestResponse},
};

impl ApiClient {
    pub async fn list_my_leave_requests(&self) -> Result<Vec<LeaveRequestResponse>, ApiError> {
        self.list_leave_requests("/leave-requests").await
    }

    pub async fn list_received_leave_requests(
        &self,
    ) -> Result<Vec<LeaveRequestResponse>, ApiError> {
        self.list_leave_requests("/leave-requests/received").await
    }

    async fn list_leave_requests(
        &self,
        path: &str,
    ) -> Result<Vec<LeaveRequestResponse>, ApiError> {
        let url = self.url(path).await;
        let response = self.send_authorized(self.http_client().get(url)).await?;
        self.map_json_response(response).await
    }

    pub async fn get_leave_request(&self, id: &str) -> Result<LeaveRequestResponse, ApiError> {
        let url = self.url(&format!("/leave-requests/{}", id)).await;
        let response = self.send_authorized(self.http_client().get(url)).await?;
        self.map_json_response(response).await
    }

    pub async fn create_leave_request(
        &self,
        payload: &LeaveRequestPayload,
    ) -> Result<LeaveRequestResponse, ApiError> {
        let url = self.url("/leave-requests").await;
        let response = self
            .send_authorized(self.http_client().post(url).json(payload))
            .await?;
        self.map_json_response(response).await
    }

    pub async fn update_leave_request(
        &self,
        id: &str,
        payload: &LeaveRequestPayload,
    ) -> Result<LeaveRequestResponse, ApiError> {
        let url = self.url(&format!("/leave-requests/{}", id)).await;
        let response = self
            .send_authorized(self.http_client().put(url).json(payload))
            .await?;
        self.map_json_response(response).await
    }

    pub async fn cancel_leave_request(&self, id: &str) -> Result<(), ApiError> {
        let url = self.url(&format!("/leave-requests/{}", id)).await;
        let response = self.send_authorized(self.http_client().delete(url)).await?;
        self.map_empty_response(response).await
    }

    pub async fn approve_leave_request(
        &self,
        id: &str,
        comment: Option<String>,
    ) -> Result<(), ApiError> {
        self.decide_leave_request(id, "approve", comment).await
    }

    pub async fn reject_leave_request(
        &self,
        id: &str,
        comment: Option<String>,
    ) -> Result<(), ApiError> {
        self.decide_leave_request(id, "reject", comment).await
    }

    async fn decide_leave_request(
        &self,
        id: &str,
        decision: &str,
        comment: Option<String>,
    ) -> Result<(), ApiError> {
        let url = self
            .url(&format!("/leave-requests/{}/{}", id, decision))
            .await;
        let body = DecisionRequest { comment };
        let response = self
            .send_authorized(self.http_client().put(url).json(&body))
            .await?;
        self.map_empty_response(response).await
    }
}

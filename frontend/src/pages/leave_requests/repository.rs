use crate::api::{ApiClient, ApiError, LeaveRequestResponse};
use std::rc::Rc;

use super::types::{Decision, DecisionInput, ListScope};

#[derive(Clone)]
pub struct LeaveRequestsRepository {
    client: Rc<ApiClient>,
}

impl LeaveRequestsRepository {
    pub fn new(api: ApiClient) -> Self {
        Self {
            client: Rc::new(api),
        }
    }

    pub async fn list(&self, scope: ListScope) -> Result<Vec<LeaveRequestResponse>, ApiError> {
        match scope {
            ListScope::Mine => self.client.list_my_leave_requests().await,
            ListScope::Received => self.client.list_received_leave_requests().await,
        }
    }

    pub async fn cancel(&self, id: &str) -> Result<(), ApiError> {
        self.client.cancel_leave_request(id).await
    }

    pub async fn decide(&self, input: DecisionInput) -> Result<Decision, ApiError> {
        match input.decision {
            Decision::Approve => {
                self.client
                    .approve_leave_request(&input.id, input.comment)
                    .await?
            }
            Decision::Reject => {
                self.client
                    .reject_leave_request(&input.id, input.comment)
                    .await?
            }
        }
        Ok(input.decision)
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    fn repo(server: &MockServer) -> LeaveRequestsRepository {
        LeaveRequestsRepository::new(ApiClient::new_with_base_url(&server.url("/api")))
    }

    #[tokio::test]
    async fn leave_requests_repository_calls_api() {
        crate::api::session::clear_session();
        let server = MockServer::start_async().await;
        let mine = server
            .mock_async(|when, then| {
                when.method(GET).path("/api/leave-requests");
                then.status(200).json_body(json!([]));
            })
            .await;
        let received = server
            .mock_async(|when, then| {
                when.method(GET).path("/api/leave-requests/received");
                then.status(200).json_body(json!([]));
            })
            .await;
        server
            .mock_async(|when, then| {
                when.method(DELETE).path("/api/leave-requests/lr-1");
                then.status(204);
            })
            .await;
        let reject = server
            .mock_async(|when, then| {
                when.method(PUT).path("/api/leave-requests/lr-2/reject");
                then.status(200).json_body(json!({}));
            })
            .await;

        let repo = repo(&server);
        assert!(repo.list(ListScope::Mine).await.unwrap().is_empty());
        assert!(repo.list(ListScope::Received).await.unwrap().is_empty());
        repo.cancel("lr-1").await.unwrap();
        let decision = repo
            .decide(DecisionInput {
                id: "lr-2".into(),
                decision: Decision::Reject,
                comment: None,
            })
            .await
            .unwrap();

        assert_eq!(decision, Decision::Reject);
        mine.assert_async().await;
        received.assert_async().await;
        reject.assert_async().await;
    }
}

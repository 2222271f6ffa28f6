use super::{
    client::ApiClient,
    session,
    types::{ApiError, LoginRequest, LoginResponse, UserResponse},
};

impl ApiClient {
    pub async fn login(&self, request: LoginRequest) -> Result<LoginResponse, ApiError> {
        let url = self.url("/auth/login").await;
        let response = self
            .send_public(self.http_client().post(url).json(&request))
            .await?;
        let login: LoginResponse = self.map_json_response(response).await?;
        if let Err(err) = session::persist_session(&login) {
            log::error!("Failed to persist session: {}", err);
            return Err(ApiError::unknown(format!("Failed to store session: {}", err)));
        }
        Ok(login)
    }

    /// Ends the server session when possible; the local session is always cleared.
    pub async fn logout(&self) -> Result<(), ApiError> {
        let url = self.url("/auth/logout").await;
        let result = match self.send_authorized(self.http_client().post(url)).await {
            Ok(response) => self.map_empty_response(response).await,
            Err(err) => Err(err),
        };
        session::clear_session();
        if let Err(err) = &result {
            log::warn!("Logout request failed: {}", err);
        }
        result
    }

    pub async fn get_me(&self) -> Result<UserResponse, ApiError> {
        let url = self.url("/auth/me").await;
        let response = self.send_authorized(self.http_client().get(url)).await?;
        let user: UserResponse = self.map_json_response(response).await?;
        if let Err(err) = session::cache_user(&user) {
            log::warn!("Failed to cache current user: {}", err);
        }
        Ok(user)
    }
}

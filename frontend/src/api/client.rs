use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::{de::DeserializeOwned, Deserialize};
use serde_json::Value;

use super::{session, types::ApiError};
use crate::{config, utils::navigation};

#[derive(Clone, Default)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    details: Option<Value>,
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: None,
        }
    }

    pub fn new_with_base_url(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: Some(base_url.trim_end_matches('/').to_string()),
        }
    }

    pub(crate) fn http_client(&self) -> &Client {
        &self.client
    }

    pub(crate) async fn resolved_base_url(&self) -> String {
        match &self.base_url {
            Some(base) => base.clone(),
            None => config::await_api_base_url().await,
        }
    }

    pub(crate) async fn url(&self, path: &str) -> String {
        format!("{}{}", self.resolved_base_url().await, path)
    }

    /// Sends with the stored bearer token. A 401 ends the session.
    pub(crate) async fn send_authorized(
        &self,
        request: RequestBuilder,
    ) -> Result<Response, ApiError> {
        let request = match session::stored_token() {
            Some(token) => request.bearer_auth(token),
            None => request,
        };
        let response = send(request).await?;
        handle_unauthorized_status(response.status());
        Ok(response)
    }

    pub(crate) async fn send_public(&self, request: RequestBuilder) -> Result<Response, ApiError> {
        send(request).await
    }

    pub(crate) async fn map_json_response<T: DeserializeOwned>(
        &self,
        response: Response,
    ) -> Result<T, ApiError> {
        if response.status().is_success() {
            response
                .json::<T>()
                .await
                .map_err(|err| ApiError::unknown(format!("Failed to parse response: {}", err)))
        } else {
            Err(error_from_response(response).await)
        }
    }

    pub(crate) async fn map_empty_response(&self, response: Response) -> Result<(), ApiError> {
        if response.status().is_success() {
            Ok(())
        } else {
            Err(error_from_response(response).await)
        }
    }
}

async fn send(request: RequestBuilder) -> Result<Response, ApiError> {
    request.send().await.map_err(|err| {
        log::error!("Request failed: {}", err);
        ApiError::request_failed(format!("Request failed: {}", err))
    })
}

fn default_code(status: StatusCode) -> &'static str {
    match status {
        StatusCode::UNAUTHORIZED => "UNAUTHORIZED",
        StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => "VALIDATION_ERROR",
        StatusCode::NOT_FOUND => "NOT_FOUND",
        _ => "UNKNOWN",
    }
}

pub(crate) async fn error_from_response(response: Response) -> ApiError {
    let status = response.status();
    let body = response.json::<ErrorBody>().await.ok();
    let (message, code, details) = match body {
        Some(body) => (body.error.or(body.message), body.code, body.details),
        None => (None, None, None),
    };
    let error = ApiError {
        error: message
            .filter(|msg| !msg.trim().is_empty())
            .unwrap_or_else(|| format!("Request failed with status {}", status.as_u16())),
        code: if status == StatusCode::UNAUTHORIZED {
            default_code(status).to_string()
        } else {
            code.unwrap_or_else(|| default_code(status).to_string())
        },
        details,
    };
    log::warn!("API error {}: {} ({})", status.as_u16(), error.error, error.code);
    error
}

pub(crate) fn handle_unauthorized_status(status: StatusCode) {
    if status == StatusCode::UNAUTHORIZED {
        log::warn!("Session rejected by the API, returning to login");
        session::clear_session();
        navigation::redirect_to_login_if_needed();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_codes_follow_status() {
        assert_eq!(default_code(StatusCode::UNAUTHORIZED), "UNAUTHORIZED");
        assert_eq!(default_code(StatusCode::BAD_REQUEST), "VALIDATION_ERROR");
        assert_eq!(default_code(StatusCode::UNPROCESSABLE_ENTITY), "VALIDATION_ERROR");
        assert_eq!(default_code(StatusCode::NOT_FOUND), "NOT_FOUND");
        assert_eq!(default_code(StatusCode::INTERNAL_SERVER_ERROR), "UNKNOWN");
    }

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let client = ApiClient::new_with_base_url("http://localhost:9000/api/");
        assert_eq!(client.base_url.as_deref(), Some("http://localhost:9000/api"));
    }
}

use chrono::NaiveDate;
use leptos::*;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::options::DEFAULT_PARTIAL_DAY;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: UserResponse,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: String,
    pub username: String,
    pub full_name: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub email: Option<String>,
}

impl UserResponse {
    /// `Full Name - Role`, used by the approver and supervisor pickers.
    pub fn display_label(&self) -> String {
        if self.role.trim().is_empty() {
            self.full_name.clone()
        } else {
            format!("{} - {}", self.full_name, self.role)
        }
    }
}

fn default_partial_day() -> String {
    DEFAULT_PARTIAL_DAY.to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaveRequestResponse {
    pub id: String,
    pub request_type: String,
    pub reason: String,
    #[serde(default)]
    pub detail_reason: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(default = "default_partial_day")]
    pub partial_day: String,
    #[serde(default)]
    pub total_days: u32,
    #[serde(default)]
    pub approver_id: Option<String>,
    #[serde(default)]
    pub approver: String,
    #[serde(default)]
    pub supervisor_id: Option<String>,
    #[serde(default)]
    pub inform_to: Option<String>,
    #[serde(default)]
    pub expected_approve: Option<NaiveDate>,
    pub status: String,
    #[serde(default)]
    pub request_date: Option<NaiveDate>,
    #[serde(default)]
    pub requester: Option<String>,
}

/// Body for creating and updating a leave request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaveRequestPayload {
    pub request_type: String,
    pub reason: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail_reason: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub partial_day: String,
    pub approver_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supervisor_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inform_to: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected_approve: Option<NaiveDate>,
    pub total_days: u32,
    pub status: String,
    pub request_date: NaiveDate,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DecisionRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaveEntitlement {
    pub name: String,
    pub unit: String,
    pub max_allowed: f64,
    pub approved: f64,
    pub remaining: f64,
    pub pending: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaveBalanceResponse {
    pub remaining_days: f64,
    #[serde(default)]
    pub entitlements: Vec<LeaveEntitlement>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Error)]
#[error("{error}")]
pub struct ApiError {
    pub error: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl From<ApiError> for String {
    fn from(error: ApiError) -> Self {
        error.error
    }
}

impl IntoView for ApiError {
    fn into_view(self) -> View {
        self.error.into_view()
    }
}

impl ApiError {
    fn with_code(msg: impl Into<String>, code: &str) -> Self {
        Self {
            error: msg.into(),
            code: code.to_string(),
            details: None,
        }
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::with_code(msg, "VALIDATION_ERROR")
    }

    pub fn unknown(msg: impl Into<String>) -> Self {
        Self::with_code(msg, "UNKNOWN")
    }

    pub fn request_failed(msg: impl Into<String>) -> Self {
        Self::with_code(msg, "REQUEST_FAILED")
    }

    pub fn unauthorized(msg: impl Into<String>) -> Self {
        Self::with_code(msg, "UNAUTHORIZED")
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self.code.as_str(), "UNAUTHORIZED" | "INVALID_CREDENTIALS")
    }
}

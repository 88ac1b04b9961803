use chrono::{SecondsFormat, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use thiserror::Error;

use crate::models::{CurrentSpending, Period, SpendingLimit};

const GENERIC_CREATE_ERROR: &str = "Failed to set spending limit";

/// HTTP client for the spending-limit service and the transaction
/// aggregation service, which share a base URL.
#[derive(Debug, Clone)]
pub(crate) struct ApiClient {
    base_url: String,
    client: reqwest::Client,
}

/// Failure of a single API call.
#[derive(Debug, Error)]
pub(crate) enum ApiError {
    /// The server answered with a non-success status. The message comes from
    /// the response body's `error` field when present.
    #[error("{message}")]
    Request {
        status: reqwest::StatusCode,
        message: String,
    },
    /// The call never produced a usable HTTP response.
    #[error("network error: {0}")]
    Transport(#[from] reqwest::Error),
}

impl ApiError {
    /// True when the server did answer, just not with a 2xx.
    pub(crate) fn is_status(&self) -> bool {
        matches!(self, Self::Request { .. })
    }

    pub(crate) fn status(&self) -> Option<reqwest::StatusCode> {
        match self {
            Self::Request { status, .. } => Some(*status),
            Self::Transport(_) => None,
        }
    }
}

/// Body of the limit-creation call.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CreateLimitRequest {
    pub(crate) amount: Decimal,
    pub(crate) period: Period,
    pub(crate) start_date: String,
}

impl CreateLimitRequest {
    /// The accounting window starts now; the timestamp is UTC ISO-8601 with
    /// millisecond precision, matching what the service stores.
    pub(crate) fn new(amount: Decimal, period: Period) -> Self {
        Self {
            amount,
            period,
            start_date: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}

impl ApiClient {
    pub(crate) fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    /// POST `/spending-limits/{userId}`. The success body is ignored beyond
    /// the status.
    pub(crate) async fn create_limit(
        &self,
        user_id: &str,
        request: &CreateLimitRequest,
    ) -> Result<(), ApiError> {
        let resp = self
            .client
            .post(format!("{}/spending-limits/{user_id}", self.base_url))
            .json(request)
            .send()
            .await?;

        if !resp.status().is_success() {
            return Err(error_from_response(resp, GENERIC_CREATE_ERROR).await);
        }
        Ok(())
    }

    /// GET `/spending-limits/active/{userId}`. A non-2xx answer (typically
    /// 404) means there is no active limit.
    pub(crate) async fn fetch_active_limit(
        &self,
        user_id: &str,
    ) -> Result<SpendingLimit, ApiError> {
        let resp = self
            .client
            .get(format!("{}/spending-limits/active/{user_id}", self.base_url))
            .send()
            .await?;

        if !resp.status().is_success() {
            return Err(error_from_response(resp, "No active spending limit").await);
        }
        Ok(resp.json().await?)
    }

    /// GET `/transactions/current-period/{userId}`.
    pub(crate) async fn fetch_current_spending(
        &self,
        user_id: &str,
    ) -> Result<CurrentSpending, ApiError> {
        let resp = self
            .client
            .get(format!(
                "{}/transactions/current-period/{user_id}",
                self.base_url
            ))
            .send()
            .await?;

        if !resp.status().is_success() {
            return Err(error_from_response(resp, "Current-period spending unavailable").await);
        }
        Ok(resp.json().await?)
    }
}

async fn error_from_response(resp: reqwest::Response, fallback: &str) -> ApiError {
    let status = resp.status();
    let body: serde_json::Value = resp.json().await.unwrap_or_default();
    ApiError::Request {
        status,
        message: error_message(&body, fallback),
    }
}

/// Extract the human-readable message from an error body, falling back when
/// the `error` field is missing or not a string.
fn error_message(body: &serde_json::Value, fallback: &str) -> String {
    body.get("error")
        .and_then(|m| m.as_str())
        .unwrap_or(fallback)
        .to_string()
}

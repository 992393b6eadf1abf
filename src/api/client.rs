//! HTTP API Client
//!
//! Functions for communicating with the step-counter REST API.

use gloo_net::http::Request;

use crate::state::store::{Stats, StepRecord};

/// Default API base URL
pub const DEFAULT_API_BASE: &str = "http://localhost:5000/api";

/// Default device identifier
pub const DEFAULT_DEVICE_ID: &str = "android_device_001";

/// API failure taxonomy. Every fetch in a refresh cycle fails with one of
/// these; the cycle boundary decides what the user sees.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("request failed with status {0}")]
    Status(u16),
    #[error("invalid response: {0}")]
    Parse(String),
}

fn storage_item(key: &str) -> Option<String> {
    let window = web_sys::window()?;
    let storage = window.local_storage().ok()??;
    storage.get_item(key).ok()?
}

/// Get the API base URL, with a local-storage override for development.
pub fn get_api_base() -> String {
    let url = storage_item("stepdash_api_url").unwrap_or_else(|| DEFAULT_API_BASE.to_string());
    // Normalize: remove trailing slash
    url.trim_end_matches('/').to_string()
}

/// Get the device identifier, with a local-storage override.
pub fn get_device_id() -> String {
    storage_item("stepdash_device_id").unwrap_or_else(|| DEFAULT_DEVICE_ID.to_string())
}

// ============ Response Types ============

#[derive(Debug, serde::Deserialize)]
struct StepsResponse {
    /// Absent or null when the device has no records yet
    #[serde(default)]
    data: Option<Vec<StepRecord>>,
}

// ============ API Functions ============

/// Fetch the summary statistics for a device
pub async fn fetch_stats(device_id: &str) -> Result<Stats, ApiError> {
    let api_base = get_api_base();

    let response = Request::get(&format!("{}/stats", api_base))
        .query([("device_id", device_id)])
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(ApiError::Status(response.status()));
    }

    response
        .json()
        .await
        .map_err(|e| ApiError::Parse(e.to_string()))
}

/// Fetch all step records for a device
pub async fn fetch_step_data(device_id: &str) -> Result<Vec<StepRecord>, ApiError> {
    let api_base = get_api_base();

    let response = Request::get(&format!("{}/steps", api_base))
        .query([("device_id", device_id)])
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(ApiError::Status(response.status()));
    }

    let result: StepsResponse = response
        .json()
        .await
        .map_err(|e| ApiError::Parse(e.to_string()))?;

    Ok(result.data.unwrap_or_default())
}

/// Check API health. Never errors; unreachable means unhealthy.
pub async fn check_health() -> bool {
    let api_base = get_api_base();

    match Request::get(&format!("{}/health", api_base)).send().await {
        Ok(response) => response.ok(),
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_steps_payload_with_records() {
        let payload = r#"{"data": [
            {"step_count": 120, "client_timestamp": "2025-08-20T09:30:00",
             "server_timestamp": "2025-08-20T09:30:02"}
        ]}"#;

        let parsed: StepsResponse = serde_json::from_str(payload).unwrap();
        let records = parsed.data.unwrap_or_default();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].step_count, 120);
    }

    #[test]
    fn test_steps_payload_null_data_is_empty() {
        let parsed: StepsResponse = serde_json::from_str(r#"{"data": null}"#).unwrap();
        assert!(parsed.data.unwrap_or_default().is_empty());
    }

    #[test]
    fn test_steps_payload_missing_data_is_empty() {
        let parsed: StepsResponse = serde_json::from_str("{}").unwrap();
        assert!(parsed.data.unwrap_or_default().is_empty());
    }

    #[test]
    fn test_stats_payload() {
        let payload = r#"{"total_steps": 12345, "records_count": 10,
                          "device_id": "android_device_001"}"#;
        let stats: Stats = serde_json::from_str(payload).unwrap();
        assert_eq!(stats.total_steps, 12345);
        assert_eq!(stats.records_count, 10);
        assert_eq!(stats.device_id, "android_device_001");
    }
}

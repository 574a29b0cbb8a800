//! App list tool implementation

use super::{ToolResult, failure_response, not_connected_error, success_response};
use crate::adb_client::{DeviceSession, current_device};
use serde::Serialize;

#[derive(Debug, Serialize)]
struct AppsPayload {
    apps: Vec<String>,
}

/// List installed packages, optionally narrowed by a substring
pub async fn app_list(session: &DeviceSession, filter: Option<&str>) -> ToolResult {
    let Some(device) = current_device(session) else {
        return not_connected_error(AppsPayload { apps: Vec::new() });
    };

    match device.app_list(filter).await {
        Ok(apps) => {
            tracing::debug!(count = apps.len(), "Listed packages");
            success_response(AppsPayload { apps })
        }
        Err(e) => failure_response(e, AppsPayload { apps: Vec::new() }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[tokio::test]
    async fn test_app_list_without_device() {
        let session = DeviceSession::default();
        let json: Value = serde_json::from_str(&app_list(&session, Some("google")).await).unwrap();
        assert_eq!(json["status"], false);
        assert_eq!(json["apps"], serde_json::json!([]));
    }
}

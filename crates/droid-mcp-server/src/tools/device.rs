//! Device tool implementations (connect, open_notifications, open_quick_settings)

use super::{ToolResult, failure_response, not_connected_error, success_response};
use crate::adb_client::{AdbDevice, DeviceInfo, DeviceSession, current_device, store_device};
use serde::Serialize;
use std::path::Path;

#[derive(Debug, Serialize)]
struct ConnectPayload {
    info: Option<DeviceInfo>,
}

/// Connect to a device and make it the current one for later tools
pub async fn connect(adb: &Path, session: &DeviceSession, serial: &str) -> ToolResult {
    let device = match AdbDevice::connect(adb, serial).await {
        Ok(d) => d,
        Err(e) => {
            tracing::warn!("connect failed: {}", e);
            return failure_response(e, ConnectPayload { info: None });
        }
    };

    let info = match device.device_info().await {
        Ok(info) => info,
        Err(e) => {
            tracing::warn!("Reading device info failed: {}", e);
            return failure_response(e, ConnectPayload { info: None });
        }
    };

    if !store_device(session, device) {
        return failure_response(
            "Failed to acquire device session lock",
            ConnectPayload { info: None },
        );
    }

    tracing::info!(serial = %info.serial, model = %info.model, "Connected to device");
    success_response(ConnectPayload { info: Some(info) })
}

/// Open the notification shade
pub async fn open_notifications(session: &DeviceSession) -> ToolResult {
    let Some(device) = current_device(session) else {
        return not_connected_error(());
    };

    match device.open_notification().await {
        Ok(()) => success_response(()),
        Err(e) => failure_response(e, ()),
    }
}

/// Open the quick settings panel
pub async fn open_quick_settings(session: &DeviceSession) -> ToolResult {
    let Some(device) = current_device(session) else {
        return not_connected_error(());
    };

    match device.open_quick_settings().await {
        Ok(()) => success_response(()),
        Err(e) => failure_response(e, ()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[tokio::test]
    async fn test_open_notifications_without_device() {
        let session = DeviceSession::default();
        let json: Value = serde_json::from_str(&open_notifications(&session).await).unwrap();
        assert_eq!(json["status"], false);
        assert!(json["error"].as_str().unwrap().contains("No Android device connected"));
    }

    #[tokio::test]
    async fn test_open_quick_settings_without_device() {
        let session = DeviceSession::default();
        let json: Value = serde_json::from_str(&open_quick_settings(&session).await).unwrap();
        assert_eq!(json["status"], false);
    }

    #[tokio::test]
    async fn test_connect_with_missing_adb_keeps_session_empty() {
        let session = DeviceSession::default();
        let json: Value = serde_json::from_str(
            &connect(Path::new("/nonexistent/droid-mcp/adb"), &session, "").await,
        )
        .unwrap();

        assert_eq!(json["status"], false);
        assert!(json["info"].is_null());
        assert!(json["error"].as_str().unwrap().contains("Failed to run adb"));
        assert!(current_device(&session).is_none());
    }
}

//! MCP tool implementations
//!
//! This module contains the actual implementation logic for MCP tools.
//! The main.rs file contains thin wrappers that delegate to these implementations.

pub mod apps;
pub mod basic;
pub mod device;
pub mod hierarchy;

use serde::Serialize;

/// Common result type for tool implementations
pub type ToolResult = String;

/// Response envelope shared by every tool: a status flag, an error message
/// (empty on success) and the tool-specific payload fields.
#[derive(Debug, Serialize)]
pub struct ToolResponse<T> {
    pub status: bool,
    pub error: String,
    #[serde(flatten)]
    pub payload: T,
}

fn to_tool_result<T: Serialize>(response: &ToolResponse<T>) -> ToolResult {
    serde_json::to_string_pretty(response).unwrap_or_else(|e| {
        format!(
            r#"{{"status": false, "error": "Failed to serialize response: {}"}}"#,
            e.to_string().replace('"', "'")
        )
    })
}

/// Helper to create a success response
pub fn success_response<T: Serialize>(payload: T) -> ToolResult {
    to_tool_result(&ToolResponse {
        status: true,
        error: String::new(),
        payload,
    })
}

/// Helper to create a failure response carrying an empty payload
pub fn failure_response<T: Serialize>(error: impl std::fmt::Display, payload: T) -> ToolResult {
    to_tool_result(&ToolResponse {
        status: false,
        error: error.to_string(),
        payload,
    })
}

/// Helper to create a "not connected" failure response
pub fn not_connected_error<T: Serialize>(payload: T) -> ToolResult {
    failure_response(
        "No Android device connected. Call 'connect' first.",
        payload,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[derive(Serialize)]
    struct Payload {
        apps: Vec<String>,
    }

    #[test]
    fn test_success_response_flattens_payload() {
        let json: Value = serde_json::from_str(&success_response(Payload {
            apps: vec!["com.example".to_string()],
        }))
        .unwrap();
        assert_eq!(json["status"], true);
        assert_eq!(json["error"], "");
        assert_eq!(json["apps"][0], "com.example");
    }

    #[test]
    fn test_failure_response_with_unit_payload() {
        let json: Value = serde_json::from_str(&failure_response("boom", ())).unwrap();
        assert_eq!(json["status"], false);
        assert_eq!(json["error"], "boom");
        assert_eq!(json.as_object().unwrap().len(), 2);
    }

    #[test]
    fn test_not_connected_error() {
        let json: Value =
            serde_json::from_str(&not_connected_error(Payload { apps: vec![] })).unwrap();
        assert_eq!(json["status"], false);
        assert!(json["error"].as_str().unwrap().contains("connect"));
        assert_eq!(json["apps"], serde_json::json!([]));
    }
}

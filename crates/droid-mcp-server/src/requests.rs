//! MCP tool request types
//!
//! This module contains all request types used by MCP tool handlers.

use droid_mcp_hierarchy::NodesFilter;
use rmcp::schemars;
use serde::Deserialize;

/// Request for connect tool
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ConnectRequest {
    #[schemars(
        description = "Device serial (e.g. 'emulator-5554' or '192.168.1.5:5555'). Empty string connects to the first attached device."
    )]
    #[serde(default)]
    pub serial: String,
}

/// Node filter fields shared by the hierarchy tools
#[derive(Debug, Default, Deserialize, schemars::JsonSchema)]
pub struct NodesFilterParams {
    #[schemars(
        description = "The highest priority filter. If this one is used, the others are not needed. Filter by Android View class name (substring, e.g. 'android.widget.Button' or 'TextView')."
    )]
    pub view_class_name: Option<String>,
    #[schemars(
        description = "Optional, rarely useful. Filter by package name of the app (substring)."
    )]
    pub package_name: Option<String>,
    #[schemars(
        description = "Use only if you are sure the hierarchy has that resource id. Always as secondary filter. Exact full resource ID, e.g. 'com.example:id/login_button'."
    )]
    pub resource_id: Option<String>,
    #[schemars(
        description = "Use only if you are sure the hierarchy has that content description. Always as secondary filter. Substring of the accessibility content description."
    )]
    pub content_description: Option<String>,
    #[schemars(
        description = "Use only if you are sure the hierarchy has that text. Always as secondary filter. Substring of the visible text."
    )]
    pub text: Option<String>,
    #[schemars(
        description = "Use only if you are sure the hierarchy has that hint. Always as secondary filter. Substring of the hint."
    )]
    pub hint: Option<String>,
}

impl From<NodesFilterParams> for NodesFilter {
    fn from(params: NodesFilterParams) -> Self {
        Self {
            view_class_name: params.view_class_name,
            package_name: params.package_name,
            resource_id: params.resource_id,
            content_description: params.content_description,
            text: params.text,
            hint: params.hint,
        }
    }
}

/// Request for get_dump tool
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct GetDumpRequest {
    #[schemars(
        description = "If true, ask uiautomator for a compressed dump without layout-only nodes (default: false)"
    )]
    pub compressed: Option<bool>,
}

/// Request for get_hierarchy tool
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct GetHierarchyRequest {
    #[schemars(
        description = "If true, ask uiautomator for a compressed dump without layout-only nodes (default: false)"
    )]
    pub compressed: Option<bool>,
    #[serde(flatten)]
    pub filter: NodesFilterParams,
}

/// Request for load_hierarchy_file tool
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct LoadHierarchyFileRequest {
    #[schemars(description = "Path to a saved uiautomator hierarchy XML file")]
    pub path: String,
    #[serde(flatten)]
    pub filter: NodesFilterParams,
}

/// Request for app_list tool
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct AppListRequest {
    #[schemars(description = "Substring of package names to keep. If omitted, lists all packages.")]
    pub filter: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_hierarchy_request_flattens_filter() {
        let req: GetHierarchyRequest = serde_json::from_value(json!({
            "compressed": true,
            "view_class_name": "Button",
            "text": "OK"
        }))
        .unwrap();

        assert_eq!(req.compressed, Some(true));
        let filter = NodesFilter::from(req.filter);
        assert_eq!(filter.view_class_name.as_deref(), Some("Button"));
        assert_eq!(filter.text.as_deref(), Some("OK"));
        assert_eq!(filter.hint, None);
        assert_eq!(filter.active_count(), 2);
    }

    #[test]
    fn test_hierarchy_request_without_filter() {
        let req: GetHierarchyRequest = serde_json::from_value(json!({})).unwrap();
        assert!(NodesFilter::from(req.filter).is_empty());
    }

    #[test]
    fn test_connect_request_default_serial() {
        let req: ConnectRequest = serde_json::from_value(json!({})).unwrap();
        assert!(req.serial.is_empty());
    }
}

//! Hierarchy tool implementations (get_dump, get_hierarchy, load_hierarchy_file)

use super::{ToolResult, failure_response, not_connected_error, success_response};
use crate::adb_client::{DeviceSession, current_device};
use droid_mcp_hierarchy::{
    HierarchyError, Node, NodesFilter, filter_nodes_with_fallback, parse_nodes_from_file,
    parse_nodes_from_str,
};
use serde::Serialize;

#[derive(Debug, Serialize)]
struct DumpPayload {
    hierarchy: String,
}

#[derive(Debug, Serialize)]
struct NodesPayload {
    count: usize,
    nodes: Vec<Node>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error_kind: Option<&'static str>,
}

impl NodesPayload {
    fn found(nodes: Vec<Node>) -> Self {
        Self {
            count: nodes.len(),
            nodes,
            error_kind: None,
        }
    }

    fn failed(error_kind: &'static str) -> Self {
        Self {
            count: 0,
            nodes: Vec::new(),
            error_kind: Some(error_kind),
        }
    }
}

/// Parse a dump and apply the filter, broadening it when nothing matches
pub fn nodes_from_dump(xml: &str, filter: &NodesFilter) -> Result<Vec<Node>, HierarchyError> {
    let nodes = parse_nodes_from_str(xml)?;
    Ok(filter_nodes_with_fallback(&nodes, filter))
}

fn nodes_response(result: Result<Vec<Node>, HierarchyError>) -> ToolResult {
    match result {
        Ok(nodes) => success_response(NodesPayload::found(nodes)),
        Err(e) => {
            tracing::warn!("Hierarchy parsing failed: {}", e);
            failure_response(&e, NodesPayload::failed(e.kind()))
        }
    }
}

/// Get the raw hierarchy XML of the current screen
pub async fn get_dump(session: &DeviceSession, compressed: bool) -> ToolResult {
    let Some(device) = current_device(session) else {
        return not_connected_error(DumpPayload {
            hierarchy: String::new(),
        });
    };

    match device.dump_hierarchy(compressed).await {
        Ok(hierarchy) => success_response(DumpPayload { hierarchy }),
        Err(e) => failure_response(
            e,
            DumpPayload {
                hierarchy: String::new(),
            },
        ),
    }
}

/// Get the parsed, filtered node list of the current screen
pub async fn get_hierarchy(
    session: &DeviceSession,
    compressed: bool,
    filter: &NodesFilter,
) -> ToolResult {
    let Some(device) = current_device(session) else {
        return not_connected_error(NodesPayload::failed("not_connected"));
    };

    let xml = match device.dump_hierarchy(compressed).await {
        Ok(xml) => xml,
        Err(e) => return failure_response(e, NodesPayload::failed("device")),
    };

    nodes_response(nodes_from_dump(&xml, filter))
}

/// Get the parsed, filtered node list of a hierarchy saved to a file
pub fn load_hierarchy_file(path: &str, filter: &NodesFilter) -> ToolResult {
    let result = parse_nodes_from_file(path).map(|nodes| filter_nodes_with_fallback(&nodes, filter));
    nodes_response(result)
}

//! Utility functions for the MCP server
//!
//! Parsers for the plain-text output of adb and on-device shell commands.

use crate::constants::{DEVICE_READY_STATE, DUMP_TRAILER};
use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;

static GETPROP_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\[([^\]]+)\]:\s*\[(.*)\]$").expect("getprop pattern is valid"));

/// Serials of ready devices from `adb devices` output
pub fn parse_device_list(output: &str) -> Vec<String> {
    output
        .lines()
        .filter(|line| !line.starts_with("List of devices") && !line.starts_with('*'))
        .filter_map(|line| {
            let mut parts = line.split_whitespace();
            let serial = parts.next()?;
            let state = parts.next()?;
            (state == DEVICE_READY_STATE).then(|| serial.to_string())
        })
        .collect()
}

/// Key/value pairs from `getprop` output (`[key]: [value]` lines)
pub fn parse_getprop(output: &str) -> HashMap<String, String> {
    output
        .lines()
        .filter_map(|line| {
            let caps = GETPROP_LINE.captures(line.trim())?;
            Some((caps[1].to_string(), caps[2].to_string()))
        })
        .collect()
}

/// Package names from `pm list packages` output
pub fn parse_package_list(output: &str) -> Vec<String> {
    output
        .lines()
        .filter_map(|line| line.trim().strip_prefix("package:"))
        .filter(|pkg| !pkg.is_empty())
        .map(str::to_string)
        .collect()
}

/// Cut the hierarchy XML out of `uiautomator dump /dev/tty` output.
///
/// uiautomator prints a status line right after the document; the status
/// line and anything outside the first `<` and the last `>` are dropped.
/// The root may be self-closing when the screen has no nodes.
pub fn extract_hierarchy_xml(output: &str) -> Option<&str> {
    let body = output
        .find(DUMP_TRAILER)
        .map_or(output, |trailer| &output[..trailer]);
    let start = body.find('<')?;
    let end = body.rfind('>')? + 1;
    (start < end).then(|| &body[start..end])
}

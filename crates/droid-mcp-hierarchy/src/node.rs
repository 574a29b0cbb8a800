//! Node model for a single UI element of a uiautomator hierarchy dump
//!
//! Every field of [`Node`] always carries a value: missing or malformed
//! attributes fall back to the defaults documented on each field.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::LazyLock;

/// A screen coordinate `(x, y)`
pub type Point = (i32, i32);

/// Element bounds as `((x1, y1), (x2, y2))`
pub type Bounds = (Point, Point);

static BOUNDS_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\[(\d+),(\d+)\]\[(\d+),(\d+)\]").expect("bounds pattern is valid")
});

/// One UI element from the Android view hierarchy.
///
/// The dump nesting is not kept; nodes are produced in depth-first document
/// order and `index` is the position among siblings in the source tree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    /// Element index within its parent node
    pub index: i32,
    /// Visible text content of the element
    pub text: String,
    /// Full Android resource ID, e.g. `com.android.systemui:id/mobile_signal`
    pub resource_id: String,
    /// Fully qualified Android View class name
    pub view_class_name: String,
    /// Package name of the app that owns this element
    pub package: String,
    /// Accessibility content description
    pub content_desc: String,
    pub checkable: bool,
    pub checked: bool,
    pub clickable: bool,
    pub enabled: bool,
    pub focusable: bool,
    pub focused: bool,
    pub scrollable: bool,
    pub long_clickable: bool,
    pub password: bool,
    pub selected: bool,
    pub visible_to_user: bool,
    /// Bounds in screen coordinates, `((0, 0), (0, 0))` when unknown
    pub bounds: Bounds,
    /// Drawing order of the element among its siblings
    pub drawing_order: i32,
    /// Hint text, usually shown in editable fields
    pub hint: String,
    /// Display ID for multi-display devices
    pub display_id: i32,
}

impl Node {
    /// Build a node from the raw attributes of one `<node>` element.
    ///
    /// Attribute names are the uiautomator wire names (`resource-id`,
    /// `content-desc`, `long-clickable`, ...).
    pub fn from_attributes(attrs: &HashMap<String, String>) -> Self {
        let get = |name: &str| attrs.get(name).map(String::as_str);
        let string = |name: &str| get(name).unwrap_or_default().to_string();

        Self {
            index: parse_int(get("index")),
            text: string("text"),
            resource_id: string("resource-id"),
            view_class_name: string("class"),
            package: string("package"),
            content_desc: string("content-desc"),
            checkable: parse_bool(get("checkable")),
            checked: parse_bool(get("checked")),
            clickable: parse_bool(get("clickable")),
            enabled: parse_bool(get("enabled")),
            focusable: parse_bool(get("focusable")),
            focused: parse_bool(get("focused")),
            scrollable: parse_bool(get("scrollable")),
            long_clickable: parse_bool(get("long-clickable")),
            password: parse_bool(get("password")),
            selected: parse_bool(get("selected")),
            visible_to_user: parse_bool(get("visible-to-user")),
            bounds: parse_bounds(get("bounds")),
            drawing_order: parse_int(get("drawing-order")),
            hint: string("hint"),
            display_id: parse_int(get("display-id")),
        }
    }
}

/// Parse a base-10 integer attribute, `0` when missing or not a number
pub fn parse_int(value: Option<&str>) -> i32 {
    value.and_then(|v| v.trim().parse().ok()).unwrap_or(0)
}

/// Parse a boolean attribute.
///
/// `"true"`, `"1"` and `"yes"` (any case, surrounding whitespace ignored) are
/// true; everything else, including a missing attribute, is false.
pub fn parse_bool(value: Option<&str>) -> bool {
    value.is_some_and(|v| matches!(v.trim().to_lowercase().as_str(), "true" | "1" | "yes"))
}

/// Parse a `[x1,y1][x2,y2]` bounds attribute.
///
/// Anything that does not match the pattern at the start of the trimmed
/// value yields `((0, 0), (0, 0))`; bounds are never partially filled.
pub fn parse_bounds(value: Option<&str>) -> Bounds {
    value
        .and_then(|v| {
            let caps = BOUNDS_PATTERN.captures(v.trim())?;
            let coord = |i: usize| caps[i].parse::<i32>().ok();
            Some(((coord(1)?, coord(2)?), (coord(3)?, coord(4)?)))
        })
        .unwrap_or_default()
}

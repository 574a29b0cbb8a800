//! Android UI hierarchy parsing for droid-mcp
//!
//! This crate turns the XML produced by `uiautomator dump` into a flat list
//! of typed [`Node`]s and narrows that list with a [`NodesFilter`].

mod error;
mod filter;
mod node;
mod parse;

pub use error::HierarchyError;
pub use filter::{NodesFilter, filter_nodes, filter_nodes_with_fallback};
pub use node::{Bounds, Node, Point, parse_bool, parse_bounds, parse_int};
pub use parse::{parse_nodes_from_file, parse_nodes_from_str};

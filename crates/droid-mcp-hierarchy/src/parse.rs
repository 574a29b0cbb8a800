//! Parsing of uiautomator hierarchy dumps into flat node lists

use crate::{HierarchyError, Node};
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use std::collections::HashMap;
use std::path::Path;

/// Element name of a UI element in the dump
const NODE_TAG: &[u8] = b"node";

/// Parse every `<node>` element of a dump, at any depth, in document order.
///
/// The document must be well-formed; there is no partial recovery.
pub fn parse_nodes_from_str(xml: &str) -> Result<Vec<Node>, HierarchyError> {
    let mut reader = Reader::from_str(xml.trim_start_matches('\u{feff}'));
    let mut nodes = Vec::new();
    let mut depth = 0usize;
    let mut seen_root = false;

    loop {
        let event = match reader.read_event() {
            Ok(event) => event,
            Err(e) => {
                return Err(HierarchyError::malformed(format!(
                    "{} at position {}",
                    e,
                    reader.buffer_position()
                )));
            }
        };

        match event {
            Event::Start(e) => {
                enter_element(depth, &mut seen_root)?;
                if let Some(node) = read_element(&e)? {
                    nodes.push(node);
                }
                depth += 1;
            }
            Event::Empty(e) => {
                enter_element(depth, &mut seen_root)?;
                if let Some(node) = read_element(&e)? {
                    nodes.push(node);
                }
            }
            Event::End(_) => {
                depth = depth
                    .checked_sub(1)
                    .ok_or_else(|| HierarchyError::malformed("closing tag without an open element"))?;
            }
            Event::Text(t) => {
                let text = t
                    .unescape()
                    .map_err(|e| HierarchyError::malformed(e.to_string()))?;
                if depth == 0 && !text.trim().is_empty() {
                    return Err(HierarchyError::malformed("text outside of the root element"));
                }
            }
            Event::CData(_) if depth == 0 => {
                return Err(HierarchyError::malformed("CDATA outside of the root element"));
            }
            Event::Eof => {
                if depth != 0 {
                    return Err(HierarchyError::malformed(format!(
                        "unexpected end of document, {} element(s) left open",
                        depth
                    )));
                }
                if !seen_root {
                    return Err(HierarchyError::malformed("no root element"));
                }
                break;
            }
            _ => {}
        }
    }

    tracing::debug!(count = nodes.len(), "Parsed hierarchy dump");
    Ok(nodes)
}

/// Parse a dump stored in a file.
///
/// A missing file is reported as [`HierarchyError::NotFound`] before any
/// read is attempted, so callers can tell it apart from bad content.
pub fn parse_nodes_from_file(path: impl AsRef<Path>) -> Result<Vec<Node>, HierarchyError> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(HierarchyError::not_found(path));
    }

    let bytes = std::fs::read(path)?;
    let xml = String::from_utf8(bytes)
        .map_err(|e| HierarchyError::malformed(format!("invalid UTF-8: {}", e)))?;
    parse_nodes_from_str(&xml)
}

fn enter_element(depth: usize, seen_root: &mut bool) -> Result<(), HierarchyError> {
    if depth == 0 {
        if *seen_root {
            return Err(HierarchyError::malformed("more than one root element"));
        }
        *seen_root = true;
    }
    Ok(())
}

/// Validate the attributes of any element and build a node for `<node>` ones
fn read_element(element: &BytesStart<'_>) -> Result<Option<Node>, HierarchyError> {
    let attrs = element_attributes(element)?;
    Ok((element.name().as_ref() == NODE_TAG).then(|| Node::from_attributes(&attrs)))
}

fn element_attributes(element: &BytesStart<'_>) -> Result<HashMap<String, String>, HierarchyError> {
    let mut attrs = HashMap::new();
    for attr in element.attributes() {
        let attr = attr.map_err(|e| HierarchyError::malformed(e.to_string()))?;
        let key = std::str::from_utf8(attr.key.as_ref())
            .map_err(|e| HierarchyError::malformed(format!("invalid attribute name: {}", e)))?
            .to_string();
        let value = attr
            .unescape_value()
            .map_err(|e| HierarchyError::malformed(e.to_string()))?;
        attrs.insert(key, value.into_owned());
    }
    Ok(attrs)
}

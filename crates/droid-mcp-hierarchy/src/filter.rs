//! Field filters over parsed hierarchy nodes

use crate::Node;

/// Filters applied to nodes of a hierarchy dump.
///
/// A field is active when it is set to a non-empty string. Every field is a
/// substring match except `resource_id`, which must match exactly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NodesFilter {
    /// Substring of the View class name. Takes priority in fallbacks.
    pub view_class_name: Option<String>,
    /// Substring of the owning package name
    pub package_name: Option<String>,
    /// Exact resource ID
    pub resource_id: Option<String>,
    /// Substring of the content description
    pub content_description: Option<String>,
    /// Substring of the visible text
    pub text: Option<String>,
    /// Substring of the hint
    pub hint: Option<String>,
}

type Predicate<'a> = Box<dyn Fn(&Node) -> bool + 'a>;

fn active(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|v| !v.is_empty())
}

impl NodesFilter {
    /// A filter that only matches on the View class name
    pub fn by_class_name(view_class_name: impl Into<String>) -> Self {
        Self {
            view_class_name: Some(view_class_name.into()),
            ..Self::default()
        }
    }

    /// Number of active fields
    pub fn active_count(&self) -> usize {
        self.predicates().len()
    }

    /// True when no field is active
    pub fn is_empty(&self) -> bool {
        self.active_count() == 0
    }

    /// The same filter with everything but `view_class_name` dropped,
    /// or `None` when the class name is not active
    pub fn class_name_only(&self) -> Option<Self> {
        active(&self.view_class_name).map(Self::by_class_name)
    }

    fn predicates(&self) -> Vec<Predicate<'_>> {
        let mut preds: Vec<Predicate<'_>> = Vec::new();

        if let Some(v) = active(&self.view_class_name) {
            preds.push(Box::new(move |n: &Node| n.view_class_name.contains(v)));
        }
        if let Some(v) = active(&self.package_name) {
            preds.push(Box::new(move |n: &Node| n.package.contains(v)));
        }
        if let Some(v) = active(&self.resource_id) {
            preds.push(Box::new(move |n: &Node| n.resource_id == v));
        }
        if let Some(v) = active(&self.content_description) {
            preds.push(Box::new(move |n: &Node| n.content_desc.contains(v)));
        }
        if let Some(v) = active(&self.text) {
            preds.push(Box::new(move |n: &Node| n.text.contains(v)));
        }
        if let Some(v) = active(&self.hint) {
            preds.push(Box::new(move |n: &Node| n.hint.contains(v)));
        }

        preds
    }
}

/// Apply a filter, keeping the original node order.
///
/// - no active field: the input is returned unchanged
/// - one active field: nodes matching that predicate
/// - two or more: nodes matching all of them
pub fn filter_nodes(nodes: &[Node], filter: &NodesFilter) -> Vec<Node> {
    let preds = filter.predicates();

    match preds.as_slice() {
        [] => nodes.to_vec(),
        [pred] => nodes.iter().filter(|&n| pred(n)).cloned().collect(),
        _ => nodes
            .iter()
            .filter(|&n| preds.iter().all(|p| p(n)))
            .cloned()
            .collect(),
    }
}

/// Apply a filter, broadening it instead of returning an empty list.
///
/// When the full filter matches nothing, the class name alone is tried;
/// if that also matches nothing (or no class name was given) the whole
/// unfiltered list is returned.
pub fn filter_nodes_with_fallback(nodes: &[Node], filter: &NodesFilter) -> Vec<Node> {
    let filtered = filter_nodes(nodes, filter);
    if !filtered.is_empty() {
        return filtered;
    }

    if let Some(class_only) = filter.class_name_only() {
        let filtered = filter_nodes(nodes, &class_only);
        if !filtered.is_empty() {
            tracing::debug!(
                count = filtered.len(),
                "Filter matched nothing, fell back to class name only"
            );
            return filtered;
        }
    }

    tracing::debug!(
        count = nodes.len(),
        "Filter matched nothing, returning unfiltered nodes"
    );
    nodes.to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(class: &str, text: &str) -> Node {
        Node {
            view_class_name: class.to_string(),
            text: text.to_string(),
            package: "com.example".to_string(),
            ..Node::default()
        }
    }

    fn sample() -> Vec<Node> {
        vec![
            node("android.widget.FrameLayout", ""),
            Node {
                resource_id: "com.example:id/ok".to_string(),
                ..node("android.widget.Button", "OK")
            },
            node("android.widget.Button", "Cancel"),
            node("android.widget.TextView", "OK"),
            Node {
                hint: "Search apps".to_string(),
                content_desc: "Search".to_string(),
                ..node("android.widget.EditText", "")
            },
        ]
    }

    fn texts(nodes: &[Node]) -> Vec<(&str, &str)> {
        nodes
            .iter()
            .map(|n| (n.view_class_name.as_str(), n.text.as_str()))
            .collect()
    }

    #[test]
    fn test_empty_filter_is_identity() {
        let nodes = sample();
        assert_eq!(filter_nodes(&nodes, &NodesFilter::default()), nodes);
    }

    #[test]
    fn test_empty_strings_are_inactive() {
        let nodes = sample();
        let filter = NodesFilter {
            text: Some(String::new()),
            hint: Some(String::new()),
            ..NodesFilter::default()
        };
        assert!(filter.is_empty());
        assert_eq!(filter_nodes(&nodes, &filter), nodes);
    }

    #[test]
    fn test_single_field_substring() {
        let nodes = sample();
        let result = filter_nodes(&nodes, &NodesFilter::by_class_name("Button"));
        assert_eq!(
            texts(&result),
            vec![("android.widget.Button", "OK"), ("android.widget.Button", "Cancel")]
        );
    }

    #[test]
    fn test_class_name_is_case_sensitive() {
        let nodes = sample();
        assert!(filter_nodes(&nodes, &NodesFilter::by_class_name("button")).is_empty());
    }

    #[test]
    fn test_resource_id_is_exact() {
        let nodes = sample();
        let partial = NodesFilter {
            resource_id: Some("id/ok".to_string()),
            ..NodesFilter::default()
        };
        assert!(filter_nodes(&nodes, &partial).is_empty());

        let exact = NodesFilter {
            resource_id: Some("com.example:id/ok".to_string()),
            ..NodesFilter::default()
        };
        assert_eq!(texts(&filter_nodes(&nodes, &exact)), vec![("android.widget.Button", "OK")]);
    }

    #[test]
    fn test_hint_and_content_description() {
        let nodes = sample();
        let filter = NodesFilter {
            hint: Some("apps".to_string()),
            content_description: Some("Sear".to_string()),
            ..NodesFilter::default()
        };
        let result = filter_nodes(&nodes, &filter);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].view_class_name, "android.widget.EditText");
    }

    #[test]
    fn test_multiple_fields_are_conjunctive() {
        let nodes = sample();
        let filter = NodesFilter {
            view_class_name: Some("Button".to_string()),
            text: Some("OK".to_string()),
            ..NodesFilter::default()
        };
        // The TextView "OK" and the Button "Cancel" each match one field only
        assert_eq!(texts(&filter_nodes(&nodes, &filter)), vec![("android.widget.Button", "OK")]);
    }

    #[test]
    fn test_package_filter_preserves_order() {
        let nodes = sample();
        let filter = NodesFilter {
            package_name: Some("example".to_string()),
            ..NodesFilter::default()
        };
        assert_eq!(filter_nodes(&nodes, &filter), nodes);
    }

    #[test]
    fn test_fallback_to_class_name() {
        let nodes = sample();
        let filter = NodesFilter {
            view_class_name: Some("Button".to_string()),
            text: Some("NoSuchText".to_string()),
            ..NodesFilter::default()
        };
        assert!(filter_nodes(&nodes, &filter).is_empty());

        let result = filter_nodes_with_fallback(&nodes, &filter);
        assert_eq!(result, filter_nodes(&nodes, &NodesFilter::by_class_name("Button")));
        assert_eq!(result.len(), 2);
    }

    #[test]
    fn test_fallback_to_everything_without_class_name() {
        let nodes = sample();
        let filter = NodesFilter {
            text: Some("NoSuchText".to_string()),
            ..NodesFilter::default()
        };
        assert_eq!(filter_nodes_with_fallback(&nodes, &filter), nodes);
    }

    #[test]
    fn test_fallback_to_everything_when_class_name_misses() {
        let nodes = sample();
        let filter = NodesFilter {
            view_class_name: Some("RecyclerView".to_string()),
            text: Some("OK".to_string()),
            ..NodesFilter::default()
        };
        assert_eq!(filter_nodes_with_fallback(&nodes, &filter), nodes);
    }

    #[test]
    fn test_fallback_keeps_non_empty_result() {
        let nodes = sample();
        let filter = NodesFilter {
            text: Some("Cancel".to_string()),
            ..NodesFilter::default()
        };
        assert_eq!(
            texts(&filter_nodes_with_fallback(&nodes, &filter)),
            vec![("android.widget.Button", "Cancel")]
        );
    }

    #[test]
    fn test_fallback_on_empty_input() {
        let filter = NodesFilter::by_class_name("Button");
        assert!(filter_nodes_with_fallback(&[], &filter).is_empty());
    }

    #[test]
    fn test_class_name_only() {
        let filter = NodesFilter {
            view_class_name: Some("Button".to_string()),
            hint: Some("x".to_string()),
            ..NodesFilter::default()
        };
        assert_eq!(filter.active_count(), 2);
        assert_eq!(filter.class_name_only(), Some(NodesFilter::by_class_name("Button")));
        assert_eq!(NodesFilter::default().class_name_only(), None);
    }
}

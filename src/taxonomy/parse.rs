use anyhow::{Context, Result, anyhow};
use serde::Deserialize;
use serde_json::Value;

use super::tree::TaxonomyNode;

#[derive(Clone, Debug, Default, Deserialize)]
struct RawNodeAttrs {
    #[serde(default)]
    name: String,
    #[serde(default)]
    url: Option<String>,
    #[serde(default, rename = "type")]
    kind: Option<String>,
}

pub(super) fn parse_taxonomy(raw: &str) -> Result<TaxonomyNode> {
    let parsed: Value = serde_json::from_str(raw).context("invalid taxonomy JSON")?;
    taxonomy_from_value(&parsed)
}

pub(super) fn taxonomy_from_value(value: &Value) -> Result<TaxonomyNode> {
    match value {
        Value::Object(_) => Ok(node_from_value(value)),
        Value::Array(items) => Ok(TaxonomyNode {
            children: items.iter().map(node_from_value).collect(),
            ..TaxonomyNode::default()
        }),
        _ => Err(anyhow!("taxonomy root must be a JSON object or array")),
    }
}

// Total below the root: any malformed entry degrades to a placeholder node
// instead of failing the whole document.
fn node_from_value(value: &Value) -> TaxonomyNode {
    let Some(object) = value.as_object() else {
        return TaxonomyNode::default();
    };

    let attrs = RawNodeAttrs::deserialize(value).unwrap_or_default();
    let children = object
        .get("children")
        .and_then(Value::as_array)
        .map(|items| items.iter().map(node_from_value).collect())
        .unwrap_or_default();

    TaxonomyNode {
        name: attrs.name,
        url: attrs.url.filter(|url| !url.is_empty()),
        kind: attrs.kind.filter(|kind| !kind.is_empty()),
        children,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn parses_nested_taxonomy() {
        let value = json!({
            "name": "OSINT",
            "type": "category",
            "children": [
                { "name": "theHarvester", "url": "https://example.org/harvester", "type": "tool" },
                { "name": "Dorking", "children": [] },
            ],
        });

        let node = taxonomy_from_value(&value).unwrap();
        assert_eq!(node.name, "OSINT");
        assert_eq!(node.kind.as_deref(), Some("category"));
        assert_eq!(node.children.len(), 2);
        assert_eq!(
            node.children[0].url.as_deref(),
            Some("https://example.org/harvester")
        );
        assert!(node.children[1].children.is_empty());
    }

    #[test]
    fn missing_fields_default_instead_of_failing() {
        let value = json!({ "children": [{ "url": "https://example.org" }] });

        let node = taxonomy_from_value(&value).unwrap();
        assert_eq!(node.name, "");
        assert_eq!(node.children.len(), 1);
        assert_eq!(node.children[0].url.as_deref(), Some("https://example.org"));
    }

    #[test]
    fn malformed_child_becomes_placeholder_leaf() {
        let value = json!({
            "name": "root",
            "children": ["not an object", { "name": "ok" }],
        });

        let node = taxonomy_from_value(&value).unwrap();
        assert_eq!(node.children.len(), 2);
        assert_eq!(node.children[0], TaxonomyNode::default());
        assert_eq!(node.children[1].name, "ok");
    }

    #[test]
    fn non_array_children_field_is_treated_as_empty() {
        let value = json!({ "name": "root", "children": "oops" });

        let node = taxonomy_from_value(&value).unwrap();
        assert_eq!(node.name, "root");
        assert!(node.children.is_empty());
    }

    #[test]
    fn array_root_is_wrapped_in_synthetic_root() {
        let value = json!([{ "name": "a" }, { "name": "b" }]);

        let node = taxonomy_from_value(&value).unwrap();
        assert_eq!(node.name, "");
        assert_eq!(node.children.len(), 2);
    }

    #[test]
    fn scalar_root_is_rejected() {
        assert!(taxonomy_from_value(&json!(42)).is_err());
        assert!(parse_taxonomy("\"just a string\"").is_err());
        assert!(parse_taxonomy("{ not json").is_err());
    }

    #[test]
    fn empty_url_and_type_are_dropped() {
        let value = json!({ "name": "n", "url": "", "type": "" });

        let node = taxonomy_from_value(&value).unwrap();
        assert!(node.url.is_none());
        assert!(node.kind.is_none());
    }
}

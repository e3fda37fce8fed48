// License: MIT

use std::collections::HashSet;

use serde_json::json;

use crate::content::Content;
use crate::error::{NodeError, Result};
use crate::node::Node;

/// Convert a node tree to JSON for inspection.
///
/// - Scalars → JSON strings (no type resolution)
/// - Sequences → arrays
/// - Maps with unique scalar keys → objects in document order; a non-scalar or
///   repeated key makes the map an array of `{"key": ..., "value": ...}` entries
///   so no entry is lost
/// - Aliases → `{"alias": name}`, left unresolved
/// - Empty nodes → `null`
///
/// Tags and anchors are not part of the output.
pub fn to_json(node: &Node) -> serde_json::Value {
    if node.is_alias() {
        return json!({ "alias": node.anchor().unwrap_or_default() });
    }

    match node.content() {
        None => serde_json::Value::Null,
        Some(Content::Scalar(scalar)) => json!(scalar.value()),
        Some(Content::Sequence(sequence)) => {
            serde_json::Value::Array(sequence.items().iter().map(to_json).collect())
        }
        Some(Content::Map(map)) => {
            let mut seen = HashSet::new();
            let unique_scalar_keys = map
                .entries()
                .iter()
                .all(|(k, _)| k.scalar().is_some_and(|key| seen.insert(key)));
            if unique_scalar_keys {
                let mut object = serde_json::Map::new();
                for (key, value) in map.entries() {
                    object.insert(key.scalar().unwrap_or_default().to_string(), to_json(value));
                }
                serde_json::Value::Object(object)
            } else {
                serde_json::Value::Array(
                    map.entries()
                        .iter()
                        .map(|(key, value)| json!({ "key": to_json(key), "value": to_json(value) }))
                        .collect(),
                )
            }
        }
    }
}

/// Pretty-printed JSON for a node tree.
pub fn to_json_string(node: &Node) -> Result<String> {
    serde_json::to_string_pretty(&to_json(node)).map_err(|e| NodeError::Export {
        message: format!("Failed to serialize node: {}", e),
        code: Some(601),
    })
}

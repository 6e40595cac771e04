//! Deep reference search over property trees.
//!
//! Dependent resources embed a function's logical name at kind-specific
//! depths: inside `Fn::GetAtt` argument lists, joined ARN fragments, nested
//! notification entries. Rather than enumerate every shape, classification
//! asks one question: does any string leaf anywhere in this subtree equal
//! the target name. Exact equality only, no partial matches.

use serde_json::Value;

/// True iff some string leaf anywhere in the tree equals `target`.
///
/// Object member values and array elements are searched uniformly; the walk
/// is order-independent and side-effect free. Non-string scalars never
/// match.
pub fn contains_reference(value: &Value, target: &str) -> bool {
  match value {
    Value::String(leaf) => leaf == target,
    Value::Array(items) => items.iter().any(|item| contains_reference(item, target)),
    Value::Object(members) => members.values().any(|member| contains_reference(member, target)),
    _ => false,
  }
}

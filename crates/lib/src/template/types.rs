//! Template and resource types.
//!
//! The template is the compiled infrastructure description handed over by
//! the packaging step: a `Resources` map from logical name to resource
//! definition, plus arbitrary other top-level members that must survive a
//! rewrite byte-for-byte.
//!
//! # Ordering
//!
//! Uses [`BTreeMap`] for the resource map. Logical-name order carries no
//! semantic meaning, and a sorted map keeps serialization and iteration
//! deterministic.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A compiled CloudFormation template.
///
/// Only the `Resources` member is modeled; every other top-level member
/// (format version, outputs, parameter declarations) passes through the
/// flattened `extra` map untouched.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Template {
  /// All declared resources, keyed by logical name (unique per template).
  #[serde(rename = "Resources", default)]
  pub resources: BTreeMap<String, Resource>,

  /// Top-level members other than `Resources`, preserved verbatim.
  #[serde(flatten)]
  pub extra: BTreeMap<String, Value>,
}

impl Template {
  /// Look up a resource by logical name.
  pub fn resource(&self, logical_name: &str) -> Option<&Resource> {
    self.resources.get(logical_name)
  }
}

/// A single declared infrastructure element.
///
/// `Properties` has a kind-specific shape and stays an opaque JSON tree;
/// the rewrite strategies inspect it only at their documented paths.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resource {
  /// The resource kind tag, e.g. `AWS::Lambda::Permission`.
  #[serde(rename = "Type")]
  pub kind: String,

  /// Kind-specific nested properties.
  #[serde(rename = "Properties", default, skip_serializing_if = "Value::is_null")]
  pub properties: Value,

  /// Optional explicit dependency, a logical name or list of them.
  #[serde(rename = "DependsOn", default, skip_serializing_if = "Option::is_none")]
  pub depends_on: Option<Value>,

  /// Members other than the modeled ones (conditions, metadata), preserved.
  #[serde(flatten)]
  pub extra: BTreeMap<String, Value>,
}

impl Resource {
  /// Create a resource with the given kind tag and properties.
  pub fn new(kind: impl Into<String>, properties: Value) -> Self {
    Resource {
      kind: kind.into(),
      properties,
      depends_on: None,
      extra: BTreeMap::new(),
    }
  }

  /// Copy of this resource with `properties` swapped out. All other members
  /// (`DependsOn`, conditions, metadata) carry over unchanged.
  pub fn with_properties(&self, properties: Value) -> Self {
    Resource {
      properties,
      ..self.clone()
    }
  }
}

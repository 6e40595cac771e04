//! Classification of resources that depend on a function.
//!
//! Two-stage filter over the template's resource map: select by `Type` tag,
//! then keep the entries whose kind-specific extraction path embeds the
//! function's logical name anywhere (per the deep reference search). The
//! extraction path matters: a permission's `SourceArn` or a method's
//! request templates may mention a function for unrelated reasons, so only
//! the property subtree that actually wires the invocation is searched.

use std::collections::BTreeMap;

use serde_json::Value;

use crate::rewrite::kind::ResourceKind;
use crate::template::path::get_path;
use crate::template::search::contains_reference;
use crate::template::{Resource, Template};

/// The property subtrees searched for a function reference, per kind.
///
/// A kind without an extraction path yields no targets and therefore never
/// matches; that is a silent skip, not an error.
fn extraction_targets<'a>(kind: ResourceKind, resource: &'a Resource) -> Vec<&'a Value> {
  let properties = &resource.properties;
  match kind {
    ResourceKind::Permission | ResourceKind::EventSourceMapping => {
      get_path(properties, &["FunctionName"]).into_iter().collect()
    }
    ResourceKind::ApiGatewayMethod => get_path(properties, &["Integration"]).into_iter().collect(),
    ResourceKind::SnsTopic => list_entries(properties, &["Subscription"], "Endpoint"),
    ResourceKind::S3Bucket => {
      list_entries(properties, &["NotificationConfiguration", "LambdaConfigurations"], "Function")
    }
    ResourceKind::LambdaVersion => get_path(properties, &["FunctionName"]).into_iter().collect(),
    ResourceKind::LambdaAlias => Vec::new(),
  }
}

/// The `attribute` member of each entry in the list at `path`.
fn list_entries<'a>(properties: &'a Value, path: &[&str], attribute: &str) -> Vec<&'a Value> {
  get_path(properties, path)
    .and_then(Value::as_array)
    .map(|entries| entries.iter().filter_map(|entry| get_path(entry, &[attribute])).collect())
    .unwrap_or_default()
}

/// Does this resource, taken as `kind`, reference the function?
pub fn references_function(kind: ResourceKind, resource: &Resource, function: &str) -> bool {
  extraction_targets(kind, resource)
    .iter()
    .any(|target| contains_reference(target, function))
}

/// All resources of `kind` whose extraction path references the function.
///
/// Returns full resource copies keyed by their original logical names, so a
/// rewritten copy merges back over the original without inventing names.
pub fn dependents_of(template: &Template, kind: ResourceKind, function: &str) -> BTreeMap<String, Resource> {
  template
    .resources
    .iter()
    .filter(|(_, resource)| resource.kind == kind.type_tag())
    .filter(|(_, resource)| references_function(kind, resource, function))
    .map(|(name, resource)| (name.clone(), resource.clone()))
    .collect()
}

/// Logical name of the Version resource published for the function.
///
/// First match wins over the template's deterministic iteration order;
/// `None` when the function has no published version.
pub fn version_of(template: &Template, function: &str) -> Option<String> {
  template
    .resources
    .iter()
    .filter(|(_, resource)| resource.kind == ResourceKind::LambdaVersion.type_tag())
    .find(|(_, resource)| references_function(ResourceKind::LambdaVersion, resource, function))
    .map(|(name, _)| name.clone())
}

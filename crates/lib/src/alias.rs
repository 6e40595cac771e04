//! Alias resource construction.
//!
//! The alias is the one resource this crate adds to a template: a named
//! pointer to a specific function version, optionally splitting traffic
//! with a prior live version through `RoutingConfig`.

use serde_json::{Value, json};

use crate::template::Resource;

/// Inputs for building one alias resource.
#[derive(Debug, Clone, PartialEq)]
pub struct AliasSpec {
  /// Alias name, e.g. `live`.
  pub alias: String,
  /// Logical name of the function resource.
  pub function_name: String,
  /// Logical name of the function's Version resource, when one resolved.
  pub function_version: Option<String>,
  /// Prior live version identifier, passed through as-is.
  pub live_version: Option<Value>,
  /// Fraction of traffic shifted to the new version.
  pub version_weight: Option<f64>,
}

/// Logical name the alias resource is merged under.
pub fn alias_logical_name(function_name: &str, alias: &str) -> String {
  format!("{function_name}Alias{alias}")
}

/// Build the `AWS::Lambda::Alias` resource for a function.
///
/// `FunctionVersion` is a `Fn::GetAtt` on the resolved Version resource, or
/// JSON null when no version resolved (the deploy degrades gracefully
/// instead of aborting the rewrite). `RoutingConfig` is emitted only when
/// both `live_version` and `version_weight` are present; a weight without a
/// live version is ignored, since there is no prior version to route to.
/// The remaining weight `1 - version_weight` stays on the prior version.
/// Weights outside `[0, 1]` pass through uncorrected; the platform's own
/// validation is the backstop.
pub fn build_alias(spec: &AliasSpec) -> Resource {
  let function_version = match &spec.function_version {
    Some(version) => json!({ "Fn::GetAtt": [version, "Version"] }),
    None => Value::Null,
  };

  let mut properties = json!({
    "FunctionVersion": function_version,
    "FunctionName": { "Ref": spec.function_name },
    "Name": spec.alias,
  });

  let version_weight = if spec.live_version.is_some() {
    spec.version_weight
  } else {
    None
  };
  if let (Some(live_version), Some(weight)) = (&spec.live_version, version_weight) {
    properties["RoutingConfig"] = json!({
      "AdditionalVersionWeights": [{
        "FunctionVersion": live_version,
        "FunctionWeight": 1.0 - weight,
      }]
    });
  }

  Resource::new("AWS::Lambda::Alias", properties)
}

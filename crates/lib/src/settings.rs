//! Deployment settings and stage gating.
//!
//! Each opted-in function carries merged settings: global defaults from the
//! deployment config overridden field-wise by per-function values. The
//! merged form plus the current stage and the enabled-stage allowlist make
//! up a [`RewriteRequest`], the single input the rewrite engine takes next
//! to the template itself.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ShiftError;

/// Partial deployment settings, as written in the config file.
///
/// Used both for the global `defaults` block and for per-function override
/// blocks; every field is optional at this stage.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsOverride {
  /// Alias name, e.g. `live`.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub alias: Option<String>,

  /// Identifier of the prior live version that keeps receiving traffic.
  /// Passed through to the routing config as-is (number or string).
  #[serde(skip_serializing_if = "Option::is_none")]
  pub live_version: Option<Value>,

  /// Fraction of traffic shifted to the new version, in `[0, 1]`.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub version_weight: Option<f64>,
}

/// Merged per-function deployment settings.
///
/// `version_weight` is meaningful only when `live_version` is present; the
/// alias builder normalizes a violation rather than erroring.
#[derive(Debug, Clone, PartialEq)]
pub struct DeploymentSettings {
  /// Alias name (required once merged).
  pub alias: String,
  /// Prior live version identifier, if traffic is split.
  pub live_version: Option<Value>,
  /// Fraction of traffic shifted to the new version.
  pub version_weight: Option<f64>,
}

impl DeploymentSettings {
  /// Merge global defaults with per-function overrides, per-function wins.
  ///
  /// Returns `None` when neither side provides an alias name.
  pub fn merge(defaults: &SettingsOverride, overrides: &SettingsOverride) -> Option<DeploymentSettings> {
    let alias = overrides.alias.clone().or_else(|| defaults.alias.clone())?;
    Some(DeploymentSettings {
      alias,
      live_version: overrides.live_version.clone().or_else(|| defaults.live_version.clone()),
      version_weight: overrides.version_weight.or(defaults.version_weight),
    })
  }
}

/// One function opted in to traffic shifting.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionShift {
  /// Logical name of the function resource in the template.
  pub function: String,
  /// Merged deployment settings for this function.
  pub settings: DeploymentSettings,
}

/// Everything the rewrite engine needs besides the template.
#[derive(Debug, Clone, PartialEq)]
pub struct RewriteRequest {
  /// Opted-in functions with merged settings.
  pub functions: Vec<FunctionShift>,
  /// The stage this deployment targets.
  pub stage: String,
  /// Stages traffic shifting is enabled for. Empty means all stages.
  pub enabled_stages: Vec<String>,
}

impl RewriteRequest {
  /// True when the current stage is in the allowlist (or no allowlist is set).
  pub fn stage_enabled(&self) -> bool {
    self.enabled_stages.is_empty() || self.enabled_stages.iter().any(|stage| stage == &self.stage)
  }
}

/// On-disk deployment configuration.
///
/// ```json
/// {
///   "stages": ["prod"],
///   "defaults": { "alias": "live", "versionWeight": 0.1 },
///   "functions": {
///     "HelloLambdaFunction": { "liveVersion": 2, "versionWeight": 0.02 }
///   }
/// }
/// ```
///
/// Functions listed under `functions` are the opt-in set; an empty override
/// block opts a function in with the global defaults.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShiftConfig {
  /// Stage allowlist. Empty means traffic shifting runs on every stage.
  #[serde(default)]
  pub stages: Vec<String>,

  /// Global defaults applied to every opted-in function.
  #[serde(default)]
  pub defaults: SettingsOverride,

  /// Per-function overrides, keyed by the function's logical name.
  #[serde(default)]
  pub functions: BTreeMap<String, SettingsOverride>,
}

impl ShiftConfig {
  /// Build the rewrite request for a deployment of `stage`.
  ///
  /// Fails when an opted-in function ends up without an alias name after the
  /// merge; everything else about the settings is validated downstream (or
  /// deliberately not at all, see the alias builder).
  pub fn request(&self, stage: &str) -> Result<RewriteRequest, ShiftError> {
    let mut functions = Vec::with_capacity(self.functions.len());
    for (function, overrides) in &self.functions {
      let settings = DeploymentSettings::merge(&self.defaults, overrides)
        .ok_or_else(|| ShiftError::MissingAlias(function.clone()))?;
      functions.push(FunctionShift {
        function: function.clone(),
        settings,
      });
    }
    Ok(RewriteRequest {
      functions,
      stage: stage.to_string(),
      enabled_stages: self.stages.clone(),
    })
  }
}

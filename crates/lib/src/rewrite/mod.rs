//! The resource-graph rewrite engine.
//!
//! This module is the single entry point the packaging step calls once the
//! template is fully compiled: [`rewrite`] takes the template and the merged
//! deployment settings and returns a new template in which every opted-in
//! function has an alias resource and every dependent resource invokes the
//! alias instead of the raw function.

pub mod classify;
pub mod kind;
pub mod strategy;

use tracing::{debug, info, warn};

use crate::alias::{AliasSpec, alias_logical_name, build_alias};
use crate::error::ShiftError;
use crate::settings::{FunctionShift, RewriteRequest};
use crate::template::{Resource, Template};

pub use kind::ResourceKind;
pub use strategy::apply_strategy;

/// Rewrite a compiled template for gradual traffic shifting.
///
/// For each opted-in function: resolve its published version, build its
/// alias, classify every dependent permission and event source, rewrite
/// each dependent against the alias's logical name, and merge the results
/// back by logical name (rewritten resources overwrite their originals;
/// the alias is a fresh entry).
///
/// Returns the input unchanged when no function opted in or the current
/// stage is not in the enabled-stage allowlist. The input template is never
/// mutated.
pub fn rewrite(template: &Template, request: &RewriteRequest) -> Result<Template, ShiftError> {
  if request.functions.is_empty() {
    debug!("no functions opted in to traffic shifting");
    return Ok(template.clone());
  }
  if !request.stage_enabled() {
    info!(stage = %request.stage, "traffic shifting not enabled for this stage");
    return Ok(template.clone());
  }

  info!(function_count = request.functions.len(), "adding traffic shifting resources");

  let mut rewritten = template.clone();
  for shift in &request.functions {
    for (logical_name, resource) in function_resources(template, shift)? {
      rewritten.resources.insert(logical_name, resource);
    }
  }
  Ok(rewritten)
}

/// The alias plus every rewritten dependent for one function, keyed by the
/// logical names they merge under.
fn function_resources(template: &Template, shift: &FunctionShift) -> Result<Vec<(String, Resource)>, ShiftError> {
  let function = &shift.function;
  let settings = &shift.settings;

  let function_version = classify::version_of(template, function);
  if function_version.is_none() {
    warn!(function = %function, "no version resource found, alias will carry a null FunctionVersion");
  }

  let alias_name = alias_logical_name(function, &settings.alias);
  let alias = build_alias(&AliasSpec {
    alias: settings.alias.clone(),
    function_name: function.clone(),
    function_version,
    live_version: settings.live_version.clone(),
    version_weight: settings.version_weight,
  });

  info!(function = %function, alias = %alias_name, "building alias for function");

  let mut resources = vec![(alias_name.clone(), alias)];

  let permissions = classify::dependents_of(template, ResourceKind::Permission, function);
  debug!(function = %function, count = permissions.len(), "rewriting permissions");
  for (logical_name, resource) in permissions {
    let rewritten = apply_strategy(ResourceKind::Permission, &resource, &alias_name, function)?;
    resources.push((logical_name, rewritten));
  }

  for event_kind in ResourceKind::EVENT_KINDS {
    let dependents = classify::dependents_of(template, event_kind, function);
    if dependents.is_empty() {
      continue;
    }
    debug!(function = %function, kind = %event_kind, count = dependents.len(), "rewriting event sources");
    for (logical_name, resource) in dependents {
      let rewritten = apply_strategy(event_kind, &resource, &alias_name, function)?;
      resources.push((logical_name, rewritten));
    }
  }

  Ok(resources)
}

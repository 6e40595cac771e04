//! Implementation of the `cfshift apply` command.
//!
//! Rewrites the compiled template for traffic shifting and writes the
//! result, either in place or to `--output`.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use cfshift_lib::rewrite::rewrite;

use crate::cmd::common::{load_request, load_template};
use crate::output::{print_info, print_stat, print_success};

pub fn cmd_apply(template_path: &Path, config_path: &Path, stage: &str, output: Option<&Path>) -> Result<()> {
  let template = load_template(template_path)?;
  let request = load_request(config_path, stage)?;

  let rewritten = rewrite(&template, &request).context("Rewrite failed")?;

  if rewritten == template {
    print_info("No changes to apply");
    return Ok(());
  }

  let added = rewritten
    .resources
    .keys()
    .filter(|name| !template.resources.contains_key(*name))
    .count();
  let rewired = template
    .resources
    .iter()
    .filter(|(name, resource)| rewritten.resource(name).is_some_and(|r| r != *resource))
    .count();

  let destination = output.unwrap_or(template_path);
  let json = serde_json::to_string_pretty(&rewritten).context("Failed to serialize template")?;
  fs::write(destination, json).with_context(|| format!("Failed to write template: {}", destination.display()))?;

  info!(path = %destination.display(), "rewritten template saved");

  print_success("Traffic shifting resources added");
  print_stat("aliases added", &added.to_string());
  print_stat("resources rewired", &rewired.to_string());
  print_stat("written to", &destination.display().to_string());

  Ok(())
}

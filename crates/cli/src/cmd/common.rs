//! Shared loading for the plan and apply commands.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use cfshift_lib::settings::{RewriteRequest, ShiftConfig};
use cfshift_lib::template::Template;

/// Load the compiled template from a JSON file.
pub fn load_template(path: &Path) -> Result<Template> {
  let contents =
    fs::read_to_string(path).with_context(|| format!("Failed to read template: {}", path.display()))?;
  serde_json::from_str(&contents).with_context(|| format!("Failed to parse template: {}", path.display()))
}

/// Load the deployment settings and merge them into a rewrite request.
pub fn load_request(path: &Path, stage: &str) -> Result<RewriteRequest> {
  let contents = fs::read_to_string(path).with_context(|| format!("Failed to read config: {}", path.display()))?;
  let config: ShiftConfig =
    serde_json::from_str(&contents).with_context(|| format!("Failed to parse config: {}", path.display()))?;
  config
    .request(stage)
    .with_context(|| format!("Invalid deployment settings: {}", path.display()))
}

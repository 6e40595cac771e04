//! Implementation of the `cfshift plan` command.
//!
//! Dry run: loads the template and settings, reports which aliases would be
//! added and which dependent resources rewritten, and writes nothing.

use std::path::Path;

use anyhow::Result;

use cfshift_lib::alias::alias_logical_name;
use cfshift_lib::rewrite::{ResourceKind, classify};

use crate::cmd::common::{load_request, load_template};
use crate::output::{print_info, print_stat};

pub fn cmd_plan(template_path: &Path, config_path: &Path, stage: &str) -> Result<()> {
  let template = load_template(template_path)?;
  let request = load_request(config_path, stage)?;

  if request.functions.is_empty() {
    print_info("No functions opted in to traffic shifting");
    return Ok(());
  }
  if !request.stage_enabled() {
    print_info(&format!("Traffic shifting not enabled for stage {stage}"));
    return Ok(());
  }

  println!("Plan: {} function(s), stage {}", request.functions.len(), stage);

  for shift in &request.functions {
    let function = &shift.function;
    let alias_name = alias_logical_name(function, &shift.settings.alias);

    println!();
    println!("{function}");
    print_stat("alias", &alias_name);
    match classify::version_of(&template, function) {
      Some(version) => print_stat("version", &version),
      None => print_stat("version", "(none resolved)"),
    }

    let permissions = classify::dependents_of(&template, ResourceKind::Permission, function);
    print_stat("permissions", &permissions.len().to_string());

    for kind in ResourceKind::EVENT_KINDS {
      let dependents = classify::dependents_of(&template, kind, function);
      for logical_name in dependents.keys() {
        print_stat("rewires", &format!("{logical_name} ({kind})"));
      }
    }
  }

  Ok(())
}

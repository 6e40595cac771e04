//! CLI smoke tests for cfshift.
//!
//! These tests verify that the commands run without panicking, return
//! appropriate exit codes, and actually rewrite template files on disk.

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::TempDir;

/// Get a Command for the cfshift binary.
fn cfshift_cmd() -> Command {
  cargo_bin_cmd!("cfshift")
}

const TEMPLATE: &str = r#"{
  "Resources": {
    "HelloLambdaFunction": {
      "Type": "AWS::Lambda::Function",
      "Properties": { "Handler": "handler.hello" }
    },
    "HelloLambdaVersion": {
      "Type": "AWS::Lambda::Version",
      "Properties": { "FunctionName": { "Ref": "HelloLambdaFunction" } }
    },
    "HelloLambdaPermission": {
      "Type": "AWS::Lambda::Permission",
      "Properties": { "FunctionName": { "Fn::GetAtt": ["HelloLambdaFunction", "Arn"] } }
    }
  }
}"#;

const CONFIG: &str = r#"{
  "defaults": { "alias": "live" },
  "functions": {
    "HelloLambdaFunction": { "liveVersion": 2, "versionWeight": 0.02 }
  }
}"#;

/// Create a temp directory holding a template and a config file.
fn fixture() -> TempDir {
  let temp = TempDir::new().unwrap();
  std::fs::write(temp.path().join("template.json"), TEMPLATE).unwrap();
  std::fs::write(temp.path().join("config.json"), CONFIG).unwrap();
  temp
}

// =============================================================================
// Help & Version
// =============================================================================

#[test]
fn help_flag_works() {
  cfshift_cmd()
    .arg("--help")
    .assert()
    .success()
    .stdout(predicate::str::contains("Usage"));
}

#[test]
fn version_flag_works() {
  cfshift_cmd()
    .arg("--version")
    .assert()
    .success()
    .stdout(predicate::str::contains("cfshift"));
}

// =============================================================================
// plan
// =============================================================================

#[test]
fn plan_reports_alias_and_dependents() {
  let temp = fixture();

  cfshift_cmd()
    .arg("plan")
    .arg("--template")
    .arg(temp.path().join("template.json"))
    .arg("--config")
    .arg(temp.path().join("config.json"))
    .assert()
    .success()
    .stdout(predicate::str::contains("HelloLambdaFunctionAliaslive"))
    .stdout(predicate::str::contains("HelloLambdaVersion"));
}

#[test]
fn plan_on_disabled_stage_reports_noop() {
  let temp = TempDir::new().unwrap();
  std::fs::write(temp.path().join("template.json"), TEMPLATE).unwrap();
  std::fs::write(
    temp.path().join("config.json"),
    r#"{ "stages": ["prod"], "defaults": { "alias": "live" }, "functions": { "HelloLambdaFunction": {} } }"#,
  )
  .unwrap();

  cfshift_cmd()
    .arg("plan")
    .arg("--template")
    .arg(temp.path().join("template.json"))
    .arg("--config")
    .arg(temp.path().join("config.json"))
    .arg("--stage")
    .arg("dev")
    .assert()
    .success()
    .stdout(predicate::str::contains("not enabled"));
}

#[test]
fn plan_fails_on_missing_template() {
  let temp = fixture();

  cfshift_cmd()
    .arg("plan")
    .arg("--template")
    .arg(temp.path().join("nope.json"))
    .arg("--config")
    .arg(temp.path().join("config.json"))
    .assert()
    .failure()
    .stderr(predicate::str::contains("Failed to read template"));
}

// =============================================================================
// apply
// =============================================================================

#[test]
fn apply_writes_rewritten_template_to_output() {
  let temp = fixture();
  let output = temp.path().join("out.json");

  cfshift_cmd()
    .arg("apply")
    .arg("--template")
    .arg(temp.path().join("template.json"))
    .arg("--config")
    .arg(temp.path().join("config.json"))
    .arg("--output")
    .arg(&output)
    .assert()
    .success()
    .stdout(predicate::str::contains("aliases added"));

  let written = std::fs::read_to_string(&output).unwrap();
  assert!(written.contains("HelloLambdaFunctionAliaslive"));
  assert!(written.contains("AdditionalVersionWeights"));

  // the input template is untouched when --output is given
  let input = std::fs::read_to_string(temp.path().join("template.json")).unwrap();
  assert!(!input.contains("HelloLambdaFunctionAliaslive"));
}

#[test]
fn apply_rewrites_in_place_without_output() {
  let temp = fixture();

  cfshift_cmd()
    .arg("apply")
    .arg("--template")
    .arg(temp.path().join("template.json"))
    .arg("--config")
    .arg(temp.path().join("config.json"))
    .assert()
    .success();

  let written = std::fs::read_to_string(temp.path().join("template.json")).unwrap();
  assert!(written.contains("HelloLambdaFunctionAliaslive"));
}

#[test]
fn apply_with_no_opted_in_functions_leaves_template_alone() {
  let temp = TempDir::new().unwrap();
  std::fs::write(temp.path().join("template.json"), TEMPLATE).unwrap();
  std::fs::write(temp.path().join("config.json"), r#"{ "defaults": { "alias": "live" } }"#).unwrap();

  cfshift_cmd()
    .arg("apply")
    .arg("--template")
    .arg(temp.path().join("template.json"))
    .arg("--config")
    .arg(temp.path().join("config.json"))
    .assert()
    .success()
    .stdout(predicate::str::contains("No changes"));

  let written = std::fs::read_to_string(temp.path().join("template.json")).unwrap();
  assert_eq!(written, TEMPLATE);
}

#[test]
fn apply_fails_on_function_without_alias() {
  let temp = TempDir::new().unwrap();
  std::fs::write(temp.path().join("template.json"), TEMPLATE).unwrap();
  std::fs::write(
    temp.path().join("config.json"),
    r#"{ "functions": { "HelloLambdaFunction": {} } }"#,
  )
  .unwrap();

  cfshift_cmd()
    .arg("apply")
    .arg("--template")
    .arg(temp.path().join("template.json"))
    .arg("--config")
    .arg(temp.path().join("config.json"))
    .assert()
    .failure()
    .stderr(predicate::str::contains("Invalid deployment settings"));
}

#[test]
fn apply_fails_on_malformed_template_json() {
  let temp = TempDir::new().unwrap();
  std::fs::write(temp.path().join("template.json"), "{ not json").unwrap();
  std::fs::write(temp.path().join("config.json"), CONFIG).unwrap();

  cfshift_cmd()
    .arg("apply")
    .arg("--template")
    .arg(temp.path().join("template.json"))
    .arg("--config")
    .arg(temp.path().join("config.json"))
    .assert()
    .failure()
    .stderr(predicate::str::contains("Failed to parse template"));
}

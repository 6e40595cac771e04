//! Per-kind rewrite strategies.
//!
//! Each supported kind maps to a pure function that substitutes the function
//! reference with an alias reference at that kind's property path, returning
//! a new resource. The original is never modified. Dispatch is closed over
//! [`ResourceKind`]: a kind without a strategy is a loud error, never a
//! silent drop.

use serde_json::{Value, json};

use crate::error::ShiftError;
use crate::rewrite::kind::ResourceKind;
use crate::template::Resource;
use crate::template::path::{get_path, set_path};
use crate::template::search::contains_reference;

/// Rewrite `resource` so it invokes `alias_ref` instead of `function_ref`.
///
/// Errors with [`ShiftError::StrategyNotFound`] for kinds that have no
/// strategy; the classifier never hands those over, so reaching the error
/// means a caller bypassed classification.
pub fn apply_strategy(
  kind: ResourceKind,
  resource: &Resource,
  alias_ref: &str,
  function_ref: &str,
) -> Result<Resource, ShiftError> {
  match kind {
    ResourceKind::Permission | ResourceKind::EventSourceMapping => Ok(rewrite_function_name(resource, alias_ref)),
    ResourceKind::ApiGatewayMethod => Ok(rewrite_method_uri(resource, alias_ref)),
    ResourceKind::SnsTopic => Ok(rewrite_topic_subscriptions(resource, alias_ref, function_ref)),
    ResourceKind::S3Bucket => Ok(rewrite_bucket_notifications(resource, alias_ref, function_ref)),
    ResourceKind::LambdaVersion | ResourceKind::LambdaAlias => Err(ShiftError::StrategyNotFound(kind.to_string())),
  }
}

/// Permissions and event source mappings: `Properties.FunctionName` becomes
/// a direct reference to the alias.
fn rewrite_function_name(resource: &Resource, alias_ref: &str) -> Resource {
  let properties = set_path(&resource.properties, &["FunctionName"], json!({ "Ref": alias_ref }));
  resource.with_properties(properties)
}

/// API Gateway methods: the integration URI is a composed ARN string, so the
/// alias is substituted into the function segment of a `Fn::Sub` template
/// rather than referenced directly.
fn rewrite_method_uri(resource: &Resource, alias_ref: &str) -> Resource {
  let uri = json!({ "Fn::Sub": aliased_invocation_uri(alias_ref) });
  let properties = set_path(&resource.properties, &["Integration", "Uri"], uri);
  resource.with_properties(properties)
}

fn aliased_invocation_uri(alias_ref: &str) -> String {
  format!("arn:aws:apigateway:${{AWS::Region}}:lambda:path/2015-03-31/functions/${{{alias_ref}}}/invocations")
}

/// SNS topics: every subscription entry that references the function gets
/// its `Endpoint` pointed at the alias; entries for other functions pass
/// through untouched.
fn rewrite_topic_subscriptions(resource: &Resource, alias_ref: &str, function_ref: &str) -> Resource {
  let properties = rewrite_list_entries(
    &resource.properties,
    &["Subscription"],
    "Endpoint",
    alias_ref,
    function_ref,
  );
  resource.with_properties(properties)
}

/// S3 buckets: every Lambda notification entry that references the function
/// gets its `Function` attribute pointed at the alias.
fn rewrite_bucket_notifications(resource: &Resource, alias_ref: &str, function_ref: &str) -> Resource {
  let properties = rewrite_list_entries(
    &resource.properties,
    &["NotificationConfiguration", "LambdaConfigurations"],
    "Function",
    alias_ref,
    function_ref,
  );
  resource.with_properties(properties)
}

/// Copy of `properties` where, in the list at `path`, each entry referencing
/// `function_ref` has its `attribute` replaced by a reference to the alias.
/// Properties without a list at `path` come back unchanged.
fn rewrite_list_entries(
  properties: &Value,
  path: &[&str],
  attribute: &str,
  alias_ref: &str,
  function_ref: &str,
) -> Value {
  let Some(entries) = get_path(properties, path).and_then(Value::as_array) else {
    return properties.clone();
  };

  let rewritten: Vec<Value> = entries
    .iter()
    .map(|entry| {
      if contains_reference(entry, function_ref) {
        set_path(entry, &[attribute], json!({ "Ref": alias_ref }))
      } else {
        entry.clone()
      }
    })
    .collect();

  set_path(properties, path, Value::Array(rewritten))
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  const ALIAS: &str = "HelloLambdaFunctionAliaslive";
  const FUNCTION: &str = "HelloLambdaFunction";

  #[test]
  fn permission_function_name_becomes_alias_ref() {
    let permission: Resource = serde_json::from_value(json!({
      "Type": "AWS::Lambda::Permission",
      "Properties": {
        "FunctionName": { "Fn::GetAtt": [FUNCTION, "Arn"] },
        "Action": "lambda:InvokeFunction",
        "Principal": "apigateway.amazonaws.com"
      }
    }))
    .unwrap();

    let rewritten = apply_strategy(ResourceKind::Permission, &permission, ALIAS, FUNCTION).unwrap();

    assert_eq!(rewritten.properties["FunctionName"], json!({ "Ref": ALIAS }));
    assert_eq!(rewritten.properties["Action"], json!("lambda:InvokeFunction"));
    assert!(!contains_reference(&rewritten.properties, FUNCTION));
    assert!(contains_reference(&rewritten.properties, ALIAS));
    // the input resource is untouched
    assert!(contains_reference(&permission.properties, FUNCTION));
  }

  #[test]
  fn event_source_mapping_keeps_depends_on() {
    let mapping: Resource = serde_json::from_value(json!({
      "Type": "AWS::Lambda::EventSourceMapping",
      "DependsOn": "IamRoleLambdaExecution",
      "Properties": {
        "EventSourceArn": { "Fn::GetAtt": ["StreamsTestTable", "StreamArn"] },
        "FunctionName": { "Fn::GetAtt": [FUNCTION, "Arn"] },
        "StartingPosition": "TRIM_HORIZON"
      }
    }))
    .unwrap();

    let rewritten = apply_strategy(ResourceKind::EventSourceMapping, &mapping, ALIAS, FUNCTION).unwrap();

    assert_eq!(rewritten.properties["FunctionName"], json!({ "Ref": ALIAS }));
    assert_eq!(rewritten.depends_on, Some(json!("IamRoleLambdaExecution")));
    assert!(!contains_reference(&rewritten.properties, FUNCTION));
  }

  #[test]
  fn method_uri_becomes_sub_template_embedding_the_alias() {
    let method: Resource = serde_json::from_value(json!({
      "Type": "AWS::ApiGateway::Method",
      "Properties": {
        "HttpMethod": "GET",
        "Integration": {
          "Type": "AWS_PROXY",
          "Uri": {
            "Fn::Join": ["", [
              "arn:aws:apigateway:",
              { "Ref": "AWS::Region" },
              ":lambda:path/2015-03-31/functions/",
              { "Fn::GetAtt": [FUNCTION, "Arn"] },
              "/invocations"
            ]]
          }
        }
      }
    }))
    .unwrap();

    let rewritten = apply_strategy(ResourceKind::ApiGatewayMethod, &method, ALIAS, FUNCTION).unwrap();

    assert_eq!(
      rewritten.properties["Integration"]["Uri"],
      json!({
        "Fn::Sub":
          "arn:aws:apigateway:${AWS::Region}:lambda:path/2015-03-31/functions/${HelloLambdaFunctionAliaslive}/invocations"
      })
    );
    // the alias lives inside the composed string, not as a direct reference
    assert!(!contains_reference(&rewritten.properties, FUNCTION));
    assert_eq!(rewritten.properties["Integration"]["Type"], json!("AWS_PROXY"));
  }

  #[test]
  fn only_matching_subscriptions_are_rewired() {
    let topic: Resource = serde_json::from_value(json!({
      "Type": "AWS::SNS::Topic",
      "Properties": {
        "TopicName": "notifications",
        "Subscription": [
          { "Protocol": "lambda", "Endpoint": { "Fn::GetAtt": [FUNCTION, "Arn"] } },
          { "Protocol": "lambda", "Endpoint": { "Fn::GetAtt": ["OtherLambdaFunction", "Arn"] } }
        ]
      }
    }))
    .unwrap();

    let rewritten = apply_strategy(ResourceKind::SnsTopic, &topic, ALIAS, FUNCTION).unwrap();
    let subscriptions = rewritten.properties["Subscription"].as_array().unwrap();

    assert_eq!(subscriptions[0]["Endpoint"], json!({ "Ref": ALIAS }));
    assert_eq!(subscriptions[0]["Protocol"], json!("lambda"));
    assert_eq!(subscriptions[1]["Endpoint"], json!({ "Fn::GetAtt": ["OtherLambdaFunction", "Arn"] }));
    assert!(!contains_reference(&rewritten.properties, FUNCTION));
  }

  #[test]
  fn bucket_notification_function_becomes_alias_ref() {
    let bucket: Resource = serde_json::from_value(json!({
      "Type": "AWS::S3::Bucket",
      "Properties": {
        "BucketName": "uploads",
        "NotificationConfiguration": {
          "LambdaConfigurations": [
            { "Event": "s3:ObjectCreated:*", "Function": { "Fn::GetAtt": [FUNCTION, "Arn"] } }
          ]
        }
      }
    }))
    .unwrap();

    let rewritten = apply_strategy(ResourceKind::S3Bucket, &bucket, ALIAS, FUNCTION).unwrap();

    assert_eq!(
      rewritten.properties["NotificationConfiguration"]["LambdaConfigurations"][0]["Function"],
      json!({ "Ref": ALIAS })
    );
    assert!(!contains_reference(&rewritten.properties, FUNCTION));
    assert!(contains_reference(&rewritten.properties, ALIAS));
  }

  #[test]
  fn kinds_without_a_strategy_fail_loudly() {
    let version = Resource::new("AWS::Lambda::Version", json!({}));
    let err = apply_strategy(ResourceKind::LambdaVersion, &version, ALIAS, FUNCTION).unwrap_err();
    assert!(matches!(err, ShiftError::StrategyNotFound(_)));
  }
}

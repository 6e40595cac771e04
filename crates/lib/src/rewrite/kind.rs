//! Resource kinds the rewrite engine knows about.

use std::fmt;

/// A supported resource kind, matched against the `Type` tag.
///
/// The enum is deliberately closed: classification and rewriting only ever
/// touch kinds listed here, and anything else in the template passes through
/// untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
  /// `AWS::Lambda::Permission`
  Permission,
  /// `AWS::Lambda::EventSourceMapping`
  EventSourceMapping,
  /// `AWS::ApiGateway::Method`
  ApiGatewayMethod,
  /// `AWS::SNS::Topic`
  SnsTopic,
  /// `AWS::S3::Bucket`
  S3Bucket,
  /// `AWS::Lambda::Version`
  LambdaVersion,
  /// `AWS::Lambda::Alias`
  LambdaAlias,
}

impl ResourceKind {
  /// Event-source kinds whose resources get rewired to the alias, next to
  /// the separately handled permissions.
  pub const EVENT_KINDS: [ResourceKind; 4] = [
    ResourceKind::EventSourceMapping,
    ResourceKind::ApiGatewayMethod,
    ResourceKind::SnsTopic,
    ResourceKind::S3Bucket,
  ];

  /// The CloudFormation `Type` tag for this kind.
  pub fn type_tag(self) -> &'static str {
    match self {
      ResourceKind::Permission => "AWS::Lambda::Permission",
      ResourceKind::EventSourceMapping => "AWS::Lambda::EventSourceMapping",
      ResourceKind::ApiGatewayMethod => "AWS::ApiGateway::Method",
      ResourceKind::SnsTopic => "AWS::SNS::Topic",
      ResourceKind::S3Bucket => "AWS::S3::Bucket",
      ResourceKind::LambdaVersion => "AWS::Lambda::Version",
      ResourceKind::LambdaAlias => "AWS::Lambda::Alias",
    }
  }
}

impl fmt::Display for ResourceKind {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.type_tag())
  }
}

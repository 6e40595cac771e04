//! Error types for cfshift-lib

use thiserror::Error;

/// Errors that can occur while building or rewriting template resources.
#[derive(Debug, Error)]
pub enum ShiftError {
  /// A dependent resource's kind has no rewrite strategy.
  ///
  /// The classifier only selects kinds that have a strategy, so hitting this
  /// indicates a bug in the caller, not bad input. Failing here is required:
  /// silently dropping the resource would leave a miswired template.
  #[error("no rewrite strategy for resource kind: {0}")]
  StrategyNotFound(String),

  /// A function opted in to traffic shifting without an alias name, either
  /// per-function or through the global defaults.
  #[error("function {0} has no alias name configured")]
  MissingAlias(String),
}

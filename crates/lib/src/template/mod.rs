//! Compiled template data model and tree-walk primitives.
//!
//! A compiled CloudFormation template is a JSON document whose `Resources`
//! member maps logical names to resource definitions. Resource properties
//! are kind-specific and otherwise opaque, so this module keeps them as raw
//! [`serde_json::Value`] trees and provides the two primitives the rewrite
//! engine needs over them: borrowing path descent ([`path`]) and a deep
//! reference search ([`search`]).

pub mod path;
pub mod search;
mod types;

pub use types::{Resource, Template};

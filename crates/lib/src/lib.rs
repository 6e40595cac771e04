//! cfshift-lib: Core logic for gradual Lambda traffic shifting
//!
//! This crate rewrites a compiled CloudFormation template so that opted-in
//! Lambda functions are invoked through an `AWS::Lambda::Alias` instead of
//! the raw function:
//! - `template`: the template/resource data model and tree-walk primitives
//! - `settings`: per-function deployment settings and stage gating
//! - `alias`: construction of the alias resource itself
//! - `rewrite`: classification of dependent resources and the rewrite engine

pub mod alias;
pub mod error;
pub mod rewrite;
pub mod settings;
pub mod template;

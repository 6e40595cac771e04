mod apply;
mod common;
mod plan;

pub use apply::cmd_apply;
pub use plan::cmd_plan;

//! Domain services - pure logic with no I/O

pub mod invocation;

pub use invocation::{plan_invocation, ToolInvocation};

// Application Layer - Script loading and queue sessions

pub mod script;
pub mod session;

// Re-exports
pub use script::{Outcome, PriorityCommand, Script, ServiceCommand};
pub use session::{execute, run_script, FailurePolicy, PrioritySession, ServiceSession, Session};

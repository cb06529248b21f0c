// Lineup Core - Queue Domain Logic & Scripted Sessions
// NO terminal or process concerns; the CLI is the composition root

pub mod application;
pub mod domain;
pub mod error;
pub mod settings;

pub use error::{AppError, Result};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Queue scripts - replayable command sequences loaded from JSON

use crate::domain::{Customer, Priority};
use crate::error::{AppError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Command applied to a priority queue session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum PriorityCommand {
    Enqueue {
        name: String,
        #[serde(default)]
        priority: Priority,
    },
    Dequeue,
    Show,
}

/// Command applied to a service queue session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum ServiceCommand {
    Add {
        name: String,
        account_id: String,
        problem: String,
    },
    Serve,
    Show,
}

/// Result of applying one command
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Outcome {
    Enqueued { name: String, length: usize },
    Dequeued { name: String },
    Added { name: String, length: usize },
    Served { customer: Customer },
    Snapshot { rendered: String },
    /// Only produced under `FailurePolicy::Continue`
    Rejected { reason: String },
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Enqueued { name, length } => write!(f, "enqueued {} (length={})", name, length),
            Outcome::Dequeued { name } => write!(f, "dequeued {}", name),
            Outcome::Added { name, length } => write!(f, "added {} (length={})", name, length),
            Outcome::Served { customer } => write!(f, "served {}", customer),
            Outcome::Snapshot { rendered } => write!(f, "{}", rendered),
            Outcome::Rejected { reason } => write!(f, "rejected: {}", reason),
        }
    }
}

/// A complete script.
///
/// JSON shape: `{"kind": "priority", "commands": [...]}` or
/// `{"kind": "service", "max_size": 3, "commands": [...]}`.
/// A bare array is read as a priority script.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Script {
    Priority {
        commands: Vec<PriorityCommand>,
    },
    Service {
        #[serde(default)]
        max_size: Option<i64>,
        commands: Vec<ServiceCommand>,
    },
}

impl Script {
    pub fn from_json(input: &str) -> Result<Self> {
        // Dispatch on shape so serde reports the error for the form actually used
        let script = if input.trim_start().starts_with('[') {
            Script::Priority {
                commands: serde_json::from_str::<Vec<PriorityCommand>>(input)?,
            }
        } else {
            serde_json::from_str::<Script>(input)?
        };

        if script.is_empty() {
            return Err(AppError::Validation("script has no commands".to_string()));
        }

        Ok(script)
    }

    /// Read and parse a script file
    pub fn from_path(path: &Path) -> Result<Self> {
        let input = std::fs::read_to_string(path)?;
        Self::from_json(&input)
    }

    /// Number of commands in the script
    pub fn len(&self) -> usize {
        match self {
            Script::Priority { commands } => commands.len(),
            Script::Service { commands, .. } => commands.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

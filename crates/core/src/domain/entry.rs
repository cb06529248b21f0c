// Entry Domain Model

use super::error::{DomainError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Priority (higher number = served first)
pub type Priority = i32;

/// One enqueued participant of a [`PriorityQueue`](super::PriorityQueue).
///
/// Names are labels only; two entries may share a name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub name: String,
    pub priority: Priority,
}

impl Entry {
    pub fn new(name: impl Into<String>, priority: Priority) -> Self {
        Self {
            name: name.into(),
            priority,
        }
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (Pri:{})", self.name, self.priority)
    }
}

/// Parses the `NAME:PRIORITY` shorthand used on the command line.
///
/// The split happens on the last colon, so names may contain colons
/// (`"a:b:3"` is `a:b` with priority 3). Whitespace around either half is
/// dropped.
impl FromStr for Entry {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self> {
        let (name, priority) = s
            .rsplit_once(':')
            .ok_or_else(|| DomainError::InvalidEntry(format!("expected NAME:PRIORITY, got '{}'", s)))?;

        let priority = priority.trim().parse::<Priority>().map_err(|e| {
            DomainError::InvalidEntry(format!("bad priority '{}' in '{}': {}", priority, s, e))
        })?;

        Ok(Self::new(name.trim(), priority))
    }
}

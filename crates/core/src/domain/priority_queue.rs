// Priority Queue Domain Model

use super::entry::{Entry, Priority};
use super::error::{DomainError, Result};
use std::fmt;

/// Unbounded priority queue with FIFO tie-breaking.
///
/// Entries are stored in insertion order. `dequeue` performs a linear scan
/// (O(n)) and removes the first entry holding the highest priority, so among
/// equal priorities the earliest enqueued entry is served first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PriorityQueue {
    entries: Vec<Entry>,
}

impl PriorityQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry to the back of the queue. Never fails.
    pub fn enqueue(&mut self, name: impl Into<String>, priority: Priority) {
        self.entries.push(Entry::new(name, priority));
    }

    /// Remove the highest-priority entry and return its name.
    ///
    /// Returns [`DomainError::EmptyQueue`] without touching the queue when
    /// there is nothing to remove.
    pub fn dequeue(&mut self) -> Result<String> {
        let index = self.highest_priority_index().ok_or(DomainError::EmptyQueue)?;
        Ok(self.entries.remove(index).name)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Entries in insertion order (not priority order).
    pub fn iter(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter()
    }

    // Strict `>` keeps the first-seen maximum, which is the FIFO tie-break.
    fn highest_priority_index(&self) -> Option<usize> {
        let mut best: Option<(usize, Priority)> = None;
        for (index, entry) in self.entries.iter().enumerate() {
            match best {
                Some((_, priority)) if entry.priority <= priority => {}
                _ => best = Some((index, entry.priority)),
            }
        }
        best.map(|(index, _)| index)
    }
}

impl fmt::Display for PriorityQueue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, entry) in self.entries.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", entry)?;
        }
        write!(f, "]")
    }
}

impl Extend<Entry> for PriorityQueue {
    fn extend<I: IntoIterator<Item = Entry>>(&mut self, iter: I) {
        self.entries.extend(iter);
    }
}

impl FromIterator<Entry> for PriorityQueue {
    fn from_iter<I: IntoIterator<Item = Entry>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

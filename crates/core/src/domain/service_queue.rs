// Service Queue Domain Model
//
// Bounded first-come-first-served queue of customers waiting for support.

use super::error::{DomainError, Result};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::fmt;
use tracing::warn;

/// Capacity used when a non-positive max size is requested
pub const DEFAULT_SERVICE_MAX_SIZE: usize = 10;

/// A customer record held by [`ServiceQueue`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub name: String,
    pub account_id: String,
    pub problem: String,
}

impl Customer {
    /// Fields are trimmed, matching how console input is read.
    pub fn new(
        name: impl AsRef<str>,
        account_id: impl AsRef<str>,
        problem: impl AsRef<str>,
    ) -> Self {
        Self {
            name: name.as_ref().trim().to_string(),
            account_id: account_id.as_ref().trim().to_string(),
            problem: problem.as_ref().trim().to_string(),
        }
    }
}

impl fmt::Display for Customer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})  : {}", self.name, self.account_id, self.problem)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceQueue {
    customers: VecDeque<Customer>,
    max_size: usize,
}

impl ServiceQueue {
    /// Create a queue holding at most `max_size` customers.
    ///
    /// `max_size <= 0` falls back to [`DEFAULT_SERVICE_MAX_SIZE`].
    pub fn new(max_size: i64) -> Self {
        let max_size = usize::try_from(max_size)
            .ok()
            .filter(|&size| size > 0)
            .unwrap_or(DEFAULT_SERVICE_MAX_SIZE);

        Self {
            customers: VecDeque::new(),
            max_size,
        }
    }

    /// Add a customer to the back of the queue.
    ///
    /// Fails with [`DomainError::QueueFull`] once `max_size` customers are waiting.
    pub fn add(&mut self, customer: Customer) -> Result<()> {
        if self.customers.len() >= self.max_size {
            warn!(
                max_size = self.max_size,
                customer = %customer.name,
                "Maximum number of customers in queue"
            );
            return Err(DomainError::QueueFull {
                max_size: self.max_size,
            });
        }

        self.customers.push_back(customer);
        Ok(())
    }

    /// Remove and return the customer at the front of the queue.
    pub fn serve(&mut self) -> Result<Customer> {
        self.customers.pop_front().ok_or(DomainError::NoCustomers)
    }

    pub fn len(&self) -> usize {
        self.customers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.customers.is_empty()
    }

    pub fn max_size(&self) -> usize {
        self.max_size
    }
}

impl Default for ServiceQueue {
    fn default() -> Self {
        Self::new(DEFAULT_SERVICE_MAX_SIZE as i64)
    }
}

impl fmt::Display for ServiceQueue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[size={} max_size={} => ", self.len(), self.max_size)?;
        for (i, customer) in self.customers.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", customer)?;
        }
        write!(f, "]")
    }
}

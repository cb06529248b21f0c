// Domain Error Types

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("The queue is empty")]
    EmptyQueue,

    #[error("Maximum number of customers in queue (max_size={max_size})")]
    QueueFull { max_size: usize },

    #[error("No customers in the queue")]
    NoCustomers,

    #[error("Invalid entry: {0}")]
    InvalidEntry(String),
}

pub type Result<T> = std::result::Result<T, DomainError>;

// Domain Layer - Pure queue logic and entities

pub mod entry;
pub mod error;
pub mod priority_queue;
pub mod service_queue;


// Re-exports
pub use entry::{Entry, Priority};
pub use error::DomainError;
pub use priority_queue::PriorityQueue;
pub use service_queue::{Customer, ServiceQueue, DEFAULT_SERVICE_MAX_SIZE};

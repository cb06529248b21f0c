// Queue sessions - apply script commands to a live queue
use crate::application::script::{Outcome, PriorityCommand, Script, ServiceCommand};
use crate::domain::{Customer, PriorityQueue, ServiceQueue};
use crate::error::Result;
use tracing::{debug, info, warn};

/// What to do when a command fails
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    /// Propagate the first error
    #[default]
    Stop,
    /// Record the error as [`Outcome::Rejected`] and keep going
    Continue,
}

/// A queue that script commands can be applied to
pub trait Session {
    type Command;

    /// Apply one command. Queue errors are returned, never swallowed.
    fn apply(&mut self, command: Self::Command) -> Result<Outcome>;

    /// Insertion-order rendering of the current queue
    fn snapshot(&self) -> String;
}

/// Session over a [`PriorityQueue`]
#[derive(Debug, Default)]
pub struct PrioritySession {
    queue: PriorityQueue,
}

impl PrioritySession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn queue(&self) -> &PriorityQueue {
        &self.queue
    }
}

impl Session for PrioritySession {
    type Command = PriorityCommand;

    fn apply(&mut self, command: PriorityCommand) -> Result<Outcome> {
        match command {
            PriorityCommand::Enqueue { name, priority } => {
                self.queue.enqueue(name.clone(), priority);
                debug!(name = %name, priority, length = self.queue.len(), "Enqueued");
                Ok(Outcome::Enqueued {
                    name,
                    length: self.queue.len(),
                })
            }
            PriorityCommand::Dequeue => match self.queue.dequeue() {
                Ok(name) => {
                    debug!(name = %name, length = self.queue.len(), "Dequeued");
                    Ok(Outcome::Dequeued { name })
                }
                Err(e) => {
                    warn!(error = %e, "Dequeue on empty queue");
                    Err(e.into())
                }
            },
            PriorityCommand::Show => Ok(Outcome::Snapshot {
                rendered: self.snapshot(),
            }),
        }
    }

    fn snapshot(&self) -> String {
        self.queue.to_string()
    }
}

/// Session over a bounded [`ServiceQueue`]
#[derive(Debug)]
pub struct ServiceSession {
    queue: ServiceQueue,
}

impl ServiceSession {
    pub fn new(max_size: i64) -> Self {
        Self {
            queue: ServiceQueue::new(max_size),
        }
    }

    pub fn queue(&self) -> &ServiceQueue {
        &self.queue
    }
}

impl Session for ServiceSession {
    type Command = ServiceCommand;

    fn apply(&mut self, command: ServiceCommand) -> Result<Outcome> {
        match command {
            ServiceCommand::Add {
                name,
                account_id,
                problem,
            } => {
                let customer = Customer::new(name, account_id, problem);
                let name = customer.name.clone();
                self.queue.add(customer)?;
                debug!(name = %name, length = self.queue.len(), "Customer added");
                Ok(Outcome::Added {
                    name,
                    length: self.queue.len(),
                })
            }
            ServiceCommand::Serve => {
                let customer = self.queue.serve()?;
                debug!(name = %customer.name, length = self.queue.len(), "Customer served");
                Ok(Outcome::Served { customer })
            }
            ServiceCommand::Show => Ok(Outcome::Snapshot {
                rendered: self.snapshot(),
            }),
        }
    }

    fn snapshot(&self) -> String {
        self.queue.to_string()
    }
}

/// Apply `commands` in order and collect their outcomes.
///
/// Under [`FailurePolicy::Stop`] the first error is returned and later
/// commands are not applied.
pub fn run_script<S, I>(session: &mut S, commands: I, policy: FailurePolicy) -> Result<Vec<Outcome>>
where
    S: Session,
    I: IntoIterator<Item = S::Command>,
{
    let mut outcomes = Vec::new();

    for (step, command) in commands.into_iter().enumerate() {
        match session.apply(command) {
            Ok(outcome) => outcomes.push(outcome),
            Err(e) if policy == FailurePolicy::Continue => {
                warn!(step, error = %e, "Command rejected, continuing");
                outcomes.push(Outcome::Rejected {
                    reason: e.to_string(),
                });
            }
            Err(e) => return Err(e),
        }
    }

    Ok(outcomes)
}

/// Run a whole [`Script`] against a fresh session of the matching kind.
///
/// Service scripts without their own `max_size` use `default_max_size`.
/// Returns the outcomes and the final queue rendering.
pub fn execute(
    script: Script,
    default_max_size: i64,
    policy: FailurePolicy,
) -> Result<(Vec<Outcome>, String)> {
    match script {
        Script::Priority { commands } => {
            info!(commands = commands.len(), "Running priority script");
            let mut session = PrioritySession::new();
            let outcomes = run_script(&mut session, commands, policy)?;
            Ok((outcomes, session.snapshot()))
        }
        Script::Service { max_size, commands } => {
            let max_size = max_size.unwrap_or(default_max_size);
            info!(commands = commands.len(), max_size, "Running service script");
            let mut session = ServiceSession::new(max_size);
            let outcomes = run_script(&mut session, commands, policy)?;
            Ok((outcomes, session.snapshot()))
        }
    }
}

//! Process (input record) model.
//!
//! A process is a static description of one unit of CPU demand: identity,
//! arrival time, total burst, and priority. It has no behavior beyond data;
//! all bookkeeping during a simulation (remaining burst, completion) lives
//! in per-run working state owned by the policy.

use serde::{Deserialize, Serialize};

/// A process to be scheduled.
///
/// Input records are immutable: policies copy what they need into their own
/// working arrays and never write back.
///
/// # Fields
/// - `id` is unique per process by convention; uniqueness is the caller's
///   responsibility and is not enforced here.
/// - `priority` follows the lower-is-higher convention: priority 0 outranks
///   priority 5. It only influences the priority policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Process {
    /// Process identifier.
    pub id: i64,
    /// Total CPU time required (ticks, > 0).
    pub burst: i64,
    /// Tick at which the process becomes eligible to run (>= 0).
    pub arrival: i64,
    /// Scheduling priority (lower value = higher priority).
    #[serde(default)]
    pub priority: i64,
}

impl Process {
    /// Creates a process with the default priority (0).
    pub fn new(id: i64, burst: i64, arrival: i64) -> Self {
        Self {
            id,
            burst,
            arrival,
            priority: 0,
        }
    }

    /// Sets the scheduling priority.
    pub fn with_priority(mut self, priority: i64) -> Self {
        self.priority = priority;
        self
    }
}

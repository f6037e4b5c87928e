//! Scheduling policies.
//!
//! Four schedulers over a fixed workload, each a pure function from the
//! process list to a [`PolicyRun`]:
//!
//! - **FCFS**: non-preemptive, strict input order
//! - **SJF**: preemptive shortest-remaining-time-first
//! - **Priority**: preemptive, lowest priority value first
//! - **Round-robin**: rotating pointer, fixed quantum of 1 tick
//!
//! Runs never observe each other's state and never mutate the shared input,
//! so every policy is deterministic and idempotent over the same workload.
//!
//! # Reference
//! Silberschatz, Galvin & Gagne (2018), "Operating System Concepts",
//! Ch. 5.3: Scheduling Algorithms

pub mod fcfs;
mod preemptive;
pub mod priority;
pub mod round_robin;
pub mod sjf;

pub use preemptive::SelectionRule;
pub use priority::LowestPriority;
pub use sjf::ShortestRemaining;

use log::debug;
use serde::Serialize;

use crate::error::SimError;
use crate::metrics::{ProcessReport, RunMetrics};
use crate::models::{Process, Timeline};

/// The complete output of one policy run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PolicyRun {
    /// What ran when.
    pub timeline: Timeline,
    /// Per-process timing rows, in input order.
    pub reports: Vec<ProcessReport>,
    /// Run-level aggregates.
    pub metrics: RunMetrics,
}

/// The available scheduling policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Policy {
    /// Non-preemptive, strict input order.
    FirstComeFirstServe,
    /// Preemptive shortest-remaining-time-first.
    ShortestJobFirst,
    /// Preemptive, lowest priority value first.
    Priority,
    /// Rotating pointer, quantum 1.
    RoundRobin,
}

impl Policy {
    /// All policies, in reporting order.
    pub const ALL: [Policy; 4] = [
        Policy::FirstComeFirstServe,
        Policy::ShortestJobFirst,
        Policy::Priority,
        Policy::RoundRobin,
    ];

    /// Report title for this policy.
    pub fn title(&self) -> &'static str {
        match self {
            Policy::FirstComeFirstServe => "First-come, first-serve",
            Policy::ShortestJobFirst => "Shortest-job-first",
            Policy::Priority => "Priority",
            Policy::RoundRobin => "Round-robin",
        }
    }

    /// Runs this policy against the workload.
    pub fn run(&self, processes: &[Process]) -> Result<PolicyRun, SimError> {
        let run = match self {
            Policy::FirstComeFirstServe => fcfs::schedule(processes),
            Policy::ShortestJobFirst => sjf::schedule(processes),
            Policy::Priority => priority::schedule(processes),
            Policy::RoundRobin => round_robin::schedule(processes),
        }?;
        debug!(
            "{}: {} slices over {} ticks",
            self.title(),
            run.timeline.len(),
            run.metrics.last_completion
        );
        Ok(run)
    }
}

/// Runs every policy against the same workload, in reporting order.
pub fn run_all(processes: &[Process]) -> Result<Vec<(Policy, PolicyRun)>, SimError> {
    Policy::ALL
        .iter()
        .map(|&policy| Ok((policy, policy.run(processes)?)))
        .collect()
}

/// Assembles a [`PolicyRun`] from a finished simulation.
///
/// `completions[i]` is the completion tick of `processes[i]`. Wait times are
/// derived (and clamped) in [`ProcessReport::derive`], never inside a policy
/// loop.
fn finish(
    processes: &[Process],
    completions: Vec<i64>,
    timeline: Timeline,
) -> Result<PolicyRun, SimError> {
    let reports: Vec<ProcessReport> = processes
        .iter()
        .zip(completions)
        .map(|(p, completion)| ProcessReport::derive(p, completion))
        .collect();
    let metrics = RunMetrics::calculate(&reports)?;
    Ok(PolicyRun {
        timeline,
        reports,
        metrics,
    })
}

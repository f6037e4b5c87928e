//! Priority policy (preemptive).
//!
//! Same tick machine as SJF with a different selection key: the eligible
//! process with the lowest priority value runs. A newly arrived process
//! preempts only when its priority is strictly lower than the running
//! process's; equal priorities never preempt, so an all-default-priority
//! workload degenerates to stable input-order service.

use crate::error::SimError;
use crate::models::Process;

use super::preemptive::{self, SelectionRule};
use super::PolicyRun;

/// Lowest priority value first.
#[derive(Debug, Clone, Copy)]
pub struct LowestPriority;

impl SelectionRule for LowestPriority {
    fn name(&self) -> &'static str {
        "PRIORITY"
    }

    fn key(&self, process: &Process, _remaining: i64) -> i64 {
        process.priority
    }
}

/// Schedules the workload preemptively by priority.
pub fn schedule(processes: &[Process]) -> Result<PolicyRun, SimError> {
    let (timeline, completions) = preemptive::simulate(&LowestPriority, processes);
    super::finish(processes, completions, timeline)
}

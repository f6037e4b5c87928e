//! First-come, first-serve policy.
//!
//! Non-preemptive: processes execute to completion strictly in input order.
//! The service clock starts at 0 and never idles, so the first process runs
//! immediately regardless of its arrival time and waits zero ticks; later
//! processes wait for whatever service time has accumulated ahead of them.

use crate::error::SimError;
use crate::models::{Process, Timeline};

use super::PolicyRun;

/// Schedules the workload in strict input order.
///
/// One slice is emitted per process, covering
/// `[service_time, service_time + burst]`. Completion is
/// `arrival + burst + wait` with `wait = max(0, service_time - arrival)`,
/// which coincides with the slice stop whenever the process had already
/// arrived when the CPU reached it.
pub fn schedule(processes: &[Process]) -> Result<PolicyRun, SimError> {
    let mut timeline = Timeline::new();
    let mut completions = Vec::with_capacity(processes.len());
    let mut service_time: i64 = 0;

    for p in processes {
        timeline.record_run(p, service_time, service_time + p.burst);
        completions.push(service_time.max(p.arrival) + p.burst);
        service_time += p.burst;
    }

    super::finish(processes, completions, timeline)
}

//! Round-robin policy, fixed quantum of 1 tick.
//!
//! A rotating pointer cycles through the processes in input order, granting
//! each runnable one a single-tick quantum. One slice is emitted per
//! quantum, so a process with burst n appears in up to n separate slices.
//!
//! Idle handling: when a full rotation of the table finds nothing runnable
//! (everything pending has not arrived yet), the clock advances exactly one
//! tick and scanning resumes from the first slot.

use crate::error::SimError;
use crate::models::{Process, Timeline};

use super::PolicyRun;

/// Maximum contiguous ticks a process may run before forced preemption.
pub const QUANTUM: i64 = 1;

/// Schedules the workload round-robin with a 1-tick quantum.
pub fn schedule(processes: &[Process]) -> Result<PolicyRun, SimError> {
    let count = processes.len();
    let mut remaining: Vec<i64> = processes.iter().map(|p| p.burst).collect();
    let mut completions = vec![0i64; count];
    let mut completed = 0;
    let mut now: i64 = 0;
    let mut turn = 0;
    let mut timeline = Timeline::new();

    while completed < count {
        // At most one full rotation looking for a runnable process.
        let mut scanned = 0;
        let mut runnable = None;
        while scanned < count {
            if processes[turn].arrival <= now && remaining[turn] > 0 {
                runnable = Some(turn);
                break;
            }
            turn = (turn + 1) % count;
            scanned += 1;
        }

        match runnable {
            None => {
                // CPU idle for one tick; rescan from the first slot.
                now += 1;
                turn = 0;
            }
            Some(i) => {
                let grant = remaining[i].min(QUANTUM);
                timeline.record_run(&processes[i], now, now + grant);
                now += grant;
                remaining[i] -= grant;
                if remaining[i] == 0 {
                    completions[i] = now;
                    completed += 1;
                }
                turn = (turn + 1) % count;
            }
        }
    }

    super::finish(processes, completions, timeline)
}

//! Shortest-job-first policy (preemptive).
//!
//! Shortest-remaining-time-first: each tick the eligible process with the
//! least work left runs. A newly arrived process preempts only when its
//! burst is strictly shorter than the running process's remaining time.

use crate::error::SimError;
use crate::models::Process;

use super::preemptive::{self, SelectionRule};
use super::PolicyRun;

/// Shortest remaining time first.
///
/// Minimizes average wait over the workload when bursts are known up front.
#[derive(Debug, Clone, Copy)]
pub struct ShortestRemaining;

impl SelectionRule for ShortestRemaining {
    fn name(&self) -> &'static str {
        "SRTF"
    }

    fn key(&self, _process: &Process, remaining: i64) -> i64 {
        remaining
    }
}

/// Schedules the workload preemptively by shortest remaining time.
pub fn schedule(processes: &[Process]) -> Result<PolicyRun, SimError> {
    let (timeline, completions) = preemptive::simulate(&ShortestRemaining, processes);
    super::finish(processes, completions, timeline)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TimeSlice;

    #[test]
    fn test_short_jobs_overtake_the_convoy() {
        let processes = vec![
            Process::new(1, 24, 0),
            Process::new(2, 3, 0),
            Process::new(3, 3, 0),
        ];
        let run = schedule(&processes).unwrap();

        let waits: Vec<i64> = run.reports.iter().map(|r| r.wait).collect();
        assert_eq!(waits, vec![6, 0, 3]);
        assert_eq!(
            run.timeline.slices,
            vec![
                TimeSlice::new(2, 0, 3),
                TimeSlice::new(3, 3, 6),
                TimeSlice::new(1, 6, 30),
            ]
        );
        assert!((run.metrics.average_wait - 3.0).abs() < 1e-10);
        assert_eq!(run.metrics.last_completion, 30);
    }

    #[test]
    fn test_arrival_preempts_longer_job() {
        let processes = vec![Process::new(1, 8, 0), Process::new(2, 2, 1)];
        let run = schedule(&processes).unwrap();
        assert_eq!(
            run.timeline.slices,
            vec![
                TimeSlice::new(1, 0, 1),
                TimeSlice::new(2, 1, 3),
                TimeSlice::new(1, 3, 10),
            ]
        );
        let waits: Vec<i64> = run.reports.iter().map(|r| r.wait).collect();
        assert_eq!(waits, vec![2, 0]);
    }

    #[test]
    fn test_burst_ties_go_to_input_order() {
        let processes = vec![Process::new(1, 3, 0), Process::new(2, 3, 0)];
        let run = schedule(&processes).unwrap();
        assert_eq!(
            run.timeline.slices,
            vec![TimeSlice::new(1, 0, 3), TimeSlice::new(2, 3, 6)]
        );
    }

    #[test]
    fn test_every_burst_tick_is_accounted() {
        let processes = vec![
            Process::new(1, 8, 0),
            Process::new(2, 4, 1),
            Process::new(3, 2, 2),
        ];
        let run = schedule(&processes).unwrap();
        for p in &processes {
            assert_eq!(run.timeline.busy_time(p.id), p.burst);
        }
    }
}

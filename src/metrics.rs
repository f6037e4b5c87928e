//! Run performance metrics.
//!
//! Derives per-process timing rows from completion times and aggregates
//! them into run-level indicators.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Wait | max(0, completion - burst - arrival) |
//! | Turnaround | burst + wait |
//! | Average Wait | Mean wait across all processes |
//! | Average Turnaround | Mean turnaround across all processes |
//! | Throughput | process count / latest completion |
//!
//! # Reference
//! Silberschatz, Galvin & Gagne (2018), "Operating System Concepts",
//! Ch. 5.2: Scheduling Criteria

use std::{error::Error, fmt};

use average::{Estimate, Mean};
use serde::{Deserialize, Serialize};

use crate::models::Process;

/// Derived timing for one process under one policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessReport {
    /// Process identifier.
    pub id: i64,
    /// Scheduling priority (copied from the input record).
    pub priority: i64,
    /// Total CPU time required (ticks).
    pub burst: i64,
    /// Arrival tick.
    pub arrival: i64,
    /// Time spent eligible but not running (ticks, >= 0).
    pub wait: i64,
    /// Arrival-to-completion time: burst + wait.
    pub turnaround: i64,
    /// Tick at which the process finished.
    pub completion: i64,
}

impl ProcessReport {
    /// Derives the report row for `process` given its completion tick.
    ///
    /// This is the single place wait time is computed, so the clamp to zero
    /// is applied identically under every policy.
    pub fn derive(process: &Process, completion: i64) -> Self {
        let wait = (completion - process.burst - process.arrival).max(0);
        Self {
            id: process.id,
            priority: process.priority,
            burst: process.burst,
            arrival: process.arrival,
            wait,
            turnaround: process.burst + wait,
            completion,
        }
    }
}

/// Run-level aggregate metrics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunMetrics {
    /// Arithmetic mean of per-process wait times.
    pub average_wait: f64,
    /// Arithmetic mean of per-process turnaround times.
    pub average_turnaround: f64,
    /// Completed processes per tick: count / latest completion.
    pub throughput: f64,
    /// Latest completion tick across all processes.
    pub last_completion: i64,
}

/// Degenerate aggregation conditions.
///
/// With validated input (at least one process, every burst >= 1) neither
/// condition is reachable; they are still surfaced as structured errors
/// rather than NaN or infinite floats.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MetricsError {
    /// No process reports to aggregate.
    EmptyRun,
    /// Latest completion is zero, leaving throughput undefined.
    ZeroHorizon,
}

impl fmt::Display for MetricsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetricsError::EmptyRun => write!(f, "no processes to aggregate"),
            MetricsError::ZeroHorizon => {
                write!(f, "throughput undefined: latest completion is zero")
            }
        }
    }
}

impl Error for MetricsError {}

impl RunMetrics {
    /// Aggregates per-process reports into run-level metrics.
    ///
    /// The latest completion is the maximum over all processes, not the
    /// completion of the last process in input order.
    pub fn calculate(reports: &[ProcessReport]) -> Result<Self, MetricsError> {
        if reports.is_empty() {
            return Err(MetricsError::EmptyRun);
        }
        let last_completion = reports.iter().map(|r| r.completion).max().unwrap_or(0);
        if last_completion == 0 {
            return Err(MetricsError::ZeroHorizon);
        }

        let average_wait = reports
            .iter()
            .map(|r| r.wait as f64)
            .collect::<Mean>()
            .estimate();
        let average_turnaround = reports
            .iter()
            .map(|r| r.turnaround as f64)
            .collect::<Mean>()
            .estimate();

        Ok(Self {
            average_wait,
            average_turnaround,
            throughput: reports.len() as f64 / last_completion as f64,
            last_completion,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(id: i64, burst: i64, arrival: i64, completion: i64) -> ProcessReport {
        ProcessReport::derive(&Process::new(id, burst, arrival), completion)
    }

    #[test]
    fn test_derive_wait_and_turnaround() {
        let r = report(1, 3, 0, 27);
        assert_eq!(r.wait, 24);
        assert_eq!(r.turnaround, 27);
        assert_eq!(r.completion, 27);
    }

    #[test]
    fn test_derive_clamps_negative_wait() {
        // Completion earlier than arrival + burst would yield a negative
        // wait; the clamp floors it at zero.
        let r = report(1, 5, 10, 8);
        assert_eq!(r.wait, 0);
        assert_eq!(r.turnaround, 5);
    }

    #[test]
    fn test_calculate_averages() {
        let reports = vec![report(1, 24, 0, 24), report(2, 3, 0, 27), report(3, 3, 0, 30)];
        let m = RunMetrics::calculate(&reports).unwrap();
        assert!((m.average_wait - 17.0).abs() < 1e-10);
        assert!((m.average_turnaround - 27.0).abs() < 1e-10);
        assert!((m.throughput - 0.1).abs() < 1e-10);
        assert_eq!(m.last_completion, 30);
    }

    #[test]
    fn test_last_completion_is_max_not_last() {
        let reports = vec![report(1, 4, 0, 40), report(2, 2, 0, 6)];
        let m = RunMetrics::calculate(&reports).unwrap();
        assert_eq!(m.last_completion, 40);
        assert!((m.throughput - 2.0 / 40.0).abs() < 1e-10);
    }

    #[test]
    fn test_single_instant_process_has_finite_throughput() {
        // Smallest legal workload: one process with burst 1 completing at
        // tick 1. The denominator must be 1, never 0.
        let reports = vec![report(1, 1, 0, 1)];
        let m = RunMetrics::calculate(&reports).unwrap();
        assert_eq!(m.last_completion, 1);
        assert!((m.throughput - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_empty_run_is_an_error() {
        assert_eq!(RunMetrics::calculate(&[]), Err(MetricsError::EmptyRun));
    }

    #[test]
    fn test_zero_horizon_is_an_error() {
        let reports = vec![ProcessReport {
            id: 1,
            priority: 0,
            burst: 0,
            arrival: 0,
            wait: 0,
            turnaround: 0,
            completion: 0,
        }];
        assert_eq!(
            RunMetrics::calculate(&reports),
            Err(MetricsError::ZeroHorizon)
        );
    }

    #[test]
    fn test_sum_identity() {
        let reports = vec![report(1, 8, 0, 10), report(2, 4, 1, 5), report(3, 2, 2, 14)];
        let wait: i64 = reports.iter().map(|r| r.wait).sum();
        let burst: i64 = reports.iter().map(|r| r.burst).sum();
        let turnaround: i64 = reports.iter().map(|r| r.turnaround).sum();
        assert_eq!(turnaround, burst + wait);
    }
}

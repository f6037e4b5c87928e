//! Gantt timeline model.
//!
//! A timeline is the ordered sequence of execution intervals a policy
//! produced: exactly what ran, and when. FCFS emits one slice per process;
//! the preemptive policies and round-robin emit one slice per scheduling
//! event, so a single process may appear many times.

use serde::{Deserialize, Serialize};

use super::Process;

/// One contiguous execution interval on the CPU.
///
/// Half-open on neither side: the slice covers ticks `start..stop` with
/// `stop >= start`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlice {
    /// Id of the process that ran.
    pub process_id: i64,
    /// Tick at which the interval begins.
    pub start: i64,
    /// Tick at which the interval ends.
    pub stop: i64,
}

impl TimeSlice {
    /// Creates a new slice.
    pub fn new(process_id: i64, start: i64, stop: i64) -> Self {
        debug_assert!(stop >= start, "slice for {process_id} ends before it starts");
        Self {
            process_id,
            start,
            stop,
        }
    }

    /// Interval width in ticks.
    #[inline]
    pub fn width(&self) -> i64 {
        self.stop - self.start
    }
}

/// An ordered sequence of [`TimeSlice`]s for one policy run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timeline {
    /// Execution intervals in chronological order.
    pub slices: Vec<TimeSlice>,
}

impl Timeline {
    /// Creates an empty timeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an interval.
    pub fn record(&mut self, slice: TimeSlice) {
        self.slices.push(slice);
    }

    /// Appends an interval for `process` covering `start..stop`.
    pub fn record_run(&mut self, process: &Process, start: i64, stop: i64) {
        self.record(TimeSlice::new(process.id, start, stop));
    }

    /// Total CPU time the given process received across all its slices.
    pub fn busy_time(&self, process_id: i64) -> i64 {
        self.slices
            .iter()
            .filter(|s| s.process_id == process_id)
            .map(TimeSlice::width)
            .sum()
    }

    /// Latest stop tick across all slices (0 for an empty timeline).
    pub fn span(&self) -> i64 {
        self.slices.iter().map(|s| s.stop).max().unwrap_or(0)
    }

    /// Number of slices.
    pub fn len(&self) -> usize {
        self.slices.len()
    }

    /// Whether the timeline holds no slices.
    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_timeline() -> Timeline {
        let mut t = Timeline::new();
        t.record(TimeSlice::new(1, 0, 1));
        t.record(TimeSlice::new(2, 1, 3));
        t.record(TimeSlice::new(1, 3, 10));
        t
    }

    #[test]
    fn test_busy_time_sums_slices() {
        let t = sample_timeline();
        assert_eq!(t.busy_time(1), 8);
        assert_eq!(t.busy_time(2), 2);
        assert_eq!(t.busy_time(99), 0);
    }

    #[test]
    fn test_span() {
        let t = sample_timeline();
        assert_eq!(t.span(), 10);
        assert_eq!(Timeline::new().span(), 0);
    }

    #[test]
    fn test_len_and_is_empty() {
        assert!(Timeline::new().is_empty());
        assert_eq!(sample_timeline().len(), 3);
    }

    #[test]
    fn test_slice_width() {
        assert_eq!(TimeSlice::new(1, 2, 7).width(), 5);
        assert_eq!(TimeSlice::new(1, 4, 4).width(), 0);
    }

    #[test]
    fn test_serialized_field_names() {
        let json = serde_json::to_value(TimeSlice::new(3, 1, 4)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"process_id": 3, "start": 1, "stop": 4})
        );
    }
}

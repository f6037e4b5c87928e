//! Shared tick-by-tick preemptive simulation engine.
//!
//! SJF and the priority policy are the same machine with different selection
//! keys: each tick, among eligible processes (arrived, work remaining), the
//! one with the smallest key runs for one tick. The running process keeps
//! the CPU unless a strictly smaller key appears, so ties always resolve to
//! the earliest process in input order.

use crate::models::{Process, Timeline};

/// Selection rule for the preemptive engine.
///
/// # Key Convention
/// **Lower key = runs first.** The engine benchmarks every eligible process
/// against the currently running one and switches only on a strictly
/// smaller key.
pub trait SelectionRule {
    /// Rule name (e.g., "SRTF").
    fn name(&self) -> &'static str;

    /// Key for a process given its remaining burst at the current tick.
    fn key(&self, process: &Process, remaining: i64) -> i64;
}

/// Per-invocation simulation state.
///
/// Owns every mutable array a run needs; nothing is shared between
/// invocations and the input records are never written.
struct TickState {
    now: i64,
    remaining: Vec<i64>,
    completions: Vec<i64>,
    completed: usize,
    running: Option<usize>,
    slice_start: i64,
    timeline: Timeline,
}

impl TickState {
    fn new(processes: &[Process]) -> Self {
        Self {
            now: 0,
            remaining: processes.iter().map(|p| p.burst).collect(),
            completions: vec![0; processes.len()],
            completed: 0,
            running: None,
            slice_start: 0,
            timeline: Timeline::new(),
        }
    }

    /// Index of the process that should hold the CPU this tick, if any.
    ///
    /// Starts from the running process's own key, so an equal-key candidate
    /// never preempts and ties among idle candidates go to the lowest index.
    fn select(&self, rule: &impl SelectionRule, processes: &[Process]) -> Option<usize> {
        let mut best = self
            .running
            .map_or(i64::MAX, |i| rule.key(&processes[i], self.remaining[i]));
        let mut selected = self.running;
        for (j, p) in processes.iter().enumerate() {
            if p.arrival <= self.now && self.remaining[j] > 0 && rule.key(p, self.remaining[j]) < best
            {
                best = rule.key(p, self.remaining[j]);
                selected = Some(j);
            }
        }
        selected
    }
}

/// Runs the tick loop to completion.
///
/// Returns the timeline and per-process completion ticks. A slice is closed
/// at every preemption and at every completion, so idle gaps never extend a
/// slice and each process's summed slice width equals its burst exactly.
pub(super) fn simulate(
    rule: &impl SelectionRule,
    processes: &[Process],
) -> (Timeline, Vec<i64>) {
    let mut state = TickState::new(processes);

    while state.completed < processes.len() {
        match state.select(rule, processes) {
            // Nothing eligible: the clock advances with no execution and no
            // timeline emission.
            None => state.now += 1,
            Some(i) => {
                if state.running != Some(i) {
                    if let Some(prev) = state.running {
                        state
                            .timeline
                            .record_run(&processes[prev], state.slice_start, state.now);
                    }
                    state.slice_start = state.now;
                    state.running = Some(i);
                }
                state.remaining[i] -= 1;
                state.now += 1;
                if state.remaining[i] == 0 {
                    state.completions[i] = state.now;
                    state.completed += 1;
                    state
                        .timeline
                        .record_run(&processes[i], state.slice_start, state.now);
                    state.running = None;
                }
            }
        }
    }

    (state.timeline, state.completions)
}

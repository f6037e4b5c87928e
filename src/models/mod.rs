//! Simulation domain models.
//!
//! Provides the core data types: the immutable [`Process`] input record and
//! the derived [`Timeline`] of [`TimeSlice`] execution intervals.
//!
//! The process list itself carries an ordering contract: list order is the
//! service order for FCFS and the tie-break order for every other policy
//! (the first process in list order wins ties).

mod process;
mod timeline;

pub use process::Process;
pub use timeline::{TimeSlice, Timeline};

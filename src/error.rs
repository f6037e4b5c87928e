//! Crate error taxonomy.
//!
//! Every fatal condition maps to one [`SimError`] variant. Core computation
//! never terminates the process; errors propagate as values and only the
//! binary translates them into exit codes. There is no recovery path: a
//! single bad field aborts the whole run with no partial results.

use std::{error::Error, fmt, io};

use crate::metrics::MetricsError;
use crate::validation::ValidationError;

/// Fatal simulator errors.
#[derive(Debug)]
pub enum SimError {
    /// Wrong number of command-line arguments.
    Usage,
    /// The input file could not be opened or read.
    Io(io::Error),
    /// Malformed process table: bad row shape or a non-integer field.
    Parse {
        /// 1-based row number within the input.
        row: usize,
        /// What was wrong with the row.
        reason: String,
    },
    /// The parsed workload violates a scheduling precondition.
    Invalid(Vec<ValidationError>),
    /// Aggregation hit a degenerate condition (empty run, zero horizon).
    Metrics(MetricsError),
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimError::Usage => write!(f, "usage: sched-sim <processes.csv>"),
            SimError::Io(err) => write!(f, "reading scheduling file: {err}"),
            SimError::Parse { row, reason } => {
                write!(f, "row {row}: {reason}")
            }
            SimError::Invalid(errors) => {
                write!(f, "invalid workload:")?;
                for err in errors {
                    write!(f, " {err};")?;
                }
                Ok(())
            }
            SimError::Metrics(err) => write!(f, "aggregating metrics: {err}"),
        }
    }
}

impl Error for SimError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            SimError::Io(err) => Some(err),
            SimError::Metrics(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for SimError {
    fn from(err: io::Error) -> Self {
        SimError::Io(err)
    }
}

impl From<MetricsError> for SimError {
    fn from(err: MetricsError) -> Self {
        SimError::Metrics(err)
    }
}

impl From<Vec<ValidationError>> for SimError {
    fn from(errors: Vec<ValidationError>) -> Self {
        SimError::Invalid(errors)
    }
}

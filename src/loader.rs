//! Process table loading.
//!
//! Reads the comma-separated input, one process per row:
//!
//! ```text
//! process_id, burst_duration, arrival_time[, priority]
//! ```
//!
//! The priority column is optional and defaults to 0. Parsing is all or
//! nothing: a malformed row or a non-integer field fails the whole load
//! with the offending row number, and no partial list is returned.
//! Semantic constraints (positive bursts, non-negative arrivals) are the
//! [`crate::validation`] module's concern, not the loader's.

use std::io::Read;

use csv::{ReaderBuilder, StringRecord, Trim};
use log::debug;

use crate::error::SimError;
use crate::models::Process;

/// Parses a process table from a readable byte stream.
pub fn load_processes<R: Read>(reader: R) -> Result<Vec<Process>, SimError> {
    let mut table = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let mut processes = Vec::new();
    for (index, record) in table.records().enumerate() {
        let row = index + 1;
        let record = record.map_err(|err| SimError::Parse {
            row,
            reason: err.to_string(),
        })?;
        processes.push(parse_row(&record, row)?);
    }

    debug!("loaded {} processes", processes.len());
    Ok(processes)
}

fn parse_row(record: &StringRecord, row: usize) -> Result<Process, SimError> {
    if record.len() < 3 || record.len() > 4 {
        return Err(SimError::Parse {
            row,
            reason: format!("expected 3 or 4 fields, found {}", record.len()),
        });
    }

    let field = |col: usize| {
        record[col].parse::<i64>().map_err(|_| SimError::Parse {
            row,
            reason: format!("non-integer field '{}'", &record[col]),
        })
    };

    let mut process = Process::new(field(0)?, field(1)?, field(2)?);
    if record.len() == 4 {
        process = process.with_priority(field(3)?);
    }
    Ok(process)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_three_column_rows() {
        let input = "1,24,0\n2,3,0\n3,3,0\n";
        let processes = load_processes(input.as_bytes()).unwrap();
        assert_eq!(
            processes,
            vec![
                Process::new(1, 24, 0),
                Process::new(2, 3, 0),
                Process::new(3, 3, 0),
            ]
        );
    }

    #[test]
    fn test_optional_priority_column() {
        let input = "1,5,0,2\n2,3,1,-1\n";
        let processes = load_processes(input.as_bytes()).unwrap();
        assert_eq!(processes[0].priority, 2);
        assert_eq!(processes[1].priority, -1);
    }

    #[test]
    fn test_fields_are_trimmed() {
        let processes = load_processes(" 1 , 24 , 0 ".as_bytes()).unwrap();
        assert_eq!(processes, vec![Process::new(1, 24, 0)]);
    }

    #[test]
    fn test_non_integer_field_is_fatal() {
        let err = load_processes("1,24,0\n2,abc,0\n".as_bytes()).unwrap_err();
        match err {
            SimError::Parse { row, reason } => {
                assert_eq!(row, 2);
                assert!(reason.contains("abc"));
            }
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_short_row_is_fatal() {
        let err = load_processes("1,24\n".as_bytes()).unwrap_err();
        assert!(matches!(err, SimError::Parse { row: 1, .. }));
    }

    #[test]
    fn test_long_row_is_fatal() {
        let err = load_processes("1,24,0,1,9\n".as_bytes()).unwrap_err();
        assert!(matches!(err, SimError::Parse { row: 1, .. }));
    }

    #[test]
    fn test_empty_input_loads_zero_processes() {
        // An empty table parses cleanly; rejecting it is validation's job.
        let processes = load_processes("".as_bytes()).unwrap();
        assert!(processes.is_empty());
    }
}

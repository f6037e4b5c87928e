//! Command-line entry point.
//!
//! The only layer with side effects: argument handling, file opening, log
//! initialization, rendering to stdout, and error-to-exit-code translation.
//! Takes exactly one positional argument naming the process table and runs
//! all four policies against it; any load, parse, or validation failure
//! aborts with a non-zero exit and no partial output.

use std::env;
use std::fs::File;
use std::io::{self, Write};

use anyhow::{Context, Result};
use log::info;

use sched_sim::error::SimError;
use sched_sim::{loader, policy, report, validation};

fn main() -> Result<()> {
    env_logger::init();

    let mut args = env::args().skip(1);
    let path = match (args.next(), args.next()) {
        (Some(path), None) => path,
        _ => return Err(SimError::Usage.into()),
    };

    let file = File::open(&path)
        .map_err(SimError::Io)
        .with_context(|| format!("opening scheduling file '{path}'"))?;
    let processes = loader::load_processes(file)
        .with_context(|| format!("parsing scheduling file '{path}'"))?;
    validation::validate_processes(&processes).map_err(SimError::Invalid)?;
    info!("loaded {} processes from {}", processes.len(), path);

    let mut stdout = io::stdout().lock();
    for (policy, run) in policy::run_all(&processes)? {
        write!(stdout, "{}", report::render(policy.title(), &run))?;
    }

    Ok(())
}

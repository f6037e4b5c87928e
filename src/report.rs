//! Plain-text rendering of a policy run.
//!
//! Produces a title banner, a Gantt-style bar of the timeline, and a
//! schedule table with per-process rows and run averages. Pure string
//! formatting over an already-computed [`PolicyRun`]; column widths and
//! padding are presentation choices with no bearing on the numbers.

use crate::metrics::ProcessReport;
use crate::models::Timeline;
use crate::policy::PolicyRun;

const GANTT_CELL: usize = 8;
const COLUMNS: usize = 7;
const HEADERS: [&str; COLUMNS] = [
    "ID",
    "Priority",
    "Burst",
    "Arrival",
    "Wait",
    "Turnaround",
    "Exit",
];

/// Renders one policy run under the given title.
pub fn render(title: &str, run: &PolicyRun) -> String {
    let mut out = String::new();
    banner(&mut out, title);
    gantt(&mut out, &run.timeline);
    table(&mut out, run);
    out
}

fn banner(out: &mut String, title: &str) {
    let rule = "-".repeat(title.len() * 2);
    out.push_str(&rule);
    out.push('\n');
    out.push_str(&" ".repeat(title.len() / 2));
    out.push_str(title);
    out.push('\n');
    out.push_str(&rule);
    out.push('\n');
}

fn gantt(out: &mut String, timeline: &Timeline) {
    out.push_str("Gantt schedule\n");

    out.push('|');
    for slice in &timeline.slices {
        out.push_str(&format!("{:^GANTT_CELL$}|", slice.process_id));
    }
    out.push('\n');

    for slice in &timeline.slices {
        out.push_str(&format!("{:<width$}", slice.start, width = GANTT_CELL + 1));
    }
    if let Some(last) = timeline.slices.last() {
        out.push_str(&last.stop.to_string());
    }
    out.push_str("\n\n");
}

fn table(out: &mut String, run: &PolicyRun) {
    out.push_str("Schedule table\n");

    let rows: Vec<[String; COLUMNS]> = run.reports.iter().map(report_row).collect();
    let footer = [
        String::new(),
        String::new(),
        String::new(),
        String::new(),
        format!("avg {:.2}", run.metrics.average_wait),
        format!("avg {:.2}", run.metrics.average_turnaround),
        format!("{:.2}/t", run.metrics.throughput),
    ];

    let mut widths = [0usize; COLUMNS];
    for col in 0..COLUMNS {
        widths[col] = HEADERS[col].len();
        for row in rows.iter().chain(std::iter::once(&footer)) {
            widths[col] = widths[col].max(row[col].len());
        }
    }

    rule(out, &widths);
    line(out, &HEADERS.map(String::from), &widths);
    rule(out, &widths);
    for row in &rows {
        line(out, row, &widths);
    }
    rule(out, &widths);
    line(out, &footer, &widths);
    rule(out, &widths);
    out.push('\n');
}

fn report_row(r: &ProcessReport) -> [String; COLUMNS] {
    [
        r.id.to_string(),
        r.priority.to_string(),
        r.burst.to_string(),
        r.arrival.to_string(),
        r.wait.to_string(),
        r.turnaround.to_string(),
        r.completion.to_string(),
    ]
}

fn rule(out: &mut String, widths: &[usize; COLUMNS]) {
    for width in widths {
        out.push('+');
        out.push_str(&"-".repeat(width + 2));
    }
    out.push_str("+\n");
}

fn line(out: &mut String, cells: &[String; COLUMNS], widths: &[usize; COLUMNS]) {
    for (cell, &width) in cells.iter().zip(widths) {
        out.push_str(&format!("| {cell:>width$} "));
    }
    out.push_str("|\n");
}

pub mod extract;
pub mod io;
pub mod metrics;
pub mod model;
pub mod table;

use std::io::Write;

use crate::config::ReportConfig;
use crate::error::PerfstatsError;

pub use extract::extract_report;
pub use io::{load_report, parse_report};
pub use metrics::GroupRow;
pub use model::{Group, Report, ReportDocument};

/// Outcome of a successful [`generate_report`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub rendered: usize,
    pub skipped: usize,
}

/// Load the report named by `config`, compute every row and write the table
/// to `out`.
///
/// Nothing is written unless loading and extraction of every group succeed
/// (subject to the configured data-error policy).
pub fn generate_report<W: Write>(
    config: &ReportConfig,
    out: &mut W,
) -> Result<RunSummary, PerfstatsError> {
    let document = load_report(&config.input_path)?;
    let (report, skipped) = extract_report(&document, config.on_data_error)?;

    let rows: Vec<GroupRow> = report
        .groups
        .iter()
        .map(|group| GroupRow::from_group(group, config))
        .collect();

    table::write_table(out, &table::columns(config), &rows)?;

    Ok(RunSummary {
        rendered: rows.len(),
        skipped,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

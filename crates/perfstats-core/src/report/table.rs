//! Fixed-width table rendering.
//!
//! The layout is described once by [`columns`]; the header and every data
//! row are produced by walking that list, so widths and alignment live in a
//! single place.

use std::io::Write;

use crate::config::ReportConfig;
use crate::error::PerfstatsError;
use crate::report::metrics::GroupRow;

/// Separator placed between adjacent cells.
pub const COLUMN_SEPARATOR: &str = " ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Right,
}

/// A single cell value before padding.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Text(String),
    Int(u64),
    /// Rendered with two decimals.
    Float(f64),
}

impl Cell {
    fn render(&self) -> String {
        match self {
            Cell::Text(s) => s.clone(),
            Cell::Int(n) => n.to_string(),
            Cell::Float(v) => format!("{v:.2}"),
        }
    }
}

/// One column of the table.
#[derive(Clone)]
pub struct Column {
    pub header: &'static str,
    pub align: Align,
    /// Minimum width; longer values widen the cell rather than being cut.
    pub width: usize,
    pub value: fn(&GroupRow) -> Cell,
}

impl Column {
    fn pad(&self, text: &str) -> String {
        let width = self.width;
        match self.align {
            Align::Left => format!("{text:<width$}"),
            Align::Right => format!("{text:>width$}"),
        }
    }
}

/// The report layout. Label and HTTP code widths follow the configured
/// maximum lengths.
pub fn columns(config: &ReportConfig) -> Vec<Column> {
    vec![
        Column {
            header: "Label",
            align: Align::Left,
            width: config.label_width(),
            value: |r| Cell::Text(r.label.clone()),
        },
        Column {
            header: "Samples",
            align: Align::Right,
            width: 8,
            value: |r| Cell::Int(r.samples),
        },
        Column {
            header: "Avg (ms)",
            align: Align::Right,
            width: 10,
            value: |r| Cell::Float(r.avg_ms),
        },
        Column {
            header: "Min",
            align: Align::Right,
            width: 8,
            value: |r| Cell::Float(r.min_ms),
        },
        Column {
            header: "Median",
            align: Align::Right,
            width: 10,
            value: |r| Cell::Float(r.median_ms),
        },
        Column {
            header: "90th %",
            align: Align::Right,
            width: 10,
            value: |r| Cell::Float(r.p90_ms),
        },
        Column {
            header: "Max",
            align: Align::Right,
            width: 8,
            value: |r| Cell::Float(r.max_ms),
        },
        Column {
            header: "HTTP Codes",
            align: Align::Left,
            width: config.http_codes_width(),
            value: |r| Cell::Text(r.http_codes.clone()),
        },
        Column {
            header: "Errors (%)",
            align: Align::Right,
            width: 10,
            value: |r| Cell::Float(r.error_percent),
        },
        Column {
            header: "Avg (KB)",
            align: Align::Right,
            width: 10,
            value: |r| Cell::Float(r.avg_kb),
        },
        Column {
            header: "Total (KB)",
            align: Align::Right,
            width: 12,
            value: |r| Cell::Float(r.total_kb),
        },
    ]
}

pub fn render_header(columns: &[Column]) -> String {
    columns
        .iter()
        .map(|c| c.pad(c.header))
        .collect::<Vec<_>>()
        .join(COLUMN_SEPARATOR)
}

pub fn render_row(columns: &[Column], row: &GroupRow) -> String {
    columns
        .iter()
        .map(|c| c.pad(&(c.value)(row).render()))
        .collect::<Vec<_>>()
        .join(COLUMN_SEPARATOR)
}

/// Header plus one line per row, each terminated by `\n`.
pub fn render_table(columns: &[Column], rows: &[GroupRow]) -> String {
    let mut out = render_header(columns);
    out.push('\n');
    for row in rows {
        out.push_str(&render_row(columns, row));
        out.push('\n');
    }
    out
}

/// Render the whole table first, then write it in one go.
pub fn write_table<W: Write>(
    out: &mut W,
    columns: &[Column],
    rows: &[GroupRow],
) -> Result<(), PerfstatsError> {
    out.write_all(render_table(columns, rows).as_bytes())?;
    out.flush()?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

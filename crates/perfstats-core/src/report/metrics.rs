use crate::config::{ReportConfig, ELLIPSIS};
use crate::report::model::{Group, OrderedCounts};

pub const PERCENTILE_MIN: &str = "0.0";
pub const PERCENTILE_MEDIAN: &str = "50.0";
pub const PERCENTILE_90: &str = "90.0";
pub const PERCENTILE_MAX: &str = "100.0";

const MS_PER_SECOND: f64 = 1000.0;
const BYTES_PER_KB: f64 = 1024.0;

/// Display-ready values for one group: times in ms, sizes in KB, text
/// already truncated.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupRow {
    pub label: String,
    pub samples: u64,
    pub avg_ms: f64,
    pub min_ms: f64,
    pub median_ms: f64,
    pub p90_ms: f64,
    pub max_ms: f64,
    pub http_codes: String,
    pub error_percent: f64,
    pub avg_kb: f64,
    pub total_kb: f64,
}

impl GroupRow {
    pub fn from_group(group: &Group, config: &ReportConfig) -> Self {
        let samples = group.sample_count();
        let percentile_ms =
            |param: &str| group.percentile_secs(param).unwrap_or(0.0) * MS_PER_SECOND;

        let (error_percent, avg_kb) = if samples > 0 {
            (
                group.failure_count as f64 / samples as f64 * 100.0,
                group.total_bytes as f64 / samples as f64 / BYTES_PER_KB,
            )
        } else {
            (0.0, 0.0)
        };

        Self {
            label: truncate(&group.label, config.label_width()),
            samples,
            avg_ms: group.avg_response_time_secs * MS_PER_SECOND,
            min_ms: percentile_ms(PERCENTILE_MIN),
            median_ms: percentile_ms(PERCENTILE_MEDIAN),
            p90_ms: percentile_ms(PERCENTILE_90),
            max_ms: percentile_ms(PERCENTILE_MAX),
            http_codes: truncate(
                &format_http_codes(&group.http_codes),
                config.http_codes_width(),
            ),
            error_percent,
            avg_kb,
            total_kb: group.total_bytes as f64 / BYTES_PER_KB,
        }
    }
}

/// Shorten `text` to at most `max_len` characters, replacing the tail with
/// `...` when anything is cut.
///
/// `max_len` is expected to be at least the ellipsis length.
pub fn truncate(text: &str, max_len: usize) -> String {
    if text.chars().count() <= max_len {
        return text.to_string();
    }
    let keep = max_len.saturating_sub(ELLIPSIS.len());
    let mut out: String = text.chars().take(keep).collect();
    out.push_str(ELLIPSIS);
    out
}

/// Render status codes as `CODE (COUNT)` pairs separated by `, `.
pub fn format_http_codes(codes: &OrderedCounts) -> String {
    codes
        .iter()
        .map(|(code, count)| format!("{code} ({count})"))
        .collect::<Vec<_>>()
        .join(", ")
}

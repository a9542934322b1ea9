use std::path::PathBuf;

use clap::Parser;
use perfstats_core::config::{DEFAULT_MAX_HTTP_CODES_LENGTH, DEFAULT_MAX_LABEL_LENGTH};
use perfstats_core::{DataErrorPolicy, ReportConfig};

#[derive(Parser, Debug)]
#[command(
    name = "perfstats",
    version,
    about = "Print a performance-test stats.xml report as a fixed-width table",
    after_help = "Exit codes: 0 success, 1 output error, 2 usage error, \
                  3 invalid group data, 4 unreadable or malformed report"
)]
pub struct Cli {
    /// Path to the stats XML report
    #[arg(value_name = "INPUT", required_unless_present = "input", conflicts_with = "input")]
    pub input_path: Option<PathBuf>,

    /// Path to the stats XML report (alternative to the positional argument)
    #[arg(long, short = 'i', value_name = "PATH")]
    pub input: Option<PathBuf>,

    /// Maximum characters shown for a group label
    #[arg(long, default_value_t = DEFAULT_MAX_LABEL_LENGTH)]
    pub max_label_length: usize,

    /// Maximum characters shown for the HTTP code distribution
    #[arg(long, default_value_t = DEFAULT_MAX_HTTP_CODES_LENGTH)]
    pub max_http_codes_length: usize,

    /// Skip groups with missing or malformed values instead of failing
    #[arg(long)]
    pub skip_invalid: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn into_config(self) -> ReportConfig {
        // clap guarantees exactly one of the two is present.
        let path = self.input.or(self.input_path).unwrap_or_default();
        ReportConfig {
            input_path: path,
            max_label_length: self.max_label_length,
            max_http_codes_length: self.max_http_codes_length,
            on_data_error: if self.skip_invalid {
                DataErrorPolicy::Skip
            } else {
                DataErrorPolicy::Abort
            },
        }
    }
}

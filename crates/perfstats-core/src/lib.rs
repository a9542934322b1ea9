pub mod config;
pub mod error;
pub mod report;

pub use config::{DataErrorPolicy, ReportConfig};
pub use error::PerfstatsError;
pub use report::{generate_report, RunSummary};

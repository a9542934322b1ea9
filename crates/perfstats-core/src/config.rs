use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Default maximum display length of a group label.
pub const DEFAULT_MAX_LABEL_LENGTH: usize = 30;

/// Default maximum display length of the rendered HTTP code distribution.
pub const DEFAULT_MAX_HTTP_CODES_LENGTH: usize = 20;

/// Marker appended to truncated text.
pub const ELLIPSIS: &str = "...";

/// What to do with a group whose required numeric values are missing or
/// malformed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DataErrorPolicy {
    /// The first invalid group fails the whole run; nothing is printed.
    #[default]
    Abort,
    /// Invalid groups are dropped with a warning; the rest still render.
    Skip,
}

/// Settings for a single report run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ReportConfig {
    pub input_path: PathBuf,
    #[serde(default = "default_max_label_length")]
    pub max_label_length: usize,
    #[serde(default = "default_max_http_codes_length")]
    pub max_http_codes_length: usize,
    #[serde(default)]
    pub on_data_error: DataErrorPolicy,
}

fn default_max_label_length() -> usize {
    DEFAULT_MAX_LABEL_LENGTH
}

fn default_max_http_codes_length() -> usize {
    DEFAULT_MAX_HTTP_CODES_LENGTH
}

impl ReportConfig {
    /// Default widths and the `Abort` policy for the given report path.
    pub fn new(input_path: impl AsRef<Path>) -> Self {
        Self {
            input_path: input_path.as_ref().to_path_buf(),
            max_label_length: DEFAULT_MAX_LABEL_LENGTH,
            max_http_codes_length: DEFAULT_MAX_HTTP_CODES_LENGTH,
            on_data_error: DataErrorPolicy::default(),
        }
    }

    /// Effective label width, never narrower than the ellipsis.
    pub fn label_width(&self) -> usize {
        self.max_label_length.max(ELLIPSIS.len())
    }

    /// Effective HTTP codes width, never narrower than the ellipsis.
    pub fn http_codes_width(&self) -> usize {
        self.max_http_codes_length.max(ELLIPSIS.len())
    }
}

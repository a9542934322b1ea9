use serde::Serialize;

#[derive(Debug, thiserror::Error)]
pub enum PerfstatsError {
    /// The report file is missing, unreadable, or not well-formed XML.
    #[error("Parse error in {path}: {reason}")]
    Parse { path: String, reason: String },

    /// A required value on a group is missing or not a valid number.
    #[error("Data error in group '{label}', field '{field}': {reason}")]
    Data {
        label: String,
        field: String,
        reason: String,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl PerfstatsError {
    pub fn parse(path: impl Into<String>, reason: impl ToString) -> Self {
        PerfstatsError::Parse {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    pub fn data(label: impl Into<String>, field: impl Into<String>, reason: impl ToString) -> Self {
        PerfstatsError::Data {
            label: label.into(),
            field: field.into(),
            reason: reason.to_string(),
        }
    }
}

impl Serialize for PerfstatsError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

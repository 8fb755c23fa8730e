use thiserror::Error;

/// Rejections raised at the HTTP boundary before input reaches the engine.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("{field}: expected 3 probabilities [buy, sell, neutral], got {len}")]
    ProbabilityLength { field: String, len: usize },

    #[error("{field}: value must be finite")]
    NotFinite { field: String },

    #[error("{field}: {value} is out of range ({expected})")]
    OutOfRange {
        field: String,
        value: f64,
        expected: &'static str,
    },

    #[error("{field}: invalid timestamp '{value}'")]
    Timestamp { field: String, value: String },
}

/// Failures of the append-only NDJSON stores.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    SerdeJson(#[from] serde_json::Error),
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum BrokerError {
    #[error("broker bridge not available in this environment")]
    Unavailable,

    #[error("order rejected: {reason}")]
    Rejected { reason: String },
}

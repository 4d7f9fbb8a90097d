use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum IntelError {
    #[error("input file not found: {}", path.display())]
    MissingInput { path: PathBuf },

    #[error("input is missing required column `{column}`")]
    MissingColumn { column: &'static str },

    #[error("row {line}: {reason}")]
    MalformedRow { line: u64, reason: String },

    #[error("no prospects found with score >= {min_score}")]
    NoProspects { min_score: i32 },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

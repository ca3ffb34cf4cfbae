use std::path::PathBuf;

use thiserror::Error;

/// Everything that can stop the load → reshape → plot pipeline.
#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot decode {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("grid shape {steps}x{slots} has an empty dimension")]
    EmptyShape { steps: usize, slots: usize },

    #[error("record {record} has {len} steps, grid holds {steps}")]
    StepOutOfRange {
        record: usize,
        len: usize,
        steps: usize,
    },

    #[error("record {record}: step {step} already holds {slots} values")]
    RowFull {
        record: usize,
        step: usize,
        slots: usize,
    },

    #[error("render error: {0}")]
    Render(String),
}

pub type Result<T, E = ProfileError> = std::result::Result<T, E>;

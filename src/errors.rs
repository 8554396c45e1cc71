use thiserror::Error;

use crate::mass_properties::load::StageRole;

#[derive(Debug, Error)]
pub enum MassPropertiesError {
    #[error("Missing input for stage {stage}, item '{item}': {reason}")]
    MissingInput {
        stage: usize,
        item: String,
        reason: String,
    },

    #[error("No burn condition for stage {stage} ({role:?})")]
    MissingBurnCondition { stage: usize, role: StageRole },

    #[error("Schema mismatch: {0}")]
    SchemaMismatch(String),

    #[error("Numeric degeneracy: {0}")]
    Degenerate(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type MassResult<T> = Result<T, MassPropertiesError>;

impl MassPropertiesError {
    pub fn missing(stage: usize, item: impl Into<String>, reason: impl Into<String>) -> Self {
        MassPropertiesError::MissingInput {
            stage,
            item: item.into(),
            reason: reason.into(),
        }
    }
}

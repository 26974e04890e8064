use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    /// Shape/required-field failure, tagged with the offending wire field.
    #[error("invalid {field}: {reason}")]
    Validation { field: &'static str, reason: String },
    #[error("not found: {0}")]
    NotFound(String),
    /// Malformed calendar-date text.
    #[error("unparseable date in {field}: {value:?}")]
    Parse { field: &'static str, value: String },
    /// Referential-integrity rejection, carries a caller-facing message.
    #[error("{0}")]
    Conflict(String),
    #[error("database error: {0}")]
    Db(String),
    #[error("model error: {0}")]
    Model(#[from] models::errors::ModelError),
}

impl ServiceError {
    pub fn not_found(entity: &str) -> Self {
        Self::NotFound(format!("{} not found", entity))
    }

    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Validation { field, reason: reason.into() }
    }
}

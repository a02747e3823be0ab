use thiserror::Error;

/// Domain failures. Carried inside `anyhow::Error`; match with `downcast_ref`.
///
/// Storage failures are not represented here; they surface as `sqlx::Error`.
#[derive(Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum IronlogError {
    #[error("invalid input: {0}")]
    Invalid(String),
    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: i64 },
    #[error("workout session {0} is already finished")]
    SessionFinished(i64),
    #[error("workout session {0} is still in progress")]
    ActiveSessionExists(i64),
}

impl IronlogError {
    pub fn not_found(entity: &'static str, id: i64) -> Self {
        IronlogError::NotFound { entity, id }
    }
}

/// Returns the domain error behind `err`, if there is one.
pub fn domain_error(err: &anyhow::Error) -> Option<&IronlogError> {
    err.downcast_ref::<IronlogError>()
}

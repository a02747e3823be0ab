use thiserror::Error as ThisError;
use uniffi::Error;

use crate::errors::IronlogError;

/// Error surface for foreign callers. Flattened to its message on the other side.
#[derive(Debug, ThisError, Error)]
#[uniffi(flat_error)]
#[non_exhaustive]
pub enum IronlogFfiError {
    #[error("storage error: {0}")]
    Storage(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Invalid(String),
    #[error("{0}")]
    Conflict(String),
    #[error("error: {0}")]
    Common(String),
}

impl From<anyhow::Error> for IronlogFfiError {
    fn from(e: anyhow::Error) -> Self {
        if let Some(domain) = e.downcast_ref::<IronlogError>() {
            return match domain {
                IronlogError::Invalid(_) => IronlogFfiError::Invalid(domain.to_string()),
                IronlogError::NotFound { .. } => IronlogFfiError::NotFound(domain.to_string()),
                IronlogError::SessionFinished(_) | IronlogError::ActiveSessionExists(_) => {
                    IronlogFfiError::Conflict(domain.to_string())
                }
            };
        }
        if e.downcast_ref::<sqlx::Error>().is_some() {
            return IronlogFfiError::Storage(e.to_string());
        }
        IronlogFfiError::Common(e.to_string())
    }
}

impl From<IronlogError> for IronlogFfiError {
    fn from(e: IronlogError) -> Self {
        anyhow::Error::from(e).into()
    }
}

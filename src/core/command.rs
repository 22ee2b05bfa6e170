use async_trait::async_trait;
use thiserror::Error;
use crate::core::library::CatalogueError;

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("{message} {reason_code:?} {retryable}")]
    Database {
        message: String,
        reason_code: Option<String>,
        retryable: bool,
    },
    #[error("{message}")]
    DuplicateKey {
        message: String,
    },
    #[error("{message}")]
    NotFound {
        message: String,
    },
    #[error("{message} {reason_code:?} {retryable}")]
    Runtime {
        message: String,
        reason_code: Option<String>,
        retryable: bool,
    },
    #[error("{message}")]
    Serialization {
        message: String,
    },
    #[error("{message} {reason_code:?}")]
    Validation {
        message: String,
        reason_code: Option<String>,
    },
}

#[async_trait]
pub trait Command<Request, Response> {
    async fn execute(&self, req: Request) -> Result<Response, CommandError>;
}

impl From<CatalogueError> for CommandError {
    fn from(other: CatalogueError) -> Self {
        match other {
            CatalogueError::Database { message, reason_code, retryable } => {
                CommandError::Database { message, reason_code, retryable }
            }
            CatalogueError::DuplicateKey { message } => {
                CommandError::DuplicateKey { message }
            }
            CatalogueError::NotFound { message } => {
                CommandError::NotFound { message }
            }
            CatalogueError::CurrentlyUnavailable { message, reason_code, retryable } => {
                CommandError::Runtime { message, reason_code, retryable }
            }
            CatalogueError::Validation { message, reason_code } => {
                CommandError::Validation { message, reason_code }
            }
            CatalogueError::Serialization { message } => {
                CommandError::Serialization { message }
            }
            CatalogueError::Runtime { message, reason_code } => {
                CommandError::Runtime { message, reason_code, retryable: false }
            }
        }
    }
}

use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogueError {
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
    // Raised when the store cannot hand out a connection in time or the
    // underlying file cannot be reached. The caller may retry.
    #[error("{message} {reason_code:?} {retryable}")]
    CurrentlyUnavailable {
        message: String,
        reason_code: Option<String>,
        retryable: bool,
    },
    #[error("{message} {reason_code:?}")]
    Validation {
        message: String,
        reason_code: Option<String>,
    },
    #[error("{message}")]
    Serialization {
        message: String,
    },
    #[error("{message} {reason_code:?}")]
    Runtime {
        message: String,
        reason_code: Option<String>,
    },
}

impl CatalogueError {
    pub fn database(message: &str, reason_code: Option<String>, retryable: bool) -> CatalogueError {
        CatalogueError::Database { message: message.to_string(), reason_code, retryable }
    }

    pub fn duplicate_key(message: &str) -> CatalogueError {
        CatalogueError::DuplicateKey { message: message.to_string() }
    }

    pub fn not_found(message: &str) -> CatalogueError {
        CatalogueError::NotFound { message: message.to_string() }
    }

    pub fn unavailable(message: &str, reason_code: Option<String>, retryable: bool) -> CatalogueError {
        CatalogueError::CurrentlyUnavailable { message: message.to_string(), reason_code, retryable }
    }

    pub fn validation(message: &str, reason_code: Option<String>) -> CatalogueError {
        CatalogueError::Validation { message: message.to_string(), reason_code }
    }

    pub fn serialization(message: &str) -> CatalogueError {
        CatalogueError::Serialization { message: message.to_string() }
    }

    pub fn runtime(message: &str, reason_code: Option<String>) -> CatalogueError {
        CatalogueError::Runtime { message: message.to_string(), reason_code }
    }

    pub fn retryable(&self) -> bool {
        match self {
            CatalogueError::Database { retryable, .. } => { *retryable }
            CatalogueError::DuplicateKey { .. } => { false }
            CatalogueError::NotFound { .. } => { false }
            CatalogueError::CurrentlyUnavailable { retryable, .. } => { *retryable }
            CatalogueError::Validation { .. } => { false }
            CatalogueError::Serialization { .. } => { false }
            CatalogueError::Runtime { .. } => { false }
        }
    }
}

/// A specialized Result type for the catalogue store and service.
pub type CatalogueResult<T> = Result<T, CatalogueError>;

#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BookType {
    Hardcover,
    Softcover,
    Ebook,
    Audiobook,
}

impl FromStr for BookType {
    type Err = CatalogueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "HARDCOVER" => Ok(BookType::Hardcover),
            "SOFTCOVER" => Ok(BookType::Softcover),
            "EBOOK" => Ok(BookType::Ebook),
            "AUDIOBOOK" => Ok(BookType::Audiobook),
            other => Err(CatalogueError::validation(
                format!("unknown book type {}", other).as_str(), Some("book_type".to_string()))),
        }
    }
}

impl Display for BookType {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            BookType::Hardcover => write!(f, "HARDCOVER"),
            BookType::Softcover => write!(f, "SOFTCOVER"),
            BookType::Ebook => write!(f, "EBOOK"),
            BookType::Audiobook => write!(f, "AUDIOBOOK"),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::core::library::{BookType, CatalogueError};

    #[tokio::test]
    async fn test_should_create_database_error() {
        assert!(matches!(CatalogueError::database("test", None, false), CatalogueError::Database{ message: _, reason_code: _, retryable: _ }));
    }

    #[tokio::test]
    async fn test_should_create_duplicate_key_error() {
        assert!(matches!(CatalogueError::duplicate_key("test"), CatalogueError::DuplicateKey{ message: _ }));
    }

    #[tokio::test]
    async fn test_should_create_not_found_error() {
        assert!(matches!(CatalogueError::not_found("test"), CatalogueError::NotFound{ message: _ }));
    }

    #[tokio::test]
    async fn test_should_create_validation_error() {
        assert!(matches!(CatalogueError::validation("test", None), CatalogueError::Validation{ message: _, reason_code: _ }));
    }

    #[tokio::test]
    async fn test_should_create_retryable_error() {
        assert!(!CatalogueError::database("test", None, false).retryable());
        assert!(!CatalogueError::duplicate_key("test").retryable());
        assert!(!CatalogueError::not_found("test").retryable());
        assert!(!CatalogueError::unavailable("test", None, false).retryable());
        assert!(CatalogueError::unavailable("test", None, true).retryable());
        assert!(!CatalogueError::validation("test", None).retryable());
        assert!(!CatalogueError::serialization("test").retryable());
        assert!(!CatalogueError::runtime("test", None).retryable());
    }

    #[tokio::test]
    async fn test_should_display_message() {
        assert_eq!("book 1 missing", CatalogueError::not_found("book 1 missing").to_string());
    }

    #[tokio::test]
    async fn test_should_format_book_type() {
        let types = vec![
            BookType::Hardcover,
            BookType::Softcover,
            BookType::Ebook,
            BookType::Audiobook,
        ];
        for book_type in types {
            let str = book_type.to_string();
            let parsed: BookType = str.parse().expect("should parse book type");
            assert_eq!(book_type, parsed);
        }
        assert!("PAPERBACK".parse::<BookType>().is_err());
    }

    #[tokio::test]
    async fn test_should_serialize_book_type_upper_case() {
        assert_eq!("\"EBOOK\"", serde_json::to_string(&BookType::Ebook).expect("should serialize"));
        let parsed: BookType = serde_json::from_str("\"AUDIOBOOK\"").expect("should deserialize");
        assert_eq!(BookType::Audiobook, parsed);
    }
}

use std::str::FromStr;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use crate::core::domain::Configuration;
use crate::core::library::{CatalogueError, CatalogueResult};
use crate::core::repository::RepositoryStore;

const CREATE_BOOKS_TABLE: &str = "CREATE TABLE IF NOT EXISTS books (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    isbn TEXT NOT NULL UNIQUE,
    publish_date TEXT NOT NULL,
    price TEXT NOT NULL,
    book_type TEXT NOT NULL,
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL
)";

// helper method to build the connection pool for the configured store
pub(crate) async fn build_db_pool(config: &Configuration, store: RepositoryStore) -> CatalogueResult<SqlitePool> {
    match store {
        RepositoryStore::Sqlite => {
            let options = SqliteConnectOptions::from_str(config.database_url.as_str())?
                .create_if_missing(true);
            let pool = SqlitePoolOptions::new()
                .max_connections(config.max_connections)
                .connect_with(options)
                .await?;
            Ok(pool)
        }
        RepositoryStore::LocalSqlite => {
            // a private in-memory database lives as long as its only connection
            let options = SqliteConnectOptions::from_str("sqlite::memory:")?;
            let pool = SqlitePoolOptions::new()
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
                .connect_with(options)
                .await?;
            Ok(pool)
        }
    }
}

pub(crate) async fn create_table(pool: &SqlitePool) -> CatalogueResult<()> {
    sqlx::query(CREATE_BOOKS_TABLE)
        .execute(pool)
        .await
        .map(|_| ())
        .map_err(|err| CatalogueError::database(
            format!("failed to create books table due to {}", err).as_str(), None, false))
}

impl From<sqlx::Error> for CatalogueError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => {
                CatalogueError::not_found("row not found")
            }
            sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
                CatalogueError::duplicate_key(format!("{}", db_err).as_str())
            }
            sqlx::Error::Database(ref db_err) => {
                let reason = db_err.code().map(|c| c.to_string());
                CatalogueError::database(format!("{}", db_err).as_str(), reason, false)
            }
            sqlx::Error::PoolTimedOut => {
                CatalogueError::unavailable("sql pool timed out", Some("PoolTimedOut".to_string()), true)
            }
            sqlx::Error::Io(io_err) => {
                CatalogueError::unavailable(format!("{:?}", io_err).as_str(), Some("Io".to_string()), true)
            }
            sqlx::Error::Configuration(cfg_err) => {
                CatalogueError::validation(format!("{}", cfg_err).as_str(), Some("Configuration".to_string()))
            }
            other => {
                CatalogueError::database(format!("{:?}", other).as_str(), None, false)
            }
        }
    }
}

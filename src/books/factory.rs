use crate::books::repository::BookRepository;
use crate::books::repository::sql_book_repository::SqlBookRepository;
use crate::core::domain::Configuration;
use crate::core::library::CatalogueResult;
use crate::core::repository::RepositoryStore;
use crate::utils::db::{build_db_pool, create_table};

pub(crate) async fn create_book_repository(config: &Configuration, store: RepositoryStore) -> CatalogueResult<Box<dyn BookRepository>> {
    let pool = build_db_pool(config, store).await?;
    create_table(&pool).await?;
    Ok(Box::new(SqlBookRepository::new(pool)))
}

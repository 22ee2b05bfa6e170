pub mod sql_book_repository;

use async_trait::async_trait;
use crate::books::domain::model::BookEntity;
use crate::core::library::CatalogueResult;
use crate::core::repository::Repository;


#[async_trait]
pub trait BookRepository: Repository<BookEntity> {
    async fn find_by_isbn(&self, isbn: &str) -> CatalogueResult<Option<BookEntity>>;

    async fn exists_by_isbn(&self, isbn: &str) -> CatalogueResult<bool>;

    async fn delete_by_isbn(&self, isbn: &str) -> CatalogueResult<usize>;
}

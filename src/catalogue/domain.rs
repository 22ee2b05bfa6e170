pub mod service;

use async_trait::async_trait;
use crate::books::dto::{BookDto, BookPatch};
use crate::core::library::CatalogueResult;

#[async_trait]
pub trait CatalogueService: Sync + Send {
    async fn list_books(&self) -> CatalogueResult<Vec<BookDto>>;
    async fn find_book_by_isbn(&self, isbn: &str) -> CatalogueResult<BookDto>;
    async fn add_book(&self, book: &BookDto) -> CatalogueResult<BookDto>;
    async fn update_book(&self, isbn: &str, patch: &BookPatch) -> CatalogueResult<BookDto>;
    async fn remove_book(&self, isbn: &str) -> CatalogueResult<()>;
}

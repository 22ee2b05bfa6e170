use async_trait::async_trait;
use crate::books::domain::model::BookEntity;
use crate::books::dto::{BookDto, BookPatch};
use crate::books::repository::BookRepository;
use crate::catalogue::domain::CatalogueService;
use crate::core::domain::Configuration;
use crate::core::library::{CatalogueError, CatalogueResult};
use crate::core::repository::Repository;

pub(crate) struct CatalogueServiceImpl {
    branch_id: String,
    book_repository: Box<dyn BookRepository>,
}

impl CatalogueServiceImpl {
    pub(crate) fn new(config: &Configuration, book_repository: Box<dyn BookRepository>) -> Self {
        Self {
            branch_id: config.branch_id.to_string(),
            book_repository,
        }
    }

    async fn load_by_isbn(&self, isbn: &str) -> CatalogueResult<BookDto> {
        self.book_repository.find_by_isbn(isbn).await?
            .map(|b| BookDto::from(&b))
            .ok_or_else(|| CatalogueError::not_found(format!("book not found with isbn {}", isbn).as_str()))
    }
}

#[async_trait]
impl CatalogueService for CatalogueServiceImpl {
    async fn list_books(&self) -> CatalogueResult<Vec<BookDto>> {
        let res = self.book_repository.find_all().await?;
        Ok(res.iter().map(BookDto::from).collect())
    }

    async fn find_book_by_isbn(&self, isbn: &str) -> CatalogueResult<BookDto> {
        self.load_by_isbn(isbn).await
    }

    // The existence check only produces a clean error; the unique isbn column
    // still rejects a concurrent insert that slips past it.
    async fn add_book(&self, book: &BookDto) -> CatalogueResult<BookDto> {
        if self.book_repository.exists_by_isbn(book.isbn.as_str()).await? {
            return Err(CatalogueError::duplicate_key(
                format!("Cannot add book. A book with ISBN '{}' already exists.", book.isbn).as_str()));
        }
        let mut entity = BookEntity::from(book);
        entity.id = None;
        let saved = self.book_repository.save(&entity).await?;
        tracing::info!(branch = %self.branch_id, isbn = %saved.isbn, id = ?saved.id, "added book");
        Ok(BookDto::from(&saved))
    }

    async fn update_book(&self, isbn: &str, patch: &BookPatch) -> CatalogueResult<BookDto> {
        let mut existing = self.load_by_isbn(isbn).await?;
        if !patch.apply_to(&mut existing) {
            tracing::debug!(branch = %self.branch_id, isbn, "update left book unchanged");
            return Ok(existing);
        }
        let saved = self.book_repository.save(&BookEntity::from(&existing)).await?;
        tracing::info!(branch = %self.branch_id, isbn, "updated book");
        Ok(BookDto::from(&saved))
    }

    async fn remove_book(&self, isbn: &str) -> CatalogueResult<()> {
        let removed = self.book_repository.delete_by_isbn(isbn).await?;
        if removed == 0 {
            return Err(CatalogueError::not_found(format!("book with isbn {} not found", isbn).as_str()));
        }
        tracing::info!(branch = %self.branch_id, isbn, "removed book");
        Ok(())
    }
}

impl From<&BookEntity> for BookDto {
    fn from(other: &BookEntity) -> Self {
        Self {
            id: other.id,
            name: other.name.to_string(),
            isbn: other.isbn.to_string(),
            publish_date: other.publish_date,
            price: other.price,
            book_type: other.book_type,
            created_at: other.created_at,
            updated_at: other.updated_at,
        }
    }
}

impl From<&BookDto> for BookEntity {
    fn from(other: &BookDto) -> Self {
        Self {
            id: other.id,
            name: other.name.to_string(),
            isbn: other.isbn.to_string(),
            publish_date: other.publish_date,
            price: other.price,
            book_type: other.book_type,
            created_at: other.created_at,
            updated_at: other.updated_at,
        }
    }
}

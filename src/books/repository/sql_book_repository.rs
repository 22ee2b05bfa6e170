use std::str::FromStr;

use async_trait::async_trait;
use chrono::Utc;
use rust_decimal::Decimal;
use sqlx::Row;
use sqlx::sqlite::{SqlitePool, SqliteRow};

use crate::books::domain::model::BookEntity;
use crate::books::repository::BookRepository;
use crate::core::library::{BookType, CatalogueError, CatalogueResult};
use crate::core::repository::Repository;

const SELECT_ALL_BOOKS: &str = "SELECT id, name, isbn, publish_date, price, book_type, created_at, updated_at FROM books ORDER BY id";
const SELECT_BOOK_BY_ID: &str = "SELECT id, name, isbn, publish_date, price, book_type, created_at, updated_at FROM books WHERE id = ?";
const SELECT_BOOK_BY_ISBN: &str = "SELECT id, name, isbn, publish_date, price, book_type, created_at, updated_at FROM books WHERE isbn = ?";

#[derive(Debug, Clone)]
pub struct SqlBookRepository {
    pool: SqlitePool,
}

impl SqlBookRepository {
    pub(crate) fn new(pool: SqlitePool) -> Self {
        Self {
            pool,
        }
    }

    async fn insert(&self, entity: &BookEntity) -> CatalogueResult<BookEntity> {
        let now = Utc::now().naive_utc();
        let res = sqlx::query("INSERT INTO books (name, isbn, publish_date, price, book_type, created_at, updated_at) VALUES (?, ?, ?, ?, ?, ?, ?)")
            .bind(entity.name.as_str())
            .bind(entity.isbn.as_str())
            .bind(entity.publish_date)
            .bind(entity.price.to_string())
            .bind(entity.book_type.to_string())
            .bind(now)
            .bind(now)
            .execute(&self.pool)
            .await?;
        let mut saved = entity.clone();
        saved.id = Some(res.last_insert_rowid());
        saved.created_at = now;
        saved.updated_at = now;
        Ok(saved)
    }

    // the isbn column is never part of an update
    async fn update(&self, id: i64, entity: &BookEntity) -> CatalogueResult<BookEntity> {
        let now = Utc::now().naive_utc();
        let res = sqlx::query("UPDATE books SET name = ?, publish_date = ?, price = ?, book_type = ?, updated_at = ? WHERE id = ?")
            .bind(entity.name.as_str())
            .bind(entity.publish_date)
            .bind(entity.price.to_string())
            .bind(entity.book_type.to_string())
            .bind(now)
            .bind(id)
            .execute(&self.pool)
            .await?;
        if res.rows_affected() == 0 {
            return Err(CatalogueError::not_found(format!("book not found for id {}", id).as_str()));
        }
        self.find_by_id(id).await?
            .ok_or_else(|| CatalogueError::not_found(format!("book not found for id {}", id).as_str()))
    }
}

#[async_trait]
impl Repository<BookEntity> for SqlBookRepository {
    async fn find_all(&self) -> CatalogueResult<Vec<BookEntity>> {
        let rows = sqlx::query(SELECT_ALL_BOOKS)
            .fetch_all(&self.pool)
            .await?;
        rows.iter().map(map_to_book).collect()
    }

    async fn find_by_id(&self, id: i64) -> CatalogueResult<Option<BookEntity>> {
        sqlx::query(SELECT_BOOK_BY_ID)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .as_ref()
            .map(map_to_book)
            .transpose()
    }

    async fn save(&self, entity: &BookEntity) -> CatalogueResult<BookEntity> {
        match entity.id {
            Some(id) => self.update(id, entity).await,
            None => self.insert(entity).await,
        }
    }

    async fn delete_by_id(&self, id: i64) -> CatalogueResult<usize> {
        sqlx::query("DELETE FROM books WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map(|res| res.rows_affected() as usize)
            .map_err(CatalogueError::from)
    }
}

#[async_trait]
impl BookRepository for SqlBookRepository {
    async fn find_by_isbn(&self, isbn: &str) -> CatalogueResult<Option<BookEntity>> {
        sqlx::query(SELECT_BOOK_BY_ISBN)
            .bind(isbn)
            .fetch_optional(&self.pool)
            .await?
            .as_ref()
            .map(map_to_book)
            .transpose()
    }

    async fn exists_by_isbn(&self, isbn: &str) -> CatalogueResult<bool> {
        let row = sqlx::query("SELECT EXISTS(SELECT 1 FROM books WHERE isbn = ?) AS found")
            .bind(isbn)
            .fetch_one(&self.pool)
            .await?;
        Ok(row.try_get::<i64, _>("found")? != 0)
    }

    async fn delete_by_isbn(&self, isbn: &str) -> CatalogueResult<usize> {
        sqlx::query("DELETE FROM books WHERE isbn = ?")
            .bind(isbn)
            .execute(&self.pool)
            .await
            .map(|res| res.rows_affected() as usize)
            .map_err(CatalogueError::from)
    }
}

fn map_to_book(row: &SqliteRow) -> CatalogueResult<BookEntity> {
    let price: String = row.try_get("price")?;
    let book_type: String = row.try_get("book_type")?;
    Ok(BookEntity {
        id: Some(row.try_get("id")?),
        name: row.try_get("name")?,
        isbn: row.try_get("isbn")?,
        publish_date: row.try_get("publish_date")?,
        price: Decimal::from_str(price.as_str()).map_err(|err| CatalogueError::serialization(
            format!("invalid stored price {:?}: {}", price, err).as_str()))?,
        book_type: BookType::from_str(book_type.as_str())?,
        created_at: row.try_get("created_at")?,
        updated_at: row.try_get("updated_at")?,
    })
}

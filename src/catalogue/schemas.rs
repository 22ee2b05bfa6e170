//! OpenAPI schema definitions for the book payloads.
//!
//! The request and response types keep their serde shape (dates through
//! `dd/MM/yyyy` helpers, prices as `Decimal`); these wrappers describe the
//! same JSON for the generated document.

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::core::library::BookType`].
#[derive(ToSchema)]
#[schema(as = BookType)]
#[allow(dead_code)]
pub enum BookTypeSchema {
    #[schema(rename = "HARDCOVER")]
    Hardcover,
    #[schema(rename = "SOFTCOVER")]
    Softcover,
    #[schema(rename = "EBOOK")]
    Ebook,
    #[schema(rename = "AUDIOBOOK")]
    Audiobook,
}

/// Payload for adding a book. Every field is required.
#[derive(ToSchema)]
#[schema(as = BookRequest, rename_all = "camelCase")]
#[allow(dead_code)]
pub struct BookRequestSchema {
    /// Name of the book
    #[schema(example = "Effective Java")]
    name: String,
    /// ISBN of the book
    #[schema(example = "978-0134685991")]
    isbn: String,
    /// Publish date as dd/MM/yyyy
    #[schema(pattern = r"^\d{2}/\d{2}/\d{4}$", example = "31/12/2025")]
    publish_date: String,
    /// Price of the book
    #[schema(minimum = 0.0, example = 149.99)]
    price: f64,
    /// Type of book
    book_type: BookTypeSchema,
}

/// Payload for updating a book. Absent fields keep their stored value and
/// the isbn is taken from the path.
#[derive(ToSchema)]
#[schema(as = BookUpdateRequest, rename_all = "camelCase")]
#[allow(dead_code)]
pub struct BookUpdateRequestSchema {
    /// Name of the book
    #[schema(example = "Effective Java")]
    name: Option<String>,
    /// Publish date as dd/MM/yyyy
    #[schema(pattern = r"^\d{2}/\d{2}/\d{4}$", example = "31/12/2025")]
    publish_date: Option<String>,
    /// Price of the book
    #[schema(minimum = 0.0, example = 20)]
    price: Option<f64>,
    /// Type of book
    book_type: Option<BookTypeSchema>,
}

/// OpenAPI schema for [`crate::books::dto::BookResponse`].
#[derive(ToSchema)]
#[schema(as = BookResponse, rename_all = "camelCase")]
#[allow(dead_code)]
pub struct BookResponseSchema {
    /// Name of the book
    #[schema(example = "Effective Java")]
    name: String,
    /// ISBN of the book
    #[schema(example = "978-0134685991")]
    isbn: String,
    /// Publish date as dd/MM/yyyy
    #[schema(pattern = r"^\d{2}/\d{2}/\d{4}$", example = "31/12/2025")]
    publish_date: String,
    /// Price of the book
    #[schema(example = 149.99)]
    price: f64,
    /// Type of book
    book_type: BookTypeSchema,
}

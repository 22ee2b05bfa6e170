use chrono::{NaiveDate, NaiveDateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use crate::core::library::BookType;

// BookDto is a data transfer object for Catalogue service
#[derive(Debug, Clone, PartialEq)]
pub struct BookDto {
    pub id: Option<i64>,
    pub name: String,
    pub isbn: String,
    pub publish_date: NaiveDate,
    pub price: Decimal,
    pub book_type: BookType,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl BookDto {
    pub fn new(name: &str, isbn: &str, publish_date: NaiveDate, price: Decimal, book_type: BookType) -> BookDto {
        BookDto {
            id: None,
            name: name.to_string(),
            isbn: isbn.to_string(),
            publish_date,
            price,
            book_type,
            created_at: Utc::now().naive_utc(),
            updated_at: Utc::now().naive_utc(),
        }
    }
}

/// Partial update of the mutable book fields. `None` leaves a field as stored;
/// the isbn is not part of a patch because it never changes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookPatch {
    pub name: Option<String>,
    pub publish_date: Option<NaiveDate>,
    pub price: Option<Decimal>,
    pub book_type: Option<BookType>,
}

impl BookPatch {
    /// Overwrites each field of `book` whose supplied value differs from the
    /// stored one and returns whether any field changed.
    pub fn apply_to(&self, book: &mut BookDto) -> bool {
        let mut changed = false;
        changed |= replace_if_changed(&mut book.name, self.name.as_ref());
        changed |= replace_if_changed(&mut book.publish_date, self.publish_date.as_ref());
        changed |= replace_if_changed(&mut book.price, self.price.as_ref());
        changed |= replace_if_changed(&mut book.book_type, self.book_type.as_ref());
        changed
    }
}

fn replace_if_changed<T: PartialEq + Clone>(current: &mut T, supplied: Option<&T>) -> bool {
    match supplied {
        Some(value) if value != current => {
            *current = value.clone();
            true
        }
        _ => false,
    }
}

// BookResponse is the external payload for a book; the isbn is its key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookResponse {
    pub name: String,
    pub isbn: String,
    #[serde(with = "crate::utils::date::serializer")]
    pub publish_date: NaiveDate,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub book_type: BookType,
}

impl From<&BookDto> for BookResponse {
    fn from(book: &BookDto) -> Self {
        Self {
            name: book.name.to_string(),
            isbn: book.isbn.to_string(),
            publish_date: book.publish_date,
            price: book.price,
            book_type: book.book_type,
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;
    use crate::books::dto::{BookDto, BookPatch, BookResponse};
    use crate::core::library::BookType;

    fn book() -> BookDto {
        BookDto::new("Effective Java", "978-0134685991",
                     NaiveDate::from_ymd_opt(2025, 12, 31).expect("date"), dec!(149.99), BookType::Hardcover)
    }

    #[tokio::test]
    async fn test_should_build_books() {
        let book = book();
        assert_eq!("978-0134685991", book.isbn.as_str());
        assert_eq!("Effective Java", book.name.as_str());
        assert_eq!(None, book.id);
    }

    #[tokio::test]
    async fn test_should_not_change_on_empty_patch() {
        let mut book = book();
        let before = book.clone();
        assert!(!BookPatch::default().apply_to(&mut book));
        assert_eq!(before, book);
    }

    #[tokio::test]
    async fn test_should_not_change_on_equal_values() {
        let mut book = book();
        let before = book.clone();
        let patch = BookPatch {
            name: Some("Effective Java".to_string()),
            publish_date: Some(before.publish_date),
            // equal by value even though the scale differs
            price: Some(dec!(149.990)),
            book_type: Some(BookType::Hardcover),
        };
        assert!(!patch.apply_to(&mut book));
        assert_eq!(before, book);
    }

    #[tokio::test]
    async fn test_should_change_only_differing_fields() {
        let mut book = book();
        let patch = BookPatch {
            name: Some("Effective Java".to_string()),
            price: Some(dec!(20)),
            book_type: Some(BookType::Softcover),
            ..BookPatch::default()
        };
        assert!(patch.apply_to(&mut book));
        assert_eq!("Effective Java", book.name.as_str());
        assert_eq!(NaiveDate::from_ymd_opt(2025, 12, 31), Some(book.publish_date));
        assert_eq!(dec!(20), book.price);
        assert_eq!(BookType::Softcover, book.book_type);
        assert_eq!("978-0134685991", book.isbn.as_str());
    }

    #[tokio::test]
    async fn test_should_serialize_response() {
        let json = serde_json::to_value(BookResponse::from(&book())).expect("should serialize");
        assert_eq!("Effective Java", json["name"]);
        assert_eq!("978-0134685991", json["isbn"]);
        assert_eq!("31/12/2025", json["publishDate"]);
        assert_eq!(149.99, json["price"]);
        assert_eq!("HARDCOVER", json["bookType"]);
        assert!(json.get("id").is_none());
    }
}

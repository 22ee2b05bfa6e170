use chrono::{NaiveDate, NaiveDateTime, Utc};
use rust_decimal::Decimal;
use crate::core::library::BookType;

// BookEntity is the persisted shape of a catalogue record. The id is assigned
// by the store on first save and the isbn never changes afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct BookEntity {
    pub id: Option<i64>,
    pub name: String,
    pub isbn: String,
    pub publish_date: NaiveDate,
    pub price: Decimal,
    pub book_type: BookType,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl BookEntity {
    pub fn new(name: &str, isbn: &str, publish_date: NaiveDate, price: Decimal, book_type: BookType) -> Self {
        Self {
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

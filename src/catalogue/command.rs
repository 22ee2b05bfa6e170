pub mod add_book_cmd;
pub mod get_book_cmd;
pub mod list_books_cmd;
pub mod remove_book_cmd;
pub mod update_book_cmd;

use rust_decimal::Decimal;
use crate::core::library::{CatalogueError, CatalogueResult};

// Field checks shared by the add and update payloads.

pub(crate) fn required<T>(value: Option<T>, field: &str) -> CatalogueResult<T> {
    value.ok_or_else(|| CatalogueError::validation(
        format!("{} must not be null", field).as_str(), Some(field.to_string())))
}

pub(crate) fn not_blank(value: &str, field: &str) -> CatalogueResult<()> {
    if value.trim().is_empty() {
        return Err(CatalogueError::validation(
            format!("{} must not be blank", field).as_str(), Some(field.to_string())));
    }
    Ok(())
}

pub(crate) fn not_negative(price: Decimal) -> CatalogueResult<()> {
    if price.is_sign_negative() && !price.is_zero() {
        return Err(CatalogueError::validation("Price cannot be negative", Some("price".to_string())));
    }
    Ok(())
}

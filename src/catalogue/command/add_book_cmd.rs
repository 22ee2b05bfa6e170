use std::sync::Arc;
use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use crate::books::dto::{BookDto, BookResponse};
use crate::catalogue::command::{not_blank, not_negative, required};
use crate::catalogue::domain::CatalogueService;
use crate::core::command::{Command, CommandError};
use crate::core::library::{BookType, CatalogueResult};

pub struct AddBookCommand {
    catalogue_service: Arc<dyn CatalogueService>,
}

impl AddBookCommand {
    pub fn new(catalogue_service: Arc<dyn CatalogueService>) -> Self {
        Self {
            catalogue_service,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddBookCommandRequest {
    pub name: Option<String>,
    pub isbn: Option<String>,
    #[serde(default, with = "crate::utils::date::opt_serializer")]
    pub publish_date: Option<NaiveDate>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub price: Option<Decimal>,
    pub book_type: Option<BookType>,
}

impl AddBookCommandRequest {
    pub fn new(name: &str, isbn: &str, publish_date: NaiveDate, price: Decimal, book_type: BookType) -> Self {
        Self {
            name: Some(name.to_string()),
            isbn: Some(isbn.to_string()),
            publish_date: Some(publish_date),
            price: Some(price),
            book_type: Some(book_type),
        }
    }

    // Every field is mandatory for a new book.
    pub fn build_book(&self) -> CatalogueResult<BookDto> {
        let name = required(self.name.as_deref(), "name")?;
        not_blank(name, "name")?;
        let isbn = required(self.isbn.as_deref(), "isbn")?;
        not_blank(isbn, "isbn")?;
        let publish_date = required(self.publish_date, "publishDate")?;
        let price = required(self.price, "price")?;
        not_negative(price)?;
        let book_type = required(self.book_type, "bookType")?;
        Ok(BookDto::new(name, isbn, publish_date, price, book_type))
    }
}


#[derive(Debug, Serialize)]
#[serde(transparent)]
pub struct AddBookCommandResponse {
    pub book: BookResponse,
}

impl AddBookCommandResponse {
    pub fn new(book: BookResponse) -> Self {
        Self {
            book,
        }
    }
}

#[async_trait]
impl Command<AddBookCommandRequest, AddBookCommandResponse> for AddBookCommand {
    async fn execute(&self, req: AddBookCommandRequest) -> Result<AddBookCommandResponse, CommandError> {
        let book = req.build_book()?;
        self.catalogue_service.add_book(&book).await
            .map_err(CommandError::from)
            .map(|saved| AddBookCommandResponse::new(BookResponse::from(&saved)))
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;
    use crate::books::dto::BookResponse;
    use crate::catalogue::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
    use crate::catalogue::factory;
    use crate::core::command::{Command, CommandError};
    use crate::core::domain::Configuration;
    use crate::core::library::BookType;
    use crate::core::repository::RepositoryStore;

    async fn build_command() -> AddBookCommand {
        let svc = factory::create_catalogue_service(&Configuration::new("test"), RepositoryStore::LocalSqlite)
            .await.expect("should build service");
        AddBookCommand::new(svc)
    }

    fn request() -> AddBookCommandRequest {
        AddBookCommandRequest::new("Effective Java", "978-0134685991",
                                   NaiveDate::from_ymd_opt(2025, 12, 31).expect("date"), dec!(149.99), BookType::Hardcover)
    }

    #[tokio::test]
    async fn test_should_run_add_book() {
        let cmd = build_command().await;
        let res = cmd.execute(request()).await.expect("should add book");
        assert_eq!(BookResponse {
            name: "Effective Java".to_string(),
            isbn: "978-0134685991".to_string(),
            publish_date: NaiveDate::from_ymd_opt(2025, 12, 31).expect("date"),
            price: dec!(149.99),
            book_type: BookType::Hardcover,
        }, res.book);
    }

    #[tokio::test]
    async fn test_should_reject_duplicate_add_book() {
        let cmd = build_command().await;
        let _ = cmd.execute(request()).await.expect("should add book");
        let res = cmd.execute(request()).await;
        assert!(matches!(res, Err(CommandError::DuplicateKey { .. })));
    }

    #[tokio::test]
    async fn test_should_parse_payload() {
        let req: AddBookCommandRequest = serde_json::from_str(r#"{
            "name": "Effective Java",
            "isbn": "978-0134685991",
            "publishDate": "31/12/2025",
            "price": 149.99,
            "bookType": "HARDCOVER"
        }"#).expect("should parse request");
        let book = req.build_book().expect("should build book");
        assert_eq!(dec!(149.99), book.price);
        assert_eq!(NaiveDate::from_ymd_opt(2025, 12, 31), Some(book.publish_date));
        assert_eq!(BookType::Hardcover, book.book_type);
    }

    #[tokio::test]
    async fn test_should_validate_payload() {
        let mut req = request();
        req.name = Some("  ".to_string());
        assert!(req.build_book().is_err());

        let mut req = request();
        req.isbn = None;
        assert!(req.build_book().is_err());

        let mut req = request();
        req.price = Some(dec!(-1));
        assert!(req.build_book().is_err());

        let mut req = request();
        req.publish_date = None;
        assert!(req.build_book().is_err());

        let mut req = request();
        req.book_type = None;
        assert!(req.build_book().is_err());

        assert!(serde_json::from_str::<AddBookCommandRequest>(r#"{"bookType":"PAPERBACK"}"#).is_err());
    }

    #[tokio::test]
    async fn test_should_reject_invalid_payload_before_service() {
        let cmd = build_command().await;
        let res = cmd.execute(AddBookCommandRequest::default()).await;
        assert!(matches!(res, Err(CommandError::Validation { .. })));
    }

    #[tokio::test]
    async fn test_should_round_trip_request_fields() {
        let req = request();
        let res = BookResponse::from(&req.build_book().expect("should build book"));
        assert_eq!(req.name.as_deref(), Some(res.name.as_str()));
        assert_eq!(req.isbn.as_deref(), Some(res.isbn.as_str()));
        assert_eq!(req.publish_date, Some(res.publish_date));
        assert_eq!(req.price, Some(res.price));
        assert_eq!(req.book_type, Some(res.book_type));
    }
}

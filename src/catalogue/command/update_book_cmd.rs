use std::sync::Arc;
use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use crate::books::dto::{BookPatch, BookResponse};
use crate::catalogue::command::{not_blank, not_negative};
use crate::catalogue::domain::CatalogueService;
use crate::core::command::{Command, CommandError};
use crate::core::library::{BookType, CatalogueResult};

pub struct UpdateBookCommand {
    catalogue_service: Arc<dyn CatalogueService>,
}

impl UpdateBookCommand {
    pub fn new(catalogue_service: Arc<dyn CatalogueService>) -> Self {
        Self {
            catalogue_service,
        }
    }
}

// The isbn comes from the path; an isbn in the body is ignored.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBookCommandRequest {
    #[serde(skip)]
    pub isbn: String,
    pub name: Option<String>,
    #[serde(default, with = "crate::utils::date::opt_serializer")]
    pub publish_date: Option<NaiveDate>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub price: Option<Decimal>,
    pub book_type: Option<BookType>,
}

impl UpdateBookCommandRequest {
    pub fn new(isbn: &str) -> Self {
        Self {
            isbn: isbn.to_string(),
            ..Self::default()
        }
    }

    pub fn build_patch(&self) -> CatalogueResult<BookPatch> {
        if let Some(name) = self.name.as_deref() {
            not_blank(name, "name")?;
        }
        if let Some(price) = self.price {
            not_negative(price)?;
        }
        Ok(BookPatch {
            name: self.name.clone(),
            publish_date: self.publish_date,
            price: self.price,
            book_type: self.book_type,
        })
    }
}


#[derive(Debug, Serialize)]
#[serde(transparent)]
pub struct UpdateBookCommandResponse {
    pub book: BookResponse,
}

impl UpdateBookCommandResponse {
    pub fn new(book: BookResponse) -> Self {
        Self {
            book,
        }
    }
}

#[async_trait]
impl Command<UpdateBookCommandRequest, UpdateBookCommandResponse> for UpdateBookCommand {
    async fn execute(&self, req: UpdateBookCommandRequest) -> Result<UpdateBookCommandResponse, CommandError> {
        let patch = req.build_patch()?;
        self.catalogue_service.update_book(req.isbn.as_str(), &patch).await
            .map_err(CommandError::from)
            .map(|b| UpdateBookCommandResponse::new(BookResponse::from(&b)))
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;
    use crate::catalogue::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
    use crate::catalogue::command::update_book_cmd::{UpdateBookCommand, UpdateBookCommandRequest};
    use crate::catalogue::factory;
    use crate::core::command::{Command, CommandError};
    use crate::core::domain::Configuration;
    use crate::core::library::BookType;
    use crate::core::repository::RepositoryStore;

    #[tokio::test]
    async fn test_should_run_update_book() {
        let svc = factory::create_catalogue_service(&Configuration::new("test"), RepositoryStore::LocalSqlite)
            .await.expect("should build service");
        let add_cmd = AddBookCommand::new(svc.clone());
        let update_cmd = UpdateBookCommand::new(svc);

        let date = NaiveDate::from_ymd_opt(2025, 12, 31).expect("date");
        let _ = add_cmd.execute(AddBookCommandRequest::new("Effective Java", "978-0134685991", date, dec!(149.99), BookType::Hardcover))
            .await.expect("should add book");

        let mut req = UpdateBookCommandRequest::new("978-0134685991");
        req.name = Some("Effective Java".to_string());
        req.publish_date = Some(date);
        req.price = Some(dec!(20));
        req.book_type = Some(BookType::Softcover);
        let res = update_cmd.execute(req).await.expect("should update book");
        assert_eq!("Effective Java", res.book.name.as_str());
        assert_eq!(date, res.book.publish_date);
        assert_eq!(dec!(20), res.book.price);
        assert_eq!(BookType::Softcover, res.book.book_type);
    }

    #[tokio::test]
    async fn test_should_fail_update_of_missing_book() {
        let svc = factory::create_catalogue_service(&Configuration::new("test"), RepositoryStore::LocalSqlite)
            .await.expect("should build service");
        let mut req = UpdateBookCommandRequest::new("missing");
        req.price = Some(dec!(1));
        let res = UpdateBookCommand::new(svc).execute(req).await;
        assert!(matches!(res, Err(CommandError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_should_validate_supplied_fields() {
        let mut req = UpdateBookCommandRequest::new("isbn");
        req.name = Some("".to_string());
        assert!(req.build_patch().is_err());

        let mut req = UpdateBookCommandRequest::new("isbn");
        req.price = Some(dec!(-5));
        assert!(req.build_patch().is_err());

        let patch = UpdateBookCommandRequest::new("isbn").build_patch().expect("should build patch");
        assert_eq!(None, patch.name);
        assert_eq!(None, patch.price);
    }

    #[tokio::test]
    async fn test_should_ignore_isbn_in_body() {
        let req: UpdateBookCommandRequest = serde_json::from_str(r#"{"isbn":"other","price":20}"#)
            .expect("should parse request");
        assert!(req.isbn.is_empty());
        assert_eq!(Some(dec!(20)), req.price);
    }
}

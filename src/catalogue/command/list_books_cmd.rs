use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::dto::BookResponse;
use crate::catalogue::domain::CatalogueService;
use crate::core::command::{Command, CommandError};

pub struct ListBooksCommand {
    catalogue_service: Arc<dyn CatalogueService>,
}

impl ListBooksCommand {
    pub fn new(catalogue_service: Arc<dyn CatalogueService>) -> Self {
        Self {
            catalogue_service,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct ListBooksCommandRequest {}

#[derive(Debug, Serialize)]
#[serde(transparent)]
pub struct ListBooksCommandResponse {
    pub books: Vec<BookResponse>,
}

impl ListBooksCommandResponse {
    pub fn new(books: Vec<BookResponse>) -> Self {
        Self {
            books,
        }
    }
}

#[async_trait]
impl Command<ListBooksCommandRequest, ListBooksCommandResponse> for ListBooksCommand {
    async fn execute(&self, _req: ListBooksCommandRequest) -> Result<ListBooksCommandResponse, CommandError> {
        self.catalogue_service.list_books().await
            .map_err(CommandError::from)
            .map(|books| ListBooksCommandResponse::new(books.iter().map(BookResponse::from).collect()))
    }
}

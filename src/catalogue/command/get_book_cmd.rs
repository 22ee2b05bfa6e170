use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::dto::BookResponse;
use crate::catalogue::domain::CatalogueService;
use crate::core::command::{Command, CommandError};

pub struct GetBookCommand {
    catalogue_service: Arc<dyn CatalogueService>,
}

impl GetBookCommand {
    pub fn new(catalogue_service: Arc<dyn CatalogueService>) -> Self {
        Self {
            catalogue_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct GetBookCommandRequest {
    pub isbn: String,
}

impl GetBookCommandRequest {
    pub fn new(isbn: String) -> Self {
        Self {
            isbn,
        }
    }
}


#[derive(Debug, Serialize)]
#[serde(transparent)]
pub struct GetBookCommandResponse {
    pub book: BookResponse,
}

impl GetBookCommandResponse {
    pub fn new(book: BookResponse) -> Self {
        Self {
            book,
        }
    }
}

#[async_trait]
impl Command<GetBookCommandRequest, GetBookCommandResponse> for GetBookCommand {
    async fn execute(&self, req: GetBookCommandRequest) -> Result<GetBookCommandResponse, CommandError> {
        self.catalogue_service.find_book_by_isbn(req.isbn.as_str())
            .await.map_err(CommandError::from).map(|b| GetBookCommandResponse::new(BookResponse::from(&b)))
    }
}

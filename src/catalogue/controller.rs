use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};
use serde_json::{Value};
use crate::catalogue::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest, AddBookCommandResponse};
use crate::catalogue::command::get_book_cmd::{GetBookCommand, GetBookCommandRequest, GetBookCommandResponse};
use crate::catalogue::command::list_books_cmd::{ListBooksCommand, ListBooksCommandRequest, ListBooksCommandResponse};
use crate::catalogue::command::remove_book_cmd::{RemoveBookCommand, RemoveBookCommandRequest};
use crate::catalogue::command::update_book_cmd::{UpdateBookCommand, UpdateBookCommandRequest, UpdateBookCommandResponse};
use crate::catalogue::doc::{openapi_json, OPENAPI_PATH};
use crate::catalogue::schemas::{BookRequestSchema, BookResponseSchema, BookUpdateRequestSchema};
use crate::core::command::Command;
use crate::core::controller::{AppState, json_to_server_error, ServerError};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/books", get(list_books).post(add_book))
        .route("/api/books/isbn/:isbn",
               get(find_book_by_isbn).put(update_book).delete(remove_book))
        .route(OPENAPI_PATH, get(openapi_json))
        .with_state(state)
}

#[utoipa::path(
    get,
    path = "/api/books",
    responses(
        (status = 200, description = "All books", body = [BookResponseSchema])
    ),
    tag = "books",
    operation_id = "listBooks"
)]
pub(crate) async fn list_books(
    State(state): State<AppState>) -> Result<Json<ListBooksCommandResponse>, ServerError> {
    let res = ListBooksCommand::new(state.catalogue_service).execute(ListBooksCommandRequest::default()).await?;
    Ok(Json(res))
}

#[utoipa::path(
    post,
    path = "/api/books",
    request_body = BookRequestSchema,
    responses(
        (status = 200, description = "Book added", body = BookResponseSchema),
        (status = 400, description = "Invalid payload"),
        (status = 409, description = "A book with the ISBN already exists")
    ),
    tag = "books",
    operation_id = "addBook"
)]
pub(crate) async fn add_book(
    State(state): State<AppState>,
    json: Json<Value>) -> Result<Json<AddBookCommandResponse>, ServerError> {
    let req: AddBookCommandRequest = serde_json::from_value(json.0).map_err(json_to_server_error)?;
    let res = AddBookCommand::new(state.catalogue_service).execute(req).await?;
    Ok(Json(res))
}

#[utoipa::path(
    get,
    path = "/api/books/isbn/{isbn}",
    params(("isbn" = String, Path, description = "ISBN of the book")),
    responses(
        (status = 200, description = "Book found", body = BookResponseSchema),
        (status = 404, description = "No book with the ISBN")
    ),
    tag = "books",
    operation_id = "findBookByIsbn"
)]
pub(crate) async fn find_book_by_isbn(
    State(state): State<AppState>,
    Path(isbn): Path<String>) -> Result<Json<GetBookCommandResponse>, ServerError> {
    let req = GetBookCommandRequest { isbn };
    let res = GetBookCommand::new(state.catalogue_service).execute(req).await?;
    Ok(Json(res))
}

#[utoipa::path(
    put,
    path = "/api/books/isbn/{isbn}",
    params(("isbn" = String, Path, description = "ISBN of the book")),
    request_body = BookUpdateRequestSchema,
    responses(
        (status = 200, description = "Book updated", body = BookResponseSchema),
        (status = 400, description = "Invalid payload"),
        (status = 404, description = "No book with the ISBN")
    ),
    tag = "books",
    operation_id = "updateBook"
)]
pub(crate) async fn update_book(
    State(state): State<AppState>,
    Path(isbn): Path<String>,
    json: Json<Value>) -> Result<Json<UpdateBookCommandResponse>, ServerError> {
    let mut req: UpdateBookCommandRequest = serde_json::from_value(json.0).map_err(json_to_server_error)?;
    req.isbn = isbn;
    let res = UpdateBookCommand::new(state.catalogue_service).execute(req).await?;
    Ok(Json(res))
}

#[utoipa::path(
    delete,
    path = "/api/books/isbn/{isbn}",
    params(("isbn" = String, Path, description = "ISBN of the book")),
    responses(
        (status = 204, description = "Book removed"),
        (status = 404, description = "No book with the ISBN")
    ),
    tag = "books",
    operation_id = "removeBook"
)]
pub(crate) async fn remove_book(
    State(state): State<AppState>,
    Path(isbn): Path<String>) -> Result<StatusCode, ServerError> {
    let req = RemoveBookCommandRequest { isbn };
    let _ = RemoveBookCommand::new(state.catalogue_service).execute(req).await?;
    Ok(StatusCode::NO_CONTENT)
}

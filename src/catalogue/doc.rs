use axum::response::Json;
use utoipa::OpenApi;
use crate::catalogue::schemas::{BookRequestSchema, BookResponseSchema, BookTypeSchema, BookUpdateRequestSchema};

/// OpenAPI document for the catalogue routes, served at [`OPENAPI_PATH`].
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Book Catalogue API",
        description = "Create, read, update and delete books addressed by ISBN."
    ),
    paths(
        crate::catalogue::controller::list_books,
        crate::catalogue::controller::add_book,
        crate::catalogue::controller::find_book_by_isbn,
        crate::catalogue::controller::update_book,
        crate::catalogue::controller::remove_book,
    ),
    components(schemas(BookRequestSchema, BookUpdateRequestSchema, BookResponseSchema, BookTypeSchema)),
    tags(
        (name = "books", description = "Book catalogue operations")
    )
)]
pub struct ApiDoc;

pub const OPENAPI_PATH: &str = "/api-docs/openapi.json";

pub(crate) async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

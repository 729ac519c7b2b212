use axum::response::{IntoResponse, Response};
use serde::Serialize;
use serde_json::{Map, Value};

use application::transfer::{BookDeleted, BookUpdated};
use kernel::prelude::entity::{
    Book, BookDate, BookId, BookName, DestructBook, PageCount, ReadPage,
};

use crate::controller::Exhaust;
use crate::response::ResponseStatus;

#[derive(Debug, Serialize)]
pub struct CreatedBookResponse {
    status: ResponseStatus,
    message: &'static str,
    data: CreatedBookData,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CreatedBookData {
    book_id: BookId,
}

impl IntoResponse for CreatedBookResponse {
    fn into_response(self) -> Response {
        (axum::http::StatusCode::CREATED, axum::Json(self)).into_response()
    }
}

#[derive(Debug, Serialize)]
pub struct BookResponse {
    status: ResponseStatus,
    data: BookData,
}

#[derive(Debug, Serialize)]
struct BookData {
    book: BookBody,
}

/// The record as stored: required fields, the derived ones, and the opaque
/// passthrough fields flattened back onto the top level.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct BookBody {
    id: BookId,
    name: BookName,
    page_count: PageCount,
    read_page: ReadPage,
    finished: bool,
    inserted_at: BookDate,
    updated_at: BookDate,
    #[serde(flatten)]
    extra: Map<String, Value>,
}

impl From<Book> for BookBody {
    fn from(book: Book) -> Self {
        let DestructBook {
            id,
            name,
            page_count,
            read_page,
            finished,
            extra,
            inserted_at,
            updated_at,
        } = book.into_destruct();
        Self {
            id,
            name,
            page_count,
            read_page,
            finished,
            inserted_at,
            updated_at,
            extra: extra.into(),
        }
    }
}

impl IntoResponse for BookResponse {
    fn into_response(self) -> Response {
        (axum::http::StatusCode::OK, axum::Json(self)).into_response()
    }
}

#[derive(Debug, Serialize)]
pub struct BookListResponse {
    status: ResponseStatus,
    data: BookListData,
}

#[derive(Debug, Serialize)]
struct BookListData {
    books: Vec<BookSummary>,
}

/// Listing projection. A record without a publisher omits the key, same as
/// the JSON a serializer dropping undefined fields would produce.
#[derive(Debug, Serialize)]
struct BookSummary {
    id: BookId,
    name: BookName,
    #[serde(skip_serializing_if = "Option::is_none")]
    publisher: Option<Value>,
}

impl From<Book> for BookSummary {
    fn from(book: Book) -> Self {
        let publisher = book.extra().publisher();
        let DestructBook { id, name, .. } = book.into_destruct();
        Self {
            id,
            name,
            publisher,
        }
    }
}

impl IntoResponse for BookListResponse {
    fn into_response(self) -> Response {
        (axum::http::StatusCode::OK, axum::Json(self)).into_response()
    }
}

#[derive(Debug, Serialize)]
pub struct UpdatedBookResponse {
    status: ResponseStatus,
    message: &'static str,
}

impl IntoResponse for UpdatedBookResponse {
    fn into_response(self) -> Response {
        (axum::http::StatusCode::OK, axum::Json(self)).into_response()
    }
}

#[derive(Debug, Serialize)]
pub struct DeletedBookResponse {
    status: ResponseStatus,
    message: &'static str,
}

impl IntoResponse for DeletedBookResponse {
    fn into_response(self) -> Response {
        (axum::http::StatusCode::OK, axum::Json(self)).into_response()
    }
}

pub struct BookPresenter;

impl Exhaust<BookId> for BookPresenter {
    type To = CreatedBookResponse;
    fn emit(&self, input: BookId) -> Self::To {
        CreatedBookResponse {
            status: ResponseStatus::Success,
            message: "Book added successfully",
            data: CreatedBookData { book_id: input },
        }
    }
}

impl Exhaust<Option<Book>> for BookPresenter {
    type To = Option<BookResponse>;
    fn emit(&self, input: Option<Book>) -> Self::To {
        input.map(|book| BookResponse {
            status: ResponseStatus::Success,
            data: BookData { book: book.into() },
        })
    }
}

impl Exhaust<Vec<Book>> for BookPresenter {
    type To = BookListResponse;
    fn emit(&self, input: Vec<Book>) -> Self::To {
        BookListResponse {
            status: ResponseStatus::Success,
            data: BookListData {
                books: input.into_iter().map(BookSummary::from).collect(),
            },
        }
    }
}

impl Exhaust<BookUpdated> for BookPresenter {
    type To = UpdatedBookResponse;
    fn emit(&self, _: BookUpdated) -> Self::To {
        UpdatedBookResponse {
            status: ResponseStatus::Success,
            message: "Book updated successfully",
        }
    }
}

impl Exhaust<BookDeleted> for BookPresenter {
    type To = DeletedBookResponse;
    fn emit(&self, _: BookDeleted) -> Self::To {
        DeletedBookResponse {
            status: ResponseStatus::Success,
            message: "Book deleted successfully",
        }
    }
}

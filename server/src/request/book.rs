use serde::Deserialize;
use serde_json::{Map, Value};

use application::transfer::{
    CreateBookDto, DeleteBookDto, GetAllBookDto, GetBookDto, UpdateBookDto,
};
use kernel::prelude::entity::{BookExtra, BookId};

use crate::controller::Intake;

/// Body for POST /books. The required fields are picked out; everything
/// else becomes an opaque field. The page counters default to 0 so an
/// absent `name` still answers first.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookRequest {
    name: Option<String>,
    #[serde(default)]
    page_count: u32,
    #[serde(default)]
    read_page: u32,
    #[serde(flatten)]
    extra: Map<String, Value>,
}

/// Body for PUT /books/:id, a full replacement of the mutable fields.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBookRequest {
    name: Option<String>,
    #[serde(default)]
    page_count: u32,
    #[serde(default)]
    read_page: u32,
    #[serde(flatten)]
    extra: Map<String, Value>,
}

#[derive(Debug, Deserialize)]
pub struct GetAllBookRequest {
    reading: Option<String>,
    finished: Option<String>,
    name: Option<String>,
}

#[derive(Debug)]
pub struct GetBookRequest {
    id: String,
}

impl GetBookRequest {
    pub fn new(id: String) -> Self {
        Self { id }
    }
}

#[derive(Debug)]
pub struct DeleteBookRequest {
    id: String,
}

impl DeleteBookRequest {
    pub fn new(id: String) -> Self {
        Self { id }
    }
}

pub struct BookTransformer;

impl Intake<CreateBookRequest> for BookTransformer {
    type To = CreateBookDto;
    fn emit(&self, input: CreateBookRequest) -> Self::To {
        CreateBookDto {
            name: input.name,
            page_count: input.page_count,
            read_page: input.read_page,
            extra: BookExtra::new(input.extra),
        }
    }
}

impl Intake<(String, UpdateBookRequest)> for BookTransformer {
    type To = UpdateBookDto;
    fn emit(&self, input: (String, UpdateBookRequest)) -> Self::To {
        let (id, input) = input;
        UpdateBookDto {
            id: BookId::new(id),
            name: input.name,
            page_count: input.page_count,
            read_page: input.read_page,
            extra: BookExtra::new(input.extra),
        }
    }
}

impl Intake<GetBookRequest> for BookTransformer {
    type To = GetBookDto;
    fn emit(&self, input: GetBookRequest) -> Self::To {
        GetBookDto {
            id: BookId::new(input.id),
        }
    }
}

impl Intake<GetAllBookRequest> for BookTransformer {
    type To = GetAllBookDto;
    fn emit(&self, input: GetAllBookRequest) -> Self::To {
        GetAllBookDto {
            reading: input.reading,
            finished: input.finished,
            name: input.name,
        }
    }
}

impl Intake<DeleteBookRequest> for BookTransformer {
    type To = DeleteBookDto;
    fn emit(&self, input: DeleteBookRequest) -> Self::To {
        DeleteBookDto {
            id: BookId::new(input.id),
        }
    }
}

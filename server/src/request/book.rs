use error_stack::Report;
use serde::Deserialize;

use application::transfer::{CreateBookDto, DeleteBookDto, UpdateBookDto};
use kernel::KernelError;

use crate::controller::{Intake, TryIntake};

#[derive(Debug, Deserialize)]
pub struct CreateBookRequest {
    title: Option<String>,
    author: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateBookRequest {
    title: Option<String>,
    author: Option<String>,
}

#[derive(Debug)]
pub struct DeleteBookRequest {
    id: i64,
}

impl DeleteBookRequest {
    pub fn new(id: i64) -> Self {
        Self { id }
    }
}

pub struct BookTransformer;

fn require(field: Option<String>, name: &'static str) -> Result<String, Report<KernelError>> {
    match field {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(Report::new(KernelError::Validation)
            .attach_printable(format!("Field {name} is missing or blank"))),
    }
}

impl TryIntake<CreateBookRequest> for BookTransformer {
    type To = CreateBookDto;
    type Error = Report<KernelError>;
    fn emit(&self, input: CreateBookRequest) -> Result<Self::To, Self::Error> {
        Ok(CreateBookDto {
            title: require(input.title, "title")?,
            author: require(input.author, "author")?,
        })
    }
}

impl TryIntake<(i64, UpdateBookRequest)> for BookTransformer {
    type To = UpdateBookDto;
    type Error = Report<KernelError>;
    fn emit(&self, input: (i64, UpdateBookRequest)) -> Result<Self::To, Self::Error> {
        let (id, input) = input;
        Ok(UpdateBookDto {
            id,
            title: require(input.title, "title")?,
            author: require(input.author, "author")?,
        })
    }
}

impl Intake<DeleteBookRequest> for BookTransformer {
    type To = DeleteBookDto;
    fn emit(&self, input: DeleteBookRequest) -> Self::To {
        DeleteBookDto { id: input.id }
    }
}

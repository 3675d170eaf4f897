use crate::domain::model::{AuthorId, BookId};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("invalid {field}: must be non-empty text")]
    EmptyText { field: String },

    #[error("unknown author id: {id}")]
    UnknownAuthor { id: AuthorId },

    #[error("unknown book id: {id}")]
    UnknownBook { id: BookId },
}

pub type Result<T> = std::result::Result<T, ValidationError>;

pub mod core;
pub mod domain;
pub mod utils;

pub use crate::core::ledger::Ledger;
pub use crate::domain::model::{Author, AuthorId, Book, BookId, Contract, ContractId};
pub use crate::utils::error::{Result, ValidationError};

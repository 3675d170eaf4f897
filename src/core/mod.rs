pub mod ledger;

pub use crate::core::ledger::Ledger;
pub use crate::domain::model::{Author, AuthorId, Book, BookId, Contract, ContractId};
pub use crate::utils::error::Result;

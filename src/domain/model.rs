use serde::{Deserialize, Serialize};
use std::fmt;

/// Index of an author in the ledger's author store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AuthorId(pub(crate) usize);

/// Index of a book in the ledger's book store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BookId(pub(crate) usize);

/// Index of a contract in the ledger's registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContractId(pub(crate) usize);

impl fmt::Display for AuthorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for ContractId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    name: String,
    contracts: Vec<ContractId>,
}

impl Author {
    pub(crate) fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            contracts: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Contracts this author has signed, in signing order.
    pub fn contracts(&self) -> &[ContractId] {
        &self.contracts
    }

    pub(crate) fn link(&mut self, contract: ContractId) {
        self.contracts.push(contract);
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    title: String,
    contracts: Vec<ContractId>,
}

impl Book {
    pub(crate) fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            contracts: Vec::new(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Contracts signed for this book, in signing order.
    pub fn contracts(&self) -> &[ContractId] {
        &self.contracts
    }

    pub(crate) fn link(&mut self, contract: ContractId) {
        self.contracts.push(contract);
    }
}

/// Join record between one author and one book. Both references are fixed at
/// signing and never reassigned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contract {
    author: AuthorId,
    book: BookId,
    date: String,
    royalties: i64,
}

impl Contract {
    pub(crate) fn new(
        author: AuthorId,
        book: BookId,
        date: impl Into<String>,
        royalties: i64,
    ) -> Self {
        Self {
            author,
            book,
            date: date.into(),
            royalties,
        }
    }

    pub fn author(&self) -> AuthorId {
        self.author
    }

    pub fn book(&self) -> BookId {
        self.book
    }

    /// Signing date as an opaque `DD/MM/YYYY` string. Compared
    /// lexicographically, never parsed as a calendar date.
    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn royalties(&self) -> i64 {
        self.royalties
    }
}

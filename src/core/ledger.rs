use crate::domain::model::{Author, AuthorId, Book, BookId, Contract, ContractId};
use crate::utils::error::{Result, ValidationError};
use crate::utils::validation::validate_non_empty_text;
use serde::{Deserialize, Serialize};

/// Owning store for authors, books, and the append-only contract registry.
///
/// All relationship state lives here; entities refer to each other through
/// ids handed out by this ledger. Registration and signing take `&mut self`,
/// queries take `&self`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ledger {
    authors: Vec<Author>,
    books: Vec<Book>,
    contracts: Vec<Contract>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an author. Fails if `name` is empty or whitespace-only.
    pub fn add_author(&mut self, name: &str) -> Result<AuthorId> {
        validate_non_empty_text("name", name)?;

        let id = AuthorId(self.authors.len());
        self.authors.push(Author::new(name));
        tracing::debug!("registered author {}: {}", id, name);
        Ok(id)
    }

    /// Registers a book. Fails if `title` is empty or whitespace-only.
    pub fn add_book(&mut self, title: &str) -> Result<BookId> {
        validate_non_empty_text("title", title)?;

        let id = BookId(self.books.len());
        self.books.push(Book::new(title));
        tracing::debug!("registered book {}: {}", id, title);
        Ok(id)
    }

    /// Signs a contract between an author and a book.
    ///
    /// On success the new contract is linked into the book's list, the
    /// author's list, and the registry before this returns. On failure
    /// nothing is linked anywhere.
    pub fn sign_contract(
        &mut self,
        author: AuthorId,
        book: BookId,
        date: &str,
        royalties: i64,
    ) -> Result<ContractId> {
        // Every check runs before the first mutation; a rejected signing
        // must leave no partial linkage behind.
        if self.author(author).is_none() {
            tracing::warn!("rejected contract: unknown author {}", author);
            return Err(ValidationError::UnknownAuthor { id: author });
        }
        if self.book(book).is_none() {
            tracing::warn!("rejected contract: unknown book {}", book);
            return Err(ValidationError::UnknownBook { id: book });
        }
        if let Err(e) = validate_non_empty_text("date", date) {
            tracing::warn!("rejected contract between {} and {}: {}", author, book, e);
            return Err(e);
        }

        let id = ContractId(self.contracts.len());
        self.books[book.0].link(id);
        self.authors[author.0].link(id);
        self.contracts.push(Contract::new(author, book, date, royalties));

        tracing::debug!(
            "contract {} signed: author {} / book {} on {} for {}",
            id,
            author,
            book,
            date,
            royalties
        );
        Ok(id)
    }

    pub fn author(&self, id: AuthorId) -> Option<&Author> {
        self.authors.get(id.0)
    }

    pub fn book(&self, id: BookId) -> Option<&Book> {
        self.books.get(id.0)
    }

    pub fn contract(&self, id: ContractId) -> Option<&Contract> {
        self.contracts.get(id.0)
    }

    /// All registered authors, in registration order.
    pub fn authors(&self) -> &[Author] {
        &self.authors
    }

    /// All registered books, in registration order.
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    /// The full registry, in signing order.
    pub fn contracts(&self) -> &[Contract] {
        &self.contracts
    }

    /// An author's contracts, in signing order.
    pub fn contracts_of_author(&self, id: AuthorId) -> Result<&[ContractId]> {
        self.author(id)
            .map(Author::contracts)
            .ok_or(ValidationError::UnknownAuthor { id })
    }

    /// A book's contracts, in signing order.
    pub fn contracts_of_book(&self, id: BookId) -> Result<&[ContractId]> {
        self.book(id)
            .map(Book::contracts)
            .ok_or(ValidationError::UnknownBook { id })
    }

    /// The linked book of each of the author's contracts, preserving contract
    /// order. The same book appears once per contract signed with it.
    pub fn books_of_author(&self, id: AuthorId) -> Result<Vec<BookId>> {
        let contracts = self.contracts_of_author(id)?;
        Ok(contracts.iter().map(|&c| self.contracts[c.0].book()).collect())
    }

    /// The linked author of each of the book's contracts, preserving contract
    /// order. The same author appears once per contract signed for it.
    pub fn authors_of_book(&self, id: BookId) -> Result<Vec<AuthorId>> {
        let contracts = self.contracts_of_book(id)?;
        Ok(contracts
            .iter()
            .map(|&c| self.contracts[c.0].author())
            .collect())
    }

    /// Sum of royalties over the author's contracts; 0 with no contracts.
    pub fn total_royalties(&self, id: AuthorId) -> Result<i64> {
        let contracts = self.contracts_of_author(id)?;
        Ok(contracts
            .iter()
            .map(|&c| self.contracts[c.0].royalties())
            .sum())
    }

    /// Sum of royalties over the book's contracts; 0 with no contracts.
    pub fn total_book_royalties(&self, id: BookId) -> Result<i64> {
        let contracts = self.contracts_of_book(id)?;
        Ok(contracts
            .iter()
            .map(|&c| self.contracts[c.0].royalties())
            .sum())
    }

    /// Registry contracts whose date equals `date` exactly (case-sensitive,
    /// no normalization), ordered by date lexicographically.
    pub fn contracts_by_date(&self, date: &str) -> Vec<ContractId> {
        let mut hits: Vec<ContractId> = self
            .contracts
            .iter()
            .enumerate()
            .filter(|(_, c)| c.date() == date)
            .map(|(i, _)| ContractId(i))
            .collect();

        // Stable sort: equal dates keep registry insertion order.
        hits.sort_by(|a, b| self.contracts[a.0].date().cmp(self.contracts[b.0].date()));
        hits
    }

    pub fn author_count(&self) -> usize {
        self.authors.len()
    }

    pub fn book_count(&self) -> usize {
        self.books.len()
    }

    pub fn contract_count(&self) -> usize {
        self.contracts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.authors.is_empty() && self.books.is_empty() && self.contracts.is_empty()
    }
}

//! Data models for the library loan system

pub mod author;
pub mod book;
pub mod loan;
pub mod member;

// Re-export commonly used types
pub use author::Author;
pub use book::Book;
pub use loan::Loan;
pub use member::Member;

/// Key carried by records that have not been persisted yet.
pub const UNSAVED_ID: i64 = 0;

/// A typed record with an auto-incremented primary key.
pub trait Entity: Clone + std::fmt::Debug + Send + Sync + Unpin + 'static {
    /// Table the entity is persisted in
    const TABLE: &'static str;

    fn id(&self) -> i64;
}

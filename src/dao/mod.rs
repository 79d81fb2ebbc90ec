//! Data-access objects: one per entity, each issuing the statements for its
//! table.

pub mod author;
pub mod book;
pub mod loan;
pub mod member;

pub use author::AuthorDao;
pub use book::BookDao;
pub use loan::LoanDao;
pub use member::MemberDao;

use async_trait::async_trait;

use crate::{
    error::AppResult,
    models::{Entity, UNSAVED_ID},
};

/// Read/write contract shared by every entity table.
#[async_trait]
pub trait Dao: Clone + Send + Sync + 'static {
    type Entity: Entity;

    /// Store `record`, replacing the row with the same key if there is one.
    /// Records carrying no key get the next auto-increment value. Returns the
    /// key of the stored row.
    async fn insert_or_replace(&self, record: &Self::Entity) -> AppResult<i64>;

    /// Overwrite the mutable columns of the row keyed by `record`. Does
    /// nothing when no such row exists.
    async fn update(&self, record: &Self::Entity) -> AppResult<()>;

    /// Remove the row keyed by `record`, cascading to dependent rows.
    async fn delete(&self, record: &Self::Entity) -> AppResult<()>;

    /// Every row, in key order.
    async fn get_all(&self) -> AppResult<Vec<Self::Entity>>;

    async fn get_by_id(&self, id: i64) -> AppResult<Option<Self::Entity>>;
}

/// Bind value for a primary key column: NULL lets SQLite pick the next key.
pub(crate) fn key_param(id: i64) -> Option<i64> {
    (id != UNSAVED_ID).then_some(id)
}

/// Shared trace for writes that matched no row.
pub(crate) fn log_untouched(table: &str, operation: &str, rows: u64, id: i64) {
    if rows == 0 {
        tracing::debug!("{} on {}: no row with key {}", operation, table, id);
    }
}

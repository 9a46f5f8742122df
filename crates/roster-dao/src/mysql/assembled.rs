//! Generic transfer-object DAO.
//!
//! [`AssembledDao`] wraps the entity-level [`MySqlDao`] and converts at
//! the boundary: callers hand in and get back transfer objects, never
//! the storage records. The conversion pair comes from an [`Assembler`]
//! implementation.

use crate::mysql::{MySqlDao, SqlRecord};
use crate::DatabasePool;
use roster_core::{Assembler, Page, PageRequest, RosterResult};
use std::sync::Arc;

/// Transfer-object DAO over an [`Assembler`] whose record is
/// table-mapped.
pub struct AssembledDao<A>
where
    A: Assembler,
    A::Record: SqlRecord,
{
    records: MySqlDao<A::Record>,
}

impl<A> AssembledDao<A>
where
    A: Assembler,
    A::Record: SqlRecord,
{
    /// Creates a new DAO backed by the given pool.
    #[must_use]
    pub fn new(pool: Arc<DatabasePool>) -> Self {
        Self {
            records: MySqlDao::new(pool),
        }
    }

    /// Returns the underlying entity-level DAO.
    #[must_use]
    pub fn records(&self) -> &MySqlDao<A::Record> {
        &self.records
    }

    /// Finds a transfer object by primary key.
    pub async fn find_by_id(
        &self,
        id: &<A::Record as SqlRecord>::Key,
    ) -> RosterResult<Option<A::Transfer>> {
        self.records.find_by_id(id).await?.map(A::assemble).transpose()
    }

    /// Persists a new transfer object and returns the stored key.
    pub async fn save(&self, transfer: &A::Transfer) -> RosterResult<<A::Record as SqlRecord>::Key> {
        let record = A::disassemble(transfer);
        self.records.insert(&record).await
    }

    /// Updates an existing transfer object. Returns `true` when a row
    /// matched.
    pub async fn update(&self, transfer: &A::Transfer) -> RosterResult<bool> {
        let record = A::disassemble(transfer);
        self.records.update(&record).await
    }

    /// Deletes by primary key. Returns `true` when a row was deleted.
    pub async fn delete(&self, id: &<A::Record as SqlRecord>::Key) -> RosterResult<bool> {
        self.records.delete(id).await
    }

    /// Checks whether a row exists for the given primary key.
    pub async fn exists(&self, id: &<A::Record as SqlRecord>::Key) -> RosterResult<bool> {
        self.records.exists(id).await
    }

    /// Fetches all transfer objects, optionally capped at `limit` rows.
    pub async fn fetch_all(&self, limit: Option<usize>) -> RosterResult<Vec<A::Transfer>> {
        self.records
            .fetch_all(limit)
            .await?
            .into_iter()
            .map(A::assemble)
            .collect()
    }

    /// Fetches a page of transfer objects.
    pub async fn fetch_page(&self, page: PageRequest) -> RosterResult<Page<A::Transfer>> {
        self.records.fetch_page(page).await?.try_map(A::assemble)
    }

    /// Counts all rows in the table.
    pub async fn count(&self) -> RosterResult<u64> {
        self.records.count().await
    }
}

impl<A> Clone for AssembledDao<A>
where
    A: Assembler,
    A::Record: SqlRecord,
{
    fn clone(&self) -> Self {
        Self {
            records: self.records.clone(),
        }
    }
}

impl<A> std::fmt::Debug for AssembledDao<A>
where
    A: Assembler,
    A::Record: SqlRecord,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AssembledDao")
            .field("table", &<A::Record as SqlRecord>::TABLE)
            .finish_non_exhaustive()
    }
}

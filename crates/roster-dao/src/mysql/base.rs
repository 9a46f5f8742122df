//! Generic MySQL DAO base.
//!
//! [`MySqlDao`] implements the CRUD surface once, for any record type
//! implementing [`SqlRecord`]. The record type carries its table name,
//! column list, and parameter-binding hooks as compile-time associated
//! items, so the base is monomorphized per record with no runtime type
//! discovery.

use crate::DatabasePool;
use roster_core::{Page, PageRequest, RosterResult};
use sqlx::mysql::{MySql, MySqlArguments, MySqlRow};
use std::fmt::Display;
use std::marker::PhantomData;
use std::sync::Arc;
use tracing::debug;

/// A not-yet-executed MySQL query with bound arguments.
pub type MySqlQuery<'q> = sqlx::query::Query<'q, MySql, MySqlArguments>;

/// Metadata and binding hooks for a table-mapped record type.
///
/// Implementations describe one table. `COLUMNS` lists every column in
/// the order `bind_insert` binds them; `bind_update` binds the same
/// columns minus `ID_COLUMN`, in `COLUMNS` order.
pub trait SqlRecord: for<'r> sqlx::FromRow<'r, MySqlRow> + Send + Sync + Unpin + 'static {
    /// The primary-key type as stored in the table.
    type Key: Display + Send + Sync;

    /// Table name.
    const TABLE: &'static str;

    /// All columns, in insert-binding order.
    const COLUMNS: &'static [&'static str];

    /// Primary-key column.
    const ID_COLUMN: &'static str = "id";

    /// ORDER BY clause body for listing queries.
    const ORDER_BY: &'static str = "id";

    /// Returns the record's primary key.
    fn primary_key(&self) -> Self::Key;

    /// Binds every column value for an INSERT, in `COLUMNS` order.
    fn bind_insert<'q>(&self, query: MySqlQuery<'q>) -> MySqlQuery<'q>;

    /// Binds every non-key column value for an UPDATE, in `COLUMNS`
    /// order with `ID_COLUMN` skipped.
    fn bind_update<'q>(&self, query: MySqlQuery<'q>) -> MySqlQuery<'q>;
}

/// Generic MySQL DAO over a [`SqlRecord`] type.
///
/// This is the entity-level base: it reads and writes the record type
/// directly. [`AssembledDao`] layers transfer-object conversion on top.
///
/// [`AssembledDao`]: crate::mysql::AssembledDao
pub struct MySqlDao<R: SqlRecord> {
    pool: Arc<DatabasePool>,
    _record: PhantomData<fn() -> R>,
}

impl<R: SqlRecord> MySqlDao<R> {
    /// Creates a new DAO backed by the given pool.
    #[must_use]
    pub fn new(pool: Arc<DatabasePool>) -> Self {
        Self {
            pool,
            _record: PhantomData,
        }
    }

    /// Returns the backing pool.
    #[must_use]
    pub fn pool(&self) -> &DatabasePool {
        &self.pool
    }

    fn select_clause() -> String {
        format!("SELECT {} FROM {}", R::COLUMNS.join(", "), R::TABLE)
    }

    /// Finds a record by primary key.
    pub async fn find_by_id(&self, id: &R::Key) -> RosterResult<Option<R>> {
        debug!("Finding {} by {}: {}", R::TABLE, R::ID_COLUMN, id);

        let sql = format!("{} WHERE {} = ?", Self::select_clause(), R::ID_COLUMN);
        let record = sqlx::query_as::<_, R>(&sql)
            .bind(id.to_string())
            .fetch_optional(self.pool.inner())
            .await?;

        Ok(record)
    }

    /// Inserts a new record and returns its primary key.
    pub async fn insert(&self, record: &R) -> RosterResult<R::Key> {
        debug!("Inserting into {}", R::TABLE);

        let placeholders = vec!["?"; R::COLUMNS.len()].join(", ");
        let sql = format!(
            "INSERT INTO {} ({}) VALUES ({})",
            R::TABLE,
            R::COLUMNS.join(", "),
            placeholders
        );
        record
            .bind_insert(sqlx::query(&sql))
            .execute(self.pool.inner())
            .await?;

        Ok(record.primary_key())
    }

    /// Updates an existing record. Returns `true` when a row matched.
    pub async fn update(&self, record: &R) -> RosterResult<bool> {
        debug!("Updating {} id {}", R::TABLE, record.primary_key());

        let assignments = R::COLUMNS
            .iter()
            .filter(|column| **column != R::ID_COLUMN)
            .map(|column| format!("{} = ?", column))
            .collect::<Vec<_>>()
            .join(", ");
        let sql = format!(
            "UPDATE {} SET {} WHERE {} = ?",
            R::TABLE,
            assignments,
            R::ID_COLUMN
        );
        let result = record
            .bind_update(sqlx::query(&sql))
            .bind(record.primary_key().to_string())
            .execute(self.pool.inner())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Deletes a record by primary key. Returns `true` when a row was
    /// deleted; a missing key is not an error.
    pub async fn delete(&self, id: &R::Key) -> RosterResult<bool> {
        debug!("Deleting {} id {}", R::TABLE, id);

        let sql = format!("DELETE FROM {} WHERE {} = ?", R::TABLE, R::ID_COLUMN);
        let result = sqlx::query(&sql)
            .bind(id.to_string())
            .execute(self.pool.inner())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Checks whether a record exists for the given primary key.
    pub async fn exists(&self, id: &R::Key) -> RosterResult<bool> {
        debug!("Checking {} for {} = {}", R::TABLE, R::ID_COLUMN, id);

        let sql = format!(
            "SELECT 1 FROM {} WHERE {} = ? LIMIT 1",
            R::TABLE,
            R::ID_COLUMN
        );
        let result: Option<i32> = sqlx::query_scalar(&sql)
            .bind(id.to_string())
            .fetch_optional(self.pool.inner())
            .await?;

        Ok(result.is_some())
    }

    /// Fetches all records, optionally capped at `limit` rows.
    pub async fn fetch_all(&self, limit: Option<usize>) -> RosterResult<Vec<R>> {
        debug!("Fetching all from {} (limit: {:?})", R::TABLE, limit);

        let mut sql = format!("{} ORDER BY {}", Self::select_clause(), R::ORDER_BY);
        if limit.is_some() {
            sql.push_str(" LIMIT ?");
        }

        let mut query = sqlx::query_as::<_, R>(&sql);
        if let Some(limit) = limit {
            query = query.bind(limit as i64);
        }

        Ok(query.fetch_all(self.pool.inner()).await?)
    }

    /// Fetches a page of records.
    pub async fn fetch_page(&self, page: PageRequest) -> RosterResult<Page<R>> {
        debug!(
            "Fetching page {} (size {}) from {}",
            page.page,
            page.size,
            R::TABLE
        );

        let count_sql = format!("SELECT COUNT(*) FROM {}", R::TABLE);
        let total: i64 = sqlx::query_scalar(&count_sql)
            .fetch_one(self.pool.inner())
            .await?;

        let sql = format!(
            "{} ORDER BY {} LIMIT ? OFFSET ?",
            Self::select_clause(),
            R::ORDER_BY
        );
        let records = sqlx::query_as::<_, R>(&sql)
            .bind(page.limit() as i64)
            .bind(page.offset() as i64)
            .fetch_all(self.pool.inner())
            .await?;

        Ok(Page::new(records, page.page, page.size, total as u64))
    }

    /// Counts all records in the table.
    pub async fn count(&self) -> RosterResult<u64> {
        let sql = format!("SELECT COUNT(*) FROM {}", R::TABLE);
        let count: i64 = sqlx::query_scalar(&sql)
            .fetch_one(self.pool.inner())
            .await?;

        Ok(count as u64)
    }
}

impl<R: SqlRecord> Clone for MySqlDao<R> {
    fn clone(&self) -> Self {
        Self {
            pool: Arc::clone(&self.pool),
            _record: PhantomData,
        }
    }
}

impl<R: SqlRecord> std::fmt::Debug for MySqlDao<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MySqlDao")
            .field("table", &R::TABLE)
            .finish_non_exhaustive()
    }
}

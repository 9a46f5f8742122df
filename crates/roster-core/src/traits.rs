//! Generic data-access traits.
//!
//! These are the seams every storage backend implements against:
//! [`Dao`] for the CRUD surface and [`Assembler`] for converting between
//! the persistence-layer record and the transfer object handed to
//! callers.

use crate::{Page, PageRequest, RosterResult};
use async_trait::async_trait;

/// Base DAO trait for CRUD operations.
///
/// `T` is the type exposed to callers (a transfer object or, for
/// backends that skip the transfer layer, the record itself) and `ID`
/// is its primary-key type.
#[async_trait]
pub trait Dao<T, ID>: Send + Sync
where
    T: Send + Sync,
    ID: Send + Sync,
{
    /// Finds a record by its primary key. Returns `None` when no row
    /// exists; a missing row is not an error.
    async fn find_by_id(&self, id: &ID) -> RosterResult<Option<T>>;

    /// Finds all records, optionally capped at `limit` rows.
    async fn find_all(&self, limit: Option<usize>) -> RosterResult<Vec<T>>;

    /// Finds records with pagination.
    async fn find_page(&self, page: PageRequest) -> RosterResult<Page<T>>;

    /// Persists a new record and returns its primary key.
    async fn save(&self, value: &T) -> RosterResult<ID>;

    /// Updates an existing record. Returns `true` when a row matched.
    async fn update(&self, value: &T) -> RosterResult<bool>;

    /// Deletes a record by its primary key. Returns `true` when a row
    /// was deleted; deleting a missing key is not an error.
    async fn delete(&self, id: &ID) -> RosterResult<bool>;

    /// Checks whether a record exists for the given primary key.
    async fn exists(&self, id: &ID) -> RosterResult<bool>;

    /// Counts all records.
    async fn count(&self) -> RosterResult<u64>;
}

/// Trait for records with a primary key.
pub trait Keyed<ID> {
    /// Returns the record's primary key.
    fn key(&self) -> ID;
}

/// Conversion seam between a persistence record and its transfer object.
///
/// `assemble` turns a stored record into the representation exposed to
/// callers and is fallible because stored data can be malformed.
/// `disassemble` builds the record to persist from a transfer object and
/// cannot fail: the transfer object is validated before it gets here.
pub trait Assembler: Send + Sync + 'static {
    /// The persistence-layer record type.
    type Record: Send + Sync;
    /// The transfer object exposed to callers.
    type Transfer: Send + Sync;

    /// Converts a stored record into a transfer object.
    fn assemble(record: Self::Record) -> RosterResult<Self::Transfer>;

    /// Converts a transfer object into a record ready to persist.
    fn disassemble(transfer: &Self::Transfer) -> Self::Record;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct CelsiusRecord(i32);
    struct Fahrenheit(i32);

    struct TemperatureAssembler;

    impl Assembler for TemperatureAssembler {
        type Record = CelsiusRecord;
        type Transfer = Fahrenheit;

        fn assemble(record: CelsiusRecord) -> RosterResult<Fahrenheit> {
            Ok(Fahrenheit(record.0 * 9 / 5 + 32))
        }

        fn disassemble(transfer: &Fahrenheit) -> CelsiusRecord {
            CelsiusRecord((transfer.0 - 32) * 5 / 9)
        }
    }

    #[test]
    fn test_assembler_round_trip() {
        let transfer = TemperatureAssembler::assemble(CelsiusRecord(100)).unwrap();
        assert_eq!(transfer.0, 212);

        let record = TemperatureAssembler::disassemble(&transfer);
        assert_eq!(record.0, 100);
    }
}

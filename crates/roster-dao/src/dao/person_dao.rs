//! `PersonDao` trait — person data access interface.
//!
//! Extends the generic [`Dao`] CRUD surface with person-specific
//! finders. Implementations target a single data source; the MySQL
//! implementation is [`MySqlPersonDao`].
//!
//! [`Dao`]: roster_core::Dao
//! [`MySqlPersonDao`]: crate::mysql::MySqlPersonDao

use async_trait::async_trait;
use roster_core::{Dao, Page, PageRequest, Person, PersonId, RosterResult};

/// Person data access object.
#[async_trait]
pub trait PersonDao: Dao<Person, PersonId> {
    /// Finds people by exact last name, with pagination.
    async fn find_by_last_name(
        &self,
        last_name: &str,
        page: PageRequest,
    ) -> RosterResult<Page<Person>>;
}

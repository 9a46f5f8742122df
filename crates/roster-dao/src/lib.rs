//! # Roster DAO
//!
//! Data-access layer for Roster, backed by SQLx/MySQL.
//!
//! ```text
//! Caller
//!   ↓  Arc<dyn PersonDao>        (domain interface)
//! MySqlPersonDao                 (concrete DAO — delegates to the base)
//!   ↓  AssembledDao<PersonAssembler>   (transfer-object base)
//!   ↓  MySqlDao<PersonRecord>          (entity base — generic CRUD)
//!   ↓
//! MySQL
//! ```
//!
//! ## Structure
//!
//! ```text
//! src/
//!   pool.rs                  ← DatabasePool (SQLx pool lifecycle)
//!   dao/
//!     person_dao.rs          ← PersonDao trait
//!   mysql/
//!     base.rs                ← SqlRecord trait + MySqlDao (entity base)
//!     assembled.rs           ← AssembledDao (transfer-object base)
//!     person_dao.rs          ← PersonRecord, PersonAssembler, MySqlPersonDao
//! ```

pub mod dao;
pub mod mysql;
pub mod pool;

pub use dao::PersonDao;
pub use mysql::{AssembledDao, MySqlDao, MySqlPersonDao, PersonAssembler, PersonRecord, SqlRecord};
pub use pool::{create_pool, DatabasePool};

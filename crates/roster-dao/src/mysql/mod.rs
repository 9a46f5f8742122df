//! MySQL backend: generic DAO bases and concrete implementations.

mod assembled;
mod base;
mod person_dao;

pub use assembled::AssembledDao;
pub use base::{MySqlDao, MySqlQuery, SqlRecord};
pub use person_dao::{MySqlPersonDao, PersonAssembler, PersonRecord};

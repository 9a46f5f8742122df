//! DAO trait definitions.

mod person_dao;

pub use person_dao::PersonDao;

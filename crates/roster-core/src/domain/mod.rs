//! Domain types exposed to callers of the data-access layer.

mod person;

pub use person::Person;

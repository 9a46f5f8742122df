//! # Roster Core
//!
//! Core types, traits, and error definitions for the Roster data-access
//! layer. This crate provides the generic DAO abstractions and the domain
//! types that the storage backends implement against.

pub mod domain;
pub mod error;
pub mod id;
pub mod pagination;
pub mod result;
pub mod telemetry;
pub mod traits;

pub use domain::*;
pub use error::*;
pub use id::*;
pub use pagination::*;
pub use result::*;
pub use telemetry::LoggingConfig;
pub use traits::*;

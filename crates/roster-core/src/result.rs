//! Result type aliases for Roster.

use crate::RosterError;

/// A specialized `Result` type for data-access operations.
pub type RosterResult<T> = Result<T, RosterError>;

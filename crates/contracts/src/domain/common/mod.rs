//! Common types shared by all aggregates

pub mod aggregate_id;
pub mod error;
pub mod list_query;
pub mod status_tone;
pub mod wire;

// Re-exports
pub use aggregate_id::AggregateId;
pub use error::{ActionError, PreconditionError, ValidationError};
pub use list_query::ListQuery;
pub use status_tone::StatusTone;

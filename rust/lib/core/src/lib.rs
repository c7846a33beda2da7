//! Shared plumbing for the showroom catalog: error taxonomy, runtime
//! configuration, and record id generation.

pub mod config;
pub mod error;
pub mod types;

pub use config::{CatalogConfig, DeletePolicy};
pub use error::{CatalogError, ValidationError, error_code};
pub use types::{ClockIds, IdSource, SequentialIds};

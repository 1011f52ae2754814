//! Domain logic for the query log service.
//!
//! This crate has no internal dependencies so it can be used by both the
//! database and API layers.

pub mod error;
pub mod pagination;
pub mod query_log;
pub mod types;
pub mod validation;

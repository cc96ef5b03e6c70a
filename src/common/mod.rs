//! Common types and utilities shared across pagesim.
//!
//! - Configuration constants and [`config::Settings`]
//! - Error types
//! - Identifiers ([`PageId`])

pub mod config;
pub mod error;
mod page_id;

pub use error::{Error, Result};
pub use page_id::PageId;

//! MongoDB store access.
//!
//! This module provides:
//! - `StoreManager`: Tokio runtime owner and basic connection methods
//! - `ops`: collection operations (import, documents, aggregation)

pub mod manager;
pub mod ops;

pub use manager::StoreManager;

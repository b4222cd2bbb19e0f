//! Store Module
//!
//! In-memory table of protein records.
//!
//! ## Responsibilities
//! - Load tab-delimited records, preserving file order
//! - Exact, case-sensitive name lookup (first match wins)
//! - Ordered iteration for pattern search
//!
//! ## Lifecycle
//! Append-only while loading, then handed to the [`crate::engine::Engine`]
//! by value and only read from. Duplicate names are kept; lookups see the
//! earliest one.

mod loader;
mod table;

pub use loader::parse_record;
pub use table::RecordStore;

//! # GeneSearch
//!
//! A command-driven query tool over protein sequence tables:
//! - Run-length encoded formulas (`2A3B` → `AABBB`)
//! - `search`, `diff` and `mode` queries from a tab-separated script
//! - One report, written to the console and to a file
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                  Command Script (file)                       │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │ one line at a time
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                     Dispatcher                               │
//! │          (parse → execute → render → separator)              │
//! └──────────┬──────────────────────────────────┬───────────────┘
//!            │                                  │
//!            ▼                                  ▼
//!   ┌─────────────────┐                ┌─────────────────┐
//!   │     Engine      │                │   FanOutSink    │
//!   │ search/diff/mode│                │ console + file  │
//!   └────────┬────────┘                └─────────────────┘
//!            │
//!     ┌──────┴───────┐
//!     ▼              ▼
//! ┌─────────┐  ┌─────────────┐
//! │ Decoder │  │ RecordStore │
//! └─────────┘  └─────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod sequence;
pub mod store;
pub mod protocol;
pub mod report;
pub mod engine;
pub mod dispatcher;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{GeneError, Result};
pub use config::{Config, ErrorPolicy};
pub use sequence::{decode, Record};
pub use store::RecordStore;
pub use engine::Engine;
pub use dispatcher::{run, Dispatcher, RunSummary};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of GeneSearch
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

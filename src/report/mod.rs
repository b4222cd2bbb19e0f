//! Report Module
//!
//! Line-oriented output sinks for the report.
//!
//! ```text
//!                 ┌──────────────┐
//!   report(line) ─▶  FanOutSink  │
//!                 └──────┬───────┘
//!             ┌──────────┴──────────┐
//!             ▼                     ▼
//!      ┌─────────────┐       ┌─────────────┐
//!      │ WriterSink  │       │ WriterSink  │   (or MemorySink in tests)
//!      │  (stdout)   │       │   (file)    │
//!      └─────────────┘       └─────────────┘
//! ```
//!
//! Every line goes to every sink, in the order the sinks were added.

mod sink;

pub use sink::{FanOutSink, MemorySink, ReportSink, WriterSink};

//! Sequence Module
//!
//! Protein records and the run-length notation their formulas are written in.
//!
//! ## Formula Notation
//! ```text
//!   "2A3B"  →  "AABBB"
//!    │ │
//!    │ └─ '3' repeats the next character: 2 extra copies + the 'B' itself
//!    └─── '2' repeats the next character: 1 extra copy  + the 'A' itself
//! ```
//!
//! - Counts are a single ASCII digit; `0` and `1` add no extra copies
//! - Any other character is copied through once
//! - A digit in last position has nothing to repeat and fails to decode

mod decoder;

pub use decoder::decode;

/// A single row of the record table
///
/// `formula` is kept in its encoded form and never rewritten after load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// Protein name (lookup key, first match wins)
    pub name: String,

    /// Source organism
    pub organism: String,

    /// Run-length encoded amino-acid formula
    pub formula: String,
}

impl Record {
    /// Create a record from its three fields
    pub fn new(
        name: impl Into<String>,
        organism: impl Into<String>,
        formula: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            organism: organism.into(),
            formula: formula.into(),
        }
    }

    /// Expand this record's formula into its literal sequence
    pub fn decoded(&self) -> crate::Result<String> {
        decode(&self.formula)
    }
}

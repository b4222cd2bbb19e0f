//! Engine Module
//!
//! The query engine that answers commands against the record store.
//!
//! ## Responsibilities
//! - Route parsed commands to the matching query
//! - `search`: decoded pattern against *encoded* formulas
//! - `diff`: positional distance between two *encoded* formulas
//! - `mode`: most frequent character of an *encoded* formula
//!
//! Stored formulas are never decoded by `diff` or `mode`, and `search`
//! matches the decoded pattern against the raw formula text. Absent names
//! are reported as `None`, never as errors.

use std::collections::BTreeMap;

use crate::config::Config;
use crate::error::Result;
use crate::protocol::{Command, ModeResult, Response, SearchHit};
use crate::sequence::{decode, Record};
use crate::store::RecordStore;

/// The query engine
///
/// Owns the record store; all queries take `&self` and never mutate it.
pub struct Engine {
    /// Loaded records (frozen after construction)
    store: RecordStore,
}

impl Engine {
    /// Create an engine over an already loaded store
    pub fn new(store: RecordStore) -> Self {
        Self { store }
    }

    /// Load the record table named by the config
    pub fn open(config: &Config) -> Result<Self> {
        let store = RecordStore::open(&config.sequences_path)?;
        Ok(Self::new(store))
    }

    /// Execute a command
    ///
    /// Routes commands to appropriate handlers. Only a search pattern that
    /// fails to decode produces an error.
    pub fn execute(&self, command: &Command) -> Result<Response> {
        let response = match command {
            Command::Search { pattern } => {
                let (pattern, hit) = self.search_decoded(pattern)?;
                let hit = hit.map(|record| SearchHit {
                    organism: record.organism.clone(),
                    name: record.name.clone(),
                });
                Response::Search { pattern, hit }
            }
            Command::Diff { first, second } => Response::Diff {
                first: first.clone(),
                second: second.clone(),
                difference: self.diff(first, second),
            },
            Command::Mode { name } => Response::Mode {
                name: name.clone(),
                mode: self.mode(name),
            },
            Command::Unknown { .. } => Response::Unknown,
        };

        Ok(response)
    }

    /// Find the first record whose formula contains the decoded `pattern`
    pub fn search(&self, pattern: &str) -> Result<Option<&Record>> {
        self.search_decoded(pattern).map(|(_, hit)| hit)
    }

    /// Decoded pattern plus the first record (store order) whose raw
    /// formula contains it
    fn search_decoded(&self, pattern: &str) -> Result<(String, Option<&Record>)> {
        let decoded = decode(pattern)?;
        let hit = self
            .store
            .iter()
            .find(|record| record.formula.contains(decoded.as_str()));
        Ok((decoded, hit))
    }

    /// Distance between the formulas of two records
    ///
    /// Returns `None` if either name is absent.
    pub fn diff(&self, first: &str, second: &str) -> Option<usize> {
        let first = self.store.find_formula(first)?;
        let second = self.store.find_formula(second)?;
        Some(formula_distance(first, second))
    }

    /// Most frequent character in a record's formula
    ///
    /// Returns `None` if the name is absent.
    pub fn mode(&self, name: &str) -> Option<ModeResult> {
        self.store.find_formula(name).map(most_frequent)
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Get the record store
    pub fn store(&self) -> &RecordStore {
        &self.store
    }
}

/// Mismatches over the shared prefix plus the length difference
///
/// Lengths and positions are counted in `char`s.
pub fn formula_distance(first: &str, second: &str) -> usize {
    let mismatches = first
        .chars()
        .zip(second.chars())
        .filter(|(a, b)| a != b)
        .count();

    mismatches + first.chars().count().abs_diff(second.chars().count())
}

/// Most frequent character; ties go to the smallest character
///
/// An empty formula yields `(' ', 0)`.
pub fn most_frequent(formula: &str) -> ModeResult {
    let mut counts: BTreeMap<char, usize> = BTreeMap::new();
    for symbol in formula.chars() {
        *counts.entry(symbol).or_insert(0) += 1;
    }

    // Ascending key order, so a strict comparison keeps the smallest on ties
    counts
        .into_iter()
        .fold(ModeResult::default(), |best, (symbol, count)| {
            if count > best.count {
                ModeResult { symbol, count }
            } else {
                best
            }
        })
}

//! Response definitions
//!
//! Query results, before they are rendered into report lines.

/// Outcome class of a response
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Found,
    NotFound,
    Unknown,
}

/// Record matched by a search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchHit {
    pub organism: String,
    pub name: String,
}

/// Most frequent character of a formula and how often it occurs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModeResult {
    pub symbol: char,
    pub count: usize,
}

impl Default for ModeResult {
    /// Result for an empty formula
    fn default() -> Self {
        Self {
            symbol: ' ',
            count: 0,
        }
    }
}

/// Result of executing one command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    /// `pattern` is the decoded search pattern; `hit` is `None` when nothing matched
    Search {
        pattern: String,
        hit: Option<SearchHit>,
    },

    /// `difference` is `None` when either name is missing from the store
    Diff {
        first: String,
        second: String,
        difference: Option<usize>,
    },

    /// `mode` is `None` when the name is missing from the store
    Mode {
        name: String,
        mode: Option<ModeResult>,
    },

    Unknown,
}

impl Response {
    /// Get the response status
    pub fn status(&self) -> Status {
        match self {
            Response::Search { hit: Some(_), .. }
            | Response::Diff { difference: Some(_), .. }
            | Response::Mode { mode: Some(_), .. } => Status::Found,
            Response::Search { .. } | Response::Diff { .. } | Response::Mode { .. } => {
                Status::NotFound
            }
            Response::Unknown => Status::Unknown,
        }
    }
}

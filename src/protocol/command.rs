//! Command definitions
//!
//! Represents parsed script lines.

/// Command types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandType {
    Search,
    Diff,
    Mode,
    Unknown,
}

impl CommandType {
    /// Map a script keyword to its command type (case-sensitive)
    pub fn from_keyword(keyword: &str) -> Self {
        match keyword {
            "search" => CommandType::Search,
            "diff" => CommandType::Diff,
            "mode" => CommandType::Mode,
            _ => CommandType::Unknown,
        }
    }

    /// Script keyword, `None` for unknown commands
    pub fn keyword(self) -> Option<&'static str> {
        match self {
            CommandType::Search => Some("search"),
            CommandType::Diff => Some("diff"),
            CommandType::Mode => Some("mode"),
            CommandType::Unknown => None,
        }
    }

    /// Number of arguments the command needs
    pub fn arity(self) -> usize {
        match self {
            CommandType::Search | CommandType::Mode => 1,
            CommandType::Diff => 2,
            CommandType::Unknown => 0,
        }
    }
}

/// A parsed command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Find the first record whose formula contains the decoded pattern
    Search { pattern: String },

    /// Count positional differences between two formulas
    Diff { first: String, second: String },

    /// Most frequent character of a formula
    Mode { name: String },

    /// Unrecognised keyword (kept for logging only)
    Unknown { keyword: String },
}

impl Command {
    /// Get the command type
    pub fn command_type(&self) -> CommandType {
        match self {
            Command::Search { .. } => CommandType::Search,
            Command::Diff { .. } => CommandType::Diff,
            Command::Mode { .. } => CommandType::Mode,
            Command::Unknown { .. } => CommandType::Unknown,
        }
    }
}

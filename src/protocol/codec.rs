//! Protocol codec
//!
//! Parsing of command lines and rendering of report lines.
//!
//! ## Report Lines by Response
//! ```text
//! search:  NNN   search   <decoded pattern>
//!          organism<TAB><TAB>protein
//!          <organism>    <name>            | NOT FOUND
//!
//! diff:    NNN   diff   <name1> vs <name2>
//!          amino-acids difference:         | MISSING: <name1> <name2>
//!          <count>
//!
//! mode:    NNN   mode   <name>
//!          amino-acid occurs:              | MISSING: <name>
//!          <symbol>          <count>
//!
//! other:   NNN   unknown command
//! ```

use crate::error::{GeneError, Result};
use super::{Command, CommandType, Response, FIELD_SEPARATOR};

/// Line emitted after the header and after every command
pub const SEPARATOR: &str = "----------------------------------------";

/// Gap between the command index, keyword and arguments in echo lines
const ECHO_GAP: &str = "   ";

// =============================================================================
// Command Encoding/Decoding
// =============================================================================

/// Parse one script line into a command
///
/// `line_number` is 1-based and only used for error reporting. Unknown
/// keywords are not an error; missing arguments are.
pub fn decode_command(line: &str, line_number: usize) -> Result<Command> {
    let mut fields = line.split(FIELD_SEPARATOR);
    let keyword = fields.next().unwrap_or_default();
    let command_type = CommandType::from_keyword(keyword);

    let args: Vec<&str> = fields.take(command_type.arity()).collect();
    if args.len() < command_type.arity() {
        return Err(GeneError::MissingArgument {
            line: line_number,
            command: command_type.keyword().unwrap_or("unknown"),
            expected: command_type.arity(),
        });
    }

    let command = match command_type {
        CommandType::Search => Command::Search {
            pattern: args[0].to_string(),
        },
        CommandType::Diff => Command::Diff {
            first: args[0].to_string(),
            second: args[1].to_string(),
        },
        CommandType::Mode => Command::Mode {
            name: args[0].to_string(),
        },
        CommandType::Unknown => Command::Unknown {
            keyword: keyword.to_string(),
        },
    };

    Ok(command)
}

/// Render a command back into its script line
pub fn encode_command(command: &Command) -> String {
    match command {
        Command::Search { pattern } => format!("search\t{}", pattern),
        Command::Diff { first, second } => format!("diff\t{}\t{}", first, second),
        Command::Mode { name } => format!("mode\t{}", name),
        Command::Unknown { keyword } => keyword.clone(),
    }
}

// =============================================================================
// Report Encoding
// =============================================================================

/// Zero-padded command index (`7` → `"007"`)
pub fn format_index(index: usize) -> String {
    format!("{:03}", index)
}

/// Render the report lines for one command, without the trailing separator
pub fn encode_response(index: usize, response: &Response) -> Vec<String> {
    let index = format_index(index);

    match response {
        Response::Search { pattern, hit } => {
            let result = match hit {
                Some(hit) => format!("{}    {}", hit.organism, hit.name),
                None => "NOT FOUND".to_string(),
            };
            vec![
                format!("{}{gap}search{gap}{}", index, pattern, gap = ECHO_GAP),
                "organism\t\tprotein".to_string(),
                result,
            ]
        }
        Response::Diff {
            first,
            second,
            difference,
        } => {
            let mut lines = vec![format!(
                "{}{gap}diff{gap}{} vs {}",
                index,
                first,
                second,
                gap = ECHO_GAP
            )];
            match difference {
                Some(count) => {
                    lines.push("amino-acids difference:".to_string());
                    lines.push(count.to_string());
                }
                None => lines.push(format!("MISSING: {} {}", first, second)),
            }
            lines
        }
        Response::Mode { name, mode } => {
            let mut lines = vec![format!("{}{gap}mode{gap}{}", index, name, gap = ECHO_GAP)];
            match mode {
                Some(mode) => {
                    lines.push("amino-acid occurs:".to_string());
                    lines.push(format!("{}          {}", mode.symbol, mode.count));
                }
                None => lines.push(format!("MISSING: {}", name)),
            }
            lines
        }
        Response::Unknown => vec![format!("{}{}unknown command", index, ECHO_GAP)],
    }
}

/// Render the report line for a command skipped because of `error`
pub fn encode_error(index: usize, error: &GeneError) -> String {
    format!("{}{}error: {}", format_index(index), ECHO_GAP, error)
}

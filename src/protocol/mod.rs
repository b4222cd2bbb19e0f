//! Protocol Module
//!
//! Defines the command script format and the report format.
//!
//! ## Command Script (one command per line, tab-separated)
//! ```text
//! search<TAB>pattern
//! diff<TAB>name1<TAB>name2
//! mode<TAB>name
//! <anything else>            → unknown command
//! ```
//!
//! ## Report Block (per command)
//! ```text
//! ┌──────────────────────────────────────────┐
//! │ NNN   <keyword>   <arguments>            │  echo, NNN = 1-based line
//! │ <result lines>                           │  found / NOT FOUND / MISSING
//! │ ---------------------------------------- │  separator (40 hyphens)
//! └──────────────────────────────────────────┘
//! ```

/// Field separator shared by command scripts and record tables
pub const FIELD_SEPARATOR: char = '\t';

mod command;
mod response;
mod codec;

pub use command::{Command, CommandType};
pub use response::{ModeResult, Response, SearchHit, Status};
pub use codec::{
    decode_command, encode_command, encode_error, encode_response, format_index, SEPARATOR,
};

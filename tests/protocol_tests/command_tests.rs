//! Command Tests
//!
//! Tests for parsing script lines into commands.

use genesearch::error::GeneError;
use genesearch::protocol::{decode_command, encode_command, Command, CommandType};

// =============================================================================
// Keyword Tests
// =============================================================================

#[test]
fn test_command_type_from_keyword() {
    assert_eq!(CommandType::from_keyword("search"), CommandType::Search);
    assert_eq!(CommandType::from_keyword("diff"), CommandType::Diff);
    assert_eq!(CommandType::from_keyword("mode"), CommandType::Mode);
    assert_eq!(CommandType::from_keyword("Search"), CommandType::Unknown);
    assert_eq!(CommandType::from_keyword(""), CommandType::Unknown);
}

#[test]
fn test_command_type_arity() {
    assert_eq!(CommandType::Search.arity(), 1);
    assert_eq!(CommandType::Diff.arity(), 2);
    assert_eq!(CommandType::Mode.arity(), 1);
    assert_eq!(CommandType::Unknown.arity(), 0);
}

// =============================================================================
// Decode Tests
// =============================================================================

#[test]
fn test_decode_search() {
    let command = decode_command("search\t2A1B", 1).unwrap();

    assert_eq!(
        command,
        Command::Search {
            pattern: "2A1B".to_string()
        }
    );
    assert_eq!(command.command_type(), CommandType::Search);
}

#[test]
fn test_decode_diff() {
    let command = decode_command("diff\tP1\tP3", 1).unwrap();

    match command {
        Command::Diff { first, second } => {
            assert_eq!(first, "P1");
            assert_eq!(second, "P3");
        }
        other => panic!("Expected DIFF command, got {:?}", other),
    }
}

#[test]
fn test_decode_mode() {
    let command = decode_command("mode\tP2", 1).unwrap();
    assert_eq!(command, Command::Mode { name: "P2".to_string() });
}

#[test]
fn test_decode_ignores_extra_arguments() {
    let command = decode_command("mode\tP2\tP9", 1).unwrap();
    assert_eq!(command, Command::Mode { name: "P2".to_string() });
}

#[test]
fn test_decode_search_empty_pattern() {
    let command = decode_command("search\t", 1).unwrap();
    assert_eq!(command, Command::Search { pattern: String::new() });
}

#[test]
fn test_decode_unknown_keyword() {
    let command = decode_command("foo\tbar", 5).unwrap();

    assert_eq!(command, Command::Unknown { keyword: "foo".to_string() });
    assert_eq!(command.command_type(), CommandType::Unknown);
}

#[test]
fn test_decode_blank_line_is_unknown() {
    let command = decode_command("", 2).unwrap();
    assert_eq!(command, Command::Unknown { keyword: String::new() });
}

#[test]
fn test_decode_keyword_with_spaces_is_unknown() {
    let command = decode_command("search 2A", 1).unwrap();
    assert_eq!(command.command_type(), CommandType::Unknown);
}

// =============================================================================
// Missing Argument Tests
// =============================================================================

#[test]
fn test_decode_search_without_pattern() {
    match decode_command("search", 3) {
        Err(GeneError::MissingArgument {
            line,
            command,
            expected,
        }) => {
            assert_eq!(line, 3);
            assert_eq!(command, "search");
            assert_eq!(expected, 1);
        }
        other => panic!("Expected missing argument, got {:?}", other),
    }
}

#[test]
fn test_decode_diff_with_one_name() {
    let result = decode_command("diff\tP1", 9);
    assert!(matches!(
        result,
        Err(GeneError::MissingArgument {
            line: 9,
            command: "diff",
            expected: 2
        })
    ));
}

// =============================================================================
// Encode Tests
// =============================================================================

#[test]
fn test_encode_command_lines() {
    assert_eq!(
        encode_command(&Command::Diff {
            first: "P1".to_string(),
            second: "P2".to_string(),
        }),
        "diff\tP1\tP2"
    );
    assert_eq!(
        encode_command(&Command::Unknown { keyword: "foo".to_string() }),
        "foo"
    );
}

#[test]
fn test_record_and_command_lines_share_separator() {
    use genesearch::protocol::FIELD_SEPARATOR;
    use genesearch::store::parse_record;

    let line = format!("diff{0}P1{0}P2", FIELD_SEPARATOR);

    assert_eq!(FIELD_SEPARATOR, '\t');
    assert_eq!(
        decode_command(&line, 1).unwrap(),
        Command::Diff {
            first: "P1".to_string(),
            second: "P2".to_string(),
        }
    );
    assert_eq!(parse_record(&line, 1).unwrap().formula, "P2");
}

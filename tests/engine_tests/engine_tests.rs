//! Tests for Engine
//!
//! These tests verify:
//! - search matches the decoded pattern against raw formulas
//! - diff compares raw formulas and reports missing names
//! - mode counts raw formula characters with smallest-symbol tie-break
//! - Command execution produces the matching responses

use genesearch::config::Config;
use genesearch::engine::{formula_distance, most_frequent, Engine};
use genesearch::error::GeneError;
use genesearch::protocol::{Command, ModeResult, Response, SearchHit, Status};
use genesearch::sequence::Record;
use genesearch::store::RecordStore;
use std::fs;
use tempfile::TempDir;

// =============================================================================
// Helper Functions
// =============================================================================

fn sample_engine() -> Engine {
    let mut store = RecordStore::new();
    store.push(Record::new("P1", "Human", "2A1B"));
    store.push(Record::new("P2", "Mouse", "AAB"));
    store.push(Record::new("P4", "Yeast", "ABAB"));
    store.push(Record::new("P5", "Zebrafish", ""));
    Engine::new(store)
}

// =============================================================================
// Search Tests
// =============================================================================

#[test]
fn test_search_first_match_in_store_order() {
    let engine = sample_engine();

    // Both P1 ("2A1B") and P2 ("AAB") contain "A"
    let hit = engine.search("A").unwrap().unwrap();
    assert_eq!(hit.name, "P1");
    assert_eq!(hit.organism, "Human");
}

#[test]
fn test_search_matches_raw_formula_not_decoded() {
    let engine = sample_engine();

    // "2A" decodes to "AA": P1's raw "2A1B" lacks it, P2's raw "AAB" has it
    let hit = engine.search("2A").unwrap().unwrap();
    assert_eq!(hit.name, "P2");
}

#[test]
fn test_search_literal_digits_in_pattern_are_decoded_first() {
    let engine = sample_engine();

    // "1B" decodes to "B", which P1 contains
    assert_eq!(engine.search("1B").unwrap().unwrap().name, "P1");
}

#[test]
fn test_search_not_found() {
    let engine = sample_engine();
    assert!(engine.search("XYZ").unwrap().is_none());
}

#[test]
fn test_search_on_empty_store() {
    let engine = Engine::new(RecordStore::new());
    assert!(engine.search("A").unwrap().is_none());
}

#[test]
fn test_search_bad_pattern_is_decode_error() {
    let engine = sample_engine();
    assert!(matches!(engine.search("AB3"), Err(GeneError::Decode { .. })));
}

// =============================================================================
// Diff Tests
// =============================================================================

#[test]
fn test_diff_same_name_is_zero() {
    let engine = sample_engine();
    assert_eq!(engine.diff("P1", "P1"), Some(0));
}

#[test]
fn test_diff_compares_raw_formulas() {
    let engine = sample_engine();

    // "2A1B" vs "AAB": positions 0 ('2'/'A') and 2 ('1'/'B') differ, +1 tail
    assert_eq!(engine.diff("P1", "P2"), Some(3));
}

#[test]
fn test_diff_is_symmetric() {
    let engine = sample_engine();

    assert_eq!(engine.diff("P2", "P4"), engine.diff("P4", "P2"));
    assert_eq!(engine.diff("P1", "P5"), Some(4));
    assert_eq!(engine.diff("P5", "P1"), Some(4));
}

#[test]
fn test_diff_missing_name() {
    let engine = sample_engine();

    assert_eq!(engine.diff("P1", "P3"), None);
    assert_eq!(engine.diff("P3", "P1"), None);
    assert_eq!(engine.diff("P3", "P6"), None);
}

#[test]
fn test_formula_distance_unicode_lengths() {
    assert_eq!(formula_distance("ÅB", "AB"), 1);
    assert_eq!(formula_distance("Å", "ÅÅ"), 1);
}

// =============================================================================
// Mode Tests
// =============================================================================

#[test]
fn test_mode_single_winner() {
    let engine = sample_engine();
    assert_eq!(engine.mode("P2"), Some(ModeResult { symbol: 'A', count: 2 }));
}

#[test]
fn test_mode_tie_resolves_to_smallest_symbol() {
    let engine = sample_engine();
    assert_eq!(engine.mode("P4"), Some(ModeResult { symbol: 'A', count: 2 }));
}

#[test]
fn test_mode_counts_raw_characters() {
    let engine = sample_engine();

    // Raw "2A1B" has four distinct characters once each; '1' is smallest
    assert_eq!(engine.mode("P1"), Some(ModeResult { symbol: '1', count: 1 }));
}

#[test]
fn test_mode_empty_formula_defaults() {
    let engine = sample_engine();
    assert_eq!(engine.mode("P5"), Some(ModeResult { symbol: ' ', count: 0 }));
}

#[test]
fn test_mode_missing_name() {
    let engine = sample_engine();
    assert_eq!(engine.mode("P3"), None);
}

#[test]
fn test_most_frequent_prefers_higher_count_over_smaller_symbol() {
    assert_eq!(most_frequent("ABBB"), ModeResult { symbol: 'B', count: 3 });
}

// =============================================================================
// Execute Tests
// =============================================================================

#[test]
fn test_execute_search_returns_decoded_pattern() {
    let engine = sample_engine();

    let response = engine
        .execute(&Command::Search {
            pattern: "2A".to_string(),
        })
        .unwrap();

    assert_eq!(
        response,
        Response::Search {
            pattern: "AA".to_string(),
            hit: Some(SearchHit {
                organism: "Mouse".to_string(),
                name: "P2".to_string(),
            }),
        }
    );
    assert_eq!(response.status(), Status::Found);
}

#[test]
fn test_execute_diff_missing() {
    let engine = sample_engine();

    let response = engine
        .execute(&Command::Diff {
            first: "P1".to_string(),
            second: "P3".to_string(),
        })
        .unwrap();

    assert_eq!(
        response,
        Response::Diff {
            first: "P1".to_string(),
            second: "P3".to_string(),
            difference: None,
        }
    );
    assert_eq!(response.status(), Status::NotFound);
}

#[test]
fn test_execute_mode() {
    let engine = sample_engine();

    let response = engine
        .execute(&Command::Mode {
            name: "P4".to_string(),
        })
        .unwrap();

    match response {
        Response::Mode { name, mode } => {
            assert_eq!(name, "P4");
            assert_eq!(mode, Some(ModeResult { symbol: 'A', count: 2 }));
        }
        other => panic!("Expected mode response, got {:?}", other),
    }
}

#[test]
fn test_execute_unknown() {
    let engine = sample_engine();

    let response = engine
        .execute(&Command::Unknown {
            keyword: "foo".to_string(),
        })
        .unwrap();

    assert_eq!(response, Response::Unknown);
    assert_eq!(response.status(), Status::Unknown);
}

#[test]
fn test_execute_search_decode_error() {
    let engine = sample_engine();

    let result = engine.execute(&Command::Search {
        pattern: "A9".to_string(),
    });

    // "A9": the 9 sits in last position
    assert!(matches!(result, Err(GeneError::Decode { position: 1, .. })));
}

// =============================================================================
// Open Tests
// =============================================================================

#[test]
fn test_engine_open_loads_sequences_path() {
    let temp_dir = TempDir::new().unwrap();
    let sequences = temp_dir.path().join("sequences.txt");
    fs::write(&sequences, "P1\tHuman\t2A1B\nP2\tMouse\tAAB\n").unwrap();

    let config = Config::builder().sequences_path(&sequences).build();
    let engine = Engine::open(&config).unwrap();

    assert_eq!(engine.store().len(), 2);
    assert_eq!(engine.diff("P1", "P2"), Some(3));
}

#[test]
fn test_execute_search_agrees_with_search() {
    let engine = sample_engine();

    for pattern in ["A", "2A", "1B", "XYZ", ""] {
        let direct = engine.search(pattern).unwrap().map(|r| r.name.clone());
        let routed = match engine
            .execute(&Command::Search {
                pattern: pattern.to_string(),
            })
            .unwrap()
        {
            Response::Search { hit, .. } => hit.map(|h| h.name),
            other => panic!("Expected search response, got {:?}", other),
        };
        assert_eq!(direct, routed, "pattern {:?}", pattern);
    }
}

//! Corpus-based conformance tests.
//!
//! These tests run all vectors from `tests/corpus/parse_vectors.json` and
//! verify the parser produces the recorded tree or error code for each.
//!
//! # Requirements
//!
//! - Load the corpus
//! - Run all test vectors
//! - Report failures with details

use jsonpp::conformance::{CorpusRunner, TestResult};
use jsonpp::json::Limits;
use std::path::{Path, PathBuf};

/// Path to the corpus file relative to the crate root.
const CORPUS_PATH: &str = "tests/corpus/parse_vectors.json";

fn corpus_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join(CORPUS_PATH)
}

/// Load and run the full corpus.
#[test]
fn test_full_corpus() {
    let runner = CorpusRunner::load(corpus_path()).expect("Failed to load corpus");

    println!("Loaded corpus with {} vectors", runner.vector_count());
    println!("Manifest: {:?}", runner.manifest());

    let results = runner.run_all();

    println!("\n=== Corpus Conformance Results ===");
    println!("{}", results.summary());

    if !results.failures().is_empty() {
        println!("\nFailures:");
        for (id, result) in results.failures() {
            if let TestResult::Fail { expected, actual } = result {
                println!("  {} - expected: {}, actual: {}", id, expected, actual);
            }
        }
    }

    if !results.error_details().is_empty() {
        println!("\nErrors:");
        for (id, result) in results.error_details() {
            if let TestResult::Error { message } = result {
                println!("  {} - {}", id, message);
            }
        }
    }

    assert!(
        results.all_passed(),
        "Corpus conformance failed: {}",
        results.summary()
    );
    assert_eq!(results.skipped, 0, "Corpus uses an unknown op");
}

/// Test that we can load the corpus manifest.
#[test]
fn test_corpus_manifest() {
    let runner = CorpusRunner::load(corpus_path()).expect("Failed to load corpus");
    let manifest = runner.manifest();

    assert_eq!(manifest.format_version, "corpus-v1");
    assert_eq!(manifest.version, "1");
    assert!(manifest.description.is_some());
}

/// Every rejection vector must be rejected with its recorded code.
#[test]
fn test_corpus_negative_cases() {
    let runner = CorpusRunner::load(corpus_path()).expect("Failed to load corpus");
    let results = runner.run_all();

    let negative_tests: Vec<_> = results
        .details
        .iter()
        .filter(|(id, _)| id.starts_with("reject_"))
        .collect();

    assert!(negative_tests.len() >= 10, "too few rejection vectors");

    for (id, result) in &negative_tests {
        if let TestResult::Fail { expected, actual } = result {
            panic!("{} failed: expected={}, actual={}", id, expected, actual);
        }
    }
}

/// Round-trip vectors re-parse both renderings.
#[test]
fn test_corpus_roundtrip_cases() {
    let runner = CorpusRunner::load(corpus_path()).expect("Failed to load corpus");
    let results = runner.run_all();

    let roundtrip: Vec<_> = results
        .details
        .iter()
        .filter(|(id, _)| id.starts_with("roundtrip_"))
        .collect();

    assert!(!roundtrip.is_empty());
    assert!(roundtrip.iter().all(|(_, r)| r.is_pass()));
}

/// Tight limits turn deep but otherwise valid vectors into failures.
#[test]
fn test_corpus_under_tight_limits() {
    let mut limits = Limits::strict();
    limits.max_nesting_depth = 1;

    let runner = CorpusRunner::load(corpus_path())
        .expect("Failed to load corpus")
        .with_limits(limits);
    let results = runner.run_all();

    let nested = results
        .details
        .iter()
        .find(|(id, _)| id == "accept_nested")
        .map(|(_, r)| r)
        .expect("accept_nested vector present");
    assert!(nested.is_fail());
}

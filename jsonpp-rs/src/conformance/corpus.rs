//! Corpus-based conformance testing.
//!
//! Vectors are decoded with `serde_json`, which is only used here as the
//! container format; the documents under test go through [`crate::json`].
//!
//! Each vector's `expected` is one of:
//!
//! - `{"ok": "<compact rendering>"}`: the document parses and
//!   [`to_compact_string`] of the tree equals the given text byte for byte
//! - `{"err": {"code": N}}`: the document is rejected with
//!   [`ErrorCode::code`](crate::error::ErrorCode::code) `N`
//!
//! Supported ops are `parse` (the default) and `roundtrip`, which also
//! checks that both renderings parse back to an equal tree.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use super::{ConformanceError, ConformanceResult};
use crate::json::{parse_with_limits, to_compact_string, to_pretty_string, Limits, Value};

/// Corpus manifest with metadata.
#[derive(Debug, Deserialize)]
pub struct CorpusManifest {
    /// Format version of the corpus file.
    pub format_version: String,
    /// Corpus version.
    pub version: String,
    /// Free-form description.
    #[serde(default)]
    pub description: Option<String>,
}

/// A corpus containing test vectors.
#[derive(Debug, Deserialize)]
pub struct Corpus {
    /// Corpus metadata.
    pub manifest: CorpusManifest,
    /// List of test vectors.
    pub vectors: Vec<TestVector>,
}

fn default_op() -> String {
    "parse".to_string()
}

/// A single test vector.
#[derive(Debug, Deserialize)]
pub struct TestVector {
    /// Unique identifier for the test.
    pub id: String,
    /// Operation to test ("parse" or "roundtrip").
    #[serde(default = "default_op")]
    pub op: String,
    /// Document text.
    pub input: String,
    /// Expected result (success or error).
    pub expected: serde_json::Value,
}

/// Result of running a single test vector.
#[derive(Debug)]
pub enum TestResult {
    /// Test passed.
    Pass,
    /// Test failed with mismatch.
    Fail {
        /// Expected result from the corpus.
        expected: String,
        /// Actual result from the parser.
        actual: String,
    },
    /// Test was skipped (operation not implemented).
    Skip {
        /// Reason for skipping.
        reason: String,
    },
    /// The vector itself is malformed.
    Error {
        /// Error message.
        message: String,
    },
}

impl TestResult {
    /// Returns true if this is a passing result.
    pub fn is_pass(&self) -> bool {
        matches!(self, Self::Pass)
    }

    /// Returns true if this is a failing result.
    pub fn is_fail(&self) -> bool {
        matches!(self, Self::Fail { .. })
    }
}

/// Results from running the corpus.
#[derive(Debug, Default)]
pub struct CorpusResults {
    /// Number of tests that passed.
    pub passed: usize,
    /// Number of tests that failed.
    pub failed: usize,
    /// Number of tests that were skipped.
    pub skipped: usize,
    /// Number of tests that errored.
    pub errors: usize,
    /// Detailed results for each test.
    pub details: Vec<(String, TestResult)>,
}

impl CorpusResults {
    /// Create a new empty results container.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a test result.
    pub fn record(&mut self, id: &str, result: TestResult) {
        match &result {
            TestResult::Pass => self.passed += 1,
            TestResult::Fail { .. } => self.failed += 1,
            TestResult::Skip { .. } => self.skipped += 1,
            TestResult::Error { .. } => self.errors += 1,
        }
        self.details.push((id.to_string(), result));
    }

    /// Get total number of tests run.
    pub fn total(&self) -> usize {
        self.passed + self.failed + self.skipped + self.errors
    }

    /// Returns true if all tests passed (no failures or errors).
    pub fn all_passed(&self) -> bool {
        self.failed == 0 && self.errors == 0
    }

    /// Get a summary string of the results.
    pub fn summary(&self) -> String {
        format!(
            "{} passed, {} failed, {} skipped, {} errors (total: {})",
            self.passed,
            self.failed,
            self.skipped,
            self.errors,
            self.total()
        )
    }

    /// Get failures only.
    pub fn failures(&self) -> Vec<&(String, TestResult)> {
        self.details
            .iter()
            .filter(|(_, r)| r.is_fail())
            .collect()
    }

    /// Get errors only.
    pub fn error_details(&self) -> Vec<&(String, TestResult)> {
        self.details
            .iter()
            .filter(|(_, r)| matches!(r, TestResult::Error { .. }))
            .collect()
    }
}

/// Corpus runner that executes test vectors.
pub struct CorpusRunner {
    corpus: Corpus,
    limits: Limits,
}

impl CorpusRunner {
    /// Load corpus from a file path.
    pub fn load<P: AsRef<Path>>(path: P) -> ConformanceResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConformanceError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&content)
    }

    /// Decode a corpus from its JSON text.
    pub fn from_json(content: &str) -> ConformanceResult<Self> {
        let corpus: Corpus = serde_json::from_str(content)?;
        Ok(Self {
            corpus,
            limits: Limits::default(),
        })
    }

    /// Run vectors under `limits` instead of the defaults.
    pub fn with_limits(mut self, limits: Limits) -> Self {
        self.limits = limits;
        self
    }

    /// Get the corpus manifest.
    pub fn manifest(&self) -> &CorpusManifest {
        &self.corpus.manifest
    }

    /// Get the number of test vectors.
    pub fn vector_count(&self) -> usize {
        self.corpus.vectors.len()
    }

    /// Run all test vectors and return results.
    pub fn run_all(&self) -> CorpusResults {
        let mut results = CorpusResults::new();

        for vector in &self.corpus.vectors {
            let result = self.run_vector(vector);
            results.record(&vector.id, result);
        }

        results
    }

    /// Run a single test vector.
    fn run_vector(&self, vector: &TestVector) -> TestResult {
        match vector.op.as_str() {
            "parse" => self.check_expected(vector, |_| None),
            "roundtrip" => self.check_expected(vector, |value| self.roundtrip(value)),
            _ => TestResult::Skip {
                reason: format!("Unknown operation: {}", vector.op),
            },
        }
    }

    /// Re-parse both renderings of `value`; returns a description of the
    /// first mismatch.
    fn roundtrip(&self, value: &Value) -> Option<String> {
        let renderings = [
            ("compact", to_compact_string(value)),
            ("pretty", to_pretty_string(value, 2)),
        ];
        for (style, text) in renderings {
            match parse_with_limits(text.as_bytes(), self.limits) {
                Ok(reparsed) if &reparsed == value => {}
                Ok(reparsed) => {
                    return Some(format!(
                        "{} rendering reparsed as {}",
                        style,
                        to_compact_string(&reparsed)
                    ))
                }
                Err(e) => return Some(format!("{} rendering rejected: {}", style, e)),
            }
        }
        None
    }

    fn check_expected<F>(&self, vector: &TestVector, extra: F) -> TestResult
    where
        F: Fn(&Value) -> Option<String>,
    {
        let result = parse_with_limits(vector.input.as_bytes(), self.limits);

        if let Some(ok) = vector.expected.get("ok") {
            let expected = match ok.as_str() {
                Some(s) => s,
                None => {
                    return TestResult::Error {
                        message: "'ok' must hold the compact rendering".to_string(),
                    }
                }
            };
            match result {
                Ok(value) => {
                    let actual = to_compact_string(&value);
                    if actual != expected {
                        return TestResult::Fail {
                            expected: expected.to_string(),
                            actual,
                        };
                    }
                    match extra(&value) {
                        None => TestResult::Pass,
                        Some(actual) => TestResult::Fail {
                            expected: expected.to_string(),
                            actual,
                        },
                    }
                }
                Err(e) => TestResult::Fail {
                    expected: format!("ok: {}", expected),
                    actual: format!("err: {} ({})", e.code().name(), e),
                },
            }
        } else if let Some(err) = vector.expected.get("err") {
            let expected_code = match err.get("code").and_then(|v| v.as_u64()) {
                Some(code) => code,
                None => {
                    return TestResult::Error {
                        message: "'err' must hold a numeric 'code'".to_string(),
                    }
                }
            };
            match result {
                Ok(value) => TestResult::Fail {
                    expected: format!("E{}", expected_code),
                    actual: format!("ok: {}", to_compact_string(&value)),
                },
                Err(e) => {
                    let actual_code = u64::from(e.code().code());
                    if actual_code == expected_code {
                        TestResult::Pass
                    } else {
                        TestResult::Fail {
                            expected: format!("E{}", expected_code),
                            actual: format!("E{}", actual_code),
                        }
                    }
                }
            }
        } else {
            TestResult::Error {
                message: "Invalid expected format".to_string(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CORPUS: &str = r#"{
        "manifest": {"format_version": "1", "version": "test"},
        "vectors": [
            {"id": "ok-1", "input": "{\"a\": [1, 2]}", "expected": {"ok": "{\"a\":[1,2]}"}},
            {"id": "err-1", "input": "[1,", "expected": {"err": {"code": 120}}},
            {"id": "rt-1", "op": "roundtrip", "input": "[1.5, {}]", "expected": {"ok": "[1.5,{}]"}},
            {"id": "bad-op", "op": "digest", "input": "{}", "expected": {"ok": "{}"}},
            {"id": "wrong", "input": "[true]", "expected": {"ok": "[false]"}},
            {"id": "malformed", "input": "[]", "expected": {"maybe": 1}}
        ]
    }"#;

    #[test]
    fn test_run_inline_corpus() {
        let runner = CorpusRunner::from_json(CORPUS).unwrap();
        assert_eq!(runner.vector_count(), 6);
        assert_eq!(runner.manifest().version, "test");

        let results = runner.run_all();
        assert_eq!(results.passed, 3, "{:?}", results.details);
        assert_eq!(results.failed, 1);
        assert_eq!(results.skipped, 1);
        assert_eq!(results.errors, 1);
        assert!(!results.all_passed());

        let failures = results.failures();
        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].0, "wrong");
        assert_eq!(results.error_details()[0].0, "malformed");
    }

    #[test]
    fn test_decode_error() {
        let err = CorpusRunner::from_json("{\"vectors\": []}").map(|_| ()).unwrap_err();
        assert!(matches!(err, ConformanceError::Decode(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = CorpusRunner::load("/nonexistent/corpus.json").map(|_| ()).unwrap_err();
        assert!(err.to_string().contains("failed to read corpus file"));
    }

    #[test]
    fn test_corpus_results() {
        let mut results = CorpusResults::new();
        results.record("test1", TestResult::Pass);
        results.record(
            "test2",
            TestResult::Fail {
                expected: "a".to_string(),
                actual: "b".to_string(),
            },
        );

        assert_eq!(results.total(), 2);
        assert_eq!(
            results.summary(),
            "1 passed, 1 failed, 0 skipped, 0 errors (total: 2)"
        );
    }
}

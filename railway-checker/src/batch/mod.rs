//! Batch driver for test-case files.
//!
//! A test-case file is a JSON array of [`TestCase`]s. Each case gets a
//! fresh network, its trains are planned in file order, and the resulting
//! verdict is compared with the case's `ExpectedCollision`.

mod error;
mod report;
mod types;

pub use error::BatchError;
pub use report::{echo_case, result_line, summary_line};
pub use types::TestCase;

use std::path::{Path, PathBuf};

use tracing::{debug, error, warn};

use crate::domain::NetworkError;
use crate::planner::{CheckConfig, CollisionError, Railway};

/// Environment variable naming the test-case file.
pub const CASES_VAR: &str = "RAILWAY_CASES";

/// File read when no path is given.
pub const DEFAULT_CASES_FILE: &str = "config_doc.json";

/// Pick the test-case file: an explicit argument wins over the
/// environment, which wins over [`DEFAULT_CASES_FILE`].
pub fn cases_path(arg: Option<String>, env: Option<String>) -> PathBuf {
    arg.or(env)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CASES_FILE))
}

/// Parse test cases from JSON text.
pub fn parse_cases(json: &str) -> Result<Vec<TestCase>, serde_json::Error> {
    serde_json::from_str(json)
}

/// Read and parse a test-case file.
pub fn load_cases(path: &Path) -> Result<Vec<TestCase>, BatchError> {
    let json = std::fs::read_to_string(path).map_err(|source| BatchError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let cases = parse_cases(&json).map_err(|source| BatchError::Json {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(count = cases.len(), path = %path.display(), "loaded test cases");
    Ok(cases)
}

/// Outcome of running one test case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseReport {
    /// Position of the case in its file.
    pub index: usize,

    /// The case's description, if it has one.
    pub description: Option<String>,

    /// Verdict the case expects.
    pub expected: bool,

    /// Collision verdict, or the reason a train could not be registered.
    pub verdict: Result<bool, NetworkError>,

    /// The collision found, if any.
    pub collision: Option<CollisionError>,
}

impl CaseReport {
    /// Returns true if the case ran and its verdict matches the expectation.
    pub fn passed(&self) -> bool {
        self.verdict.as_ref().is_ok_and(|v| *v == self.expected)
    }
}

/// Run one test case on a fresh network.
///
/// A train naming an unknown station aborts the case; the report carries
/// the error and counts as a failure.
pub fn run_case(index: usize, case: &TestCase, config: &CheckConfig) -> CaseReport {
    let mut report = CaseReport {
        index,
        description: case.description.clone(),
        expected: case.expected_collision,
        verdict: Ok(false),
        collision: None,
    };

    let mut railway = Railway::from_description(&case.railway, config.strategy);
    for (train_idx, stations) in case.trains.iter().enumerate() {
        if let Err(e) = railway.add_train(stations) {
            error!(case = index, train = train_idx, "cannot register train: {e}");
            report.verdict = Err(e);
            return report;
        }
    }

    if let Err(collision) = railway.plan() {
        report.verdict = Ok(true);
        report.collision = Some(collision);
    }

    if !report.passed() {
        warn!(
            case = index,
            expected = report.expected,
            "verdict does not match expectation"
        );
    }
    report
}

/// Results of a whole test-case file.
#[derive(Debug, Clone, Default)]
pub struct Summary {
    pub reports: Vec<CaseReport>,
}

impl Summary {
    /// Returns the number of cases that matched their expectation.
    pub fn passed(&self) -> usize {
        self.reports.iter().filter(|r| r.passed()).count()
    }

    /// Returns the number of cases that did not.
    pub fn failed(&self) -> usize {
        self.reports.len() - self.passed()
    }

    /// Returns true if every case matched its expectation.
    pub fn all_passed(&self) -> bool {
        self.failed() == 0
    }
}

/// Run every case in order.
pub fn run_cases(cases: &[TestCase], config: &CheckConfig) -> Summary {
    Summary {
        reports: cases
            .iter()
            .enumerate()
            .map(|(idx, case)| run_case(idx, case, config))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::planner::CollisionStrategy;
    use tempfile::tempdir;

    const SAMPLE: &str = include_str!("../../data/config_doc.json");

    fn case(json: &str) -> TestCase {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn cases_path_precedence() {
        assert_eq!(
            cases_path(Some("a.json".into()), Some("b.json".into())),
            PathBuf::from("a.json")
        );
        assert_eq!(
            cases_path(None, Some("b.json".into())),
            PathBuf::from("b.json")
        );
        assert_eq!(cases_path(None, None), PathBuf::from(DEFAULT_CASES_FILE));
    }

    #[test]
    fn passing_case() {
        let case = case(
            r#"{
                "Railway": {
                    "Stations": ["A", "B"],
                    "Tracks": [{"Station1": "A", "Station2": "B", "Length": 10}]
                },
                "Trains": [["A", "B"]],
                "ExpectedCollision": false
            }"#,
        );

        let report = run_case(0, &case, &CheckConfig::default());
        assert_eq!(report.verdict, Ok(false));
        assert!(report.collision.is_none());
        assert!(report.passed());
    }

    #[test]
    fn mismatched_expectation_fails() {
        let case = case(
            r#"{
                "description": "head-on, wrongly expected to pass",
                "Railway": {
                    "Stations": ["A", "B"],
                    "Tracks": [{"Station1": "A", "Station2": "B", "Length": 10}]
                },
                "Trains": [["A", "B"], ["B", "A"]],
                "ExpectedCollision": false
            }"#,
        );

        let report = run_case(3, &case, &CheckConfig::default());
        assert_eq!(report.index, 3);
        assert_eq!(report.verdict, Ok(true));
        assert!(matches!(
            report.collision,
            Some(CollisionError::TrackUnavailable { .. })
        ));
        assert!(!report.passed());
    }

    #[test]
    fn unknown_station_in_train_fails_case() {
        let case = case(
            r#"{
                "Railway": {"Stations": ["A"], "Tracks": []},
                "Trains": [["A", "Z"]],
                "ExpectedCollision": false
            }"#,
        );

        let report = run_case(0, &case, &CheckConfig::default());
        assert_eq!(
            report.verdict,
            Err(NetworkError::UnknownStation("Z".into()))
        );
        assert!(!report.passed());
    }

    #[test]
    fn skipped_track_still_runs() {
        // The track to "Q" is dropped, so A-B is the only track
        let case = case(
            r#"{
                "Railway": {
                    "Stations": ["A", "B", "A"],
                    "Tracks": [
                        {"Station1": "A", "Station2": "Q", "Length": 1},
                        {"Station1": "A", "Station2": "B", "Length": 2}
                    ]
                },
                "Trains": [["A", "B"]],
                "ExpectedCollision": false
            }"#,
        );

        assert!(run_case(0, &case, &CheckConfig::default()).passed());
    }

    #[test]
    fn sample_file_matches_expectations() {
        let cases = parse_cases(SAMPLE).unwrap();
        assert!(!cases.is_empty());

        for strategy in [CollisionStrategy::Incremental, CollisionStrategy::Deferred] {
            let config = CheckConfig::new(strategy, 10);
            let summary = run_cases(&cases, &config);
            for report in &summary.reports {
                assert!(
                    report.passed(),
                    "case {} ({:?}) with {strategy}: {:?}",
                    report.index,
                    report.description,
                    report.verdict
                );
            }
            assert!(summary.all_passed());
            assert_eq!(summary.passed(), cases.len());
        }
    }

    #[test]
    fn summary_counts() {
        let report = |expected, verdict| CaseReport {
            index: 0,
            description: None,
            expected,
            verdict,
            collision: None,
        };

        let summary = Summary {
            reports: vec![
                report(true, Ok(true)),
                report(false, Ok(true)),
                report(false, Err(NetworkError::EmptyTrain)),
            ],
        };

        assert_eq!(summary.passed(), 1);
        assert_eq!(summary.failed(), 2);
        assert!(!summary.all_passed());
        assert!(Summary::default().all_passed());
    }

    #[test]
    fn load_cases_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("cases.json");
        std::fs::write(&path, SAMPLE).unwrap();

        let cases = load_cases(&path).unwrap();
        assert_eq!(cases, parse_cases(SAMPLE).unwrap());
    }

    #[test]
    fn load_cases_missing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing.json");

        assert!(matches!(load_cases(&path), Err(BatchError::Io { .. })));
    }

    #[test]
    fn load_cases_invalid_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, r#"[{"Railway": "#).unwrap();

        let err = load_cases(&path).unwrap_err();
        assert!(matches!(err, BatchError::Json { .. }));
        assert!(err.to_string().contains("broken.json"));
    }
}

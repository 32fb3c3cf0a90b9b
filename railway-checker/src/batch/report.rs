//! Console rendering of test cases and their results.

use super::{CaseReport, Summary, TestCase};

/// Render a test case for the console.
///
/// Small networks are shown in full as pretty JSON. Networks with more
/// than `station_limit` stations only show their description.
pub fn echo_case(case: &TestCase, station_limit: usize) -> String {
    if case.railway.stations.len() <= station_limit
        && let Ok(json) = serde_json::to_string_pretty(case)
    {
        return format!("TEST CASE:\n{json}");
    }

    let description = case.description.as_deref().unwrap_or("none");
    format!("TEST CASE: size is too big, description: {description}")
}

/// Render the verdict line for one case.
pub fn result_line(report: &CaseReport) -> String {
    match &report.verdict {
        Ok(verdict) => format!("RESULT: {verdict} expected: {}", report.expected),
        Err(e) => format!("RESULT: error ({e}) expected: {}", report.expected),
    }
}

/// Render the closing line for a whole file.
pub fn summary_line(summary: &Summary) -> String {
    let total = summary.reports.len();
    let failed: Vec<String> = summary
        .reports
        .iter()
        .filter(|r| !r.passed())
        .map(|r| r.index.to_string())
        .collect();

    if failed.is_empty() {
        format!("{total} of {total} test cases passed")
    } else {
        format!(
            "{} of {total} test cases passed; failed: {}",
            summary.passed(),
            failed.join(", ")
        )
    }
}

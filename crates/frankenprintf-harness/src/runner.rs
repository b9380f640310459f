//! Test execution engine.

use frankenprintf_core::{Arg, sprintf};

use crate::diff;
use crate::fixtures::{FixtureCase, FixtureSet};
use crate::verify::VerificationResult;

/// Runs a fixture set against the engine and collects results.
pub struct TestRunner {
    /// Name of the test campaign.
    pub campaign: String,
}

impl TestRunner {
    /// Create a new test runner.
    #[must_use]
    pub fn new(campaign: impl Into<String>) -> Self {
        Self {
            campaign: campaign.into(),
        }
    }

    /// Run all fixtures in a set and return results.
    pub fn run(&self, fixture_set: &FixtureSet) -> Vec<VerificationResult> {
        fixture_set.cases.iter().map(execute_case).collect()
    }
}

fn execute_case(case: &FixtureCase) -> VerificationResult {
    let args: Vec<Arg<'_>> = case.args.iter().map(|a| a.as_arg()).collect();

    let (actual, actual_len, expected) = match sprintf(case.format.as_bytes(), &args) {
        Ok(bytes) => {
            let len = bytes.len();
            (
                String::from_utf8_lossy(&bytes).into_owned(),
                len,
                case.expected.clone(),
            )
        }
        Err(err) => {
            // Error cases compare the error display instead of output bytes.
            let expected = case
                .expected_error
                .clone()
                .unwrap_or_else(|| case.expected.clone());
            (err.to_string(), 0, expected)
        }
    };

    let expected_len = if case.expected_error.is_some() {
        0
    } else {
        case.expected_len
    };
    let passed = actual == expected && actual_len == expected_len;
    let diff_out = if passed {
        None
    } else {
        Some(diff::render_diff(&expected, &actual))
    };

    VerificationResult {
        case_name: case.name.clone(),
        spec_section: case.spec_section.clone(),
        passed,
        expected,
        actual,
        expected_len,
        actual_len,
        diff: diff_out,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

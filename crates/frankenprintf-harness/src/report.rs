//! Report generation for conformance results.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::verify::VerificationSummary;

/// A conformance report for one harness run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConformanceReport {
    /// Report title.
    pub title: String,
    /// Campaign name the runner was created with.
    pub campaign: String,
    /// Timestamp (UTC), caller-supplied for deterministic reports.
    pub timestamp: String,
    /// Verification summary.
    pub summary: VerificationSummary,
}

impl ConformanceReport {
    /// Render the report as markdown.
    #[must_use]
    pub fn to_markdown(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!("# {}\n\n", self.title));
        out.push_str(&format!("- Campaign: {}\n", self.campaign));
        out.push_str(&format!("- Timestamp: {}\n", self.timestamp));
        out.push_str(&format!("- Total: {}\n", self.summary.total));
        out.push_str(&format!("- Passed: {}\n", self.summary.passed));
        out.push_str(&format!("- Failed: {}\n", self.summary.failed));
        out.push_str(&format!("- Digest: {}\n\n", self.digest()));

        out.push_str("| Case | Spec | Status |\n");
        out.push_str("|------|------|--------|\n");
        for r in &self.summary.results {
            let status = if r.passed { "PASS" } else { "FAIL" };
            out.push_str(&format!(
                "| {} | {} | {} |\n",
                r.case_name, r.spec_section, status
            ));
        }

        for r in self.summary.results.iter().filter(|r| !r.passed) {
            if let Some(diff) = &r.diff {
                out.push_str(&format!("\n## {}\n\n```\n{}```\n", r.case_name, diff));
            }
        }
        out
    }

    /// Render the report as JSON.
    #[must_use]
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|e| format!("{{\"error\": \"{e}\"}}"))
    }

    /// SHA-256 integrity digest over the result rows.
    #[must_use]
    pub fn digest(&self) -> String {
        let mut hasher = Sha256::new();
        for r in &self.summary.results {
            hasher.update(r.case_name.as_bytes());
            hasher.update([u8::from(r.passed)]);
            hasher.update(r.actual.as_bytes());
        }
        hex_string(&hasher.finalize())
    }
}

fn hex_string(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::verify::VerificationResult;

    fn sample_report() -> ConformanceReport {
        let results = vec![VerificationResult {
            case_name: "zero_pad".into(),
            spec_section: "ISO C17 7.21.6.1".into(),
            passed: true,
            expected: "00042".into(),
            actual: "00042".into(),
            expected_len: 5,
            actual_len: 5,
            diff: None,
        }];
        ConformanceReport {
            title: "printf conformance".into(),
            campaign: "unit".into(),
            timestamp: "2026-01-01T00:00:00Z".into(),
            summary: VerificationSummary::from_results(results),
        }
    }

    #[test]
    fn test_markdown_contains_summary_and_rows() {
        let md = sample_report().to_markdown();
        assert!(md.contains("# printf conformance"));
        assert!(md.contains("- Passed: 1"));
        assert!(md.contains("| zero_pad | ISO C17 7.21.6.1 | PASS |"));
    }

    #[test]
    fn test_digest_is_stable() {
        let report = sample_report();
        assert_eq!(report.digest(), report.digest());
        assert_eq!(report.digest().len(), 64);
    }

    #[test]
    fn test_json_roundtrip() {
        let report = sample_report();
        let back: ConformanceReport = serde_json::from_str(&report.to_json()).unwrap();
        assert_eq!(back.summary.total, 1);
    }
}

//! Diff rendering for fixture comparison.

/// Render a text diff between expected and actual output.
///
/// Formatted output is usually a single line, so the diff pinpoints the
/// first diverging byte rather than zipping lines.
#[must_use]
pub fn render_diff(expected: &str, actual: &str) -> String {
    if expected == actual {
        return String::from("[identical]");
    }

    let idx = first_divergence(expected.as_bytes(), actual.as_bytes());
    let mut out = String::new();
    out.push_str("--- expected\n");
    out.push_str("+++ actual\n");
    out.push_str(&format!("@@ byte {idx} @@\n"));
    out.push_str(&format!("-{expected:?}\n"));
    out.push_str(&format!("+{actual:?}\n"));
    out
}

fn first_divergence(expected: &[u8], actual: &[u8]) -> usize {
    expected
        .iter()
        .zip(actual.iter())
        .position(|(e, a)| e != a)
        .unwrap_or_else(|| expected.len().min(actual.len()))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

//! Fixture loading and management.

use frankenprintf_core::Arg;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error loading a fixture file.
#[derive(Debug, Error)]
pub enum FixtureError {
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
    #[error("json: {0}")]
    Json(#[from] serde_json::Error),
}

/// A type-tagged argument as it appears in fixture JSON
/// (`{"int": -42}`, `{"str": "hi"}`, `"null_str"`, …).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FixtureArg {
    Int(i64),
    Uint(u64),
    Char(char),
    Str(String),
    NullStr,
    Ptr(u64),
}

impl FixtureArg {
    /// View as an engine argument. Fixture chars are ASCII by convention.
    pub fn as_arg(&self) -> Arg<'_> {
        match self {
            FixtureArg::Int(v) => Arg::Int(*v),
            FixtureArg::Uint(v) => Arg::Uint(*v),
            FixtureArg::Char(c) => Arg::Char(*c as u8),
            FixtureArg::Str(s) => Arg::Str(Some(s.as_bytes())),
            FixtureArg::NullStr => Arg::Str(None),
            FixtureArg::Ptr(p) => Arg::Ptr(*p as usize),
        }
    }
}

/// A single fixture test case.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixtureCase {
    /// Case identifier.
    pub name: String,
    /// Format string under test.
    pub format: String,
    /// Ordered tagged arguments.
    #[serde(default)]
    pub args: Vec<FixtureArg>,
    /// Expected output bytes (as a string; fixtures stay ASCII).
    #[serde(default)]
    pub expected: String,
    /// Expected returned byte count.
    #[serde(default)]
    pub expected_len: usize,
    /// Expected error display, for argument-contract cases.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected_error: Option<String>,
    /// ISO C / POSIX section the case traces to.
    #[serde(default)]
    pub spec_section: String,
}

/// A collection of fixture cases.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixtureSet {
    /// Schema version.
    pub version: String,
    /// Function family name.
    pub family: String,
    /// Individual test cases.
    pub cases: Vec<FixtureCase>,
}

impl FixtureSet {
    /// Load fixture set from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serialize fixture set to a JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Load fixture set from a file path.
    pub fn from_file(path: &std::path::Path) -> Result<Self, FixtureError> {
        let content = std::fs::read_to_string(path)?;
        Ok(Self::from_json(&content)?)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

//! Conformance testing harness for frankenprintf.
//!
//! This crate provides:
//! - Fixture loading: format/argument/expected-output cases as JSON
//! - A runner that executes fixture cases against the engine
//! - Diff rendering for failed cases
//! - Report generation: markdown + JSON with a SHA-256 integrity digest

#![forbid(unsafe_code)]

pub mod diff;
pub mod fixtures;
pub mod report;
pub mod runner;
pub mod verify;

pub use fixtures::{FixtureArg, FixtureCase, FixtureSet};
pub use report::ConformanceReport;
pub use runner::TestRunner;
pub use verify::{VerificationResult, VerificationSummary};

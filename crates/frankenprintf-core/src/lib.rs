//! # frankenprintf-core
//!
//! Safe Rust implementation of a printf-style formatted-output engine.
//!
//! Clean-room implementation of a C-like format string interpreter: `%`
//! directives with flag, width, and precision modifiers are parsed by a
//! table-driven state machine and rendered against an ordered, type-tagged
//! argument list. Output goes to a caller-supplied [`Sink`] with no internal
//! buffering; the engine holds no state across calls.
//!
//! Reference: ISO C11 7.21.6.1, POSIX.1-2024 fprintf (subset: no floating
//! point, no `%n`, no dynamic width/precision, no locale).
//!
//! Supported conversions: `d`, `i`, `u`, `x`, `X`, `p`, `s`, `c`; any other
//! specifier byte is echoed as a one-byte body, which is also how `%%`
//! renders a percent sign.

#![deny(unsafe_code)]

pub mod args;
pub mod digits;
pub mod error;
pub mod options;
pub mod parser;
pub mod render;
pub mod scanner;
pub mod sink;

pub use args::Arg;
pub use error::{FormatError, SinkError};
pub use options::{Alignment, OptionsTable, Precision};
pub use scanner::{printf, sprintf};
pub use sink::{IoSink, Sink};

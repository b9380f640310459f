//! Top-level scanner and entry points.
//!
//! Walks the format string one byte at a time, alternating between literal
//! passthrough and directive consumption. All scanner state is local to one
//! call, so the engine is reentrant; nothing survives a return.

use crate::args::{Arg, ArgCursor};
use crate::digits;
use crate::error::FormatError;
use crate::options::OptionsTable;
use crate::parser::DirectiveParser;
use crate::render;
use crate::sink::Sink;

/// Scanner mode: copying literal bytes or accumulating a `%` directive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WriterState {
    Literal,
    Directive,
}

/// Format `fmt` against `args`, writing to `sink`.
///
/// Returns the number of bytes written. Arguments are consumed in directive
/// order; a directive left unterminated at end of input emits nothing and
/// consumes nothing.
pub fn printf<S: Sink>(sink: &mut S, fmt: &[u8], args: &[Arg<'_>]) -> Result<usize, FormatError> {
    let mut written = 0usize;
    let mut state = WriterState::Literal;
    let mut directive = DirectiveParser::new();
    let mut cursor = ArgCursor::new(args);

    for &byte in fmt {
        match state {
            WriterState::Literal => {
                if byte == b'%' {
                    directive.reset();
                    state = WriterState::Directive;
                } else {
                    sink.write(&[byte])?;
                    written += 1;
                }
            }
            WriterState::Directive => {
                if !directive.step(byte) {
                    written += emit(sink, byte, &mut directive, &mut cursor)?;
                    state = WriterState::Literal;
                }
            }
        }
    }

    Ok(written)
}

/// Format into a fresh byte vector.
pub fn sprintf(fmt: &[u8], args: &[Arg<'_>]) -> Result<Vec<u8>, FormatError> {
    let mut out = Vec::new();
    printf(&mut out, fmt, args)?;
    Ok(out)
}

/// Complete one directive: correct the options, render the field, consume
/// the argument, and reset the table for the next directive.
fn emit<S: Sink>(
    sink: &mut S,
    spec: u8,
    directive: &mut DirectiveParser,
    cursor: &mut ArgCursor<'_>,
) -> Result<usize, FormatError> {
    let opts = &mut directive.options;
    opts.correct(spec);

    let len = match spec {
        b'c' => {
            let byte = match next(cursor, spec)? {
                Arg::Char(c) => c,
                other => return Err(mismatch(spec, other, cursor)),
            };
            render::put_char(sink, byte, opts)?
        }
        b's' => {
            let body = match next(cursor, spec)? {
                Arg::Str(s) => s,
                other => return Err(mismatch(spec, other, cursor)),
            };
            render::put_str(sink, body, opts)?
        }
        _ if digits::is_numeric(spec) => {
            let arg = next(cursor, spec)?;
            let Some(raw) = arg.as_raw(spec) else {
                return Err(mismatch(spec, arg, cursor));
            };
            let stack = digits::convert(spec, raw, opts);
            render::put_stack(sink, &stack, opts)?
        }
        _ => render::put_literal(sink, spec, opts)?,
    };

    directive.reset();
    Ok(len)
}

fn next<'a>(cursor: &mut ArgCursor<'a>, spec: u8) -> Result<Arg<'a>, FormatError> {
    let index = cursor.position();
    cursor.take().ok_or(FormatError::MissingArgument {
        spec: spec as char,
        index,
    })
}

fn mismatch(spec: u8, found: Arg<'_>, cursor: &ArgCursor<'_>) -> FormatError {
    FormatError::ArgumentMismatch {
        spec: spec as char,
        found: found.tag(),
        index: cursor.position() - 1,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

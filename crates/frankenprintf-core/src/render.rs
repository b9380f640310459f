//! Field rendering: stack formatter and string/char writers.
//!
//! Owns the exact byte order of a rendered field (sign/prefix, width
//! padding, precision zeros, body, alignment) and the per-specifier padding
//! rules. Every function returns the number of bytes it emitted.

use crate::digits::DigitStack;
use crate::error::SinkError;
use crate::options::{Alignment, OptionsTable};
use crate::sink::Sink;

/// Six-byte body substituted for a null `%s` argument.
const NULL_STR: &[u8] = b"(null)";

fn emit_repeat<S: Sink>(sink: &mut S, byte: u8, count: usize) -> Result<(), SinkError> {
    for _ in 0..count {
        sink.write(&[byte])?;
    }
    Ok(())
}

/// Emit stack characters top-down (push order reversed).
fn emit_reversed<S: Sink>(sink: &mut S, bytes: &[u8]) -> Result<(), SinkError> {
    for &byte in bytes.iter().rev() {
        sink.write(&[byte])?;
    }
    Ok(())
}

/// Render a numeric digit stack against the options table.
///
/// Zero-fill goes between the sign/prefix and the digits (`-007`, `0x00ff`);
/// space-fill goes before the whole field when right-aligned and after it
/// when left-aligned. Precision zeros always sit directly below the digits.
/// Width padding applies even when zero suppression emptied the stack.
pub fn put_stack<S: Sink>(
    sink: &mut S,
    stack: &DigitStack,
    opts: &OptionsTable,
) -> Result<usize, SinkError> {
    let precision_pad = opts.precision.pad_for(stack.body_len());
    let width_pad = opts.width.saturating_sub(stack.len() + precision_pad);

    match (opts.align, opts.zero_pad) {
        (Alignment::Right, true) => {
            emit_reversed(sink, stack.affix())?;
            emit_repeat(sink, b'0', width_pad)?;
            emit_repeat(sink, b'0', precision_pad)?;
            emit_reversed(sink, stack.body())?;
        }
        (Alignment::Right, false) => {
            emit_repeat(sink, b' ', width_pad)?;
            emit_reversed(sink, stack.affix())?;
            emit_repeat(sink, b'0', precision_pad)?;
            emit_reversed(sink, stack.body())?;
        }
        (Alignment::Left, _) => {
            emit_reversed(sink, stack.affix())?;
            emit_repeat(sink, b'0', precision_pad)?;
            emit_reversed(sink, stack.body())?;
            emit_repeat(sink, b' ', width_pad)?;
        }
    }

    Ok(stack.len() + precision_pad + width_pad)
}

/// Render `%c`: a one-byte body padded with spaces.
pub fn put_char<S: Sink>(sink: &mut S, byte: u8, opts: &OptionsTable) -> Result<usize, SinkError> {
    let pad = opts.width.saturating_sub(1);
    if opts.align == Alignment::Right {
        emit_repeat(sink, b' ', pad)?;
    }
    sink.write(&[byte])?;
    if opts.align == Alignment::Left {
        emit_repeat(sink, b' ', pad)?;
    }
    Ok(pad + 1)
}

/// Render `%s`.
///
/// A null argument becomes the literal `(null)`, itself subject to precision
/// truncation. Width padding always uses spaces and is measured against the
/// untruncated length.
pub fn put_str<S: Sink>(
    sink: &mut S,
    arg: Option<&[u8]>,
    opts: &OptionsTable,
) -> Result<usize, SinkError> {
    let s = arg.unwrap_or(NULL_STR);
    let body = &s[..s.len().min(opts.precision.limit())];
    let pad = opts.width.saturating_sub(s.len());

    if opts.align == Alignment::Right {
        emit_repeat(sink, b' ', pad)?;
    }
    sink.write(body)?;
    if opts.align == Alignment::Left {
        emit_repeat(sink, b' ', pad)?;
    }
    Ok(body.len() + pad)
}

/// Render an unrecognized specifier byte as its own one-byte body (`%%`
/// resolves here). The zero flag selects the pad character.
pub fn put_literal<S: Sink>(
    sink: &mut S,
    spec: u8,
    opts: &OptionsTable,
) -> Result<usize, SinkError> {
    let pad_byte = if opts.zero_pad { b'0' } else { b' ' };
    let pad = opts.width.saturating_sub(1);
    if opts.align == Alignment::Right {
        emit_repeat(sink, pad_byte, pad)?;
    }
    sink.write(&[spec])?;
    if opts.align == Alignment::Left {
        emit_repeat(sink, pad_byte, pad)?;
    }
    Ok(pad + 1)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

//! Byte-level output contract for the formatting engine.
//!
//! One table, one property per row: exact bytes and exact returned length
//! for every conversion, flag, width, and precision interaction the engine
//! guarantees.

use frankenprintf_core::{Arg, printf, sprintf};

fn check(fmt: &[u8], args: &[Arg<'_>], expected: &str) {
    let bytes = sprintf(fmt, args).unwrap_or_else(|e| {
        panic!(
            "format {:?} failed: {e}",
            String::from_utf8_lossy(fmt)
        )
    });
    assert_eq!(
        String::from_utf8_lossy(&bytes),
        expected,
        "bytes for format {:?}",
        String::from_utf8_lossy(fmt)
    );
    let mut counter: Vec<u8> = Vec::new();
    let n = printf(&mut counter, fmt, args).unwrap();
    assert_eq!(n, expected.len(), "length for {:?}", String::from_utf8_lossy(fmt));
}

#[test]
fn test_plain_strings_pass_through_unchanged() {
    check(b"", &[], "");
    check(b"hello, world", &[], "hello, world");
    check(b"tabs\tand\nnewlines", &[], "tabs\tand\nnewlines");
}

#[test]
fn test_signed_decimal_extremes() {
    check(b"%d", &[Arg::Int(-2_147_483_648)], "-2147483648");
    check(b"%d", &[Arg::Int(2_147_483_647)], "2147483647");
    check(b"%i", &[Arg::Int(0)], "0");
}

#[test]
fn test_flags_widths_and_signs() {
    check(b"%05d", &[Arg::Int(42)], "00042");
    check(b"%-5d", &[Arg::Int(42)], "42   ");
    check(b"% d", &[Arg::Int(5)], " 5");
    check(b"%+d", &[Arg::Int(5)], "+5");
    check(b"%08d", &[Arg::Int(-42)], "-0000042");
    check(b"%-05d", &[Arg::Int(5)], "5    ");
}

#[test]
fn test_hex_and_alternate_form() {
    check(b"%x", &[Arg::Uint(255)], "ff");
    check(b"%#x", &[Arg::Uint(255)], "0xff");
    check(b"%X", &[Arg::Uint(255)], "FF");
    check(b"%#X", &[Arg::Uint(255)], "0XFF");
    check(b"%#x", &[Arg::Uint(0)], "0");
    check(b"%.5x", &[Arg::Uint(255)], "000ff");
    check(b"%#010x", &[Arg::Uint(0xbeef)], "0x0000beef");
}

#[test]
fn test_unsigned_wraps_to_two_complement() {
    check(b"%u", &[Arg::Int(-42)], "4294967254");
    check(b"%u", &[Arg::Uint(3_000_000_000)], "3000000000");
}

#[test]
fn test_precision_on_integers() {
    check(b"%.3d", &[Arg::Int(5)], "005");
    check(b"%7.3d", &[Arg::Int(-5)], "   -005");
    check(b"%.0d", &[Arg::Int(0)], "");
    check(b"%5.0d", &[Arg::Int(0)], "     ");
    check(b"%+.0d", &[Arg::Int(0)], "+");
    check(b"% .0d", &[Arg::Int(0)], " ");
}

#[test]
fn test_pointers() {
    check(b"%p", &[Arg::Ptr(0)], "0x0");
    check(b"%p", &[Arg::Ptr(0xdead)], "0xdead");
    check(b"%p", &[Arg::Ptr(0x7fff_ffff_f000)], "0x7ffffffff000");
}

#[test]
fn test_strings() {
    check(b"%s", &[Arg::Str(Some(b"hello"))], "hello");
    check(b"%s", &[Arg::Str(None)], "(null)");
    // The null fallback is itself subject to precision truncation.
    check(b"%.2s", &[Arg::Str(None)], "(n");
    check(b"%.2s", &[Arg::Str(Some(b"hello"))], "he");
    check(b"%10s", &[Arg::Str(Some(b"hi"))], "        hi");
    check(b"%-6s.", &[Arg::Str(Some(b"ab"))], "ab    .");
    // Width is measured against the untruncated length.
    check(b"%5.2s", &[Arg::Str(Some(b"hello"))], "he");
}

#[test]
fn test_chars() {
    check(b"%c", &[Arg::Char(b'A')], "A");
    check(b"%3c", &[Arg::Char(b'A')], "  A");
    check(b"%-3c|", &[Arg::Char(b'A')], "A  |");
}

#[test]
fn test_literal_specifier_fallback() {
    check(b"%%", &[], "%");
    check(b"%5%", &[], "    %");
    check(b"%05%", &[], "0000%");
    check(b"%q", &[], "q");
}

#[test]
fn test_flag_resets_width_accumulation() {
    check(b"%1-2d", &[Arg::Int(7)], "7 ");
}

#[test]
fn test_directive_sequence_consumes_args_left_to_right() {
    check(
        b"%s=%d (%#x)",
        &[Arg::Str(Some(b"count")), Arg::Int(10), Arg::Uint(10)],
        "count=10 (0xa)",
    );
}

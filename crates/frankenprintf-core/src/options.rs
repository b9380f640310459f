//! Per-directive rendering options.
//!
//! The options table accumulates the flag, width, and precision modifiers of
//! the directive being parsed, and is reset to its defaults around every
//! directive. The corrector applies the specifier-dependent fixups that can
//! only run once the conversion letter is known.

/// Field justification within its width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    Left,
    #[default]
    Right,
}

/// Precision as parsed from a directive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Precision {
    #[default]
    Unset,
    Exact(usize),
}

/// No-limit sentinel the corrector installs for `%s` without a precision.
pub(crate) const NO_LIMIT: usize = usize::MAX;

impl Precision {
    /// True once a `.` has been parsed.
    pub fn is_set(self) -> bool {
        matches!(self, Precision::Exact(_))
    }

    /// Zeros needed to grow a numeric body of `body_len` digits up to the
    /// requested precision.
    pub fn pad_for(self, body_len: usize) -> usize {
        match self {
            Precision::Unset => 0,
            Precision::Exact(p) => p.saturating_sub(body_len),
        }
    }

    /// Byte limit for string bodies.
    pub fn limit(self) -> usize {
        match self {
            Precision::Unset => NO_LIMIT,
            Precision::Exact(p) => p,
        }
    }
}

/// Parsed modifiers for one directive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OptionsTable {
    /// ` ` flag: space before a non-negative signed value.
    pub space: bool,
    /// `+` flag: always emit a sign.
    pub plus: bool,
    /// `#` flag: alternate form (hex prefix).
    pub alt_form: bool,
    /// `0` flag: zero-fill the width when right-aligned.
    pub zero_pad: bool,
    /// `-` flag state.
    pub align: Alignment,
    /// Minimum field width.
    pub width: usize,
    /// `.n` precision.
    pub precision: Precision,
}

impl OptionsTable {
    /// Table with directive defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset to directive defaults.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Specifier-dependent fixups, run after the conversion letter is known
    /// and before rendering.
    pub fn correct(&mut self, spec: u8) {
        if spec == b's' && !self.precision.is_set() {
            self.precision = Precision::Exact(NO_LIMIT);
        }
        if !matches!(spec, b'x' | b'X') {
            self.alt_form = false;
        }
        if spec == b'p' {
            self.alt_form = true;
        }
        if !matches!(spec, b'd' | b'i' | b'p') {
            self.space = false;
            self.plus = false;
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

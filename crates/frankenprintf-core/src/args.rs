//! Type-tagged argument sequence.
//!
//! C variadic consumption maps to an ordered slice of tagged values: each
//! directive takes the next entry and checks the tag. Numeric directives
//! accept either integer tag (the converter narrows to the specifier's
//! domain); `%p` additionally accepts the pointer tag; `%c` and `%s` require
//! their exact tags.

/// One formatting argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arg<'a> {
    /// Signed integer for `%d`/`%i` (narrowed to 32 bits by the converter).
    Int(i64),
    /// Unsigned integer for `%u`/`%x`/`%X` (narrowed to 32 bits).
    Uint(u64),
    /// Byte string for `%s`; `None` is the null string.
    Str(Option<&'a [u8]>),
    /// Single byte for `%c`.
    Char(u8),
    /// Pointer-width value for `%p`.
    Ptr(usize),
}

impl Arg<'_> {
    /// Tag name used in error reports.
    pub fn tag(&self) -> &'static str {
        match self {
            Arg::Int(_) => "int",
            Arg::Uint(_) => "uint",
            Arg::Str(_) => "str",
            Arg::Char(_) => "char",
            Arg::Ptr(_) => "ptr",
        }
    }

    /// Raw machine word handed to the numeric converter, when the tag is
    /// compatible with the given specifier.
    pub(crate) fn as_raw(&self, spec: u8) -> Option<i64> {
        match (spec, self) {
            (b'd' | b'i' | b'u' | b'x' | b'X', Arg::Int(v)) => Some(*v),
            (b'd' | b'i' | b'u' | b'x' | b'X', Arg::Uint(v)) => Some(*v as i64),
            (b'p', Arg::Ptr(p)) => Some(*p as i64),
            (b'p', Arg::Uint(v)) => Some(*v as i64),
            _ => None,
        }
    }
}

/// Cursor over the argument slice; tracks the index for error reports.
#[derive(Debug)]
pub struct ArgCursor<'a> {
    args: &'a [Arg<'a>],
    next: usize,
}

impl<'a> ArgCursor<'a> {
    /// Cursor at the start of `args`.
    pub fn new(args: &'a [Arg<'a>]) -> Self {
        Self { args, next: 0 }
    }

    /// Index of the next argument to be consumed.
    pub fn position(&self) -> usize {
        self.next
    }

    /// Consume and return the next argument.
    pub fn take(&mut self) -> Option<Arg<'a>> {
        let arg = self.args.get(self.next).copied()?;
        self.next += 1;
        Some(arg)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

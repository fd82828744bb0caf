use std::fmt::{self, Write};
use std::hash::{Hash, Hasher};

use log::debug;

/// An integer literal. Stores both the raw lexeme and the value parsed from
/// it at construction, so no information is lost however the parse went.
///
/// The parse is lenient: the value is taken from the longest prefix of the
/// lexeme matching `[+-]?[0-9]+`, and is zero when that prefix is empty or
/// does not fit in an `i64`. Construction never fails.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct IntLiteral {
    pub raw: String,
    pub value: i64,
}

impl IntLiteral {
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let value = lenient_int(&raw);
        Self { raw, value }
    }
}

/// A floating-point literal. Stores both the raw lexeme and the value parsed
/// from it at construction, with the same lenient policy as [`IntLiteral`]:
/// the longest prefix matching `[+-]?[0-9]+(\.[0-9]+)?([eE][+-]?[0-9]+)?` is
/// parsed, and the value is zero when that prefix is empty.
#[derive(Clone, Debug)]
pub struct FloatLiteral {
    pub raw: String,
    pub value: f64,
}

impl FloatLiteral {
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let value = lenient_float(&raw);
        Self { raw, value }
    }
}

// Compare and hash the value by bit pattern so the node types can stay
// `Eq + Hash`.
impl PartialEq for FloatLiteral {
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw && self.value.to_bits() == other.value.to_bits()
    }
}

impl Eq for FloatLiteral {}

impl Hash for FloatLiteral {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.raw.hash(state);
        self.value.to_bits().hash(state);
    }
}

fn lenient_int(raw: &str) -> i64 {
    let prefix = int_prefix(raw);
    match prefix.parse() {
        Ok(value) if prefix.len() == raw.len() => value,
        Ok(value) => {
            debug!("lenient parse degraded integer lexeme {raw:?} to {value}");
            value
        }
        Err(_) => {
            debug!("lenient parse degraded integer lexeme {raw:?} to 0");
            0
        }
    }
}

fn lenient_float(raw: &str) -> f64 {
    let prefix = float_prefix(raw);
    match prefix.parse() {
        Ok(value) if prefix.len() == raw.len() => value,
        Ok(value) => {
            debug!("lenient parse degraded float lexeme {raw:?} to {value}");
            value
        }
        Err(_) => {
            debug!("lenient parse degraded float lexeme {raw:?} to 0");
            0.0
        }
    }
}

/// The longest prefix matching `[+-]?[0-9]+`, or `""` if there is none.
fn int_prefix(raw: &str) -> &str {
    let bytes = raw.as_bytes();
    let mut i = 0;

    if let Some(b'+' | b'-') = bytes.first() {
        i += 1;
    }

    let digits = i;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }

    if i == digits {
        return "";
    }

    &raw[..i]
}

/// The longest prefix matching `[+-]?[0-9]+(\.[0-9]+)?([eE][+-]?[0-9]+)?`, or
/// `""` if there is none. The fractional and exponent parts only count when
/// they are complete; `1.x` keeps just the `1`.
fn float_prefix(raw: &str) -> &str {
    let bytes = raw.as_bytes();
    let mut i = int_prefix(raw).len();

    if i == 0 {
        return "";
    }

    let mut end = i;

    if i < bytes.len() && bytes[i] == b'.' {
        let mut j = i + 1;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }

        if j > i + 1 {
            end = j;
            i = j;
        }
    }

    if i < bytes.len() && (bytes[i] == b'e' || bytes[i] == b'E') {
        let mut j = i + 1;
        if let Some(b'+' | b'-') = bytes.get(j) {
            j += 1;
        }

        let exponent = j;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }

        if j > exponent {
            end = j;
        }
    }

    &raw[..end]
}

/// Write `value` as a quoted, re-escaped string literal. The output is
/// re-lexable but not necessarily byte-identical to the original source.
pub(super) fn escape_string(f: &mut fmt::Formatter<'_>, value: &str) -> fmt::Result {
    f.write_char('"')?;

    for c in value.chars() {
        match c {
            '\\' => f.write_str("\\\\")?,
            '"' => f.write_str("\\\"")?,
            '\n' => f.write_str("\\n")?,
            '\r' => f.write_str("\\r")?,
            '\t' => f.write_str("\\t")?,
            '\0' => f.write_str("\\0")?,
            c => f.write_char(c)?,
        }
    }

    f.write_char('"')
}

//! Tyre size parsing
//!
//! Normalises free-text input ("225 45 19", "225/45R19", "225/45 19",
//! "225-45-19") into a [`TyreSize`]. Parsing is all-or-nothing: a size is
//! either fully recognised or rejected, never partially filled.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::Error;

/// Any Unicode decimal digit (general category Nd), as `\d` matches
static DECIMAL_DIGIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d$").expect("invalid built-in digit pattern"));

/// Strict grammars, tried in order against the normalised string
static SIZE_PATTERNS: LazyLock<[Regex; 4]> = LazyLock::new(|| {
    [
        // 225/45R19
        r"^(\d{3})\s*/\s*(\d{2})\s*R?\s*(\d{2})$",
        // 225 45 19
        r"^(\d{3})\s+(\d{2})\s+(\d{2})$",
        // 225/45 19
        r"^(\d{3})\s*/\s*(\d{2})\s+(\d{2})$",
        // 225-45-19
        r"^(\d{3})-(\d{2})-(\d{2})$",
    ]
    .map(|p| Regex::new(p).expect("invalid built-in size pattern"))
});

/// Lenient substring scan used on spreadsheet cells
static CELL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\d{3}\s*[/ ]\s*\d{2}\s*R?\s*\d{2}").expect("invalid built-in cell pattern")
});

/// A parsed tyre size: width (mm), aspect ratio (%) and rim diameter (in).
///
/// Displays in canonical form `{width}/{aspect}R{rim}` with the original
/// digit counts (3/2/2) preserved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TyreSize {
    width: u16,
    aspect: u16,
    rim: u16,
}

impl TyreSize {
    pub fn new(width: u16, aspect: u16, rim: u16) -> Self {
        Self { width, aspect, rim }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn aspect(&self) -> u16 {
        self.aspect
    }

    pub fn rim(&self) -> u16 {
        self.rim
    }

    /// Canonical size string, e.g. `225/45R19`
    pub fn canonical(&self) -> String {
        self.to_string()
    }

    /// Filename stem: canonical size with `/` replaced by `-`
    pub fn file_stem(&self) -> String {
        self.canonical().replace('/', "-")
    }

    /// Zero-padded field strings as they appear in the canonical form
    pub fn width_str(&self) -> String {
        format!("{:03}", self.width)
    }

    pub fn aspect_str(&self) -> String {
        format!("{:02}", self.aspect)
    }

    pub fn rim_str(&self) -> String {
        format!("{:02}", self.rim)
    }
}

impl fmt::Display for TyreSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:03}/{:02}R{:02}", self.width, self.aspect, self.rim)
    }
}

impl FromStr for TyreSize {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_tyre_size(s).ok_or_else(|| Error::InvalidSizeFormat {
            input: s.to_string(),
        })
    }
}

fn is_decimal_digit(c: char) -> bool {
    c.is_ascii_digit() || (!c.is_ascii() && DECIMAL_DIGIT.is_match(c.encode_utf8(&mut [0; 4])))
}

/// Numeric value of a decimal digit in any script.
///
/// Nd digits are encoded as contiguous ascending runs starting at zero, so
/// the value is the offset from the start of the run, modulo 10.
fn digit_value(c: char) -> Option<u32> {
    if c.is_ascii_digit() {
        return c.to_digit(10);
    }
    if !is_decimal_digit(c) {
        return None;
    }
    let mut start = u32::from(c);
    while let Some(prev) = start.checked_sub(1).and_then(char::from_u32) {
        if !is_decimal_digit(prev) {
            break;
        }
        start -= 1;
    }
    Some((u32::from(c) - start) % 10)
}

/// Decimal field value, e.g. "２２５" -> 225
fn field_value(digits: &str) -> Option<u16> {
    digits.chars().try_fold(0u16, |acc, c| {
        let d = u16::try_from(digit_value(c)?).ok()?;
        acc.checked_mul(10)?.checked_add(d)
    })
}

/// Uppercase, replace anything other than decimal digits, `R`, `/`, space
/// and `-` with a space, collapse whitespace runs and trim.
pub fn normalize(raw: &str) -> String {
    let replaced: String = raw
        .to_uppercase()
        .chars()
        .map(|c| match c {
            'R' | '/' | ' ' | '-' => c,
            c if is_decimal_digit(c) => c,
            _ => ' ',
        })
        .collect();
    replaced.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Parse free text into a [`TyreSize`]. Returns `None` when no grammar
/// matches the whole normalised input.
pub fn parse_tyre_size(raw: &str) -> Option<TyreSize> {
    let s = normalize(raw);
    if s.is_empty() {
        return None;
    }

    SIZE_PATTERNS.iter().find_map(|re| {
        let caps = re.captures(&s)?;
        let field = |i: usize| field_value(caps.get(i)?.as_str());
        Some(TyreSize::new(field(1)?, field(2)?, field(3)?))
    })
}

/// First size-like substring in a spreadsheet cell, if any.
///
/// This scan is deliberately looser than [`parse_tyre_size`]; callers still
/// run the candidate through the strict parser.
pub fn extract_size_candidate(cell: &str) -> Option<&str> {
    CELL_PATTERN.find(cell).map(|m| m.as_str())
}

#[cfg(feature = "wasm")]
use wasm_bindgen::prelude::*;

/// WASM-friendly parse: canonical size or empty string
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "normalizeTyreSize")]
pub fn normalize_tyre_size_wasm(raw: &str) -> String {
    parse_tyre_size(raw).map(|s| s.canonical()).unwrap_or_default()
}

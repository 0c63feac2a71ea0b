use std::fmt;
use std::sync::Arc;

use serde::{Serialize, Serializer};

/// A line identifier as recorded in the station table.
///
/// Numeric codes compare as integers, so `"5"`, `"05"` and `5` all name the
/// same line; alphanumeric codes compare literally, so `"S3"` is never `"3"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum LineCode {
    Numeric(u32),
    Alpha(Arc<str>),
}

impl LineCode {
    /// Parses a raw code, collapsing zero-padded numeric forms.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if !trimmed.is_empty() && trimmed.chars().all(|c| c.is_ascii_digit()) {
            if let Ok(value) = trimmed.parse::<u32>() {
                return Self::Numeric(value);
            }
        }
        Self::Alpha(trimmed.into())
    }

    /// Derives the code from a line key such as `line_5` or `line_S3`.
    pub fn from_key(key: &str) -> Self {
        match key.split('_').nth(1) {
            Some(part) => Self::parse(part),
            None => Self::Alpha("".into()),
        }
    }

    /// The key form used by the route and color tables.
    pub fn to_line_key(&self) -> String {
        format!("line_{self}")
    }

    /// The zero-padded two-digit form used by the raw station table.
    pub fn padded(&self) -> String {
        match self {
            Self::Numeric(value) => format!("{value:02}"),
            Self::Alpha(code) => code.to_string(),
        }
    }
}

impl fmt::Display for LineCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Numeric(value) => write!(f, "{value}"),
            Self::Alpha(code) => write!(f, "{code}"),
        }
    }
}

impl Serialize for LineCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[test]
fn numeric_codes_collapse() {
    assert_eq!(LineCode::parse("5"), LineCode::parse("05"));
    assert_eq!(LineCode::parse(" 05 "), LineCode::Numeric(5));
}

#[test]
fn alpha_codes_stay_literal() {
    assert_ne!(LineCode::parse("S3"), LineCode::parse("3"));
    assert_eq!(LineCode::parse("S3"), LineCode::Alpha("S3".into()));
}

#[test]
fn key_forms() {
    let code = LineCode::from_key("line_05");
    assert_eq!(code, LineCode::Numeric(5));
    assert_eq!(code.to_line_key(), "line_5");
    assert_eq!(code.padded(), "05");
}

#[test]
fn alpha_key_stays_verbatim() {
    let code = LineCode::from_key("line_S3");
    assert_eq!(code.to_line_key(), "line_S3");
    assert_eq!(code.to_string(), "S3");
    assert_eq!(code.padded(), "S3");
}

#[test]
fn malformed_key_yields_empty_code() {
    assert_eq!(LineCode::from_key("loop"), LineCode::Alpha("".into()));
}

//! `data-date` parsing for timeline items ("2019 – 2023" style ranges).

use std::fmt;
use std::str::FromStr;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DateRangeError {
    #[error("expected a four-digit year, found {0:?}")]
    BadYear(String),
    #[error("missing range separator")]
    NoSeparator,
}

/// Year stored as written, so "0999" stays four digits.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Year(pub u16);

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}", self.0)
    }
}

impl FromStr for Year {
    type Err = DateRangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 4 || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(DateRangeError::BadYear(s.to_string()));
        }
        s.parse()
            .map(Year)
            .map_err(|_| DateRangeError::BadYear(s.to_string()))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DateRange {
    pub from: Year,
    pub to: Year,
}

const SEPARATORS: [char; 3] = ['-', '\u{2013}', '\u{2014}'];

impl FromStr for DateRange {
    type Err = DateRangeError;

    /// Accepts `YYYY-YYYY` with a hyphen, en dash or em dash and optional
    /// whitespace around it. Surrounding whitespace is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (from, to) = s
            .split_once(SEPARATORS)
            .ok_or(DateRangeError::NoSeparator)?;
        Ok(DateRange {
            from: from.trim_end().parse()?,
            to: to.trim_start().parse()?,
        })
    }
}

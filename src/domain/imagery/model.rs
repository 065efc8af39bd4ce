use chrono::NaiveDate;
use std::fmt;

/// Capture date reported by the metadata service.
///
/// The service reports dates at one of three precisions. Partial dates are
/// anchored to the first day of their period when formatted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageryDate {
    Day(NaiveDate),
    Month(NaiveDate),
    Year(NaiveDate),
}

impl ImageryDate {
    /// Parse a date string, trying `YYYY-MM-DD`, then `YYYY-MM`, then `YYYY`.
    ///
    /// The first layout that matches wins. Returns `None` when none do.
    pub fn parse(value: &str) -> Option<Self> {
        if let Some(date) = parse_day(value) {
            return Some(Self::Day(date));
        }
        if let Some(date) = parse_month(value) {
            return Some(Self::Month(date));
        }
        parse_year(value).map(Self::Year)
    }

    pub fn date(&self) -> NaiveDate {
        match self {
            Self::Day(d) | Self::Month(d) | Self::Year(d) => *d,
        }
    }

    /// `YYYYMMDD`, used inside entry identifiers
    pub fn compact(&self) -> String {
        self.date().format("%Y%m%d").to_string()
    }

    /// `YYYY-MM-DD`, used in human-readable text
    pub fn hyphenated(&self) -> String {
        self.date().format("%Y-%m-%d").to_string()
    }
}

impl fmt::Display for ImageryDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hyphenated())
    }
}

/// Outcome of checking a single location.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckResult {
    NoData,
    UpdatedOn(ImageryDate),
}

impl CheckResult {
    pub fn updated_on(&self) -> Option<ImageryDate> {
        match self {
            Self::NoData => None,
            Self::UpdatedOn(date) => Some(*date),
        }
    }
}

fn is_digits(s: &str, len: usize) -> bool {
    s.len() == len && s.bytes().all(|b| b.is_ascii_digit())
}

fn parse_year_component(s: &str) -> Option<i32> {
    if !is_digits(s, 4) {
        return None;
    }
    s.parse().ok()
}

fn parse_two_digits(s: &str) -> Option<u32> {
    if !is_digits(s, 2) {
        return None;
    }
    s.parse().ok()
}

fn parse_day(value: &str) -> Option<NaiveDate> {
    let mut parts = value.split('-');
    let year = parse_year_component(parts.next()?)?;
    let month = parse_two_digits(parts.next()?)?;
    let day = parse_two_digits(parts.next()?)?;
    if parts.next().is_some() {
        return None;
    }
    NaiveDate::from_ymd_opt(year, month, day)
}

fn parse_month(value: &str) -> Option<NaiveDate> {
    let (year, month) = value.split_once('-')?;
    let year = parse_year_component(year)?;
    let month = parse_two_digits(month)?;
    NaiveDate::from_ymd_opt(year, month, 1)
}

fn parse_year(value: &str) -> Option<NaiveDate> {
    let year = parse_year_component(value)?;
    NaiveDate::from_ymd_opt(year, 1, 1)
}

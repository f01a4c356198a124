//! Date field encodings
//!
//! Two encodings are used by the scanline:
//! - Julian `YYDDD`: two-digit year of century and three-digit day of year
//! - `MMDDYY`: month, day and two-digit year of century
//!
//! Both drop the century. The codec is therefore built around a
//! [`CenturyWindow`] supplied by the caller: only dates whose year falls in
//! the window can be encoded, and decoding maps the two-digit year back into
//! the same window. The fields alone never determine the century.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{ensure_digits, ScanlineError, ScanlineResult};

/// A 100-year span `[start, start + 99]` of representable years
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub struct CenturyWindow {
    start: i32,
}

impl CenturyWindow {
    /// Number of years in a window
    pub const SPAN: i32 = 100;

    /// Creates a window starting at `start` (e.g. 2000 for 2000..=2099)
    ///
    /// # Errors
    ///
    /// `InvalidDate` unless every year of the window is a year chrono can
    /// represent.
    pub fn new(start: i32) -> ScanlineResult<Self> {
        let first = NaiveDate::MIN.year();
        let last = NaiveDate::MAX.year() - (Self::SPAN - 1);
        if !(first..=last).contains(&start) {
            return Err(ScanlineError::InvalidDate(format!(
                "century window cannot start at {start}; the start year must be in {first}..={last}"
            )));
        }
        Ok(Self { start })
    }

    /// First year of the window
    pub fn start(&self) -> i32 {
        self.start
    }

    /// Last year of the window
    pub fn end(&self) -> i32 {
        self.start + (Self::SPAN - 1)
    }

    /// True if `year` can be written as two digits under this window
    pub fn contains(&self, year: i32) -> bool {
        (self.start..=self.end()).contains(&year)
    }

    /// Resolves a two-digit year of century to a full year in the window
    pub fn resolve(&self, year_of_century: u32) -> i32 {
        let offset = (year_of_century as i32 - self.start).rem_euclid(Self::SPAN);
        self.start + offset
    }
}

impl Default for CenturyWindow {
    fn default() -> Self {
        Self { start: 2000 }
    }
}

impl TryFrom<i32> for CenturyWindow {
    type Error = ScanlineError;

    fn try_from(start: i32) -> Result<Self, Self::Error> {
        Self::new(start)
    }
}

impl From<CenturyWindow> for i32 {
    fn from(window: CenturyWindow) -> i32 {
        window.start
    }
}

/// Encodes and decodes the scanline's date fields
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateFieldCodec {
    window: CenturyWindow,
}

impl DateFieldCodec {
    /// Creates a codec bound to a century window
    pub fn new(window: CenturyWindow) -> Self {
        Self { window }
    }

    /// Returns the codec's century window
    pub fn window(&self) -> CenturyWindow {
        self.window
    }

    /// Encodes `date` as `YYDDD`
    ///
    /// Day 1 is January 1; the day of year is always three digits.
    ///
    /// # Errors
    ///
    /// `InvalidDate` if the year is outside the century window.
    pub fn encode_julian(&self, date: NaiveDate) -> ScanlineResult<String> {
        let yy = self.year_of_century(date)?;
        Ok(format!("{:02}{:03}", yy, date.ordinal()))
    }

    /// Encodes `date` as `MMDDYY`
    ///
    /// # Errors
    ///
    /// `InvalidDate` if the year is outside the century window.
    pub fn encode_mmddyy(&self, date: NaiveDate) -> ScanlineResult<String> {
        let yy = self.year_of_century(date)?;
        Ok(format!("{:02}{:02}{:02}", date.month(), date.day(), yy))
    }

    /// Decodes a `YYDDD` field
    pub fn decode_julian(&self, field: &str) -> ScanlineResult<NaiveDate> {
        ensure_digits(field, 5).map_err(|e| invalid_field("Julian", field, e))?;
        let yy = parse_digits(&field[..2]);
        let ordinal = parse_digits(&field[2..]);
        let year = self.window.resolve(yy);

        NaiveDate::from_yo_opt(year, ordinal).ok_or_else(|| {
            ScanlineError::InvalidDate(format!("day {ordinal} does not exist in {year}"))
        })
    }

    /// Decodes an `MMDDYY` field
    pub fn decode_mmddyy(&self, field: &str) -> ScanlineResult<NaiveDate> {
        ensure_digits(field, 6).map_err(|e| invalid_field("MMDDYY", field, e))?;
        let month = parse_digits(&field[..2]);
        let day = parse_digits(&field[2..4]);
        let year = self.window.resolve(parse_digits(&field[4..]));

        NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
            ScanlineError::InvalidDate(format!("{month:02}/{day:02}/{year} is not a calendar date"))
        })
    }

    fn year_of_century(&self, date: NaiveDate) -> ScanlineResult<i32> {
        if !self.window.contains(date.year()) {
            return Err(ScanlineError::InvalidDate(format!(
                "{date} is outside the century window {}..={}",
                self.window.start(),
                self.window.end()
            )));
        }
        Ok(date.year().rem_euclid(100))
    }
}

fn invalid_field(format: &str, field: &str, cause: ScanlineError) -> ScanlineError {
    ScanlineError::InvalidDate(format!("{format} field {field:?}: {cause}"))
}

// Caller has already checked the slice is all ASCII digits.
fn parse_digits(digits: &str) -> u32 {
    digits
        .bytes()
        .fold(0, |acc, b| acc * 10 + u32::from(b - b'0'))
}

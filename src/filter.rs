use chrono::NaiveDate;

use crate::error::FilterError;
use crate::types::{Record, DATE_FORMAT};

/// Optional inclusive date bounds. Both bounds present implies `start <= end`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateRange {
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
}

impl DateRange {
    /// Build a range; reversed bounds are swapped.
    pub fn new(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        match (start, end) {
            (Some(s), Some(e)) if s > e => Self { start: Some(e), end: Some(s) },
            _ => Self { start, end },
        }
    }

    /// Parse the raw text of the start/end inputs. Blank input means no bound.
    pub fn parse(start: Option<&str>, end: Option<&str>) -> Result<Self, FilterError> {
        Ok(Self::new(parse_bound(start)?, parse_bound(end)?))
    }

    pub fn start(&self) -> Option<NaiveDate> { self.start }
    pub fn end(&self) -> Option<NaiveDate> { self.end }

    pub fn is_unbounded(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start.map_or(true, |s| s <= date) && self.end.map_or(true, |e| date <= e)
    }

    fn admits(&self, record: &Record) -> bool {
        if self.is_unbounded() {
            return true;
        }
        record.date_value().is_some_and(|d| self.contains(d))
    }
}

fn parse_bound(raw: Option<&str>) -> Result<Option<NaiveDate>, FilterError> {
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        None => Ok(None),
        Some(s) => NaiveDate::parse_from_str(s, DATE_FORMAT)
            .map(Some)
            .map_err(|_| FilterError::InvalidDate(s.to_string())),
    }
}

/// Image records inside `range`, in input order. Never fails; may be empty.
pub fn filter(records: &[Record], range: DateRange) -> Vec<Record> {
    records
        .iter()
        .filter(|r| r.is_image() && range.admits(r))
        .cloned()
        .collect()
}

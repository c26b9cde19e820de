//! Errors and error-related utilities.

use std::{error, fmt, result};

/// The result type used throughout this library.
pub type Result<T> = result::Result<T, Box<dyn error::Error>>;

/// A data row that does not have the expected shape.
#[derive(Debug)]
pub struct MalformedRow(pub String);

/// A review date that is not of the form `YYYY-MM-DD`.
#[derive(Debug)]
pub struct InvalidDate(pub String);

/// An average requested over a group with no collected ratings.
#[derive(Debug)]
pub struct EmptyGroup(pub String);

impl fmt::Display for MalformedRow {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "malformed row: {}", self.0)
    }
}

impl fmt::Display for InvalidDate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "invalid date: {}", self.0)
    }
}

impl fmt::Display for EmptyGroup {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "empty group: {}", self.0)
    }
}

impl error::Error for MalformedRow {}

impl error::Error for InvalidDate {}

impl error::Error for EmptyGroup {}

/// A helper for constructing [MalformedRow].
pub fn malformed_row(s: String) -> Box<dyn error::Error> {
    MalformedRow(s).into()
}

/// A helper for constructing [InvalidDate].
pub fn invalid_date(s: String) -> Box<dyn error::Error> {
    InvalidDate(s).into()
}

/// A helper for constructing [EmptyGroup].
pub fn empty_group(s: String) -> Box<dyn error::Error> {
    EmptyGroup(s).into()
}

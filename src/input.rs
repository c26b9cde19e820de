//! Data structures for representing the input, and TSV parsing.

use crate::errors::{invalid_date, malformed_row, Result};
use serde::{Deserialize, Serialize};

pub type Year = u16;

/// Number of tab-separated columns in a data row.
const FIELDS: usize = 15;

/// One parsed row of the review dataset. Field order matches the file.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct ReviewRecord {
    pub marketplace: String,
    pub customer_id: String,
    pub review_id: String,
    pub product_id: String,
    pub product_parent: String,
    pub product_title: String,
    pub product_category: String,
    pub star_rating: String,
    pub helpful_votes: String,
    pub total_votes: String,
    pub vine: String,
    pub verified_purchase: String,
    pub review_headline: String,
    pub review_body: String,
    pub review_date: String,
}

impl ReviewRecord {
    /// The star rating as a number, for averaging.
    pub fn rating(&self) -> Result<u32> {
        self.star_rating.parse().map_err(|_| {
            malformed_row(format!(
                "review {}: star rating '{}' is not an integer",
                self.review_id, self.star_rating
            ))
        })
    }

    /// The calendar year of `review_date` (expected form `YYYY-MM-DD`).
    pub fn year(&self) -> Result<Year> {
        parse_year(&self.review_date)
    }
}

fn parse_year(date: &str) -> Result<Year> {
    let bad = || invalid_date(format!("'{date}' is not of the form YYYY-MM-DD"));
    let mut parts = date.split('-');
    let year: Year = parts.next().and_then(|x| x.parse().ok()).ok_or_else(bad)?;
    let month: u8 = parts.next().and_then(|x| x.parse().ok()).ok_or_else(bad)?;
    let day: u8 = parts.next().and_then(|x| x.parse().ok()).ok_or_else(bad)?;
    if parts.next().is_some() || !(1..=12).contains(&month) || !(1..=31).contains(&day) {
        return Err(bad());
    }
    Ok(year)
}

fn parse_record(line: &str, lineno: usize) -> Result<ReviewRecord> {
    let fields: Vec<&str> = line.split('\t').collect();
    if fields.len() != FIELDS {
        return Err(malformed_row(format!(
            "line {}: expected {} tab-separated fields, got {}",
            lineno,
            FIELDS,
            fields.len()
        )));
    }
    let mut fields = fields.into_iter().map(str::to_owned);
    let mut next = || fields.next().expect("field count checked");
    Ok(ReviewRecord {
        marketplace: next(),
        customer_id: next(),
        review_id: next(),
        product_id: next(),
        product_parent: next(),
        product_title: next(),
        product_category: next(),
        star_rating: next(),
        helpful_votes: next(),
        total_votes: next(),
        vine: next(),
        verified_purchase: next(),
        review_headline: next(),
        review_body: next(),
        review_date: next(),
    })
}

/// Parse the full contents of a TSV dataset.
///
/// The first line is the header and is skipped; every remaining non-empty
/// line becomes one record, in file order. A row with the wrong number of
/// fields is an error, never skipped.
pub fn parse_records(data: &str) -> Result<Vec<ReviewRecord>> {
    let mut records = Vec::new();
    for (i, line) in data.lines().enumerate().skip(1) {
        if line.is_empty() {
            continue;
        }
        records.push(parse_record(line, i + 1)?);
    }
    Ok(records)
}

//! Main entry point for calculating everything.

use crate::aggregate;
use crate::errors::Result;
use crate::input;
use crate::output::Report;
use log::{debug, info};
use std::fs;

/// Read a review dataset and build the full report.
///
/// This is the main entry point for the library. The four reducers run in a
/// fixed order over the same record sequence; the file handle is scoped to
/// the read and released before any aggregation starts.
pub fn report(infile: &str) -> Result<Report> {
    info!(target: "reviewstats", "read: {infile}");
    let data = fs::read_to_string(infile)?;
    let records = input::parse_records(&data)?;
    info!(target: "reviewstats", "records: {}", records.len());

    let rating_counts = aggregate::rating_counts(&records);
    debug!(target: "reviewstats", "distinct ratings: {}", rating_counts.len());
    let category_counts = aggregate::category_counts(&records);
    debug!(target: "reviewstats", "distinct categories: {}", category_counts.len());
    let category_average_ratings = aggregate::category_average_ratings(&records)?;
    let year_average_ratings = aggregate::year_average_ratings(&records)?;
    debug!(target: "reviewstats", "years with averages: {}", year_average_ratings.len());

    Ok(Report {
        records: records.len(),
        rating_counts,
        category_counts,
        category_average_ratings,
        year_average_ratings,
    })
}

//! The four reducers over the parsed record sequence.
//!
//! Each reducer is a pure function: it scans the full slice, builds an
//! ordered mapping, and sorts it the way the report presents it. Grouping in
//! the two averaging reducers reproduces the original tool exactly: the
//! first record seen for a group only opens the group, and its own rating is
//! not collected.

use crate::errors::{empty_group, Result};
use crate::grouping::OrderedMap;
use crate::input::{ReviewRecord, Year};

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

fn average(ratings: &[u32]) -> f64 {
    let sum: u32 = ratings.iter().sum();
    round2(f64::from(sum) / ratings.len() as f64)
}

/// Number of reviews per star rating.
///
/// Ratings are counted as text and the result is sorted by that text, so
/// chart axes see the same order the original tool produced.
pub fn rating_counts(records: &[ReviewRecord]) -> Vec<(String, u64)> {
    let mut count = OrderedMap::new();
    for r in records {
        match count.get_mut(&r.star_rating) {
            Some(c) => *c += 1,
            None => count.insert(r.star_rating.clone(), 1),
        }
    }
    let mut pairs = count.into_pairs();
    pairs.sort_by(|a, b| a.0.cmp(&b.0));
    pairs
}

/// Number of reviews per product category, rarest first.
///
/// Sorted ascending by count; the sort is stable, so equal counts keep the
/// order in which the categories were first seen.
pub fn category_counts(records: &[ReviewRecord]) -> Vec<(String, u64)> {
    let mut count = OrderedMap::new();
    for r in records {
        match count.get_mut(&r.product_category) {
            Some(c) => *c += 1,
            None => count.insert(r.product_category.clone(), 1),
        }
    }
    let mut pairs = count.into_pairs();
    pairs.sort_by_key(|&(_, c)| c);
    pairs
}

/// Average star rating per product category, sorted ascending by average.
///
/// A category whose collected list ends up empty (a single-occurrence
/// category, given the drop-first grouping) is an error.
pub fn category_average_ratings(records: &[ReviewRecord]) -> Result<Vec<(String, f64)>> {
    let mut groups: OrderedMap<String, Vec<u32>> = OrderedMap::new();
    for r in records {
        match groups.get_mut(&r.product_category) {
            Some(ratings) => ratings.push(r.rating()?),
            None => groups.insert(r.product_category.clone(), Vec::new()),
        }
    }
    let mut averages = Vec::new();
    for (category, ratings) in groups.into_pairs() {
        if ratings.is_empty() {
            return Err(empty_group(format!(
                "category '{category}' has no collected ratings"
            )));
        }
        averages.push((category, average(&ratings)));
    }
    averages.sort_by(|a, b| a.1.total_cmp(&b.1));
    Ok(averages)
}

/// Average star rating per review year, in chronological order.
///
/// Unlike the category reducer, years with an empty collected list are
/// excluded from the output.
pub fn year_average_ratings(records: &[ReviewRecord]) -> Result<Vec<(Year, f64)>> {
    let mut groups: OrderedMap<Year, Vec<u32>> = OrderedMap::new();
    for r in records {
        let year = r.year()?;
        match groups.get_mut(&year) {
            Some(ratings) => ratings.push(r.rating()?),
            None => groups.insert(year, Vec::new()),
        }
    }
    let mut averages = Vec::new();
    for (year, ratings) in groups.into_pairs() {
        if !ratings.is_empty() {
            averages.push((year, average(&ratings)));
        }
    }
    averages.sort_by_key(|&(year, _)| year);
    Ok(averages)
}

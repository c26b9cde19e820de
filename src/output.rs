//! Data structures for representing the output.
//!
//! The mappings are kept as pair vectors so that their iteration order, which
//! decides chart axis order in the presentation layer, survives the JSON
//! boundary (a pair vector serializes as an array of arrays).

use crate::input::Year;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The finished report, as handed to the presentation layer.
#[derive(Debug, PartialEq, Deserialize, Serialize)]
pub struct Report {
    pub records: usize,
    pub rating_counts: Vec<(String, u64)>,
    pub category_counts: Vec<(String, u64)>,
    pub category_average_ratings: Vec<(String, f64)>,
    pub year_average_ratings: Vec<(Year, f64)>,
}

pub fn pretty_counts(counts: &[(String, u64)]) -> String {
    counts
        .iter()
        .map(|(k, v)| format!("- {k}: {v}"))
        .collect_vec()
        .join("\n")
}

pub fn pretty_averages<K: fmt::Display>(averages: &[(K, f64)]) -> String {
    averages
        .iter()
        .map(|(k, v)| format!("- {k}: {v:.2}"))
        .collect_vec()
        .join("\n")
}

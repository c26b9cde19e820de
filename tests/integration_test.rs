use reviewstats::driver;
use reviewstats::output::Report;
use std::path::PathBuf;

fn init() {
    let _ = pretty_env_logger::formatted_timed_builder()
        .filter_level(log::LevelFilter::Trace)
        .is_test(true)
        .try_init();
}

fn fixture(filename: &str) -> String {
    let dir = env!("CARGO_MANIFEST_DIR");
    let mut path = PathBuf::from(dir);
    path.push("sample-data");
    path.push(filename);
    path.to_str().unwrap().to_owned()
}

#[test]
fn test_basic() {
    init();
    let report = driver::report(&fixture("reviews.tsv")).unwrap();
    assert_eq!(report.records, 10);
    assert_eq!(
        report.rating_counts,
        vec![
            ("1".to_owned(), 1),
            ("2".to_owned(), 1),
            ("3".to_owned(), 1),
            ("4".to_owned(), 3),
            ("5".to_owned(), 4),
        ]
    );
    assert_eq!(
        report.category_counts,
        vec![
            ("Electronics".to_owned(), 3),
            ("Music".to_owned(), 3),
            ("Books".to_owned(), 4),
        ]
    );
    assert_eq!(
        report.category_average_ratings,
        vec![
            ("Electronics".to_owned(), 3.0),
            ("Books".to_owned(), 4.0),
            ("Music".to_owned(), 4.5),
        ]
    );
    assert_eq!(
        report.year_average_ratings,
        vec![(2013, 3.33), (2014, 3.5), (2015, 4.5)]
    );
}

#[test]
fn test_sums_and_orders() {
    init();
    let report = driver::report(&fixture("reviews.tsv")).unwrap();
    let rating_total: u64 = report.rating_counts.iter().map(|&(_, c)| c).sum();
    let category_total: u64 = report.category_counts.iter().map(|&(_, c)| c).sum();
    assert_eq!(rating_total, report.records as u64);
    assert_eq!(category_total, report.records as u64);
    assert!(report
        .rating_counts
        .windows(2)
        .all(|w| w[0].0 <= w[1].0));
    assert!(report
        .category_counts
        .windows(2)
        .all(|w| w[0].1 <= w[1].1));
    assert!(report
        .category_average_ratings
        .windows(2)
        .all(|w| w[0].1 <= w[1].1));
    assert!(report
        .year_average_ratings
        .windows(2)
        .all(|w| w[0].0 <= w[1].0));
    assert!(report
        .category_average_ratings
        .iter()
        .all(|&(_, a)| (1.0..=5.0).contains(&a)));
}

#[test]
fn test_json_round_trip() {
    init();
    let report = driver::report(&fixture("reviews.tsv")).unwrap();
    let json = serde_json::to_string_pretty(&report).unwrap();
    let back: Report = serde_json::from_str(&json).unwrap();
    assert_eq!(back, report);
}

#[test]
fn test_single_occurrence_category() {
    init();
    // a category seen once collects no ratings, which the category
    // averaging step reports as an error
    let e = driver::report(&fixture("reviews-single.tsv")).unwrap_err();
    assert_eq!(
        e.to_string(),
        "empty group: category 'Electronics' has no collected ratings"
    );
}

#[test]
fn test_missing_file() {
    init();
    assert!(driver::report(&fixture("no-such-file.tsv")).is_err());
}

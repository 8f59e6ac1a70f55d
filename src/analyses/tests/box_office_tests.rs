//! Tests for the box office analysis

use super::*;
use crate::analyses::box_office::BoxOfficeAnalysis;
use crate::extractor::extract;
use crate::report::render;

#[test]
fn test_box_office_summary() {
    let records = vec![
        movie(2, FieldValue::text("Avatar"), FieldValue::Float(2_923_706_026.0)),
        movie(3, FieldValue::text("Jaws"), FieldValue::Integer(476_512_065)),
        movie(4, FieldValue::text("Titanic"), FieldValue::text("2264743305")),
    ];
    let summary = extract(&records, &BoxOfficeAnalysis::new()).summary.unwrap();

    assert_eq!(summary.highest_grossing.movie, "Avatar");
    assert_eq!(summary.highest_grossing.earnings, 2_923_706_026.0);
    assert_eq!(summary.lowest_grossing.movie, "Jaws");
    assert_eq!(summary.min, 476_512_065.0);
    assert_eq!(summary.max, 2_923_706_026.0);
    assert_eq!(summary.average, 1_888_320_465.33);
    assert_eq!(summary.movies, 3);
}

#[test]
fn test_blank_values_use_fallbacks() {
    let records = vec![
        movie(2, FieldValue::Empty, FieldValue::Integer(100)),
        movie(3, FieldValue::text("Free Movie"), FieldValue::Empty),
    ];
    let summary = extract(&records, &BoxOfficeAnalysis::new()).summary.unwrap();

    assert_eq!(summary.highest_grossing.movie, "Unknown");
    assert_eq!(summary.lowest_grossing.movie, "Free Movie");
    assert_eq!(summary.min, 0.0);
    assert_eq!(summary.average, 50.0);
}

#[test]
fn test_non_numeric_gross_is_skipped() {
    let records = vec![
        movie(2, FieldValue::text("A"), FieldValue::text("lots")),
        movie(3, FieldValue::text("B"), FieldValue::Integer(10)),
    ];
    let extraction = extract(&records, &BoxOfficeAnalysis::new());

    assert_eq!(extraction.stats.skipped, 1);
    assert_eq!(extraction.summary.unwrap().movies, 1);
}

#[test]
fn test_box_office_report_lines() {
    let records = vec![
        movie(2, FieldValue::text("Big"), FieldValue::Float(1_234_567.891)),
        movie(3, FieldValue::text("Small"), FieldValue::Integer(1_000)),
    ];
    let summary = extract(&records, &BoxOfficeAnalysis::new()).summary.unwrap();

    assert_eq!(
        render(&summary),
        "Box Office Statistics:\n\
         Highest Grossing Movie: Big with earnings of 1,234,567.89\n\
         Lowest Grossing Movie: Small with earnings of 1,000.00\n\
         Average Box Office Earnings: 617,783.95\n"
    );
}

#[test]
fn test_overflowing_total_has_no_summary() {
    let records = vec![
        movie(2, FieldValue::text("Big"), FieldValue::Float(1.7e308)),
        movie(3, FieldValue::text("Bigger"), FieldValue::Float(1.7e308)),
    ];
    let extraction = extract(&records, &BoxOfficeAnalysis::new());

    assert_eq!(extraction.stats.accepted, 2);
    assert!(extraction.summary.is_none());
}

//! Tests for the concrete analyses
//!
//! Each analysis is driven through the shared `extract` loop with records
//! shaped the way its source produces them.

mod box_office_tests;

use crate::models::{FieldValue, Record};

pub fn movie(position: usize, name: FieldValue, gross: FieldValue) -> Record {
    Record::from_pairs(position, [("Movie", name), ("Gross", gross)])
}

pub fn chart_entry(position: usize, track: &str, artist: &str, streams: &str) -> Record {
    Record::from_pairs(
        position,
        [
            ("track_name", FieldValue::text(track)),
            ("artist(s)_name", FieldValue::text(artist)),
            ("streams", FieldValue::text(streams)),
        ],
    )
}

pub fn game(position: usize, winner: &str, loser: &str, winner_points: i64, loser_points: i64) -> Record {
    Record::from_pairs(
        position,
        [
            ("Winning team", FieldValue::text(winner)),
            ("Losing team", FieldValue::text(loser)),
            ("Winning Team Points", FieldValue::Integer(winner_points)),
            ("Losing Team Points", FieldValue::Integer(loser_points)),
        ],
    )
}

#[test]
fn test_analysis_kind_names_and_files() {
    use super::AnalysisKind;

    assert_eq!(AnalysisKind::BoxOffice.to_string(), "box-office");
    assert_eq!(
        AnalysisKind::Streaming.default_input_file(),
        "spotify_data.csv"
    );
    assert_eq!(
        AnalysisKind::Championship.default_output_file(),
        "super_bowl_analysis.txt"
    );
    assert_eq!(AnalysisKind::ALL.len(), 3);
}

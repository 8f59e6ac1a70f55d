//! Processing runs over well-formed and partially malformed inputs

use super::*;
use crate::analyses::{AnalysisKind, ChampionshipAnalysis, StreamingChartAnalysis};
use crate::processor::{analyze_file, run_analysis, scan_file};

#[test]
fn test_streaming_run_writes_report() {
    let (_temp_dir, config) = workspace();
    write_input(
        &config,
        "spotify_data.csv",
        "track_name,artist(s)_name,streams,bpm\n\
         Flowers,Miley Cyrus,1316855716,118\n\
         Kill Bill,SZA,1163093654,89\n\
         Snooze,SZA,399686758,143\n",
    );

    let outcome = run_analysis(AnalysisKind::Streaming, &config).unwrap();

    assert!(outcome.is_written());
    assert_eq!(outcome.stats.accepted, 3);
    let output = outcome.output.unwrap();
    assert_eq!(output, config.output_path(AnalysisKind::Streaming));
    assert_eq!(
        read_report(&output),
        "Spotify Streaming Analysis (2023):\n\
         Most Streamed Track: Flowers by Miley Cyrus\n\
         Most Streamed Artist: SZA\n"
    );
}

#[test]
fn test_malformed_rows_are_left_out_of_report() {
    let (_temp_dir, config) = workspace();
    write_input(
        &config,
        "super_bowl.json",
        r#"[
            {"Winning team": "A", "Losing team": "B", "Winning Team Points": 30, "Losing Team Points": 20},
            {"Winning team": "C", "Losing team": "D", "Winning Team Points": "n/a", "Losing Team Points": 3},
            "not a game",
            {"Winning team": "B", "Losing team": "A", "Winning Team Points": 10, "Losing Team Points": 7}
        ]"#,
    );

    let outcome = run_analysis(AnalysisKind::Championship, &config).unwrap();

    assert_eq!(outcome.stats.total_records, 3);
    assert_eq!(outcome.stats.skipped, 1);
    assert_eq!(
        read_report(&outcome.output.unwrap()),
        "Super Bowl Analysis:\n\
         Most Super Bowl Wins: A with 1\n\
         Most Super Bowl Appearances: B with 2 appearances.\n\
         Average Point Spread: 7 points.\n"
    );
}

#[test]
fn test_box_office_run_from_delimited_input() {
    let (_temp_dir, config) = workspace();
    write_input(
        &config,
        "box_office_data.csv",
        "Rank,Movie,Gross\n1,Avatar,2923706026\n2,,1000\n3,Jaws,476512065\n",
    );

    let outcome = run_analysis(AnalysisKind::BoxOffice, &config).unwrap();

    let report = read_report(&outcome.output.unwrap());
    assert!(report.contains("Highest Grossing Movie: Avatar with earnings of 2,923,706,026.00\n"));
    assert!(report.contains("Lowest Grossing Movie: Unknown with earnings of 1,000.00\n"));

    let summary = outcome.summary.unwrap();
    assert_eq!(summary["movies"], 3);
}

#[test]
fn test_analyze_file_returns_summary() {
    let (_temp_dir, config) = workspace();
    write_input(
        &config,
        "super_bowl.json",
        r#"[{"Winning team": "Rams", "Losing team": "Bengals", "Winning Team Points": 23, "Losing Team Points": 20}]"#,
    );

    let path = config.input_path(AnalysisKind::Championship);
    let summary = analyze_file(&path, &ChampionshipAnalysis::new()).unwrap();
    assert_eq!(summary.most_wins.team, "Rams");
    assert_eq!(summary.average_point_spread, 3);
}

#[test]
fn test_header_only_input_is_empty() {
    let (_temp_dir, config) = workspace();
    write_input(&config, "spotify_data.csv", "track_name,artist(s)_name,streams\n");

    let path = config.input_path(AnalysisKind::Streaming);
    let extraction = scan_file(&path, &StreamingChartAnalysis::new());

    assert!(extraction.is_empty());
    assert_eq!(extraction.stats.total_records, 0);
}

#[test]
fn test_box_office_run_from_workbook() {
    use crate::source::tests::{box_office_rows, write_workbook};

    let (_temp_dir, mut config) = workspace();
    config.box_office.input = None;
    write_workbook(
        &config.input_path(AnalysisKind::BoxOffice),
        0,
        &box_office_rows(),
    );

    let outcome = run_analysis(AnalysisKind::BoxOffice, &config).unwrap();

    assert_eq!(outcome.stats.total_records, 4);
    assert_eq!(outcome.stats.skipped, 1);
    assert_eq!(
        read_report(&outcome.output.unwrap()),
        "Box Office Statistics:\n\
         Highest Grossing Movie: Avatar with earnings of 2,923,706,026.00\n\
         Lowest Grossing Movie: Unknown with earnings of 1,000,000.00\n\
         Average Box Office Earnings: 1,133,739,363.67\n"
    );
}

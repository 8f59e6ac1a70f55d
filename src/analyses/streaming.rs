//! Streaming chart: the most streamed track and the artist appearing most
//! often in the chart.

use serde::Serialize;

use crate::error::RowError;
use crate::extractor::{
    Analysis, CoercedFields, ExtractionRule, Extremum, FieldRule, FrequencyCounter,
};
use crate::report::{ReportLine, ReportSection};

pub const ARTIST_FIELD: &str = "artist(s)_name";
pub const TRACK_FIELD: &str = "track_name";
pub const STREAMS_FIELD: &str = "streams";

#[derive(Debug)]
pub struct StreamingChartAnalysis {
    rule: ExtractionRule,
}

impl StreamingChartAnalysis {
    pub fn new() -> Self {
        let rule = ExtractionRule::new(vec![
            FieldRule::text(ARTIST_FIELD),
            FieldRule::text(TRACK_FIELD),
            FieldRule::integer(STREAMS_FIELD),
        ]);
        Self { rule }
    }
}

impl Default for StreamingChartAnalysis {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrackStreams {
    pub track: String,
    pub artist: String,
    pub streams: i64,
}

#[derive(Debug)]
pub struct StreamingAccumulator {
    top_track: Extremum<TrackStreams>,
    artists: FrequencyCounter<String>,
}

impl Default for StreamingAccumulator {
    fn default() -> Self {
        Self {
            top_track: Extremum::max(),
            artists: FrequencyCounter::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArtistAppearances {
    pub artist: String,
    pub appearances: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StreamingSummary {
    pub most_streamed_track: TrackStreams,
    pub most_streamed_artist: ArtistAppearances,
}

impl Analysis for StreamingChartAnalysis {
    type Row = TrackStreams;
    type Accumulator = StreamingAccumulator;
    type Summary = StreamingSummary;

    fn name(&self) -> &'static str {
        "streaming"
    }

    fn rule(&self) -> &ExtractionRule {
        &self.rule
    }

    fn read_row(&self, fields: &CoercedFields) -> Result<Self::Row, RowError> {
        Ok(TrackStreams {
            track: fields.text(TRACK_FIELD)?.to_string(),
            artist: fields.text(ARTIST_FIELD)?.to_string(),
            streams: fields.integer(STREAMS_FIELD)?,
        })
    }

    fn accumulate(&self, accumulator: &mut Self::Accumulator, row: Self::Row) {
        accumulator.artists.increment(row.artist.clone());
        accumulator.top_track.offer(row.streams as f64, row);
    }

    fn finish(&self, accumulator: Self::Accumulator) -> Option<Self::Summary> {
        let most_streamed_artist = accumulator
            .artists
            .mode()
            .map(|(artist, appearances)| ArtistAppearances {
                artist: artist.clone(),
                appearances,
            })?;
        let (_, most_streamed_track) = accumulator.top_track.into_inner()?;

        Some(StreamingSummary {
            most_streamed_track,
            most_streamed_artist,
        })
    }
}

impl ReportSection for StreamingSummary {
    fn title(&self) -> String {
        "Spotify Streaming Analysis (2023):".to_string()
    }

    fn lines(&self) -> Vec<ReportLine> {
        vec![
            ReportLine::new(
                "Most Streamed Track",
                format!(
                    "{} by {}",
                    self.most_streamed_track.track, self.most_streamed_track.artist
                ),
            ),
            ReportLine::new(
                "Most Streamed Artist",
                self.most_streamed_artist.artist.clone(),
            ),
        ]
    }
}

use rostrum_chunking::PlayableMoment;

use crate::response::{RubricScores, StrategicOverview};

#[derive(Debug, Clone, serde::Serialize)]
pub struct AudioMetadata {
    pub url: Option<String>,
    /// Whole seconds, rounded up from the stream duration.
    pub duration_seconds: i64,
}

/// Chunk-level diagnostics carried alongside the feedback, for UIs that
/// want to show how the speech was segmented.
#[derive(Debug, Clone, serde::Serialize)]
pub struct ChunksMetadata {
    pub total_chunks: usize,
    pub chunk_labels: Vec<String>,
}

/// Final product of one feedback pass. Assembled whole or not at all, and
/// immutable afterwards; a new pass produces a new report.
#[derive(Debug, Clone, serde::Serialize)]
pub struct FeedbackReport {
    pub rubric_scores: RubricScores,
    pub strategic_overview: StrategicOverview,
    pub playable_moments: Vec<PlayableMoment>,
    pub audio_metadata: AudioMetadata,
    pub chunks_metadata: ChunksMetadata,
}
